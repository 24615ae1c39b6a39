/// Cloud translation client
///
/// One remote call per string: no batching, no caching, no retries. Any
/// failure is reported to the caller, which aborts the run.
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, ServiceCredentials};

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation service rejected the credentials")]
    Unauthorized,

    #[error("translation quota exhausted")]
    QuotaExceeded,

    #[error("unsupported locale pair: {from} -> {target}")]
    UnsupportedPair { from: String, target: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("translation service error ({status}): {message}")]
    Service { status: StatusCode, message: String },

    #[error("translation service returned no translation")]
    EmptyResponse,
}

/// A remote text-translation call.
///
/// Implementations are passed explicitly to the translators so that tests
/// can substitute a scripted double for the real service.
pub trait Translator {
    fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: [&'a str; 1],
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationList,
}

#[derive(Debug, Deserialize)]
struct TranslationList {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

/// Production [`Translator`] speaking the cloud translation REST protocol:
/// `POST <endpoint>?key=<api_key>` with `{q, source, target, format}`.
pub struct CloudTranslator {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl CloudTranslator {
    pub fn new(credentials: ServiceCredentials) -> Result<Self, ConfigError> {
        // No client-side timeout: a hung remote call hangs the whole run.
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: credentials.endpoint,
            api_key: credentials.api_key,
        })
    }
}

impl Translator for CloudTranslator {
    fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslationError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self
            .client
            .post(url)
            .json(&TranslateRequest {
                q: [text],
                source: source_locale,
                target: target_locale,
                format: "text",
            })
            .send()
            .map_err(|e| TranslationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(map_failure(status, &body, source_locale, target_locale));
        }

        let parsed: TranslateResponse = response
            .json()
            .map_err(|e| TranslationError::Network(e.to_string()))?;

        parsed
            .data
            .translations
            .into_iter()
            .next()
            .map(|entry| entry.translated_text)
            .ok_or(TranslationError::EmptyResponse)
    }
}

fn map_failure(
    status: StatusCode,
    body: &str,
    source_locale: &str,
    target_locale: &str,
) -> TranslationError {
    let lowered = body.to_ascii_lowercase();

    if status == StatusCode::TOO_MANY_REQUESTS || lowered.contains("quota") {
        return TranslationError::QuotaExceeded;
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return TranslationError::Unauthorized;
    }
    if lowered.contains("language pair") || lowered.contains("not supported") {
        return TranslationError::UnsupportedPair {
            from: source_locale.to_string(),
            target: target_locale.to_string(),
        };
    }

    TranslationError::Service {
        status,
        message: body.trim().to_string(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{TranslationError, Translator};

    /// Scripted stand-in for the remote service: maps known inputs to
    /// fixed outputs, records every call, and can be primed to fail on the
    /// n-th call.
    pub struct ScriptedTranslator {
        replies: HashMap<String, String>,
        calls: RefCell<Vec<String>>,
        fail_on_call: Option<usize>,
    }

    impl ScriptedTranslator {
        pub fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                replies: pairs
                    .iter()
                    .map(|(source, target)| (source.to_string(), target.to_string()))
                    .collect(),
                calls: RefCell::new(Vec::new()),
                fail_on_call: None,
            }
        }

        pub fn failing_on(mut self, call: usize) -> Self {
            self.fail_on_call = Some(call);
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl Translator for ScriptedTranslator {
        fn translate(
            &self,
            text: &str,
            _source_locale: &str,
            target_locale: &str,
        ) -> Result<String, TranslationError> {
            self.calls.borrow_mut().push(text.to_string());
            if self.fail_on_call == Some(self.calls.borrow().len()) {
                return Err(TranslationError::QuotaExceeded);
            }
            Ok(self
                .replies
                .get(text)
                .cloned()
                .unwrap_or_else(|| format!("{target_locale}:{text}")))
        }
    }
}

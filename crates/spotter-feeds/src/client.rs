//! Shared RapidAPI HTTP plumbing.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::error::{FeedError, FeedResult};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin GET-with-credentials wrapper shared by all feed clients. Both
/// upstreams authenticate with the same key via per-request headers.
#[derive(Debug, Clone)]
pub struct RapidApiClient {
    client: Client,
    api_key: String,
}

impl RapidApiClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            api_key: api_key.into(),
        }
    }

    /// GET `https://{host}{path}` and parse the body as JSON. A transport
    /// error or non-2xx status is `SourceUnavailable`; a body that is not
    /// JSON is `MalformedResponse`.
    pub async fn get_json(&self, host: &str, path: &str) -> FeedResult<Value> {
        let url = format!("https://{}{}", host, path);

        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-host", host)
            .header("x-rapidapi-key", &self.api_key)
            .send()
            .await
            .map_err(|err| FeedError::SourceUnavailable(format!("{}: {}", host, err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::SourceUnavailable(format!(
                "{} returned {}",
                host, status
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| FeedError::MalformedResponse(format!("{}: {}", host, err)))
    }
}

// The ADS-B feed serves numbers both as JSON numbers and as strings
// depending on the field and the day, so record parsing goes through
// tolerant accessors instead of typed structs.

pub(crate) fn value_f64(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    if let Some(num) = value.as_f64() {
        return Some(num);
    }
    if let Some(text) = value.as_str() {
        return text.trim().parse::<f64>().ok();
    }
    None
}

pub(crate) fn value_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .map(|text| text.trim().to_string())
}

/// Boolean-ish field: accepts true/false, 0/1 and their string forms.
pub(crate) fn value_flag(value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return false;
    };
    if let Some(flag) = value.as_bool() {
        return flag;
    }
    if let Some(num) = value.as_i64() {
        return num != 0;
    }
    if let Some(text) = value.as_str() {
        let text = text.trim();
        return text == "1" || text.eq_ignore_ascii_case("true");
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_parse_from_either_form() {
        let record = json!({"a": 37000, "b": "37000", "c": "3.25", "d": "n/a"});
        assert_eq!(value_f64(record.get("a")), Some(37000.0));
        assert_eq!(value_f64(record.get("b")), Some(37000.0));
        assert_eq!(value_f64(record.get("c")), Some(3.25));
        assert_eq!(value_f64(record.get("d")), None);
        assert_eq!(value_f64(record.get("missing")), None);
    }

    #[test]
    fn flags_parse_from_bool_number_or_string() {
        let record = json!({"a": true, "b": 1, "c": "1", "d": "0", "e": 0});
        assert!(value_flag(record.get("a")));
        assert!(value_flag(record.get("b")));
        assert!(value_flag(record.get("c")));
        assert!(!value_flag(record.get("d")));
        assert!(!value_flag(record.get("e")));
        assert!(!value_flag(record.get("missing")));
    }

    #[test]
    fn strings_are_trimmed() {
        let record = json!({"reg": " D-AIUW "});
        assert_eq!(value_str(record.get("reg")).as_deref(), Some("D-AIUW"));
    }
}

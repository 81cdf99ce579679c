use std::fmt;

use serde_json::{Value, json};

pub const ENVELOPE_SCHEMA_VERSION: &str = "v1";
const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputModeSelectionError {
    pub explicit: OutputMode,
}

impl fmt::Display for OutputModeSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "conflicting output flags: --json requires --output json (got {})",
            self.explicit.as_str()
        )
    }
}

impl std::error::Error for OutputModeSelectionError {}

pub fn select_output_mode(
    explicit: Option<OutputMode>,
    json_flag: bool,
    default_mode: OutputMode,
) -> Result<OutputMode, OutputModeSelectionError> {
    match (explicit, json_flag) {
        (Some(mode), true) if mode != OutputMode::Json => {
            Err(OutputModeSelectionError { explicit: mode })
        }
        (Some(mode), _) => Ok(mode),
        (None, true) => Ok(OutputMode::Json),
        (None, false) => Ok(default_mode),
    }
}

pub fn success_envelope(command: &str, result: Value) -> Value {
    json!({
        "schema_version": ENVELOPE_SCHEMA_VERSION,
        "command": command,
        "ok": true,
        "result": result,
    })
}

pub fn error_envelope(
    command: &str,
    code: &str,
    message: &str,
    kind: &str,
    exit_code: i32,
) -> Value {
    json!({
        "schema_version": ENVELOPE_SCHEMA_VERSION,
        "command": command,
        "ok": false,
        "error": {
            "code": code,
            "message": redact_sensitive(message),
            "details": {
                "kind": kind,
                "exit_code": exit_code,
            }
        }
    })
}

/// Masks `apikey` query values. Endpoints may be configured with a
/// commercial key, and transport errors echo the full request URL.
pub fn redact_sensitive(input: &str) -> String {
    ["apikey=", "api_key="]
        .into_iter()
        .fold(input.to_string(), |output, pattern| {
            redact_after_pattern(&output, pattern)
        })
}

fn redact_after_pattern(input: &str, pattern: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find(pattern) {
        let value_start = cursor + found + pattern.len();
        let value_end = find_value_end(input, value_start);

        output.push_str(&input[cursor..value_start]);
        if value_start < value_end {
            output.push_str(REDACTED);
        }
        cursor = value_end;
    }

    output.push_str(&input[cursor..]);
    output
}

fn find_value_end(input: &str, mut index: usize) -> usize {
    let bytes = input.as_bytes();
    while index < bytes.len() {
        let byte = bytes[index];
        if byte.is_ascii_whitespace() || matches!(byte, b'&' | b'#' | b')' | b'"') {
            break;
        }
        index += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_select_rejects_conflicting_json_flag() {
        let err = select_output_mode(Some(OutputMode::Human), true, OutputMode::Human)
            .expect_err("must fail");
        assert_eq!(err.explicit, OutputMode::Human);
        assert!(err.to_string().contains("--json requires --output json"));
    }

    #[test]
    fn output_mode_select_falls_back_to_default() {
        assert_eq!(
            select_output_mode(None, false, OutputMode::Human),
            Ok(OutputMode::Human)
        );
        assert_eq!(
            select_output_mode(None, true, OutputMode::Human),
            Ok(OutputMode::Json)
        );
        assert_eq!(
            select_output_mode(Some(OutputMode::Json), true, OutputMode::Human),
            Ok(OutputMode::Json)
        );
    }

    #[test]
    fn envelopes_carry_required_keys() {
        let success = success_envelope("weather.forecast", json!({"city": "Tokyo"}));
        assert_eq!(success["schema_version"], "v1");
        assert_eq!(success["command"], "weather.forecast");
        assert_eq!(success["ok"], true);
        assert_eq!(success["result"]["city"], "Tokyo");

        let failure = error_envelope(
            "weather.forecast",
            "runtime.fetch_failed",
            "error sending request for url (https://customer-api.open-meteo.com/v1/search?apikey=abc&name=Tokyo)",
            "runtime",
            1,
        );
        assert_eq!(failure["ok"], false);
        assert_eq!(failure["error"]["code"], "runtime.fetch_failed");
        assert_eq!(
            failure["error"]["message"],
            "error sending request for url (https://customer-api.open-meteo.com/v1/search?apikey=[REDACTED]&name=Tokyo)"
        );
        assert_eq!(failure["error"]["details"]["kind"], "runtime");
        assert_eq!(failure["error"]["details"]["exit_code"], 1);
    }

    #[test]
    fn redaction_masks_api_keys_in_urls() {
        let redacted =
            redact_sensitive("http 400: bad request (https://example.test/v1/forecast?API_KEY=zzz)");
        assert_eq!(
            redacted,
            "http 400: bad request (https://example.test/v1/forecast?API_KEY=[REDACTED])"
        );
        assert_eq!(redact_sensitive("apikey="), "apikey=");
    }

    #[test]
    fn redaction_leaves_plain_messages_alone() {
        let message = "場所が見つかりません: Atlantis";
        assert_eq!(redact_sensitive(message), message);
    }
}

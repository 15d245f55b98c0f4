//! Request and response types for the scoring endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::presentation::{RiskScore, StrengthReport};
use crate::error::CheckError;

/// Body of a check request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRequest {
    pub password: String,
}

impl CheckRequest {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

/// How many breaches a password appeared in, if the lookup worked.
///
/// `Known(0)` is a clean password; `Unavailable` means the breach service
/// could not be asked and says nothing about the password itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreachCount {
    Known(u64),
    Unavailable,
}

impl BreachCount {
    /// Decode the wire value, where any negative number is the unavailable sentinel.
    pub fn from_wire(raw: i64) -> Self {
        u64::try_from(raw).map_or(BreachCount::Unavailable, BreachCount::Known)
    }

    pub fn known(self) -> Option<u64> {
        match self {
            BreachCount::Known(count) => Some(count),
            BreachCount::Unavailable => None,
        }
    }

    pub fn is_breached(self) -> bool {
        matches!(self, BreachCount::Known(count) if count > 0)
    }
}

/// One matched pattern from the scorer's sequence.
///
/// Only `pattern`, `token`, `i` and `j` are interpreted; everything else the
/// scorer attaches is kept in `extra` and rendered as key/value pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub pattern: String,
    pub token: String,
    pub i: usize,
    pub j: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PatternMatch {
    /// Extra fields as display strings, sorted by key.
    pub fn extra_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = self
            .extra
            .iter()
            .map(|(key, value)| {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), shown)
            })
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        fields
    }
}

/// A scored, non-empty password.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub bits: f64,
    pub crack_time: String,
    pub score: u8,
    pub warning: Option<String>,
    pub sequences: Vec<PatternMatch>,
    pub breach: BreachCount,
    pub risk: RiskScore,
}

impl CheckResult {
    /// The subset shown by the strength view.
    pub fn strength_report(&self) -> StrengthReport {
        StrengthReport {
            bits: self.bits,
            crack_time: self.crack_time.clone(),
            score: self.score,
            warning: self.warning.clone(),
            sequences: self.sequences.clone(),
            breach: self.breach,
        }
    }
}

/// What the endpoint said about a request.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The endpoint saw an empty password and scored nothing.
    Empty,
    Report(CheckResult),
}

impl CheckOutcome {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, CheckError> {
        let wire: WireResponse = serde_json::from_slice(body)?;
        wire.try_into()
    }

    pub fn report(&self) -> Option<&CheckResult> {
        match self {
            CheckOutcome::Report(result) => Some(result),
            CheckOutcome::Empty => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    empty: bool,
    bits: Option<f64>,
    crack_time: Option<String>,
    #[serde(default)]
    warning: Option<String>,
    score: Option<u8>,
    pwned: Option<i64>,
    #[serde(default)]
    sequences: Vec<PatternMatch>,
    risk: Option<f64>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CheckError> {
    value.ok_or_else(|| CheckError::MalformedResponse(format!("missing field `{}`", field)))
}

impl TryFrom<WireResponse> for CheckOutcome {
    type Error = CheckError;

    fn try_from(wire: WireResponse) -> Result<Self, Self::Error> {
        if wire.empty {
            return Ok(CheckOutcome::Empty);
        }

        let result = CheckResult {
            bits: required(wire.bits, "bits")?,
            crack_time: required(wire.crack_time, "crack_time")?,
            score: required(wire.score, "score")?,
            warning: wire.warning.filter(|w| !w.trim().is_empty()),
            sequences: wire.sequences,
            // A missing count is a breach lookup that did not happen
            breach: wire
                .pwned
                .map_or(BreachCount::Unavailable, BreachCount::from_wire),
            risk: RiskScore::from_raw(required(wire.risk, "risk")?),
        };

        Ok(CheckOutcome::Report(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<CheckOutcome, CheckError> {
        CheckOutcome::from_slice(value.to_string().as_bytes())
    }

    #[test]
    fn test_breach_count_from_wire() {
        assert_eq!(BreachCount::from_wire(0), BreachCount::Known(0));
        assert_eq!(BreachCount::from_wire(17), BreachCount::Known(17));
        assert_eq!(BreachCount::from_wire(-1), BreachCount::Unavailable);
        assert_eq!(BreachCount::from_wire(i64::MIN), BreachCount::Unavailable);
    }

    #[test]
    fn test_breach_count_helpers() {
        assert!(!BreachCount::Known(0).is_breached());
        assert!(BreachCount::Known(3).is_breached());
        assert!(!BreachCount::Unavailable.is_breached());
        assert_eq!(BreachCount::Known(3).known(), Some(3));
        assert_eq!(BreachCount::Unavailable.known(), None);
    }

    #[test]
    fn test_request_serializes_password_only() {
        let body = serde_json::to_value(CheckRequest::new("hunter2")).unwrap();
        assert_eq!(body, json!({"password": "hunter2"}));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(json!({"empty": true})).unwrap(), CheckOutcome::Empty);
    }

    #[test]
    fn test_decode_full_report() {
        let outcome = decode(json!({
            "empty": false,
            "bits": 14.5,
            "crack_time": "less than a second",
            "warning": "This is similar to a commonly used password.",
            "score": 0,
            "pwned": 17043,
            "sequences": [{
                "pattern": "dictionary",
                "token": "hunter",
                "i": 0,
                "j": 5,
                "rank": 1094,
                "l33t": false,
                "dictionary_name": "passwords"
            }],
            "risk": 57.26
        }))
        .unwrap();

        let result = outcome.report().expect("report");
        assert_eq!(result.bits, 14.5);
        assert_eq!(result.score, 0);
        assert_eq!(result.breach, BreachCount::Known(17043));
        assert_eq!(result.risk.value(), 57);
        assert_eq!(
            result.warning.as_deref(),
            Some("This is similar to a commonly used password.")
        );

        let seq = &result.sequences[0];
        assert_eq!(seq.pattern, "dictionary");
        assert_eq!(seq.token, "hunter");
        assert_eq!((seq.i, seq.j), (0, 5));
        assert_eq!(
            seq.extra_fields(),
            vec![
                ("dictionary_name".to_string(), "passwords".to_string()),
                ("l33t".to_string(), "false".to_string()),
                ("rank".to_string(), "1094".to_string()),
            ]
        );
    }

    #[test]
    fn test_blank_warning_is_none() {
        let outcome = decode(json!({
            "bits": 80.0, "crack_time": "centuries", "warning": "",
            "score": 4, "pwned": 0, "sequences": [], "risk": 1.2
        }))
        .unwrap();
        assert_eq!(outcome.report().unwrap().warning, None);
    }

    #[test]
    fn test_negative_or_missing_pwned_is_unavailable() {
        let outcome = decode(json!({
            "bits": 30.0, "crack_time": "3 hours", "score": 2, "pwned": -1, "risk": 40.0
        }))
        .unwrap();
        assert_eq!(outcome.report().unwrap().breach, BreachCount::Unavailable);

        let outcome = decode(json!({
            "bits": 30.0, "crack_time": "3 hours", "score": 2, "risk": 40.0
        }))
        .unwrap();
        assert_eq!(outcome.report().unwrap().breach, BreachCount::Unavailable);
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let err = decode(json!({"empty": false, "crack_time": "x", "score": 1, "risk": 3}))
            .unwrap_err();
        match err {
            CheckError::MalformedResponse(msg) => assert!(msg.contains("bits")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_garbage_body_is_malformed() {
        let err = CheckOutcome::from_slice(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CheckError::MalformedResponse(_)));
    }
}

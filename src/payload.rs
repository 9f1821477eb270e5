//! Request and response payloads exchanged with the computation engine

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Load case identifier. `0` means "not selected".
pub type CaseId = u32;

/// Time history function identifier, passed through to the engine unvalidated.
pub type FunctionId = u32;

/// Scale factor as entered in the panel. The raw representation (number or
/// text) is preserved on the wire; validation parses it separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScaleFactor {
    Number(f64),
    Text(String),
}

impl ScaleFactor {
    /// Numeric value of the input, or `None` when it is empty, non-numeric,
    /// or not finite. Sign is left to the validator.
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            ScaleFactor::Number(n) => *n,
            ScaleFactor::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor::Text(String::new())
    }
}

impl From<f64> for ScaleFactor {
    fn from(value: f64) -> Self {
        ScaleFactor::Number(value)
    }
}

impl From<&str> for ScaleFactor {
    fn from(value: &str) -> Self {
        ScaleFactor::Text(value.to_string())
    }
}

impl From<String> for ScaleFactor {
    fn from(value: String) -> Self {
        ScaleFactor::Text(value)
    }
}

/// One row of the angle table. Rows carry at least the angle; any other
/// columns ride along untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AngleRow {
    pub angle: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl AngleRow {
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            extra: serde_json::Map::new(),
        }
    }
}

/// Candidate request assembled from the panel inputs. Built fresh on every
/// submit attempt and discarded once the attempt resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionRequest {
    #[serde(rename = "TimeHistoryLC")]
    pub time_history_case: CaseId,
    #[serde(rename = "StaticLoadLC")]
    pub static_case: CaseId,
    #[serde(rename = "THfunction")]
    pub th_function: FunctionId,
    #[serde(rename = "ScaleFactor")]
    pub scale_factor: ScaleFactor,
    #[serde(rename = "RowData")]
    pub rows: Vec<AngleRow>,
}

/// A request that has passed every validation rule. Only the validator can
/// construct this, so the gateway never sees a partially checked request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidatedRequest(SubmissionRequest);

impl ValidatedRequest {
    pub(crate) fn new(request: SubmissionRequest) -> Self {
        Self(request)
    }

    pub fn request(&self) -> &SubmissionRequest {
        &self.0
    }

    pub fn into_inner(self) -> SubmissionRequest {
        self.0
    }
}

/// Classified engine reply. Exactly one variant is selected per response,
/// checking `error` before `success`.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOutcome {
    Error { message: String },
    Success { message: String },
    Unrecognized,
}

impl EngineOutcome {
    /// Classify a parsed engine reply by property presence.
    pub fn classify(reply: &Value) -> Self {
        if let Some(error) = reply.get("error") {
            return EngineOutcome::Error {
                message: stringify(error),
            };
        }
        if let Some(success) = reply.get("success") {
            return EngineOutcome::Success {
                message: stringify(success),
            };
        }
        EngineOutcome::Unrecognized
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scale_factor_parses_number_and_text() {
        assert_eq!(ScaleFactor::from(1.5).parse(), Some(1.5));
        assert_eq!(ScaleFactor::from("2.25").parse(), Some(2.25));
        assert_eq!(ScaleFactor::from(" 3 ").parse(), Some(3.0));
    }

    #[test]
    fn test_scale_factor_rejects_garbage() {
        assert_eq!(ScaleFactor::from("").parse(), None);
        assert_eq!(ScaleFactor::from("   ").parse(), None);
        assert_eq!(ScaleFactor::from("abc").parse(), None);
        assert_eq!(ScaleFactor::from(f64::NAN).parse(), None);
        assert_eq!(ScaleFactor::from(f64::INFINITY).parse(), None);
    }

    #[test]
    fn test_request_serializes_with_exact_wire_keys() {
        let request = SubmissionRequest {
            time_history_case: 5,
            static_case: 3,
            th_function: 2,
            scale_factor: ScaleFactor::from("1.5"),
            rows: vec![AngleRow::new(0.0), AngleRow::new(90.0)],
        };

        let encoded = serde_json::to_value(&request).unwrap();
        let object = encoded.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "TimeHistoryLC",
                "StaticLoadLC",
                "THfunction",
                "ScaleFactor",
                "RowData"
            ]
        );
        assert_eq!(object["ScaleFactor"], json!("1.5"));
    }

    #[test]
    fn test_angle_row_preserves_extra_columns() {
        let raw = json!({"angle": 45.0, "label": "NE"});
        let row: AngleRow = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(row.angle, 45.0);
        assert_eq!(serde_json::to_value(&row).unwrap(), raw);
    }

    #[test]
    fn test_classify_error_wins_over_success() {
        let reply = json!({"error": "bad", "success": "good"});
        assert_eq!(
            EngineOutcome::classify(&reply),
            EngineOutcome::Error {
                message: "bad".to_string()
            }
        );
    }

    #[test]
    fn test_classify_success_and_unrecognized() {
        assert_eq!(
            EngineOutcome::classify(&json!({"success": "OK"})),
            EngineOutcome::Success {
                message: "OK".to_string()
            }
        );
        assert_eq!(EngineOutcome::classify(&json!({})), EngineOutcome::Unrecognized);
        assert_eq!(
            EngineOutcome::classify(&json!({"status": "done"})),
            EngineOutcome::Unrecognized
        );
    }

    #[test]
    fn test_classify_stringifies_non_string_payloads() {
        assert_eq!(
            EngineOutcome::classify(&json!({"error": {"code": 3}})),
            EngineOutcome::Error {
                message: r#"{"code":3}"#.to_string()
            }
        );
    }
}

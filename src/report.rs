use serde::Serialize;

use crate::{
    error::ErrorKind,
    interpreter::evaluator::core::{EvaluationResult, Step},
};

/// The structured result handed to a display layer.
///
/// Serializes to `{ "value", "steps" }` on success and to
/// `{ "errorKind", "message", "position"? }` on failure.
///
/// # Example
/// ```
/// use pemdas::{report::Report, run};
///
/// let report = Report::from(&run("3 @ 4"));
/// let json = serde_json::to_value(&report).unwrap();
///
/// assert_eq!(json["errorKind"], "InvalidCharacter");
/// assert_eq!(json["position"], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Success {
        value: f64,
        steps: Vec<Step>,
    },
    #[serde(rename_all = "camelCase")]
    Failure {
        error_kind: ErrorKind,
        message:    String,
        #[serde(skip_serializing_if = "Option::is_none")]
        position:   Option<usize>,
    },
}

impl Report {
    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&EvaluationResult> for Report {
    fn from(result: &EvaluationResult) -> Self {
        match result {
            Ok(evaluation) => Self::Success { value: evaluation.value,
                                              steps: evaluation.steps.clone(), },
            Err(error) => Self::Failure { error_kind: error.kind(),
                                          message:    error.to_string(),
                                          position:   error.position(), },
        }
    }
}

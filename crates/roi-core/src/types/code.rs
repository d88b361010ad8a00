use serde::{Deserialize, Serialize};

/// Coded concept attached to a measurement (finding, finding site).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub code_value: String,
    pub coding_scheme_designator: String,
    pub code_meaning: String,
}

impl Code {
    pub fn new(
        code_value: impl Into<String>,
        coding_scheme_designator: impl Into<String>,
        code_meaning: impl Into<String>,
    ) -> Self {
        Self {
            code_value: code_value.into(),
            coding_scheme_designator: coding_scheme_designator.into(),
            code_meaning: code_meaning.into(),
        }
    }
}

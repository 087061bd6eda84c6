use serde::{Deserialize, Serialize};

pub mod blueprint;
pub mod brief;

pub use blueprint::{ReelBlueprint, ScriptBeat};
pub use brief::{InvalidBriefField, ReelBrief, BRIEF_FIELDS};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// One titled segment of the generated reel script.
///
/// Titles are unique within a blueprint; the workspace uses them as
/// rendering keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBeat {
    pub title: String,
    pub content: String,
}

/// The generated content plan for one brief.
///
/// Serialized in camelCase to match the workspace wire contract. The
/// four list fields and the beat titles are ordered and unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelBlueprint {
    pub summary: String,
    pub hook: String,
    pub script_beats: Vec<ScriptBeat>,
    pub call_to_action: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub production_checklist: Vec<String>,
    pub metrics_dashboard: Vec<String>,
    pub distribution_plan: Vec<String>,
}

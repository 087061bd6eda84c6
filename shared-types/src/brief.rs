use serde::{Deserialize, Serialize};

/// The six brief fields, in the order the endpoint validates them.
pub const BRIEF_FIELDS: [&str; 6] = ["topic", "goal", "audience", "tone", "offer", "platform"];

/// A brief field that was absent or not a JSON string.
///
/// The display message is the exact error string the endpoint returns.
#[derive(Debug, thiserror::Error)]
#[error("Missing or invalid field: {field}")]
pub struct InvalidBriefField {
    pub field: &'static str,
}

/// Campaign brief submitted from the workspace form.
///
/// `tone` and `platform` are selects in the UI but the endpoint accepts
/// any string for either; the generator falls back to default templates
/// for values it does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelBrief {
    pub topic: String,
    pub goal: String,
    pub audience: String,
    pub tone: String,
    pub offer: String,
    pub platform: String,
}

impl ReelBrief {
    /// Checks the required fields in fixed order and builds the brief.
    ///
    /// A field fails when it is missing or present with a non-string
    /// value. Empty strings pass; the first failing field wins.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, InvalidBriefField> {
        for field in BRIEF_FIELDS {
            match value.get(field) {
                Some(serde_json::Value::String(_)) => {}
                _ => return Err(InvalidBriefField { field }),
            }
        }

        let text = |field: &str| {
            value
                .get(field)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Ok(Self {
            topic: text("topic"),
            goal: text("goal"),
            audience: text("audience"),
            tone: text("tone"),
            offer: text("offer"),
            platform: text("platform"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> serde_json::Value {
        json!({
            "topic": "Launch-ready workout app growth",
            "goal": "Triple top-of-funnel signups this month",
            "audience": "busy professionals reclaiming their time",
            "tone": "bold",
            "offer": "14-day results accelerator",
            "platform": "Instagram Reels"
        })
    }

    #[test]
    fn test_full_body_builds_brief() {
        let brief = ReelBrief::from_value(&full_body()).unwrap();
        assert_eq!(brief.tone, "bold");
        assert_eq!(brief.platform, "Instagram Reels");
    }

    #[test]
    fn test_each_missing_field_is_named() {
        for field in BRIEF_FIELDS {
            let mut body = full_body();
            body.as_object_mut().unwrap().remove(field);

            let err = ReelBrief::from_value(&body).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.to_string(), format!("Missing or invalid field: {}", field));
        }
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let mut body = full_body();
        body["goal"] = json!(42);

        let err = ReelBrief::from_value(&body).unwrap_err();
        assert_eq!(err.field, "goal");
    }

    #[test]
    fn test_first_invalid_field_wins_in_fixed_order() {
        let body = json!({ "topic": "A", "goal": "B" });

        let err = ReelBrief::from_value(&body).unwrap_err();
        assert_eq!(err.field, "audience");
    }

    #[test]
    fn test_empty_strings_pass_validation() {
        let mut body = full_body();
        body["offer"] = json!("");

        let brief = ReelBrief::from_value(&body).unwrap();
        assert_eq!(brief.offer, "");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut body = full_body();
        body["format"] = json!("vertical");

        assert!(ReelBrief::from_value(&body).is_ok());
    }
}

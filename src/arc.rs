use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoryRequest {
    pub idea: String,
    pub genre: String,
}

/// One episode as written by the story model. Dialogues stay untyped JSON.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EpisodeDraft {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogues: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_episode_text: Option<String>,
}

/// A visual scene. Keys the model adds beyond `description` are kept as-is.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Panel {
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EpisodePanels {
    pub title: String,
    pub panels: Vec<Panel>,
}

/// Final artifact, keyed by episode in the order the story model wrote them.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct ArcPanels {
    pub arc_panels: IndexMap<String, EpisodePanels>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_panel_keeps_extra_keys() {
        let panel: Panel = serde_json::from_value(json!({
            "description": "a cave",
            "mood": "dark",
            "characters": ["Lina"]
        }))
        .unwrap();
        assert_eq!(panel.description, "a cave");
        assert_eq!(panel.extra["mood"], "dark");
        assert!(panel.image_prompt.is_none());

        let mut panel = panel;
        panel.image_prompt = Some("prompt: a cave".to_string());
        let out = serde_json::to_value(&panel).unwrap();
        assert_eq!(out["mood"], "dark");
        assert_eq!(out["characters"][0], "Lina");
        assert_eq!(out["image_prompt"], "prompt: a cave");
    }

    #[test]
    fn test_episode_draft_optional_fields() {
        let draft: EpisodeDraft = serde_json::from_value(json!({
            "title": "T1",
            "content": "C1",
            "dialogues": [{"character": "Aria", "text": "Where is it?"}]
        }))
        .unwrap();
        assert_eq!(draft.dialogues.as_ref().unwrap()[0]["character"], "Aria");
        assert!(draft.previous_episode_text.is_none());
    }

    #[test]
    fn test_arc_panels_shape() {
        let mut arc = ArcPanels::default();
        arc.arc_panels.insert(
            "episode_2".to_string(),
            EpisodePanels { title: "T2".to_string(), panels: vec![] },
        );
        arc.arc_panels.insert(
            "episode_1".to_string(),
            EpisodePanels { title: "T1".to_string(), panels: vec![] },
        );
        let text = serde_json::to_string(&arc).unwrap();
        assert_eq!(
            text,
            r#"{"arc_panels":{"episode_2":{"title":"T2","panels":[]},"episode_1":{"title":"T1","panels":[]}}}"#
        );
    }
}

use crate::arc::{EpisodeDraft, Panel};
use crate::error::{ArcError, Stage};
use indexmap::IndexMap;

pub fn strip_code_blocks(s: &str) -> String {
    let s = s.trim();
    if s.starts_with("```json") {
        s.trim_start_matches("```json").trim_end_matches("```").trim().to_string()
    } else if s.starts_with("```") {
        s.trim_start_matches("```").trim_end_matches("```").trim().to_string()
    } else {
        s.to_string()
    }
}

/// Story output: a JSON object of `episode_N` → episode, in emitted order.
/// The whole map must decode before any episode is used.
pub fn decode_episodes(raw: &str) -> Result<IndexMap<String, EpisodeDraft>, ArcError> {
    let clean_json = strip_code_blocks(raw);
    serde_json::from_str(&clean_json).map_err(|e| ArcError::malformed(Stage::Story, e, raw))
}

/// Scene splitter output: a JSON list of panel objects.
pub fn decode_panels(raw: &str) -> Result<Vec<Panel>, ArcError> {
    let clean_json = strip_code_blocks(raw);
    serde_json::from_str(&clean_json).map_err(|e| ArcError::malformed(Stage::SceneSplit, e, raw))
}

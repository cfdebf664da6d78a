use crate::arc::{EpisodeDraft, Panel};
use crate::decode::decode_panels;
use crate::error::{ArcError, Stage};
use crate::llm::LlmClient;
use crate::prompt::{image_prompt_message, scene_split_messages};
use log::{debug, info};

/// Splits an episode into panels, then asks for an image prompt per panel.
pub struct EpisodePipeline<'a> {
    llm: &'a dyn LlmClient,
}

impl<'a> EpisodePipeline<'a> {
    pub fn new(llm: &'a dyn LlmClient) -> Self {
        Self { llm }
    }

    pub async fn process(&self, episode: &EpisodeDraft) -> Result<Vec<Panel>, ArcError> {
        let mut panels = self.split_scenes(episode).await?;
        let total = panels.len();

        for (i, panel) in panels.iter_mut().enumerate() {
            debug!("Image prompt {}/{}", i + 1, total);
            let prompt = self.image_prompt(&panel.description).await?;
            panel.image_prompt = Some(prompt);
        }

        Ok(panels)
    }

    pub async fn split_scenes(&self, episode: &EpisodeDraft) -> Result<Vec<Panel>, ArcError> {
        let previous = episode.previous_episode_text.as_deref().unwrap_or("");
        let (system, user) = scene_split_messages(&episode.content, previous);

        let raw = self.llm.chat(&system, &user).await?;
        let panels = decode_panels(&raw)?;
        info!("Episode \"{}\" split into {} panels", episode.title, panels.len());
        debug!("Split result: {:?}", panels);
        Ok(panels)
    }

    pub async fn image_prompt(&self, description: &str) -> Result<String, ArcError> {
        let raw = self.llm.chat(&image_prompt_message(description), "").await?;
        let prompt = raw.trim();
        if prompt.is_empty() {
            return Err(ArcError::malformed(Stage::ImagePrompt, "empty prompt", &raw));
        }
        Ok(prompt.to_string())
    }
}

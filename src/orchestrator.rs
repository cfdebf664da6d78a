use crate::arc::{ArcPanels, EpisodePanels, StoryRequest};
use crate::decode::decode_episodes;
use crate::error::ArcError;
use crate::genre::GenreTable;
use crate::llm::LlmClient;
use crate::panels::EpisodePipeline;
use crate::story::generate_story;
use log::info;
use std::sync::Arc;

/// Story call, then the panel pipeline for each episode, strictly in sequence.
#[derive(Debug, Clone)]
pub struct ArcOrchestrator {
    llm: Arc<dyn LlmClient>,
    genres: Arc<GenreTable>,
}

impl ArcOrchestrator {
    pub fn new(llm: Arc<dyn LlmClient>, genres: Arc<GenreTable>) -> Self {
        Self { llm, genres }
    }

    pub fn genres(&self) -> &GenreTable {
        &self.genres
    }

    /// Any error aborts the whole request; episodes already processed are dropped.
    pub async fn generate(&self, request: &StoryRequest) -> Result<ArcPanels, ArcError> {
        let (genre, structure) = self
            .genres
            .lookup(&request.genre)
            .ok_or_else(|| ArcError::UnsupportedGenre(request.genre.clone()))?;

        let raw = generate_story(self.llm.as_ref(), &genre, structure, &request.idea).await?;
        let episodes = decode_episodes(&raw)?;
        info!("Story returned {} episodes", episodes.len());

        let pipeline = EpisodePipeline::new(self.llm.as_ref());
        let mut result = ArcPanels::default();
        for (key, episode) in episodes {
            info!("Processing {}: {}", key, episode.title);
            let panels = pipeline.process(&episode).await?;
            result.arc_panels.insert(
                key,
                EpisodePanels {
                    title: episode.title,
                    panels,
                },
            );
        }

        Ok(result)
    }
}

use crate::genre::GenreStructure;
use crate::llm::LlmClient;
use crate::prompt::{story_system_message, story_user_message};
use anyhow::Result;
use log::info;

/// One story call. Returns the model's text untouched; decoding is the caller's job.
pub async fn generate_story(
    llm: &dyn LlmClient,
    genre: &str,
    structure: &GenreStructure,
    idea: &str,
) -> Result<String> {
    let system_message = story_system_message(genre, structure);
    let user_message = story_user_message(idea);

    info!("Generating {} story arc...", genre);
    llm.chat(&system_message, &user_message).await
}

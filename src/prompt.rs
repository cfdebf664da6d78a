use crate::genre::GenreStructure;

const STORY_OUTPUT_FORMAT: &str = r#"**Output format**
You must write the story in json format with the following structure:
{
    "episode_1": {
        "title": "Episode 1 Title",
        "content": "Episode 1 content...",
        "dialogues": [
            {"character": "Character 1", "text": "Dialogue 1"},
            {"character": "Character 2", "text": "Dialogue 2"}
        ]
    },
    "episode_2": {
        "title": "Episode 2 Title",
        "content": "Episode 2 content...",
        "previous_episode_text": "Episode 1 summary"
    },
    "episode_3": {
        "title": "Episode 3 Title",
        "content": "Episode 3 content...",
        "previous_episode_text": "Episode 1 and 2 summary"
    }
}
no text outside the json format.
Don't wrap the json in ``` code fences.
Don't add json array brackets.
Don't add any other text outside the json format.
"#;

const SCENE_SPLIT_SYSTEM: &str = "Tu es un scénariste expert en webtoon. \
Tu dois découper un épisode en 3 scènes (panels), qui couvrent l'évolution de l'épisode donné. \
Tu répondras sous forme de liste de json, chaque élément ayant un champ \"description\", \
avec aucun texte en dehors du json. Pas de ```json non plus, \
et les ' et \" doivent être échappés pour ne pas casser le json.";

/// System message for the story call: genre, arc path and output schema.
pub fn story_system_message(genre: &str, structure: &GenreStructure) -> String {
    format!(
        "You are an expert Webtoon writer. Structure a story in the genre of {genre}, using this narrative path:\n\
        ARC 1 - Intro: {intro}\n\
        ARC 2 - Middle: {middle}\n\
        ARC 3 - Climax: {climax}\n\
        ARC 4 - End: {end}\n\
        For now Write the Arc 1 which is the Intro. Write 3 episodes with strong emotional rhythm, twists, and cliffhangers. Format it clearly by episode.\n\
        \n\
        {STORY_OUTPUT_FORMAT}",
        intro = structure.intro,
        middle = structure.middle,
        climax = structure.climax,
        end = structure.end,
    )
}

pub fn story_user_message(idea: &str) -> String {
    format!("Write a story based on the following idea: {}", idea)
}

/// (system, user) pair for the scene splitter.
pub fn scene_split_messages(episode_text: &str, previous_episode_text: &str) -> (String, String) {
    let user = format!(
        "Voici ce qui s'est passé dans l'épisode précédent : {}. \
        Et voici l'épisode que tu dois découper : {}",
        previous_episode_text, episode_text
    );
    (SCENE_SPLIT_SYSTEM.to_string(), user)
}

/// System-only message for the image prompt call.
pub fn image_prompt_message(description: &str) -> String {
    format!(
        "Tu es un expert en création de prompts visuels. Crée un prompt à partir de cette scène : {}",
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::GenreTable;

    #[test]
    fn test_story_system_message_embeds_genre_and_arcs() {
        let table = GenreTable::builtin();
        let (genre, structure) = table.lookup("action").unwrap();
        let message = story_system_message(&genre, structure);

        assert!(message.contains("in the genre of Action"));
        assert!(message.contains("ARC 1 - Intro: Conflit ou crime initial"));
        assert!(message.contains("ARC 2 - Middle: Investigation, Chasse, énigmes, tensions"));
        assert!(message.contains("ARC 3 - Climax: Trahison, tension maximale, twist majeur"));
        assert!(message.contains("ARC 4 - End: Vérité révélée"));
        assert!(message.contains("Write 3 episodes"));
        assert!(message.contains("\"episode_3\""));
        assert!(message.contains("\"previous_episode_text\""));
        assert!(message.contains("Don't add json array brackets."));
    }

    #[test]
    fn test_story_system_message_is_deterministic() {
        let table = GenreTable::builtin();
        let (genre, structure) = table.lookup("romance").unwrap();
        assert_eq!(
            story_system_message(&genre, structure),
            story_system_message(&genre, structure)
        );
    }

    #[test]
    fn test_schema_example_is_valid_json() {
        let start = STORY_OUTPUT_FORMAT.find('{').unwrap();
        let end = STORY_OUTPUT_FORMAT.rfind('}').unwrap();
        let example: serde_json::Value =
            serde_json::from_str(&STORY_OUTPUT_FORMAT[start..=end]).unwrap();
        assert_eq!(example.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_user_and_split_messages() {
        assert_eq!(
            story_user_message("a lost sword"),
            "Write a story based on the following idea: a lost sword"
        );

        let (system, user) = scene_split_messages("The hero wakes.", "");
        assert!(system.contains("3 scènes"));
        assert!(user.contains("précédent : ."));
        assert!(user.ends_with("The hero wakes."));

        assert!(image_prompt_message("a cave").ends_with(": a cave"));
    }
}

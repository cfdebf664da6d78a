use std::fmt;
use thiserror::Error;

/// Which model call produced output we could not use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Story,
    SceneSplit,
    ImagePrompt,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Story => "story",
            Stage::SceneSplit => "scene split",
            Stage::ImagePrompt => "image prompt",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ArcError {
    /// Genre not present in the table after normalization.
    #[error("Genre not supported: {0}")]
    UnsupportedGenre(String),

    /// The model answered, but not in the shape we asked for.
    #[error("Malformed {stage} output: {reason}")]
    MalformedModelOutput {
        stage: Stage,
        reason: String,
        raw: String,
    },

    /// Provider call itself failed.
    #[error("Model invocation failed: {0:#}")]
    Model(#[from] anyhow::Error),
}

impl ArcError {
    pub fn malformed(stage: Stage, reason: impl fmt::Display, raw: &str) -> Self {
        ArcError::MalformedModelOutput {
            stage,
            reason: reason.to_string(),
            raw: raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_stage() {
        let err = ArcError::malformed(Stage::SceneSplit, "expected a list", "{}");
        assert_eq!(err.to_string(), "Malformed scene split output: expected a list");
        match err {
            ArcError::MalformedModelOutput { stage, raw, .. } => {
                assert_eq!(stage, Stage::SceneSplit);
                assert_eq!(raw, "{}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_model_error_from_anyhow() {
        let err: ArcError = anyhow::anyhow!("connection refused").into();
        assert!(matches!(err, ArcError::Model(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}

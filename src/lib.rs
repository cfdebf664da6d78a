pub mod arc;
pub mod config;
pub mod decode;
pub mod error;
pub mod genre;
pub mod llm;
pub mod orchestrator;
pub mod panels;
pub mod prompt;
pub mod server;
pub mod story;

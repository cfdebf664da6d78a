use anyhow::{Context, Result};
use std::sync::Arc;
use webtoon_arc::config::Config;
use webtoon_arc::genre::GenreTable;
use webtoon_arc::llm;
use webtoon_arc::orchestrator::ArcOrchestrator;
use webtoon_arc::server;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {:#}", e);
            eprintln!("Please ensure 'config.yml' exists with valid LLM settings.");
            return Err(e);
        }
    };

    let genres = Arc::new(GenreTable::builtin().with_overrides(&config.genres));
    log::info!("Supported genres: {}", genres.names().join(", "));

    let llm = llm::create_llm(&config)?;
    let orchestrator = ArcOrchestrator::new(llm, genres);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    server::serve(listener, orchestrator).await
}

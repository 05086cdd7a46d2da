use anyhow::Context;
use clap::Parser;
use planner_api::config::ApiConfig;
use planner_api::helpers::conversation::parse_conversation;
use planner_api::helpers::llm::create_planner_service;
use planner_api::helpers::logging::{init_tracing, LogTarget};
use shared_types::ChatResponse;
use std::io::Read;
use std::path::PathBuf;

/// Generate a project plan (or one chat reply) from a saved conversation
#[derive(Parser, Debug)]
#[command(name = "plan-once", version, about)]
struct Args {
    /// JSON file with the conversation; reads stdin when omitted
    input: Option<PathBuf>,

    /// Produce the next assistant reply instead of a plan
    #[arg(long)]
    chat: bool,

    /// Config file to use instead of the default search locations
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ApiConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ApiConfig::load()?,
    };
    let _log_guard = init_tracing(&config.logging, LogTarget::Stderr);

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read conversation from stdin")?;
            buffer
        }
    };
    let messages = parse_conversation(&input)?;

    let planner = create_planner_service(&config)?;
    let output = if args.chat {
        let response = planner.chat(&messages).await?;
        serde_json::to_string_pretty(&ChatResponse { response })?
    } else {
        let plan = planner.generate_plan(&messages).await?;
        serde_json::to_string_pretty(&plan)?
    };

    println!("{}", output);
    Ok(())
}

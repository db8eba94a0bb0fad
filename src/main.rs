//! Terminal front end for the character search gateway.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use swapi_search::{view, GatewayClient, GatewayError, SearchStore, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// GraphQL endpoint, overriding GRAPHQL_URI
    #[arg(long)]
    endpoint: Option<String>,

    /// Print raw JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search characters by name
    Search { name: String },
    /// List saved searches
    Saved,
    /// Show the characters of a saved search
    Show { search_id: String },
    /// Save a search so it does not expire
    Save { search_id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swapi_search=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::from_env().with_override(args.endpoint.clone());
    tracing::info!(endpoint = %settings.endpoint, "using gateway");

    let store = SearchStore::new(GatewayClient::from_settings(&settings));

    match run(&store, &args).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(store: &SearchStore, args: &Args) -> Result<String, GatewayError> {
    match &args.command {
        Command::Search { name } => {
            let result = store.search_characters(name).await.into_result()?;
            render(args.json, &result, view::characters_result)
        }
        Command::Saved => {
            let searches = store.get_saved_searches().await.into_result()?;
            render(args.json, &searches, |s| view::saved_searches(s))
        }
        Command::Show { search_id } => {
            let characters = store.get_saved_search_by_id(search_id).await.into_result()?;
            render(args.json, &characters, |c| view::characters(c))
        }
        Command::Save { search_id } => {
            let saved = store.save_search(search_id).await.into_result()?;
            render(args.json, &saved, |s| view::save_result(search_id, *s))
        }
    }
}

fn render<T: Serialize>(json: bool, value: &T, text: impl Fn(&T) -> String) -> Result<String, GatewayError> {
    if json {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text(value))
    }
}

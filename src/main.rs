//! # binlook Main Entry Point
//!
//! Live BIN lookup prompt, or a one-shot query with `--query`.

use anyhow::Result;
use binlook::cmd_args::CommandLineArgs;
use binlook::config::{self, LookupProfile};
use binlook::{AppController, BinlistClient, CardLookup, SearchState, StateRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();
    let profile = LookupProfile::load(args.profile(), &config::get_profile_path())?;

    // One-shot lookups bypass the prompt and the debounce cycle entirely
    if let Some(bin) = args.query() {
        return lookup_once(&profile, bin, args.json()).await;
    }

    let mut app = AppController::new(&args, &profile)?;
    app.run().await
}

async fn lookup_once(profile: &LookupProfile, bin: &str, json: bool) -> Result<()> {
    let client = BinlistClient::new(profile)?;
    let card = client.find(bin).await?;
    StateRenderer::new(json).render(&SearchState::Content(card), &mut std::io::stdout())
}

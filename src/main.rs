//! CLI entry point for medic.

mod cli;

use clap::Parser;
use medic::actions::{ActionRunner, SystemExecutor};
use medic::catalog::Catalog;
use medic::config::load_config;
use medic::render::{RenderSink, Renderer};
use medic::repl::{run, Session};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    init_tracing();

    // Load config.
    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides.
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    let catalog = Catalog::builtin();
    let runner = ActionRunner::new(SystemExecutor);

    render_banner(&renderer, &catalog);

    let mut session = Session::new(&catalog, &runner, &renderer, config.cleanup.confirm);
    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = run(&mut session, stdin).await {
        renderer.error(&format!("failed to read input: {e}"));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medic=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_banner(renderer: &Renderer, catalog: &Catalog) {
    renderer.section("medic");
    renderer.field("games", &catalog.games().count().to_string());
    renderer.field("commands", "type `help` to list them, `exit` to leave");
    println!();
}

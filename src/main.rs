use clap::Parser;
use volcano_map::{config::Config, pipeline};

/// Render the volcano and world population map to a static HTML page.
///
/// Input and output paths default to `data/(1569)volcano.csv`, `data/world.json` and
/// `index.html`, and can be changed in an optional `volcano_map.yaml`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn try_main() -> anyhow::Result<()> {
    let config = Config::load()?;
    pipeline::render_map(&config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _args = Args::parse();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}

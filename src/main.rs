use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use textplace::Config;
use textplace::runtime;
use textplace::session::Script;

#[derive(Parser, Debug)]
#[command(name = "textplace")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TEXTPLACE_GIT_HASH"), ")"),
    about = "Live-preview text placement tool for a raster image editor"
)]
struct Cli {
    /// Session script to replay (TOML)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Where to write the resulting image (PNG)
    #[arg(long, short = 'o', value_name = "FILE", default_value = "textplace.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 640)]
    width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = 480)]
    height: i32,

    /// Config file (defaults to ~/.config/textplace/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the example config to the default location and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        println!("textplace: Live-preview text placement tool for a raster image editor");
        println!();
        println!("Usage:");
        println!("  textplace --script session.toml --output out.png");
        println!("  textplace --init-config    Write ~/.config/textplace/config.toml");
        println!("  textplace --help           Show help");
        println!();
        println!("Session steps: activate, move, click, key, input, wait");
        println!("  Press 't' with the pointer tool to switch to text, click to commit,");
        println!("  Escape to cancel.");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)?;
    log::info!(
        "Loaded {} steps from {}",
        script.steps.len(),
        script_path.display()
    );

    let layer = runtime::run_session(&script, cli.width, cli.height, &config)
        .context("Session playback failed")?;

    layer
        .write_png(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    println!("Wrote {}", cli.output.display());

    Ok(())
}

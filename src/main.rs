use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use codingtext::{CompletionEngine, ConfigManager, EditorSession, EngineSettings};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " ", env!("CODINGTEXT_GIT_SHA"));

/// Types stdin into an empty buffer one character at a time and prints the result.
///
/// Line endings are normalized first: `\r\n` and lone `\r` become `\n`.
#[derive(Parser, Debug)]
#[command(name = "codingtext", version = VERSION)]
struct Cli {
    /// Disable every completion (plain insertion)
    #[arg(long)]
    raw: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = if cli.raw { EngineSettings::raw() } else { load_settings() };

    let mut input = String::new();
    io::stdin().read_to_string(&mut input).context("Failed to read stdin")?;
    let input = normalize_line_endings(&input);

    let mut session = EditorSession::with_engine(CompletionEngine::new(settings), "");
    let mut buf = [0u8; 4];
    for ch in input.chars() {
        let applied = session.type_text(ch.encode_utf8(&mut buf))?;
        if let Some(warning) = applied.warning {
            log::info!("{:?} at {}", warning, session.selection().location);
        }
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(session.text().as_bytes()).context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;
    Ok(())
}

fn load_settings() -> EngineSettings {
    match ConfigManager::new().and_then(|manager| manager.load_settings()) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Failed to load settings, using defaults: {err:#}");
            EngineSettings::default()
        }
    }
}

/// The engine only recognizes `\n` as a line break.
fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

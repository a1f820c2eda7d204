//! Gomoku engine entry point
//!
//! - `gomoku_ai` / `gomoku_ai gui` - launch the graphical interface
//! - `gomoku_ai play` - play against the engine in the terminal

use anyhow::anyhow;
use clap::{Parser, Subcommand};

use gomoku_ai::cli;
use gomoku_ai::engine::EngineConfig;
use gomoku_ai::ui::GomokuApp;
use gomoku_ai::DEFAULT_BOARD_SIZE;

/// Gomoku: five-in-a-row with an alpha-beta engine
#[derive(Parser)]
#[command(name = "gomoku_ai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the graphical interface
    Gui,
    /// Play against the engine in the terminal
    Play {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Search depth ceiling (overrides gomoku.toml)
        #[arg(long)]
        depth: Option<u8>,
        /// Time budget per move in milliseconds (overrides gomoku.toml)
        #[arg(long)]
        time_limit: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    match args.command {
        Some(Commands::Play {
            size,
            depth,
            time_limit,
        }) => {
            let mut config = EngineConfig::load_or_default();
            if let Some(depth) = depth {
                config.max_depth = depth;
            }
            if let Some(time_limit) = time_limit {
                config.time_limit_ms = time_limit;
            }
            cli::play(size, config)?;
            Ok(())
        }
        Some(Commands::Gui) | None => run_gui(),
    }
}

fn run_gui() -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc)))),
    )
    .map_err(|e| anyhow!("failed to start GUI: {e}"))
}

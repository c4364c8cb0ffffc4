mod app;
mod command_sender;
mod config;
mod feedback;
mod terminal;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::config::{FileContentProvider, YamlSerializer};
use common::games::SessionRng;
use common::session::{SessionController, SessionRunner};
use common::trivia::{self, OfflineTriviaProvider, TriviaRound};
use common::{FileStore, ScoreLedger, log, logger};
use eframe::egui;
use tokio::sync::{mpsc, watch};

use app::PlaygroundApp;
use command_sender::CommandSender;
use feedback::LogFeedback;

const COMMAND_QUEUE_SIZE: usize = 64;

#[derive(Parser)]
#[command(name = "arcade_playground")]
struct Args {
    /// Config file; defaults to arcade_playground_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for every random choice, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = config::config_path(args.config);
    let config = config::get_config_manager(&config_path).load()?;

    let prefix = if args.use_log_prefix {
        Some("Playground".to_string())
    } else {
        config.log.prefix.clone()
    };
    logger::init_logger(prefix, config.log.level);
    log!("Arcade Playground {} using {}", env!("CARGO_PKG_VERSION"), config_path.display());

    let scores_path = config::scores_path(&config_path, &config);
    log!("Records stored in {}", scores_path.display());
    let store = FileStore::new(FileContentProvider::new(scores_path), YamlSerializer::new());

    let grid_size = config.snake.grid_size;
    let controller = SessionController::new(config, ScoreLedger::new(store), LogFeedback, args.seed);

    let (session_tx, session_rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
    let (trivia_tx, trivia_rx) = mpsc::channel(COMMAND_QUEUE_SIZE);
    let (runner, snapshots) = SessionRunner::new(controller, session_rx);
    let (trivia_updates, trivia_rounds) = watch::channel(TriviaRound::default());
    let provider = OfflineTriviaProvider::new(match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    });

    let runtime = tokio::runtime::Runtime::new()?;
    std::thread::spawn(move || {
        runtime.block_on(async {
            tokio::join!(
                runner.run(),
                trivia::serve(provider, LogFeedback, trivia_rx, trivia_updates),
            );
        });
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 820.0])
            .with_title("Arcade Playground"),
        ..Default::default()
    };

    let commands = CommandSender::new(session_tx, trivia_tx);
    eframe::run_native(
        "Arcade Playground",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PlaygroundApp::new(
                commands,
                snapshots,
                trivia_rounds,
                grid_size,
            )))
        }),
    )?;

    log!("Arcade Playground closed");
    Ok(())
}

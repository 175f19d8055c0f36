use clap::Parser;
use eventflow_core::AppConfig;
use eventflow_domain::BoardState;
use eventflow_tui::App;

#[derive(Parser)]
#[command(name = "eventflow", version, about = "Terminal kanban board for business event workflows")]
struct Cli {
    /// Start with an empty board instead of the sample tasks
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("EVENTFLOW_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = AppConfig::load();

    let board = if cli.empty || !config.seed_tasks {
        BoardState::new()
    } else {
        BoardState::seeded()
    };

    let mut app = App::new(board);
    app.run().await?;
    Ok(())
}

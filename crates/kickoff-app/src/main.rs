// Kickoff entry point.
//
// Startup sequence:
// 1. Load config (it names the log file, so it comes before tracing)
// 2. Initialize tracing (log to file; stdout carries UI updates)
// 3. Load the roster CSV
// 4. Create the draft session and match recorder
// 5. Spawn the app loop
// 6. Forward operator commands from stdin and print UI updates to stdout

use std::path::Path;
use std::sync::Arc;

use kickoff_app::app;
use kickoff_app::config::{self, AppConfig};
use kickoff_app::protocol::{OperatorCommand, UiUpdate};
use kickoff_app::recorder::JsonFileRecorder;
use kickoff_app::roster;
use kickoff_draft::DraftSession;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(&config.app)?;
    info!(
        "Kickoff starting up: league={}, log_file={}",
        config.app.league_name, config.app.log_file
    );

    // 3. Load the roster
    let roster = roster::load_roster(Path::new(&config.app.roster_path))
        .context("failed to load roster")?;
    info!("Loaded {} participants from {}", roster.len(), config.app.roster_path);

    // 4. Session and recorder
    let session =
        DraftSession::new(config.pick.clone()).context("invalid pick settings")?;
    let recorder = Arc::new(JsonFileRecorder::new(&config.app.results_dir));
    let app_state = app::AppState::new(session, roster, recorder);

    // 5. Spawn the app loop
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, mut ui_rx) = mpsc::channel::<UiUpdate>(256);

    // Every engine and loop log line carries the league it belongs to.
    let draft_span = info_span!("draft", league = %config.app.league_name);
    let app_handle = tokio::spawn(
        async move {
            if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
                error!("Application loop error: {}", e);
            }
        }
        .instrument(draft_span),
    );

    let printer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(update) = ui_rx.recv().await {
            let mut line = match serde_json::to_vec(&update) {
                Ok(line) => line,
                Err(e) => {
                    error!("Failed to encode UI update: {}", e);
                    continue;
                }
            };
            line.push(b'\n');
            if stdout.write_all(&line).await.is_err() || stdout.flush().await.is_err() {
                break;
            }
        }
    });

    // 6. Read operator commands, one JSON object per line
    info!("Ready for operator commands on stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let cmd = match serde_json::from_str::<OperatorCommand>(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                warn!("Ignoring unparseable command {:?}: {}", line, e);
                continue;
            }
        };
        let quit = cmd == OperatorCommand::Quit;
        if cmd_tx.send(cmd).await.is_err() || quit {
            break;
        }
    }

    // Closing the channel stops the loop if stdin ended without a quit.
    drop(cmd_tx);
    let _ = app_handle.await;
    let _ = printer.await;

    info!("Kickoff shut down cleanly");
    Ok(())
}

/// Send logs to `app.log_file`, appending across runs. `RUST_LOG` wins over
/// `app.log_filter` when set.
fn init_tracing(app: &AppConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let path = Path::new(&app.log_file);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&app.log_filter)
            .with_context(|| format!("invalid app.log_filter {:?}", app.log_filter))?,
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

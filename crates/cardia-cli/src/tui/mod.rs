//! Terminal dashboard: the input form on one screen, the charts on the next.

mod app;
mod input;
mod results;

use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

use cardia_api::PredictorClient;
use cardia_config::CardiaConfig;
use cardia_core::wire::PredictRequest;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

use app::{App, FetchOutcome, Screen};

/// Restores the terminal if the dashboard unwinds.
struct TerminalCleanup;

impl Drop for TerminalCleanup {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the dashboard until the user quits.
///
/// # Errors
/// Fails when the terminal cannot be set up or drawn to.
pub async fn run(client: PredictorClient, config: &CardiaConfig) -> anyhow::Result<()> {
    let client = Arc::new(client);
    let (tx, mut rx) = mpsc::unbounded_channel();

    // The reference datasets load once in the background. The results view
    // simply omits whichever chart has no data yet.
    spawn_baseline_fetch(&client, &tx);
    spawn_importance_fetch(&client, &tx);

    enable_raw_mode()?;
    // Armed before entering the alternate screen: a failure on the next line
    // must still drop raw mode on the way out.
    let _cleanup = TerminalCleanup;

    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &client, &tx, &mut rx, config.ui.tick()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    std::mem::forget(_cleanup);

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: &Arc<PredictorClient>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    rx: &mut mpsc::UnboundedReceiver<FetchOutcome>,
    tick: Duration,
) -> anyhow::Result<()> {
    let mut app = App::new();

    while !app.should_quit {
        while let Ok(outcome) = rx.try_recv() {
            app.apply(outcome);
        }

        terminal.draw(|f| draw(f, &app))?;

        // Blocks at most one tick; fetch tasks run on other runtime workers.
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(request) = app.on_key(key.code, key.modifiers) {
                        spawn_predict(client, tx, request);
                    }
                }
            }
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Input => input::draw(f, app),
        Screen::Results => results::draw(f, app),
    }
}

fn spawn_baseline_fetch(client: &Arc<PredictorClient>, tx: &mpsc::UnboundedSender<FetchOutcome>) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(FetchOutcome::Baseline(client.fetch_healthy_baseline().await));
    });
}

fn spawn_importance_fetch(client: &Arc<PredictorClient>, tx: &mpsc::UnboundedSender<FetchOutcome>) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(FetchOutcome::Importance(client.fetch_feature_importance().await));
    });
}

fn spawn_predict(
    client: &Arc<PredictorClient>,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    request: PredictRequest,
) {
    let client = Arc::clone(client);
    let tx = tx.clone();
    tokio::spawn(async move {
        let _ = tx.send(FetchOutcome::Prediction(client.predict(&request).await));
    });
}

#[cfg(test)]
mod tests {
    use super::TerminalCleanup;

    // The guard is armed right after raw mode and may drop before the
    // alternate screen was ever entered; its restore calls must be safe to
    // run in any terminal state, including none at all.
    #[test]
    fn cleanup_guard_drops_safely_without_a_terminal() {
        let guard = TerminalCleanup;
        drop(guard);
    }
}

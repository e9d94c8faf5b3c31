//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use ptracker_api::PromiseApi;
use ptracker_app::message::Message;
use ptracker_app::signals::spawn_signal_handler;
use ptracker_app::{process_message, AppState, Route, Settings};
use ptracker_core::prelude::*;

use crate::{event, render, terminal};

/// Run the dashboard, starting on `route`
pub async fn run<A>(settings: Settings, route: Route, api: A) -> Result<()>
where
    A: PromiseApi + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    info!(
        "Starting dashboard at {} (backend {}, journalist={})",
        route, settings.api.base_url, settings.behavior.journalist
    );
    let mut state = AppState::with_settings(settings);

    // Background tasks and the signal handler report through this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    spawn_signal_handler(msg_tx.clone());

    process_message(&mut state, Message::Navigate(route), &msg_tx, &api);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api);

    // Stop whatever is still in flight before handing the terminal back
    state.close_detail();
    state.screen_scope.cancel();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Dashboard exited with error: {}", e);
    }
    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &A,
) -> Result<()>
where
    A: PromiseApi + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, api);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, api);
        }
    }

    Ok(())
}

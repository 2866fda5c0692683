// File: src/tui/mod.rs
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::client::CatalogClient;
use crate::config::Config;

use action::{Action, AppEvent, NetworkRequest};
use handlers::{handle_app_event, handle_key_event};
use state::AppState;
use view::draw;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::{io, time::Duration};
use tokio::sync::mpsc;

pub async fn run(config: Config) -> Result<()> {
    // --- 1. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config).await;

    // --- 4. RESTORE ---
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
) -> Result<()> {
    // --- 2. STATE INIT ---
    let mut app_state = AppState::new();
    let concurrency = config.effective_concurrency();

    let (net_tx, mut net_rx) = mpsc::channel::<NetworkRequest>(10);
    // Unbounded so background tasks never wait on the UI.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let client = match CatalogClient::from_config(&config) {
        Ok(c) => Some(Arc::new(c)),
        Err(e) => {
            log::error!("Could not create API client: {}", e);
            let ticket = app_state.list.begin_refresh();
            app_state.list.complete_refresh(ticket, Err(e));
            app_state.message = "Check base_url in the config file.".to_string();
            None
        }
    };

    // --- NETWORK TASK ---
    if let Some(client) = client.clone() {
        let event_tx = event_tx.clone();
        tokio::spawn(async move {
            let _ = event_tx.send(AppEvent::Status(format!(
                "Connecting to {}...",
                client.base_url()
            )));

            while let Some(request) = net_rx.recv().await {
                match request {
                    NetworkRequest::Shutdown => break,
                    NetworkRequest::FetchCharacters(ticket) => {
                        // Each refresh runs on its own; an older one finishing late is
                        // discarded by its ticket.
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        tokio::spawn(async move {
                            let result = client.get_all_characters().await;
                            let _ = event_tx.send(AppEvent::CharactersLoaded(ticket, result));
                        });
                    }
                }
            }
        });

        // Initial load, as when the list screen appears.
        let ticket = app_state.list.begin_refresh();
        let _ = net_tx.send(NetworkRequest::FetchCharacters(ticket)).await;
    }

    // --- 3. UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        // A. Network Events
        while let Ok(event) = event_rx.try_recv() {
            handle_app_event(&mut app_state, event);
        }

        // B. User Input
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let action = match event::read()? {
            Event::Mouse(mouse) => {
                match mouse.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                }
                None
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key_event(key, &mut app_state)
            }
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };
        if client.is_some()
            && let Some(request) = action.network_request()
        {
            let _ = net_tx.send(request).await;
        }

        match action {
            Action::Quit => break,
            Action::Refresh(ticket) => {
                if client.is_none() {
                    app_state.list.complete_refresh(
                        ticket,
                        Err(crate::error::ApiError::Transport(
                            "No API client configured".to_string(),
                        )),
                    );
                }
            }
            Action::LoadEpisodes => {
                if let (Some(client), Some(detail)) = (client.as_ref(), app_state.detail.as_mut())
                {
                    let event_tx = event_tx.clone();
                    detail.start_loading(client.clone(), concurrency, move |id, titles| {
                        let _ = event_tx.send(AppEvent::EpisodesLoaded(id, titles));
                    });
                }
            }
        }
    }

    Ok(())
}

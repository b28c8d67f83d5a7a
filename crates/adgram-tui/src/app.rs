//! Main application loop for the deals view.

use crate::prefs::Prefs;
use crate::state::TuiState;
use crate::widgets::{deals::DealList, footer::Footer, header::Header};
use adgram_core::{PollScheduler, SyncEngine, UiEvent};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::interval;
use tracing::warn;

/// Interactive deals view.
///
/// Entering the view arms the poll scheduler and performs one immediate
/// refresh; leaving it disarms the scheduler.
pub struct App {
    engine: Arc<SyncEngine>,
    scheduler: PollScheduler,
    events: broadcast::Receiver<UiEvent>,
    state: TuiState,
    prefs_path: Option<PathBuf>,
}

impl App {
    pub fn new(engine: Arc<SyncEngine>, poll_period: Duration) -> Self {
        let events = engine.subscribe();
        let scheduler = PollScheduler::new(Arc::clone(&engine), poll_period);
        let prefs_path = Prefs::default_path();
        let prefs = prefs_path
            .as_deref()
            .map(Prefs::load)
            .unwrap_or_default();

        Self {
            engine,
            scheduler,
            events,
            state: TuiState::new(prefs.theme),
            prefs_path,
        }
    }

    /// Runs the TUI event loop until the user quits.
    pub async fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.scheduler.arm();
        self.engine.refresh().await;

        let mut tick = interval(Duration::from_millis(100));
        let result = loop {
            tick.tick().await;
            self.drain_events();

            if let Err(e) = self.draw(&mut terminal) {
                break Err(e);
            }

            match self.handle_input() {
                Ok(true) => break Ok(()),
                Ok(false) => {}
                Err(e) => break Err(e),
            }
        };

        self.scheduler.disarm();
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        result
    }

    fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(UiEvent::Render(view)) => self.state.set_view(view),
                Ok(UiEvent::Notice(notice)) => self.state.flash(notice),
                Err(broadcast::error::TryRecvError::Lagged(_)) => {
                    // Missed renders are recovered by the next one
                }
                Err(_) => break,
            }
        }
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(0),
                    Constraint::Length(2),
                ])
                .split(f.area());

            f.render_widget(Header::new(&self.state), chunks[0]);
            f.render_widget(DealList::new(&self.state), chunks[1]);
            f.render_widget(Footer::new(&mut self.state), chunks[2]);
        })?;
        Ok(())
    }

    /// Returns `Ok(true)` when the user asked to quit.
    fn handle_input(&mut self) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }
        let Event::Key(key) = event::read()? else {
            return Ok(false);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('r') => {
                let engine = Arc::clone(&self.engine);
                tokio::spawn(async move { engine.refresh().await });
            }
            KeyCode::Char('f') => {
                let filter = self.state.cycle_filter();
                self.engine.set_filter(filter);
            }
            KeyCode::Char('t') => {
                self.state.theme = self.state.theme.toggled();
                if let Some(path) = &self.prefs_path {
                    let prefs = Prefs {
                        theme: self.state.theme,
                    };
                    if let Err(e) = prefs.save(path) {
                        warn!("Could not persist theme preference: {e}");
                    }
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char(c @ '1'..='9') => {
                let slot = (c as usize) - ('1' as usize);
                if let Some(card) = self.state.selected_card() {
                    if let Some(action) = card.actions.get(slot) {
                        let engine = Arc::clone(&self.engine);
                        let deal_id = card.id;
                        let target = action.target_state.clone();
                        tokio::spawn(async move {
                            engine.request_transition(deal_id, &target).await;
                        });
                    }
                }
            }
            _ => {}
        }
        Ok(false)
    }
}

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::coverage::{CoverageProvider, CoverageResults};
use crate::error::ClientResult;
use crate::events::{EventHandler, EventResult};
use crate::geocoding::{AddressSuggestion, SuggestionProvider};
use crate::search::{SearchController, SearchRejected};
use crate::ui::UI;

/// Shown when a search is invoked with no committed address.
pub const SELECT_ADDRESS_NOTICE: &str = "Select an address from the suggestion list";
/// Shown when the backend coverage check fails.
pub const COVERAGE_FAILED_NOTICE: &str = "Coverage check failed";

/// Outcome of a finished background request, delivered to the run loop.
enum NetEvent {
    Suggestions(ClientResult<Vec<AddressSuggestion>>),
    Coverage(ClientResult<CoverageResults>),
}

pub struct App {
    should_quit: bool,
    controller: SearchController,
    ui: UI,
    event_handler: EventHandler,
    suggestions: Arc<dyn SuggestionProvider>,
    coverage: Arc<dyn CoverageProvider>,
    net_tx: mpsc::UnboundedSender<NetEvent>,
    net_rx: mpsc::UnboundedReceiver<NetEvent>,
}

impl App {
    pub fn new(suggestions: Arc<dyn SuggestionProvider>, coverage: Arc<dyn CoverageProvider>) -> Self {
        let (net_tx, net_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            controller: SearchController::new(),
            ui: UI::new(),
            event_handler: EventHandler::new(),
            suggestions,
            coverage,
            net_tx,
            net_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !std::io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "This application requires a proper terminal (TTY) to run. Please run it in a terminal emulator."
            ));
        }

        // Setup terminal
        enable_raw_mode().map_err(|e| {
            anyhow::anyhow!("Failed to enable raw mode: {}. Make sure you're running in a proper terminal.", e)
        })?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
            anyhow::anyhow!("Failed to setup terminal: {}. Make sure your terminal supports these features.", e)
        })?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        // Run the main loop
        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(50);

        loop {
            // Apply finished background requests
            while let Ok(net_event) = self.net_rx.try_recv() {
                self.apply_net_event(net_event);
            }

            // Fire the debounced suggestion lookup once its window elapses
            if let Some(query) = self.controller.due_lookup(Instant::now()) {
                self.spawn_suggestion_lookup(query);
            }

            // Clear expired toasts
            self.ui.update_toasts();

            // Draw UI
            terminal.draw(|f| self.ui.render(f, &self.controller))?;

            // Handle events
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    let event_result = self.event_handler.handle_key_event(key, &mut self.controller);

                    match event_result {
                        EventResult::Continue => {}
                        EventResult::SearchRequested => {
                            self.request_search();
                        }
                    }

                    if self.event_handler.should_quit() {
                        self.should_quit = true;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn apply_net_event(&mut self, net_event: NetEvent) {
        match net_event {
            NetEvent::Suggestions(outcome) => {
                self.controller.apply_suggestions(outcome);
            }
            NetEvent::Coverage(outcome) => {
                if let Err(e) = &outcome {
                    tracing::warn!("Coverage check failed: {}", e);
                    self.ui.toasts_mut().error(COVERAGE_FAILED_NOTICE);
                }
                self.controller.apply_coverage(outcome);
            }
        }
    }

    fn spawn_suggestion_lookup(&self, query: String) {
        let provider = Arc::clone(&self.suggestions);
        let tx = self.net_tx.clone();
        tokio::spawn(async move {
            let outcome = provider.suggest(&query).await;
            let _ = tx.send(NetEvent::Suggestions(outcome));
        });
    }

    fn request_search(&mut self) {
        match self.controller.begin_search() {
            Ok(address) => {
                tracing::info!("Checking coverage for {}", address);
                let provider = Arc::clone(&self.coverage);
                let tx = self.net_tx.clone();
                tokio::spawn(async move {
                    let outcome = provider.check(&address).await;
                    let _ = tx.send(NetEvent::Coverage(outcome));
                });
            }
            Err(SearchRejected::NoSelection) => {
                self.ui.toasts_mut().warning(SELECT_ADDRESS_NOTICE);
            }
            // A repeated invocation while a check runs is dropped quietly
            Err(SearchRejected::InFlight) => {}
        }
    }
}

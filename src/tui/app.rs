use std::io;

use crossterm::event::{Event as TermEvent, EventStream};
use futures::Stream;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::Config;
use crate::connection::{ConnectionTask, Connector};
use crate::model::Phase;
use crate::wizard::{Command, Event, EventSender, WizardState, dispatch};

use super::error::AppError;
use super::event::{EventReader, Ticker};
use super::view;

/// Owns the wizard state and is the single consumer of the event queue.
///
/// Keyboard input, spinner ticks and connection results all arrive through
/// one channel; every background task is a child of `shutdown`.
pub struct App {
    state: WizardState,
    config: Config,
    connector: Box<dyn Connector>,
    events_tx: EventSender,
    events_rx: mpsc::UnboundedReceiver<Event>,
    shutdown: CancellationToken,
    connection: Option<ConnectionTask>,
    ticker: Option<Ticker>,
    should_quit: bool,
    input_closed: bool,
}

impl App {
    /// Creates an app in the initial form phase.
    pub fn new(config: Config, connector: Box<dyn Connector>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: WizardState::new(),
            config,
            connector,
            events_tx,
            events_rx,
            shutdown: CancellationToken::new(),
            connection: None,
            ticker: None,
            should_quit: false,
            input_closed: false,
        }
    }

    /// Main event loop over the process terminal's input.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        self.run_with(terminal, EventStream::new()).await
    }

    /// Main event loop: draw → await event → dispatch → execute commands.
    ///
    /// Fails with [`AppError::InputClosed`] if `input` errors or ends first.
    pub async fn run_with<B, S>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: S,
    ) -> Result<(), AppError>
    where
        B: Backend,
        S: Stream<Item = io::Result<TermEvent>> + Send + 'static,
    {
        let _reader =
            EventReader::spawn(input, self.events_tx.clone(), self.shutdown.child_token());
        info!("event loop started");

        while !self.should_quit {
            terminal.draw(|frame| view::draw(&self.state, &self.config.theme, frame))?;
            let Some(event) = self.next_event().await else {
                break;
            };
            self.handle_event(event);
        }

        self.shutdown.cancel();
        info!("event loop ended");
        if self.input_closed {
            return Err(AppError::InputClosed);
        }
        Ok(())
    }

    /// Waits for the next queued event.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.events_rx.recv().await
    }

    /// Dispatches one event and executes the resulting commands.
    pub fn handle_event(&mut self, event: Event) {
        if event == Event::InputClosed {
            self.input_closed = true;
        }
        let (state, commands) = dispatch(std::mem::take(&mut self.state), event);
        self.state = state;
        if self.state.phase() != Phase::Connecting
            && let Some(task) = self.connection.take()
        {
            task.cancel();
        }
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Connect(credentials) => {
                info!(host = %credentials.host, user = %credentials.user, "starting connection");
                if let Some(previous) = self.connection.take() {
                    previous.cancel();
                }
                let attempt = self.connector.connect(&credentials);
                self.connection = Some(ConnectionTask::spawn(
                    attempt,
                    self.events_tx.clone(),
                    self.shutdown.child_token(),
                ));
            }
            Command::StartSpinner => {
                if let Some(previous) = self.ticker.take() {
                    previous.stop();
                }
                self.ticker = Some(Ticker::spawn(
                    self.config.tick_rate,
                    self.events_tx.clone(),
                    self.shutdown.child_token(),
                ));
            }
            Command::StopSpinner => {
                if let Some(ticker) = self.ticker.take() {
                    debug!("stopping spinner");
                    ticker.stop();
                }
            }
            Command::Quit => {
                self.should_quit = true;
                self.shutdown.cancel();
            }
        }
    }

    /// Returns the current wizard state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns `true` while a connection attempt is outstanding.
    pub fn is_connecting(&self) -> bool {
        self.connection
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

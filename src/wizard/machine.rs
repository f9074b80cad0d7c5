use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, trace, warn};

use super::command::Command;
use super::event::Event;
use crate::connection::{ConnectionError, ConnectionResult};
use crate::model::{ActionMenu, Credentials, FormController, MenuItem, Phase, Spinner, Submit};

/// Everything the wizard shows, owned by the event loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    phase: Phase,
    form: FormController,
    spinner: Spinner,
    menu: ActionMenu,
    last_error: Option<ConnectionError>,
}

/// Routes one event through the transition table.
///
/// Returns the next state and the side effects the caller must schedule.
pub fn dispatch(mut state: WizardState, event: Event) -> (WizardState, Vec<Command>) {
    let commands = state.apply(event);
    (state, commands)
}

impl WizardState {
    /// Creates the initial state: empty form, focus on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    pub fn menu(&self) -> &ActionMenu {
        &self.menu
    }

    /// The failure from the last connection attempt, if it failed.
    pub fn last_error(&self) -> Option<ConnectionError> {
        self.last_error
    }

    fn apply(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Tick => {
                if self.phase == Phase::Connecting {
                    self.spinner.tick();
                }
                Vec::new()
            }
            Event::Connection(result) => self.on_connection(result),
            Event::Resize(..) => Vec::new(),
            Event::InputClosed => {
                warn!(phase = ?self.phase, "terminal input closed");
                vec![Command::Quit]
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        if is_quit(&key) {
            info!(phase = ?self.phase, "quit requested");
            return vec![Command::Quit];
        }

        match self.phase {
            Phase::FormInput => self.on_form_key(key),
            Phase::Connecting => Vec::new(),
            Phase::ConnectionFailed => self.on_failed_key(key),
            Phase::Welcome | Phase::MenuUpload | Phase::MenuDownload => {
                self.on_menu_key(key);
                Vec::new()
            }
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Enter => match self.form.submit() {
                Submit::Advanced => Vec::new(),
                Submit::Completed(credentials) => self.begin_connecting(credentials),
            },
            KeyCode::Down => {
                self.form.advance_focus();
                Vec::new()
            }
            KeyCode::Up => {
                self.form.retreat_focus();
                Vec::new()
            }
            _ => {
                if let Err(e) = self.form.apply_key(key) {
                    trace!(error = %e, "keystroke dropped");
                }
                Vec::new()
            }
        }
    }

    fn on_failed_key(&mut self, key: KeyEvent) -> Vec<Command> {
        match key.code {
            KeyCode::Enter => match self.form.credentials() {
                Some(credentials) => {
                    info!("retrying connection");
                    self.begin_connecting(credentials)
                }
                None => {
                    self.reopen_form();
                    Vec::new()
                }
            },
            KeyCode::Char('e') => {
                self.reopen_form();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Download is only reachable through Upload; Tab never wraps and
    /// Shift-Tab only leaves Download.
    fn on_menu_key(&mut self, key: KeyEvent) {
        let next = match (self.phase, key.code) {
            (Phase::Welcome, KeyCode::Tab) => MenuItem::Upload,
            (Phase::MenuUpload, KeyCode::Tab) => MenuItem::Download,
            (Phase::MenuDownload, KeyCode::BackTab) => MenuItem::Upload,
            _ => return,
        };
        self.menu.highlight(next);
        self.phase = match next {
            MenuItem::Upload => Phase::MenuUpload,
            MenuItem::Download => Phase::MenuDownload,
        };
        debug!(item = next.label(), "menu highlight moved");
    }

    fn on_connection(&mut self, result: ConnectionResult) -> Vec<Command> {
        if self.phase != Phase::Connecting {
            debug!(phase = ?self.phase, "ignoring stale connection result");
            return Vec::new();
        }
        match result {
            Ok(()) => {
                info!("connected");
                self.phase = Phase::Welcome;
                self.menu.reset();
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %e, "connection failed");
                self.phase = Phase::ConnectionFailed;
                self.last_error = Some(e);
            }
        }
        vec![Command::StopSpinner]
    }

    fn begin_connecting(&mut self, credentials: Credentials) -> Vec<Command> {
        self.phase = Phase::Connecting;
        self.spinner.reset();
        self.last_error = None;
        vec![Command::Connect(credentials), Command::StartSpinner]
    }

    fn reopen_form(&mut self) {
        self.form.reopen();
        self.phase = Phase::FormInput;
    }
}

/// Esc, Ctrl-C and `q` leave the wizard from every phase.
fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
        _ => false,
    }
}

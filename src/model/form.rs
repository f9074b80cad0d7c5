//! The connection form: host, user and password fields submitted in order.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::field::{Field, FieldError, FieldSet};

/// Field index for the server hostname.
pub const HOSTNAME: usize = 0;
/// Field index for the user name.
pub const USER: usize = 1;
/// Field index for the password.
pub const PASSWORD: usize = 2;

/// Longest hostname accepted by the form.
pub const HOSTNAME_MAX_LENGTH: usize = 200;

/// Values captured by a completed form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of pressing Enter on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// Focus moved to the next field.
    Advanced,
    /// Enter was accepted on the last field.
    Completed(Credentials),
}

/// Focus handling and completion tracking on top of a [`FieldSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    fields: FieldSet,
    complete: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Creates the Hostname/User/Pass form with empty values.
    pub fn new() -> Self {
        Self {
            fields: FieldSet::new(vec![
                Field::new("Hostname").with_max_length(HOSTNAME_MAX_LENGTH),
                Field::new("User"),
                Field::new("Pass").masked(),
            ]),
            complete: false,
        }
    }

    /// Returns the underlying fields for rendering.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.fields.focus()
    }

    pub fn advance_focus(&mut self) {
        self.fields.advance_focus();
    }

    pub fn retreat_focus(&mut self) {
        self.fields.retreat_focus();
    }

    /// Handles Enter: advances focus, or completes the form on the last field.
    ///
    /// Values are not validated; empty fields are submitted as-is.
    pub fn submit(&mut self) -> Submit {
        if self.fields.is_last_focused() {
            self.complete = true;
            Submit::Completed(self.snapshot())
        } else {
            self.fields.advance_focus();
            Submit::Advanced
        }
    }

    /// Applies an editing keystroke to the focused field.
    ///
    /// Printable characters are appended and Backspace deletes; every other
    /// key leaves the form untouched.
    pub fn apply_key(&mut self, key: KeyEvent) -> Result<(), FieldError> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Ok(());
        }
        match key.code {
            KeyCode::Char(ch) => self.fields.insert_char(ch),
            KeyCode::Backspace => {
                self.fields.delete_char();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Returns `true` once Enter has been accepted on the last field.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the submitted values, available only once the form is complete.
    pub fn credentials(&self) -> Option<Credentials> {
        self.complete.then(|| self.snapshot())
    }

    /// Makes a completed form editable again, keeping values and focusing the first field.
    pub fn reopen(&mut self) {
        self.complete = false;
        self.fields.set_focus(HOSTNAME);
    }

    fn snapshot(&self) -> Credentials {
        Credentials {
            host: self.fields.value(HOSTNAME).to_string(),
            user: self.fields.value(USER).to_string(),
            password: self.fields.value(PASSWORD).to_string(),
        }
    }
}

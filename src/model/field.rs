//! Labeled text inputs and the ordered set that owns keyboard focus.

use thiserror::Error;

/// Glyph shown in place of each character of a masked field.
pub const MASK_GLYPH: char = '*';

/// Errors produced while editing a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The keystroke would push the value past the field's length limit.
    #[error("field is limited to {max_length} characters")]
    Overflow {
        /// The limit that was hit.
        max_length: usize,
    },
}

/// A single labeled input within a [`FieldSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label shown as the placeholder while the field is empty.
    pub label: String,
    value: String,
    /// Whether the value is rendered as [`MASK_GLYPH`]s.
    pub masked: bool,
    /// Maximum number of characters, or `None` for no limit.
    pub max_length: Option<usize>,
}

impl Field {
    /// Creates an empty, unmasked field with no length limit.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            masked: false,
            max_length: None,
        }
    }

    /// Limits the field to `max_length` characters.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Marks the field as masked.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Returns the clear-text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of characters currently stored.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Returns `true` if nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the value as it should appear on screen.
    pub fn display_value(&self) -> String {
        if self.masked {
            std::iter::repeat_n(MASK_GLYPH, self.len()).collect()
        } else {
            self.value.clone()
        }
    }

    /// Appends a character, refusing it once the limit is reached.
    pub fn insert_char(&mut self, ch: char) -> Result<(), FieldError> {
        if let Some(max_length) = self.max_length
            && self.len() >= max_length
        {
            return Err(FieldError::Overflow { max_length });
        }
        self.value.push(ch);
        Ok(())
    }

    /// Deletes the last character, if any.
    pub fn delete_char(&mut self) {
        self.value.pop();
    }
}

/// An ordered sequence of fields with exactly one focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
    focus: usize,
}

impl FieldSet {
    /// Creates a field set focused on the first field.
    ///
    /// # Panics
    ///
    /// Panics if `fields` is empty: a set without fields has nothing to focus.
    pub fn new(fields: Vec<Field>) -> Self {
        assert!(!fields.is_empty(), "a field set needs at least one field");
        Self { fields, focus: 0 }
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to `index`, ignoring out-of-range indices.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Returns `true` if the last field has focus.
    pub fn is_last_focused(&self) -> bool {
        self.focus == self.fields.len() - 1
    }

    /// Moves focus to the next field, wrapping around.
    pub fn advance_focus(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn retreat_focus(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Inserts a character into the focused field.
    pub fn insert_char(&mut self, ch: char) -> Result<(), FieldError> {
        self.fields[self.focus].insert_char(ch)
    }

    /// Deletes the last character of the focused field.
    pub fn delete_char(&mut self) {
        self.fields[self.focus].delete_char();
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(Field::value).unwrap_or("")
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of fields in the set.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the set has no fields; [`new`](Self::new) never builds one.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

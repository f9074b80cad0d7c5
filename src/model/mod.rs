mod field;
mod form;
mod menu;
mod phase;
mod spinner;

pub use field::{Field, FieldError, FieldSet, MASK_GLYPH};
pub use form::{
    Credentials, FormController, HOSTNAME, HOSTNAME_MAX_LENGTH, PASSWORD, Submit, USER,
};
pub use menu::{ActionMenu, MenuItem};
pub use phase::Phase;
pub use spinner::Spinner;

//! The wizard state machine: events in, new state and commands out.

mod command;
mod event;
mod machine;

pub use command::Command;
pub use event::{Event, EventSender};
pub use machine::{WizardState, dispatch};

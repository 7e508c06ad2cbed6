//! The interactive translation form.
//!
//! [`FormSession`] holds the Idle / Running / Result state machine shared by
//! the web page and the terminal prompt.

mod session;
mod terminal;

pub use session::{FormSession, Outcome, ViewState};
pub use terminal::TerminalForm;

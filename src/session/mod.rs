pub mod command;
pub mod driver;


pub use command::{Command, CommandError, HELP};
pub use driver::{ActionError, Outcome, Session, alert_text};

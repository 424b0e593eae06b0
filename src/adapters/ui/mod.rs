pub mod terminal;

pub use terminal::{TerminalPrompter, run_spinner};

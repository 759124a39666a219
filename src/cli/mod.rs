// CLI module
// Public interface for the interactive shell

mod commands;
mod input;
mod repl;

pub use commands::Command;
pub use input::{BufferedReader, EditorReader, LineReader, ReadOutcome, ScriptedReader};
pub use repl::{Repl, BANNER, USER_PROMPT};

mod command;
mod console;
mod formatting;
mod repl;

pub use console::Console;
pub use repl::Repl;

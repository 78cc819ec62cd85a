pub mod arch;
pub mod asm;
pub mod codec;
pub mod config;
pub mod debugger;
pub mod decoder;
pub mod errors;
pub mod exec;
pub mod instruction;
pub mod memory;
pub mod registers;
pub mod stack;

pub use config::SimConfig;
pub use debugger::{Debugger, Executed, Step, Stop};

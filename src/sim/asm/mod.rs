// src/sim/asm/mod.rs
mod assembler;
mod errors;
mod program;
mod utils;

#[cfg(test)]
mod tests;

pub use assembler::assemble;
pub use errors::AsmError;
pub use program::{Labels, Program};

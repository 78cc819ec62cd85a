use thiserror::Error;

/// Faults raised while decoding or executing one instruction line.
///
/// None of these stop the session: the line is treated as a no-op and the
/// controller moves past it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// A required separator (space or comma) or operand is missing.
    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("invalid register: {0}")]
    InvalidRegister(String),

    #[error("label not found: {0}")]
    LabelNotFound(String),

    #[error("immediate {value} out of range ({min} to {max})")]
    ImmediateOutOfRange { value: i64, min: i64, max: i64 },

    #[error("invalid immediate: {0}")]
    InvalidImmediate(String),

    #[error("unknown instruction: {0}")]
    UnknownInstruction(String),
}

/// Errors from debugger commands. The machine state is never touched when one
/// of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebugError {
    #[error("no file loaded, use the load command first")]
    NoProgram,

    #[error("breakpoint limit of {0} exceeded")]
    BreakpointLimitExceeded(usize),

    #[error("no breakpoint present at line {0}")]
    BreakpointNotFound(usize),

    #[error("line {0} does not hold an instruction")]
    InvalidBreakpoint(usize),

    #[error("cannot view memory outside 0x{start:X}..=0x{end:X} (address 0x{addr:X})")]
    AddressOutOfRange { addr: u64, start: u64, end: u64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("empty hex literal")]
    Empty,

    #[error("invalid hex digit '{0}'")]
    BadDigit(char),

    #[error("hex literal wider than 64 bits: {0}")]
    TooWide(String),
}

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::codec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(PathBuf),
    Run,
    Step,
    Break(usize),
    DelBreak(usize),
    Regs,
    Mem { addr: u64, count: u64 },
    ShowStack,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command.")]
    Unknown,

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("invalid line number: {0}")]
    BadLine(String),

    #[error("invalid address: {0} (expected 0x followed by hex digits)")]
    BadAddress(String),

    #[error("invalid count: {0}")]
    BadCount(String),
}

fn line_number(tok: Option<&str>) -> Result<usize, CommandError> {
    let tok = tok.ok_or(CommandError::Missing("line number"))?;
    tok.parse().map_err(|_| CommandError::BadLine(tok.to_string()))
}

// Addresses are read as fixed-width two's complement, so a top-bit-set
// literal lands far outside any inspection window.
fn address(tok: Option<&str>) -> Result<u64, CommandError> {
    let tok = tok.ok_or(CommandError::Missing("address"))?;
    let hex = tok
        .strip_prefix("0x")
        .or_else(|| tok.strip_prefix("0X"))
        .ok_or_else(|| CommandError::BadAddress(tok.to_string()))?;
    codec::hex_to_decimal(hex)
        .map(|v| v as u64)
        .map_err(|_| CommandError::BadAddress(tok.to_string()))
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let cmd = match (words.next(), words.next()) {
            (Some("load"), _) => {
                let path = line["load".len()..].trim();
                if path.is_empty() {
                    return Err(CommandError::Missing("file name"));
                }
                return Ok(Command::Load(PathBuf::from(path)));
            }
            (Some("run"), None) => Command::Run,
            (Some("step"), None) => Command::Step,
            (Some("regs"), None) => Command::Regs,
            (Some("show-stack"), None) => Command::ShowStack,
            (Some("exit"), None) => Command::Exit,
            (Some("break"), arg) => Command::Break(line_number(arg)?),
            (Some("del"), Some("break")) => Command::DelBreak(line_number(words.next())?),
            (Some("mem"), arg) => {
                let addr = address(arg)?;
                let tok = words.next().ok_or(CommandError::Missing("count"))?;
                let count = tok.parse().map_err(|_| CommandError::BadCount(tok.to_string()))?;
                Command::Mem { addr, count }
            }
            _ => return Err(CommandError::Unknown),
        };
        match words.next() {
            None => Ok(cmd),
            Some(_) => Err(CommandError::Unknown),
        }
    }
}

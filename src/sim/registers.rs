// sim/registers.rs
use super::errors::ExecError;

pub const REGISTERS_LEN: usize = 32;

/// ABI names for the integer file and the `f` names, both folded onto the
/// same 32 slots.
const ALIASES: &[(&str, u8)] = &[
    ("zero", 0), ("ra", 1), ("sp", 2), ("gp", 3), ("tp", 4),
    ("t0", 5), ("t1", 6), ("t2", 7),
    ("s0", 8), ("fp", 8), ("s1", 9),
    ("a0", 10), ("a1", 11), ("a2", 12), ("a3", 13),
    ("a4", 14), ("a5", 15), ("a6", 16), ("a7", 17),
    ("s2", 18), ("s3", 19), ("s4", 20), ("s5", 21), ("s6", 22),
    ("s7", 23), ("s8", 24), ("s9", 25), ("s10", 26), ("s11", 27),
    ("t3", 28), ("t4", 29), ("t5", 30), ("t6", 31),
    ("ft0", 0), ("ft1", 1), ("ft2", 2), ("ft3", 3),
    ("ft4", 4), ("ft5", 5), ("ft6", 6), ("ft7", 7),
    ("fs0", 8), ("fs1", 9),
    ("fa0", 10), ("fa1", 11), ("fa2", 12), ("fa3", 13),
    ("fa4", 14), ("fa5", 15), ("fa6", 16), ("fa7", 17),
    ("fs2", 18), ("fs3", 19), ("fs4", 20), ("fs5", 21), ("fs6", 22),
    ("fs7", 23), ("fs8", 24), ("fs9", 25), ("fs10", 26), ("fs11", 27),
    ("ft8", 28), ("ft9", 29), ("ft10", 30), ("ft11", 31),
];

/// The general register file. Nothing is hardwired: `x0` holds whatever was
/// last written to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registers {
    x: [i64; REGISTERS_LEN],
}

impl Registers {
    #[inline]
    pub fn read(&self, r: u8) -> i64 {
        self.x[r as usize]
    }

    #[inline]
    pub fn write(&mut self, r: u8, v: i64) {
        self.x[r as usize] = v;
    }

    pub fn reset(&mut self) {
        self.x = [0; REGISTERS_LEN];
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, i64)> + '_ {
        self.x.iter().enumerate().map(|(i, &v)| (i as u8, v))
    }
}

/// Resolves an alias or a literal `x<N>` / `f<N>` name to its index.
pub fn resolve(name: &str) -> Result<u8, ExecError> {
    let invalid = || ExecError::InvalidRegister(name.to_string());
    if let Some(&(_, idx)) = ALIASES.iter().find(|(alias, _)| *alias == name) {
        return Ok(idx);
    }
    let digits = name
        .strip_prefix('x')
        .or_else(|| name.strip_prefix('f'))
        .ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match digits.parse::<usize>() {
        Ok(n) if n < REGISTERS_LEN => Ok(n as u8),
        _ => Err(invalid()),
    }
}

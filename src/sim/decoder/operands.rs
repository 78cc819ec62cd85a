use crate::sim::errors::ExecError;

/// Walks the operand list of one instruction. Operands are comma separated
/// and every comma must be followed by whitespace.
pub(super) struct Operands<'a> {
    rest: &'a str,
}

impl<'a> Operands<'a> {
    pub(super) fn new(rest: &'a str) -> Self {
        Self { rest: rest.trim_start() }
    }

    /// Takes the operand up to the next comma.
    pub(super) fn next(&mut self, what: &str) -> Result<&'a str, ExecError> {
        let (tok, rest) = self
            .rest
            .split_once(',')
            .ok_or_else(|| ExecError::Syntax(format!("missing comma after {what}")))?;
        if !rest.starts_with(char::is_whitespace) {
            return Err(ExecError::Syntax(format!(
                "expected space after comma following {what}"
            )));
        }
        let tok = tok.trim();
        if tok.is_empty() {
            return Err(ExecError::Syntax(format!("missing {what}")));
        }
        self.rest = rest.trim_start();
        Ok(tok)
    }

    /// Takes the final operand; nothing may follow it.
    pub(super) fn last(self, what: &str) -> Result<&'a str, ExecError> {
        let tok = self.rest.trim();
        if tok.is_empty() {
            return Err(ExecError::Syntax(format!("missing {what}")));
        }
        if tok.contains(',') || tok.contains(char::is_whitespace) {
            return Err(ExecError::Syntax(format!("too many operands: {tok}")));
        }
        Ok(tok)
    }

    /// True when another comma-separated operand follows.
    pub(super) fn has_more(&self) -> bool {
        self.rest.contains(',')
    }
}

/// Splits the mnemonic from its operands. The mnemonic must be followed by a
/// space.
pub(super) fn split_mnemonic(line: &str) -> (&str, Option<&str>) {
    match line.find(char::is_whitespace) {
        Some(at) => {
            let (op, rest) = line.split_at(at);
            (op, rest.strip_prefix(' '))
        }
        None => (line, None),
    }
}

pub(super) fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Signed decimal literal; no `+`, no hex.
pub(super) fn decimal(s: &str) -> Result<i64, ExecError> {
    if !is_decimal(s) {
        return Err(ExecError::InvalidImmediate(s.to_string()));
    }
    s.parse::<i64>()
        .map_err(|_| ExecError::InvalidImmediate(s.to_string()))
}

pub(super) fn ranged(value: i64, min: i64, max: i64) -> Result<i64, ExecError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ExecError::ImmediateOutOfRange { value, min, max })
    }
}

/// `imm(reg)` or `reg(imm)`; returns the raw immediate and register text.
pub(super) fn mem_operand(tok: &str) -> Result<(&str, &str), ExecError> {
    let bad = || ExecError::Syntax(format!("expected imm(rs1), got {tok}"));
    let open = tok.find('(').ok_or_else(bad)?;
    let close = tok.rfind(')').ok_or_else(bad)?;
    if close < open || close != tok.len() - 1 {
        return Err(bad());
    }
    let outer = tok[..open].trim();
    let inner = tok[open + 1..close].trim();
    if !is_decimal(outer) && is_decimal(inner) {
        Ok((inner, outer))
    } else {
        Ok((outer, inner))
    }
}

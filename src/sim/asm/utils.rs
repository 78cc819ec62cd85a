use crate::sim::codec;
use crate::sim::memory::Width;

// Public(crate) helpers reused by the assembler
pub(crate) fn preprocess(text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| {
            let l = l.split(';').next().unwrap_or(l);
            let l = l.split('#').next().unwrap_or(l);
            (i, l.trim().to_string())
        })
        .filter(|(_, l)| !l.is_empty())
        .collect()
}

/// Splits `name: rest` when the prefix is a plain identifier.
pub(crate) fn split_label(line: &str) -> Option<(&str, &str)> {
    let (lab, rest) = line.split_once(':')?;
    let lab = lab.trim();
    let ident = !lab.is_empty()
        && lab
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '$');
    ident.then(|| (lab, rest.trim()))
}

/// `.byte` and friends, with whatever values follow on the same line.
pub(crate) fn data_directive(line: &str) -> Option<(Width, &str)> {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (line, ""),
    };
    let width = match name {
        ".byte" => Width::Byte,
        ".half" => Width::Half,
        ".word" => Width::Word,
        ".dword" => Width::Double,
        _ => return None,
    };
    Some((width, rest.trim()))
}

// Values are separated by commas, spaces, or both.
pub(crate) fn split_values(values: &str) -> Vec<&str> {
    values
        .split([',', ' ', '\t'])
        .filter(|s| !s.is_empty())
        .collect()
}

/// Decimal values must fit `width` as signed or unsigned; hex values keep
/// their low `width` bytes.
pub(crate) fn parse_data_value(tok: &str, width: Width) -> Result<u64, String> {
    let bits = width.bits();
    let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
    if let Some(hex) = tok.strip_prefix("0x").or_else(|| tok.strip_prefix("0X")) {
        let v = codec::parse_hex_unsigned(hex).map_err(|e| format!("{tok}: {e}"))?;
        return Ok(v & mask);
    }
    let v: i128 = tok
        .parse()
        .map_err(|_| format!("{tok} is not a decimal or 0x hex number"))?;
    let min = -(1i128 << (bits - 1));
    let max = (1i128 << bits) - 1;
    if v < min || v > max {
        return Err(format!("{tok} does not fit in {} bytes", width.bytes()));
    }
    Ok(v as u64 & mask)
}

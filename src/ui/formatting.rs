use crate::sim::codec::decimal_to_hex;

/// `x5  = 0xFF`: uppercase, leading zeros stripped, one-digit indices padded.
pub(super) fn register_line(index: u8, value: i64) -> String {
    let hex = decimal_to_hex(value, 16);
    let hex = match hex.trim_start_matches('0') {
        "" => "0",
        h => h,
    };
    let pad = if index > 9 { "" } else { " " };
    format!("x{index}{pad} = 0x{hex}")
}

/// Cells never written show as `0x0`.
pub(super) fn memory_line(addr: u64, byte: Option<u8>) -> String {
    let loc = decimal_to_hex(addr as i64, 5);
    match byte {
        Some(b) => format!("Memory[0x{loc}] = 0x{}", decimal_to_hex(b as i64, 2)),
        None => format!("Memory[0x{loc}] = 0x0"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_strip_leading_zeros() {
        assert_eq!(register_line(0, 0), "x0  = 0x0");
        assert_eq!(register_line(5, 255), "x5  = 0xFF");
        assert_eq!(register_line(10, -1), "x10 = 0xFFFFFFFFFFFFFFFF");
        assert_eq!(register_line(31, 0x1000), "x31 = 0x1000");
    }

    #[test]
    fn memory_cells() {
        assert_eq!(memory_line(0x1_0000, Some(0x0A)), "Memory[0x10000] = 0x0A");
        assert_eq!(memory_line(0x1_0001, Some(0)), "Memory[0x10001] = 0x00");
        assert_eq!(memory_line(0x4_FFFF, None), "Memory[0x4FFFF] = 0x0");
    }
}

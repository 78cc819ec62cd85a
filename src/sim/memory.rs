use std::collections::BTreeMap;

/// Start of the data segment laid out by `.data` directives.
pub const DATA_BASE: u64 = 0x1_0000;

/// Access width in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Byte = 1,
    Half = 2,
    Word = 4,
    Double = 8,
}

impl Width {
    #[inline]
    pub fn bytes(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }
}

/// Sparse byte-addressable memory. Unwritten addresses read as 0.
#[derive(Debug, Clone)]
pub struct Memory {
    cells: BTreeMap<u64, u8>,
    data_base: u64,
    next_free: u64,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(DATA_BASE)
    }
}

impl Memory {
    pub fn new(data_base: u64) -> Self {
        Self {
            cells: BTreeMap::new(),
            data_base,
            next_free: data_base,
        }
    }

    /// The stored byte, if the cell was ever written.
    pub fn byte(&self, addr: u64) -> Option<u8> {
        self.cells.get(&addr).copied()
    }

    /// Little-endian read: the lowest address is the least-significant byte.
    pub fn read(&self, addr: u64, width: Width) -> u64 {
        (0..width.bytes()).rev().fold(0u64, |acc, i| {
            let b = self.byte(addr.wrapping_add(i as u64)).unwrap_or(0);
            (acc << 8) | b as u64
        })
    }

    /// Stores the low `width` bytes of `value`, little-endian.
    pub fn write(&mut self, addr: u64, width: Width, value: u64) {
        for (i, b) in value.to_le_bytes()[..width.bytes()].iter().enumerate() {
            self.cells.insert(addr.wrapping_add(i as u64), *b);
        }
    }

    /// Lays `value` out at the data cursor and advances it. Only the data
    /// section loader calls this.
    pub fn place(&mut self, width: Width, value: u64) -> u64 {
        let at = self.next_free;
        self.write(at, width, value);
        self.next_free = at.wrapping_add(width.bytes() as u64);
        at
    }

    pub fn reset(&mut self) {
        self.cells.clear();
        self.next_free = self.data_base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_memory_reads_zero() {
        let mem = Memory::default();
        assert_eq!(mem.read(0x1234, Width::Double), 0);
        assert_eq!(mem.byte(0x1234), None);
    }

    #[test]
    fn writes_are_little_endian() {
        let mut mem = Memory::default();
        mem.write(0x100, Width::Word, 0xDEAD_BEEF);
        assert_eq!(mem.byte(0x100), Some(0xEF));
        assert_eq!(mem.byte(0x103), Some(0xDE));
        assert_eq!(mem.byte(0x104), None);
        assert_eq!(mem.read(0x100, Width::Half), 0xBEEF);
        assert_eq!(mem.read(0x102, Width::Half), 0xDEAD);
    }

    #[test]
    fn writes_truncate_to_width() {
        let mut mem = Memory::default();
        mem.write(0, Width::Byte, 0x1FF);
        assert_eq!(mem.read(0, Width::Double), 0xFF);
        assert_eq!(mem.cells.len(), 1);
    }

    #[test]
    fn top_of_address_space_wraps() {
        let mut mem = Memory::default();
        mem.write(u64::MAX, Width::Half, 0xAABB);
        assert_eq!(mem.byte(u64::MAX), Some(0xBB));
        assert_eq!(mem.byte(0), Some(0xAA));
        assert_eq!(mem.read(u64::MAX, Width::Half), 0xAABB);
    }

    #[test]
    fn place_advances_the_data_cursor() {
        let mut mem = Memory::default();
        assert_eq!(mem.place(Width::Word, 5), DATA_BASE);
        assert_eq!(mem.place(Width::Byte, 0xFF), DATA_BASE + 4);
        assert_eq!(mem.next_free, DATA_BASE + 5);
        assert_eq!(mem.read(DATA_BASE, Width::Word), 5);

        mem.reset();
        assert!(mem.cells.is_empty());
        assert_eq!(mem.next_free, DATA_BASE);
    }
}

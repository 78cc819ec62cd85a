use std::ops::RangeInclusive;

use super::memory::DATA_BASE;

pub const DEFAULT_BREAKPOINT_LIMIT: usize = 5;

/// Highest address `mem` will show.
pub const MEM_WINDOW_END: u64 = 0x5_0000;

/// Tunables for one simulator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Where `.data` items are laid out.
    pub data_base: u64,
    pub breakpoint_limit: usize,
    /// Addresses the memory inspector may show.
    pub mem_window: RangeInclusive<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_base: DATA_BASE,
            breakpoint_limit: DEFAULT_BREAKPOINT_LIMIT,
            mem_window: DATA_BASE..=MEM_WINDOW_END,
        }
    }
}

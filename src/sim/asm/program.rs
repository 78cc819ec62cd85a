use std::collections::HashMap;

use crate::sim::memory::Width;

/// Label name to the index of the instruction it precedes.
pub type Labels = HashMap<String, usize>;

/// One value from a `.byte/.half/.word/.dword` directive, already truncated
/// to its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataItem {
    pub width: Width,
    pub value: u64,
}

// Structure returned with code and data
#[derive(Debug, Default, Clone)]
pub struct Program {
    /// Instruction lines with labels and comments stripped.
    pub lines: Vec<String>,
    /// One-based source line of each entry in `lines`.
    pub source_lines: Vec<usize>,
    pub labels: Labels,
    /// Data items in declaration order.
    pub data: Vec<DataItem>,
    /// Source lines before the first instruction.
    pub line_offset: usize,
}

impl Program {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Maps a one-based source line to the instruction written on it.
    pub fn index_of_line(&self, file_line: usize) -> Option<usize> {
        self.source_lines.binary_search(&file_line).ok()
    }

    /// One-based source line of an instruction index. Indices past the end
    /// count on from the last instruction.
    pub fn line_of_index(&self, index: usize) -> usize {
        match self.source_lines.get(index) {
            Some(&line) => line,
            None => {
                let last = self.source_lines.last().copied().unwrap_or(self.line_offset);
                last + index + 1 - self.source_lines.len()
            }
        }
    }

    /// Source line for a call frame position: the one-based instruction
    /// number, or 0 before anything ran in the frame.
    pub fn frame_line(&self, position: usize) -> usize {
        match position.checked_sub(1) {
            Some(index) => self.line_of_index(index),
            None => self.line_offset,
        }
    }

    pub fn data_bytes(&self) -> usize {
        self.data.iter().map(|d| d.width.bytes()).sum()
    }
}

// sim/stack.rs
use std::fmt;

/// One active call: the callee label and the (one-based) instruction position
/// currently executing inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub label: String,
    pub line: usize,
}

/// Calls in the order they were made. Only `jal` pushes and only `jalr` pops,
/// so a callee that falls off its end without returning keeps its frame.
#[derive(Debug, Default, Clone)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    pub fn push(&mut self, label: impl Into<String>, line: usize) {
        self.frames.push(Frame { label: label.into(), line });
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Rewrites the innermost frame's line; no-op on an empty stack.
    pub fn update_top(&mut self, line: usize) {
        if let Some(top) = self.frames.last_mut() {
            top.line = line;
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Oldest call first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Display adapter; `source_line` maps a frame's one-based position to
    /// the line shown.
    pub fn display<F: Fn(usize) -> usize>(&self, source_line: F) -> StackDisplay<'_, F> {
        StackDisplay { stack: self, source_line }
    }
}

pub struct StackDisplay<'a, F> {
    stack: &'a CallStack,
    source_line: F,
}

impl<F: Fn(usize) -> usize> fmt::Display for StackDisplay<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stack.is_empty() {
            return write!(f, "Empty Call Stack: Execution complete");
        }
        write!(f, "Call Stack:")?;
        for frame in self.stack.frames() {
            write!(f, "\n{}:{}", frame.label, (self.source_line)(frame.line))?;
        }
        Ok(())
    }
}

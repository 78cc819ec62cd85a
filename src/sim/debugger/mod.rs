//! The run/step/breakpoint controller.
//!
//! [`Debugger`] owns the whole simulator state: the [`Machine`], the loaded
//! program with every line decoded once, the cursor, and the breakpoint set.
//! A breakpoint halts execution *before* its line runs. The halt sets
//! `at_break`, and the next `run` or `step` executes the line and clears it,
//! so passing a breakpoint always costs exactly one extra command.


use std::fmt;

use tracing::{debug, info, warn};

use crate::sim::arch::Machine;
use crate::sim::asm::{self, AsmError, Program};
use crate::sim::config::SimConfig;
use crate::sim::decoder;
use crate::sim::errors::{DebugError, ExecError};
use crate::sim::exec::{self, Flow, LINE_BYTES};
use crate::sim::instruction::Instruction;
use crate::sim::registers::Registers;
use crate::sim::stack::StackDisplay;

const PC_DIGITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Ready,
    AtBreakpoint,
    Finished,
}

/// Trace record for one executed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executed {
    pub line: usize,
    /// One-based line in the loaded source.
    pub source_line: usize,
    pub text: String,
    /// Set when the line could not be decoded; it then ran as a no-op.
    pub fault: Option<ExecError>,
}

impl Executed {
    pub fn pc(&self) -> u64 {
        self.line as u64 * LINE_BYTES as u64
    }
}

impl fmt::Display for Executed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Executed {}; PC=0x{:0w$x}", self.text, self.pc(), w = PC_DIGITS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Executed(Executed),
    /// Halted before this line.
    Breakpoint(usize),
    /// Nothing left to step.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    Breakpoint(usize),
    Finished,
}

struct Loaded {
    program: Program,
    decoded: Vec<Result<Instruction, ExecError>>,
}

pub struct Debugger {
    config: SimConfig,
    machine: Machine,
    loaded: Option<Loaded>,
    cursor: usize,
    at_break: bool,
    breakpoints: Vec<usize>,
}

impl Default for Debugger {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Debugger {
    pub fn new(config: SimConfig) -> Self {
        Self {
            machine: Machine::new(config.data_base),
            config,
            loaded: None,
            cursor: 0,
            at_break: false,
            breakpoints: Vec::new(),
        }
    }

    /// Replaces all state with `program`.
    pub fn load(&mut self, program: Program) {
        self.machine.reset();
        for item in &program.data {
            self.machine.mem.place(item.width, item.value);
        }
        let decoded: Vec<_> = program
            .lines
            .iter()
            .map(|line| decoder::decode(line, &program.labels))
            .collect();
        if program.is_empty() {
            warn!("program has no instructions");
        }
        if program.labels.contains_key("main") {
            self.machine.calls.push("main", 0);
        }
        self.cursor = 0;
        self.at_break = false;
        self.breakpoints.clear();

        info!(
            instructions = program.len(),
            data_bytes = program.data_bytes(),
            faulty = decoded.iter().filter(|d| d.is_err()).count(),
            "program loaded"
        );
        self.loaded = Some(Loaded { program, decoded });
    }

    /// Assembles and loads `text`. On error the current state is left as-is.
    pub fn load_source(&mut self, text: &str) -> Result<(), AsmError> {
        let program = asm::assemble(text)?;
        self.load(program);
        Ok(())
    }

    pub fn state(&self) -> State {
        match &self.loaded {
            None => State::Idle,
            Some(l) if self.cursor >= l.program.len() => State::Finished,
            Some(_) if self.at_break => State::AtBreakpoint,
            Some(_) => State::Ready,
        }
    }

    /// Executes one line, or halts on a breakpoint not yet reported.
    pub fn step(&mut self) -> Result<Step, DebugError> {
        let len = self.loaded()?.program.len();
        if self.cursor >= len {
            return Ok(Step::Finished);
        }
        if self.halt_at_breakpoint() {
            return Ok(Step::Breakpoint(self.cursor));
        }
        self.exec_current()
            .map(Step::Executed)
            .ok_or(DebugError::NoProgram)
    }

    /// Runs until the program ends or a breakpoint is reached, handing every
    /// executed line to `on_exec`.
    pub fn run_with(&mut self, mut on_exec: impl FnMut(&Executed)) -> Result<Stop, DebugError> {
        let len = self.loaded()?.program.len();
        loop {
            if self.cursor >= len {
                self.machine.calls.clear();
                return Ok(Stop::Finished);
            }
            if self.halt_at_breakpoint() {
                return Ok(Stop::Breakpoint(self.cursor));
            }
            match self.exec_current() {
                Some(executed) => on_exec(&executed),
                None => return Err(DebugError::NoProgram),
            }
        }
    }

    fn halt_at_breakpoint(&mut self) -> bool {
        if self.at_break || !self.breakpoints.contains(&self.cursor) {
            return false;
        }
        self.at_break = true;
        info!(line = self.cursor, "stopped at breakpoint");
        true
    }

    fn exec_current(&mut self) -> Option<Executed> {
        let loaded = self.loaded.as_ref()?;
        let len = loaded.program.len();
        let line = self.cursor;
        self.at_break = false;
        self.machine.calls.update_top(line + 1);

        let (flow, fault) = match &loaded.decoded[line] {
            Ok(instr) => (exec::execute(&mut self.machine, instr, line), None),
            Err(e) => {
                warn!(line, error = %e, "instruction skipped");
                (Flow::Next, Some(e.clone()))
            }
        };
        self.cursor = match flow {
            Flow::Next => line + 1,
            Flow::Goto(target) => target.min(len),
            Flow::End => len,
        };
        if self.cursor == len {
            self.machine.calls.clear();
        }

        let text = loaded.program.lines[line].clone();
        let source_line = loaded.program.line_of_index(line);
        debug!(line, source_line, next = self.cursor, "{text}");
        Some(Executed { line, source_line, text, fault })
    }

    /// Adds a breakpoint at a one-based source line; returns its index.
    pub fn break_at(&mut self, file_line: usize) -> Result<usize, DebugError> {
        let index = self
            .loaded()?
            .program
            .index_of_line(file_line)
            .ok_or(DebugError::InvalidBreakpoint(file_line))?;
        self.set_breakpoint(index)?;
        Ok(index)
    }

    /// Removes the breakpoint at a one-based source line.
    pub fn delete_break(&mut self, file_line: usize) -> Result<usize, DebugError> {
        let index = self
            .loaded()?
            .program
            .index_of_line(file_line)
            .ok_or(DebugError::BreakpointNotFound(file_line))?;
        self.clear_breakpoint(index)
            .map_err(|_| DebugError::BreakpointNotFound(file_line))?;
        Ok(index)
    }

    pub fn set_breakpoint(&mut self, index: usize) -> Result<(), DebugError> {
        let program = &self.loaded()?.program;
        if index >= program.len() {
            return Err(DebugError::InvalidBreakpoint(program.line_of_index(index)));
        }
        if self.breakpoints.contains(&index) {
            return Ok(());
        }
        if self.breakpoints.len() >= self.config.breakpoint_limit {
            return Err(DebugError::BreakpointLimitExceeded(self.config.breakpoint_limit));
        }
        self.breakpoints.push(index);
        info!(index, "breakpoint set");
        Ok(())
    }

    pub fn clear_breakpoint(&mut self, index: usize) -> Result<(), DebugError> {
        let program = &self.loaded()?.program;
        let pos = self
            .breakpoints
            .iter()
            .position(|&b| b == index)
            .ok_or_else(|| DebugError::BreakpointNotFound(program.line_of_index(index)))?;
        self.breakpoints.remove(pos);
        info!(index, "breakpoint removed");
        Ok(())
    }

    /// `count` bytes from `addr`, each `None` when never written.
    pub fn memory_dump(
        &self,
        addr: u64,
        count: u64,
    ) -> Result<Vec<(u64, Option<u8>)>, DebugError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let window = &self.config.mem_window;
        let out_of_range = |a: u64| DebugError::AddressOutOfRange {
            addr: a,
            start: *window.start(),
            end: *window.end(),
        };
        let last = addr.checked_add(count - 1).ok_or_else(|| out_of_range(u64::MAX))?;
        if !window.contains(&addr) {
            return Err(out_of_range(addr));
        }
        if !window.contains(&last) {
            return Err(out_of_range(last));
        }
        Ok((addr..=last).map(|a| (a, self.machine.mem.byte(a))).collect())
    }

    fn loaded(&self) -> Result<&Loaded, DebugError> {
        self.loaded.as_ref().ok_or(DebugError::NoProgram)
    }

    pub fn program(&self) -> Option<&Program> {
        self.loaded.as_ref().map(|l| &l.program)
    }

    pub fn registers(&self) -> &Registers {
        &self.machine.regs
    }

    /// The call stack with frame positions shown as source lines.
    pub fn call_stack(&self) -> StackDisplay<'_, impl Fn(usize) -> usize + '_> {
        let program = self.program();
        self.machine
            .calls
            .display(move |position| program.map_or(position, |p| p.frame_line(position)))
    }
}

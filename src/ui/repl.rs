use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use super::command::Command;
use super::console::Console;
use super::formatting::{memory_line, register_line};
use crate::sim::debugger::State;
use crate::sim::{Debugger, Executed, Step, Stop};

/// Line-oriented front end driving one [`Debugger`].
pub struct Repl<O: Write, E: Write> {
    dbg: Debugger,
    console: Console<O, E>,
}

fn emit<O: Write, E: Write>(console: &mut Console<O, E>, executed: &Executed) -> io::Result<()> {
    console.push_line(executed)?;
    if let Some(fault) = &executed.fault {
        console.push_error(format!("line {}: {fault}", executed.source_line))?;
    }
    Ok(())
}

impl<O: Write, E: Write> Repl<O, E> {
    pub fn new(dbg: Debugger, console: Console<O, E>) -> Self {
        Self { dbg, console }
    }

    /// Reads commands until `exit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let keep_going = self.execute(&line)?;
            self.console.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Runs one command line; `false` once the user asked to leave.
    pub fn execute(&mut self, line: &str) -> io::Result<bool> {
        let cmd = match Command::parse(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                self.console.push_error(e)?;
                return Ok(true);
            }
        };
        debug!(?cmd, "command");

        match cmd {
            Command::Load(path) => self.load(&path)?,
            Command::Run => self.run_program()?,
            Command::Step => self.step()?,
            Command::Break(line) => match self.dbg.break_at(line) {
                Ok(_) => self.console.push_line(format!("Breakpoint set at line {line}"))?,
                Err(e) => self.console.push_error(e)?,
            },
            Command::DelBreak(line) => match self.dbg.delete_break(line) {
                Ok(_) => self.console.push_line(format!("Breakpoint deleted at line {line}"))?,
                Err(e) => self.console.push_error(e)?,
            },
            Command::Regs => {
                self.console.push_line("Registers:")?;
                for (i, v) in self.dbg.registers().iter() {
                    self.console.push_line(register_line(i, v))?;
                }
            }
            Command::Mem { addr, count } => match self.dbg.memory_dump(addr, count) {
                Ok(cells) => {
                    for (a, b) in cells {
                        self.console.push_line(memory_line(a, b))?;
                    }
                }
                Err(e) => self.console.push_error(e)?,
            },
            Command::ShowStack => self.console.push_line(self.dbg.call_stack())?,
            Command::Exit => {
                self.console.push_line("Exited the simulator")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn load(&mut self, path: &Path) -> io::Result<()> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                return self
                    .console
                    .push_error(format!("cannot read {}: {e}", path.display()));
            }
        };
        match self.dbg.load_source(&text) {
            Ok(()) => {
                let (lines, bytes) = self
                    .dbg
                    .program()
                    .map_or((0, 0), |p| (p.len(), p.data_bytes()));
                self.console
                    .push_line(format!("Loaded {lines} instructions, {bytes} data bytes."))
            }
            Err(e) => self.console.push_error(e),
        }
    }

    fn run_program(&mut self) -> io::Result<()> {
        let console = &mut self.console;
        let mut written = Ok(());
        let stop = self.dbg.run_with(|executed| {
            if written.is_ok() {
                written = emit(console, executed);
            }
        });
        written?;
        match stop {
            Ok(Stop::Breakpoint(_)) => self.console.notice("Execution stopped at breakpoint"),
            Ok(Stop::Finished) => Ok(()),
            Err(e) => self.console.push_error(e),
        }
    }

    fn step(&mut self) -> io::Result<()> {
        if self.dbg.state() == State::Finished {
            return self.console.push_line("Nothing to step");
        }
        match self.dbg.step() {
            Ok(Step::Executed(executed)) => emit(&mut self.console, &executed),
            Ok(Step::Breakpoint(_)) => self.console.notice("Execution stopped at breakpoint"),
            Ok(Step::Finished) => self.console.push_line("Nothing to step"),
            Err(e) => self.console.push_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestRepl = Repl<Vec<u8>, Vec<u8>>;

    fn repl(src: &str) -> TestRepl {
        let mut repl = Repl::new(Debugger::default(), Console::new(Vec::new(), Vec::new(), false));
        repl.dbg.load_source(src).expect("load");
        repl
    }

    fn session(repl: TestRepl, script: &str) -> (String, String) {
        let mut repl = repl;
        repl.run(script.as_bytes()).expect("io");
        let Console { out, err, .. } = repl.console;
        (
            String::from_utf8(out).expect("utf8"),
            String::from_utf8(err).expect("utf8"),
        )
    }

    #[test]
    fn breakpoint_session() {
        let src = "addi x1, x0, 1\naddi x2, x0, 2\naddi x3, x0, 3";
        let (out, err) = session(repl(src), "break 2\nrun\nstep\nrun\nstep\nexit\nrun\n");
        assert_eq!(
            out,
            "Breakpoint set at line 2\n\
             Executed addi x1, x0, 1; PC=0x00000000\n\
             Execution stopped at breakpoint\n\
             Executed addi x2, x0, 2; PC=0x00000004\n\
             Executed addi x3, x0, 3; PC=0x00000008\n\
             Nothing to step\n\
             Exited the simulator\n"
        );
        assert_eq!(err, "");
    }

    #[test]
    fn errors_go_to_stderr() {
        let (out, err) = session(repl("add x1, x99, x0"), "jump\nrun\nmem 0x100 1\n");
        assert_eq!(out, "Executed add x1, x99, x0; PC=0x00000000\n");
        let lines: Vec<_> = err.lines().collect();
        assert_eq!(lines[0], "Unknown command.");
        assert_eq!(lines[1], "line 1: invalid register: x99");
        assert!(lines[2].starts_with("cannot view memory"));
    }

    #[test]
    fn faults_name_their_own_source_line() {
        let src = "addi x1, x0, 1\n\nfoo:\n  add x2, x99, x0";
        let (_, err) = session(repl(src), "break 4\nrun\n");
        assert_eq!(err, "");
        let (_, err) = session(repl(src), "run\n");
        assert_eq!(err, "line 4: invalid register: x99\n");
    }

    #[test]
    fn regs_and_mem_dump() {
        let src = ".data\n.byte 10\n.text\naddi x5, x0, -1";
        let (out, _) = session(repl(src), "run\nregs\nmem 0x10000 2\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "Registers:");
        assert_eq!(lines[2], "x0  = 0x0");
        assert_eq!(lines[7], "x5  = 0xFFFFFFFFFFFFFFFF");
        assert_eq!(lines[33], "x31 = 0x0");
        assert_eq!(lines[34], "Memory[0x10000] = 0x0A");
        assert_eq!(lines[35], "Memory[0x10001] = 0x0");
    }

    #[test]
    fn show_stack_uses_source_lines() {
        let src = "# demo\nmain:\n  addi x1, x0, 1\n  addi x2, x0, 2";
        let (out, _) = session(repl(src), "step\nshow-stack\nrun\nshow-stack\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1..3], ["Call Stack:", "main:3"]);
        assert_eq!(lines[4], "Empty Call Stack: Execution complete");
    }

    #[test]
    fn commands_need_a_program() {
        let repl = Repl::new(Debugger::default(), Console::new(Vec::new(), Vec::new(), false));
        let (out, err) = session(repl, "run\nbreak 1\n");
        assert_eq!(out, "");
        assert_eq!(err.lines().count(), 2);
        assert!(err.starts_with("no file loaded"));
    }

    #[test]
    fn load_reports_missing_file() {
        let repl = Repl::new(Debugger::default(), Console::new(Vec::new(), Vec::new(), false));
        let (_, err) = session(repl, "load /nonexistent/prog.s\n");
        assert!(err.starts_with("cannot read /nonexistent/prog.s"));
    }
}

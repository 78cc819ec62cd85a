// sim/exec.rs
use tracing::warn;

use crate::sim::arch::Machine;
use crate::sim::codec::sext;
use crate::sim::instruction::{BranchOp, ImmOp, Instruction, ROp};

/// Where execution continues after one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Fall through to the following line.
    Next,
    /// Continue at this line.
    Goto(usize),
    /// Leave the program.
    End,
}

/// Bytes of address space each line is taken to occupy.
pub const LINE_BYTES: i64 = 4;

#[inline]
fn shl(v: i64, amt: i64) -> i64 {
    if (0..64).contains(&amt) { v << amt } else { 0 }
}

#[inline]
fn shr_logical(v: i64, amt: i64) -> i64 {
    if (0..64).contains(&amt) { ((v as u64) >> amt) as i64 } else { 0 }
}

#[inline]
fn shr_arith(v: i64, amt: i64) -> i64 {
    if (0..64).contains(&amt) { v >> amt } else if v < 0 { -1 } else { 0 }
}

#[inline]
fn effective_address(base: i64, imm: i64) -> u64 {
    (base as u64).wrapping_add(imm as u64)
}

/// Executes one decoded instruction found at `line`.
pub fn execute(m: &mut Machine, instr: &Instruction, line: usize) -> Flow {
    match *instr {
        Instruction::R { op, rd, rs1, rs2 } => {
            let (a, b) = (m.regs.read(rs1), m.regs.read(rs2));
            let v = match op {
                ROp::Add => a.wrapping_add(b),
                ROp::Sub => a.wrapping_sub(b),
                ROp::Xor => a ^ b,
                ROp::Or => a | b,
                ROp::And => a & b,
                ROp::Sll => shl(a, b),
                ROp::Srl => shr_logical(a, b),
                ROp::Sra => shr_arith(a, b),
            };
            m.regs.write(rd, v);
        }

        Instruction::Imm { op, rd, rs1, imm } => {
            let a = m.regs.read(rs1);
            let v = match op {
                ImmOp::Addi => a.wrapping_add(imm),
                ImmOp::Xori => a ^ imm,
                ImmOp::Ori => a | imm,
                ImmOp::Andi => a & imm,
                ImmOp::Slli => shl(a, imm),
                ImmOp::Srli => shr_logical(a, imm),
                ImmOp::Srai => shr_arith(a, imm),
            };
            m.regs.write(rd, v);
        }

        Instruction::Load { width, unsigned, rd, rs1, imm } => {
            let addr = effective_address(m.regs.read(rs1), imm);
            let raw = m.mem.read(addr, width);
            let v = if unsigned { raw as i64 } else { sext(raw, width.bits()) };
            m.regs.write(rd, v);
        }

        Instruction::Store { width, rs2, rs1, imm } => {
            let addr = effective_address(m.regs.read(rs1), imm);
            m.mem.write(addr, width, m.regs.read(rs2) as u64);
        }

        Instruction::Branch { op, rs1, rs2, target, .. } => {
            let (a, b) = (m.regs.read(rs1), m.regs.read(rs2));
            let taken = match op {
                BranchOp::Beq => a == b,
                BranchOp::Bne => a != b,
                BranchOp::Blt => a < b,
                BranchOp::Bge => a >= b,
                BranchOp::Bltu => (a as u64) < (b as u64),
                BranchOp::Bgeu => (a as u64) >= (b as u64),
            };
            if taken {
                return Flow::Goto(target);
            }
        }

        Instruction::Jal { rd, ref label, target } => {
            let ret = line + 1;
            m.regs.write(rd, (ret as i64).wrapping_mul(LINE_BYTES));
            m.calls.push(label.clone(), ret);
            return Flow::Goto(target);
        }

        // The return target comes from rs1 alone; rd and imm are left alone.
        Instruction::Jalr { rs1, .. } => {
            let target = m.regs.read(rs1) / LINE_BYTES;
            if m.calls.pop().is_none() {
                warn!(line, "jalr with an empty call stack");
            }
            return usize::try_from(target).map_or(Flow::End, Flow::Goto);
        }

        Instruction::Lui { rd, imm } => m.regs.write(rd, imm as i64 * 4096),
    }
    Flow::Next
}

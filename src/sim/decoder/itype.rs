use crate::sim::asm::Labels;
use crate::sim::errors::ExecError;
use crate::sim::instruction::{ImmOp, Instruction};
use crate::sim::memory::Width;
use super::operands::{decimal, mem_operand, ranged, Operands};
use super::reg;

pub(super) const IMM_MIN: i64 = -2048;
pub(super) const IMM_MAX: i64 = 2047;
const SHAMT_MAX: i64 = 63;

/// `op rd, rs1, imm`
pub(super) fn decode_arith(
    op: &str,
    mut ops: Operands<'_>,
    _: &Labels,
) -> Result<Instruction, ExecError> {
    let rd = ops.next("rd")?;
    let rs1 = ops.next("rs1")?;
    let imm = ops.last("immediate")?;
    let (rd, rs1) = (reg(rd)?, reg(rs1)?);
    let imm = ranged(decimal(imm)?, IMM_MIN, IMM_MAX)?;

    let op = match op {
        "addi" => ImmOp::Addi,
        "xori" => ImmOp::Xori,
        "ori" => ImmOp::Ori,
        "andi" => ImmOp::Andi,
        "slli" => ImmOp::Slli,
        "srli" => ImmOp::Srli,
        "srai" => ImmOp::Srai,
        _ => return Err(ExecError::UnknownInstruction(op.to_string())),
    };
    let imm = match op {
        ImmOp::Slli | ImmOp::Srli | ImmOp::Srai => ranged(imm, 0, SHAMT_MAX)?,
        _ => imm,
    };
    Ok(Instruction::Imm { op, rd, rs1, imm })
}

/// `op rd, imm(rs1)`
pub(super) fn decode_load(
    op: &str,
    mut ops: Operands<'_>,
    _: &Labels,
) -> Result<Instruction, ExecError> {
    let rd = ops.next("rd")?;
    let (imm, rs1) = mem_operand(ops.last("imm(rs1)")?)?;
    let (rd, rs1) = (reg(rd)?, reg(rs1)?);
    let imm = ranged(decimal(imm)?, IMM_MIN, IMM_MAX)?;

    let (width, unsigned) = match op {
        "lb" => (Width::Byte, false),
        "lh" => (Width::Half, false),
        "lw" => (Width::Word, false),
        "ld" => (Width::Double, false),
        "lbu" => (Width::Byte, true),
        "lhu" => (Width::Half, true),
        "lwu" => (Width::Word, true),
        _ => return Err(ExecError::UnknownInstruction(op.to_string())),
    };
    Ok(Instruction::Load { width, unsigned, rd, rs1, imm })
}

/// `jalr rd, imm(rs1)`, or the three-operand `jalr rd, rs1, imm`.
pub(super) fn decode_jalr(
    _: &str,
    mut ops: Operands<'_>,
    _: &Labels,
) -> Result<Instruction, ExecError> {
    let rd = ops.next("rd")?;
    let (imm, rs1) = if ops.has_more() {
        let rs1 = ops.next("rs1")?;
        (ops.last("immediate")?, rs1)
    } else {
        mem_operand(ops.last("imm(rs1)")?)?
    };
    let (rd, rs1) = (reg(rd)?, reg(rs1)?);
    let imm = ranged(decimal(imm)?, IMM_MIN, IMM_MAX)?;
    Ok(Instruction::Jalr { rd, rs1, imm })
}

use crate::sim::asm::Labels;
use crate::sim::errors::ExecError;
use crate::sim::instruction::Instruction;
use crate::sim::memory::Width;
use super::itype::{IMM_MAX, IMM_MIN};
use super::operands::{decimal, mem_operand, ranged, Operands};
use super::reg;

/// `op rs2, imm(rs1)`
pub(super) fn decode(
    op: &str,
    mut ops: Operands<'_>,
    _: &Labels,
) -> Result<Instruction, ExecError> {
    let rs2 = ops.next("rs2")?;
    let (imm, rs1) = mem_operand(ops.last("imm(rs1)")?)?;
    let (rs2, rs1) = (reg(rs2)?, reg(rs1)?);
    let imm = ranged(decimal(imm)?, IMM_MIN, IMM_MAX)?;

    let width = match op {
        "sb" => Width::Byte,
        "sh" => Width::Half,
        "sw" => Width::Word,
        "sd" => Width::Double,
        _ => return Err(ExecError::UnknownInstruction(op.to_string())),
    };
    Ok(Instruction::Store { width, rs2, rs1, imm })
}

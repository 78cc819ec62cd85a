use crate::sim::asm::Labels;
use crate::sim::errors::ExecError;
use crate::sim::instruction::{Instruction, ROp};
use super::operands::Operands;
use super::reg;

pub(super) fn decode(
    op: &str,
    mut ops: Operands<'_>,
    _: &Labels,
) -> Result<Instruction, ExecError> {
    let rd = ops.next("rd")?;
    let rs1 = ops.next("rs1")?;
    let rs2 = ops.last("rs2")?;
    let (rd, rs1, rs2) = (reg(rd)?, reg(rs1)?, reg(rs2)?);

    let op = match op {
        "add" => ROp::Add,
        "sub" => ROp::Sub,
        "xor" => ROp::Xor,
        "or" => ROp::Or,
        "and" => ROp::And,
        "sll" => ROp::Sll,
        "srl" => ROp::Srl,
        "sra" => ROp::Sra,
        _ => return Err(ExecError::UnknownInstruction(op.to_string())),
    };
    Ok(Instruction::R { op, rd, rs1, rs2 })
}

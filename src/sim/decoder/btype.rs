use crate::sim::asm::Labels;
use crate::sim::errors::ExecError;
use crate::sim::instruction::{BranchOp, Instruction};
use super::operands::Operands;
use super::{label_target, reg};

/// `op rs1, rs2, label`
pub(super) fn decode(
    op: &str,
    mut ops: Operands<'_>,
    labels: &Labels,
) -> Result<Instruction, ExecError> {
    let rs1 = ops.next("rs1")?;
    let rs2 = ops.next("rs2")?;
    let label = ops.last("label")?;
    let (rs1, rs2) = (reg(rs1)?, reg(rs2)?);
    let target = label_target(label, labels)?;

    let op = match op {
        "beq" => BranchOp::Beq,
        "bne" => BranchOp::Bne,
        "blt" => BranchOp::Blt,
        "bge" => BranchOp::Bge,
        "bltu" => BranchOp::Bltu,
        "bgeu" => BranchOp::Bgeu,
        _ => return Err(ExecError::UnknownInstruction(op.to_string())),
    };
    Ok(Instruction::Branch { op, rs1, rs2, label: label.to_string(), target })
}

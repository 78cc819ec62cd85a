use crate::sim::asm::Labels;
use crate::sim::codec;
use crate::sim::errors::ExecError;
use crate::sim::instruction::Instruction;
use super::operands::{decimal, ranged, Operands};
use super::{label_target, reg};

const LUI_MAX: i64 = 0xF_FFFF;

/// `jal rd, label`
pub(super) fn decode_jal(
    _: &str,
    mut ops: Operands<'_>,
    labels: &Labels,
) -> Result<Instruction, ExecError> {
    let rd = ops.next("rd")?;
    let label = ops.last("label")?;
    let rd = reg(rd)?;
    let target = label_target(label, labels)?;
    Ok(Instruction::Jal { rd, label: label.to_string(), target })
}

/// `lui rd, imm` with a decimal or `0x` immediate in 0..=0xFFFFF.
pub(super) fn decode_lui(
    _: &str,
    mut ops: Operands<'_>,
    _: &Labels,
) -> Result<Instruction, ExecError> {
    let rd = ops.next("rd")?;
    let imm = ops.last("immediate")?;
    let rd = reg(rd)?;
    let value = match imm.strip_prefix("0x").or_else(|| imm.strip_prefix("0X")) {
        Some(hex) => {
            let raw = codec::parse_hex_unsigned(hex)
                .map_err(|_| ExecError::InvalidImmediate(imm.to_string()))?;
            raw.min(i64::MAX as u64) as i64
        }
        None => decimal(imm)?,
    };
    let imm = ranged(value, 0, LUI_MAX)? as u32;
    Ok(Instruction::Lui { rd, imm })
}

mod operands;
mod rtype;
mod itype;
mod stype;
mod btype;
mod jtype;


use crate::sim::asm::Labels;
use crate::sim::errors::ExecError;
use crate::sim::instruction::Instruction;
use crate::sim::registers;

use operands::{split_mnemonic, Operands};

/// Decodes one cleaned program line against the label table.
pub fn decode(line: &str, labels: &Labels) -> Result<Instruction, ExecError> {
    let (mnemonic, rest) = split_mnemonic(line.trim());
    let family: fn(&str, Operands<'_>, &Labels) -> Result<Instruction, ExecError> = match mnemonic {
        "add" | "sub" | "xor" | "or" | "and" | "sll" | "srl" | "sra" => rtype::decode,
        "addi" | "xori" | "ori" | "andi" | "slli" | "srli" | "srai" => itype::decode_arith,
        "lb" | "lh" | "lw" | "ld" | "lbu" | "lhu" | "lwu" => itype::decode_load,
        "jalr" => itype::decode_jalr,
        "sb" | "sh" | "sw" | "sd" => stype::decode,
        "beq" | "bne" | "blt" | "bge" | "bltu" | "bgeu" => btype::decode,
        "jal" => jtype::decode_jal,
        "lui" => jtype::decode_lui,
        _ => return Err(ExecError::UnknownInstruction(mnemonic.to_string())),
    };
    let rest = rest.ok_or_else(|| ExecError::Syntax("missing space after the operation".into()))?;
    family(mnemonic, Operands::new(rest), labels)
}

#[inline]
fn reg(name: &str) -> Result<u8, ExecError> {
    registers::resolve(name)
}

fn label_target(label: &str, labels: &Labels) -> Result<usize, ExecError> {
    labels
        .get(label)
        .copied()
        .ok_or_else(|| ExecError::LabelNotFound(label.to_string()))
}

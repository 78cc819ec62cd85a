// sim/instruction.rs
use super::memory::Width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ROp {
    Add,
    Sub,
    Xor,
    Or,
    And,
    Sll,
    Srl,
    Sra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmOp {
    Addi,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOp {
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
}

/// A decoded line, one variant per format family, registers already resolved
/// to indices and label targets to line numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    // R
    R {
        op: ROp,
        rd: u8,
        rs1: u8,
        rs2: u8,
    },

    // I
    Imm {
        op: ImmOp,
        rd: u8,
        rs1: u8,
        imm: i64,
    },
    Load {
        width: Width,
        unsigned: bool,
        rd: u8,
        rs1: u8,
        imm: i64,
    },
    Jalr {
        rd: u8,
        rs1: u8,
        imm: i64,
    },

    // S
    Store {
        width: Width,
        rs2: u8,
        rs1: u8,
        imm: i64,
    },

    // B
    Branch {
        op: BranchOp,
        rs1: u8,
        rs2: u8,
        label: String,
        target: usize,
    },

    // J/U
    Jal {
        rd: u8,
        label: String,
        target: usize,
    },
    Lui {
        rd: u8,
        imm: u32,
    },
}

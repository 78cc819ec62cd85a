use super::{memory::Memory, registers::Registers, stack::CallStack};

/// Everything an instruction can touch.
#[derive(Debug, Default, Clone)]
pub struct Machine {
    pub regs: Registers,
    pub mem: Memory,
    pub calls: CallStack,
}

impl Machine {
    pub fn new(data_base: u64) -> Self {
        Machine {
            regs: Registers::default(),
            mem: Memory::new(data_base),
            calls: CallStack::default(),
        }
    }

    pub fn reset(&mut self) {
        self.regs.reset();
        self.mem.reset();
        self.calls.clear();
    }
}

use super::{Address, Opcode, Stack};
use crate::error;
use crate::lang::{Error, LineNumber, TokenCode};

type Result<T> = std::result::Result<T, Error>;

const MAX_PROGRAM_LEN: usize = 65536;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Empty,
    Var(TokenCode),
    Addr(Address),
    Count(usize),
}

/// Fixed-stride instruction: one opcode and four operand slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
    op: Opcode,
    args: [Operand; 4],
}

impl Instruction {
    pub fn new(op: Opcode, operands: &[Operand]) -> Instruction {
        debug_assert!(operands.len() <= 4);
        let mut args = [Operand::Empty; 4];
        for (slot, operand) in args.iter_mut().zip(operands) {
            *slot = *operand;
        }
        Instruction { op, args }
    }

    pub fn opcode(&self) -> Opcode {
        self.op
    }

    pub fn operands(&self) -> impl Iterator<Item = &Operand> {
        self.args.iter().take_while(|a| **a != Operand::Empty)
    }

    pub fn var(&self, index: usize) -> Result<TokenCode> {
        match self.args.get(index) {
            Some(Operand::Var(code)) => Ok(*code),
            _ => Err(error!(InternalError; format!("{} EXPECTED VARIABLE", self.op))),
        }
    }

    /// Optional result slot of an expression operation.
    pub fn dest(&self) -> Option<TokenCode> {
        match self.args[0] {
            Operand::Var(code) => Some(code),
            _ => None,
        }
    }

    pub fn count(&self, index: usize) -> Result<usize> {
        match self.args.get(index) {
            Some(Operand::Count(n)) => Ok(*n),
            _ => Err(error!(InternalError; format!("{} EXPECTED COUNT", self.op))),
        }
    }

    pub fn target(&self) -> Result<Address> {
        match self.args[0] {
            Operand::Addr(addr) if self.op.is_branch() => Ok(addr),
            _ => Err(error!(InternalError; format!("{} EXPECTED ADDRESS", self.op))),
        }
    }
}

/// ## Compiled program
///
/// Instructions are appended in order and branch targets are patched
/// once the block they jump over has been emitted.

#[derive(Debug)]
pub struct Program {
    ops: Stack<Instruction>,
    lines: Vec<usize>,
    line: usize,
}

impl Default for Program {
    fn default() -> Self {
        Program::new()
    }
}

impl Program {
    pub fn new() -> Program {
        Program {
            ops: Stack::new("PROGRAM TOO LARGE", MAX_PROGRAM_LEN),
            lines: vec![],
            line: 1,
        }
    }

    /// Source line recorded for instructions emitted after this call.
    pub fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    pub fn push(&mut self, op: Opcode, operands: &[Operand]) -> Result<Address> {
        let addr = self.ops.len();
        self.ops.push(Instruction::new(op, operands))?;
        self.lines.push(self.line);
        Ok(addr)
    }

    /// Point the branch at `addr` to `target`.
    pub fn patch(&mut self, addr: Address, target: Address) -> Result<()> {
        match self.ops.get_mut(addr) {
            Some(ins) if ins.op.is_branch() => {
                ins.args[0] = Operand::Addr(target);
                Ok(())
            }
            _ => Err(error!(InternalError; "PATCH NOT A BRANCH")),
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<&Instruction> {
        self.ops.get(addr)
    }

    pub fn line_number(&self, addr: Address) -> LineNumber {
        self.lines.get(addr).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Address, &Instruction)> {
        self.ops.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_branch() {
        let mut p = Program::new();
        let jmp = p.push(Opcode::Jmp, &[Operand::Addr(0)]).unwrap();
        let exit = p.push(Opcode::Exit, &[]).unwrap();
        p.patch(jmp, exit).unwrap();
        assert_eq!(p.get(jmp).unwrap().target().unwrap(), 1);
        assert!(p.patch(exit, 0).is_err());
        assert!(p.get(exit).unwrap().target().is_err());
    }

    #[test]
    fn test_operands_stop_at_empty() {
        let ins = Instruction::new(Opcode::Push, &[Operand::Var(TokenCode::new(70))]);
        assert_eq!(ins.operands().count(), 1);
        assert_eq!(ins.var(0).unwrap(), TokenCode::new(70));
        assert!(ins.var(1).is_err());
    }
}

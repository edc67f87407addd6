use crate::lang::{Error, Operator, Symbol, TokenCode};

/// ## Virtual machine instruction set
///
/// The Oto virtual machine has no registers. Operands live on the stack
/// as variable references, immediate numbers or omitted markers.
///
/// For example: `x = a + b * c` compiles to
/// `[Push(a), Push(b), Push(c), Mul($1 b c), Add($0 a $1), CpyD(x)]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // *** Data movement
    /// Pop a number into a float variable.
    CpyD,
    /// Pop a variable reference and copy its whole slot.
    CpyP,
    /// Push a variable reference.
    Push,
    /// Push the value of a constant.
    PushC,
    /// Push the marker for a left out optional argument.
    Omit,

    // *** Expression operations
    Add,
    Sub,
    Mul,
    Div,
    IDiv,
    Mod,
    And,
    Or,
    Eq,
    NEq,
    LtCmp,
    LtEqCmp,
    RiCmp,
    RiEqCmp,

    // *** Compound assignment
    Add2,
    Sub2,
    Mul2,
    Div2,
    Mod2,

    // *** Branch control
    /// Decrement counter and branch back while it is at least one.
    Loop,
    /// Unconditional branch.
    Jmp,
    /// Pop and branch if zero.
    Jz,
    /// Pop and branch if not zero.
    Jnz,

    // *** Built-in statements
    Print,
    DefS,
    /// Pop a counted list of numbers into an array variable.
    DefA,
    Beep,
    Play,
    Filter,
    Exit,
}

impl Opcode {
    pub const ALL: [Opcode; 35] = [
        Opcode::CpyD,
        Opcode::CpyP,
        Opcode::Push,
        Opcode::PushC,
        Opcode::Omit,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::IDiv,
        Opcode::Mod,
        Opcode::And,
        Opcode::Or,
        Opcode::Eq,
        Opcode::NEq,
        Opcode::LtCmp,
        Opcode::LtEqCmp,
        Opcode::RiCmp,
        Opcode::RiEqCmp,
        Opcode::Add2,
        Opcode::Sub2,
        Opcode::Mul2,
        Opcode::Div2,
        Opcode::Mod2,
        Opcode::Loop,
        Opcode::Jmp,
        Opcode::Jz,
        Opcode::Jnz,
        Opcode::Print,
        Opcode::DefS,
        Opcode::DefA,
        Opcode::Beep,
        Opcode::Play,
        Opcode::Filter,
        Opcode::Exit,
    ];

    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            CpyD => "CpyD",
            CpyP => "CpyP",
            Push => "Push",
            PushC => "PushC",
            Omit => "Omit",
            Add => "Add",
            Sub => "Sub",
            Mul => "Mul",
            Div => "Div",
            IDiv => "IDiv",
            Mod => "Mod",
            And => "And",
            Or => "Or",
            Eq => "Eq",
            NEq => "NEq",
            LtCmp => "LtCmp",
            LtEqCmp => "LtEqCmp",
            RiCmp => "RiCmp",
            RiEqCmp => "RiEqCmp",
            Add2 => "Add2",
            Sub2 => "Sub2",
            Mul2 => "Mul2",
            Div2 => "Div2",
            Mod2 => "Mod2",
            Loop => "Loop",
            Jmp => "Jmp",
            Jz => "Jz",
            Jnz => "Jnz",
            Print => "Print",
            DefS => "DefS",
            DefA => "DefA",
            Beep => "Beep",
            Play => "Play",
            Filter => "Filter",
            Exit => "Exit",
        }
    }

    /// Branches carry a code address in their first operand.
    pub fn is_branch(self) -> bool {
        use Opcode::*;
        matches!(self, Loop | Jmp | Jz | Jnz)
    }

    /// Binary operation performed by a compound assignment.
    pub fn base(self) -> Option<Opcode> {
        use Opcode::*;
        match self {
            Add2 => Some(Add),
            Sub2 => Some(Sub),
            Mul2 => Some(Mul),
            Div2 => Some(Div),
            Mod2 => Some(Mod),
            _ => None,
        }
    }

    /// Compound assignment opcode for `+=` and friends.
    pub fn compound(code: TokenCode) -> Option<Opcode> {
        use Opcode::*;
        match Symbol::from_code(code)? {
            Symbol::PlusEqu => Some(Add2),
            Symbol::MinusEqu => Some(Sub2),
            Symbol::AsterEqu => Some(Mul2),
            Symbol::SlashEqu => Some(Div2),
            Symbol::PerceEqu => Some(Mod2),
            _ => None,
        }
    }
}

impl From<Operator> for Opcode {
    fn from(op: Operator) -> Opcode {
        match op {
            Operator::Equal => Opcode::Eq,
            Operator::NotEqual => Opcode::NEq,
            Operator::Greater => Opcode::RiCmp,
            Operator::Less => Opcode::LtCmp,
            Operator::GreaterEqual => Opcode::RiEqCmp,
            Operator::LessEqual => Opcode::LtEqCmp,
            Operator::Plus => Opcode::Add,
            Operator::Minus => Opcode::Sub,
            Operator::Multiply => Opcode::Mul,
            Operator::Divide => Opcode::Div,
            Operator::DivideInt => Opcode::IDiv,
            Operator::Modulus => Opcode::Mod,
            Operator::And => Opcode::And,
            Operator::Or => Opcode::Or,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.mnemonic())
    }
}

impl std::str::FromStr for Opcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Opcode, Error> {
        match Opcode::ALL.iter().find(|op| op.mnemonic() == s) {
            Some(op) => Ok(*op),
            None => Err(crate::error!(InternalError; format!("UNKNOWN OPCODE {}", s))),
        }
    }
}

use super::Opcode;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Numeric operations on two popped operands.
pub struct Operation {}

impl Operation {
    pub fn binary(op: Opcode, lhs: f64, rhs: f64) -> Result<f64> {
        use Opcode::*;
        match op {
            Add => Ok(lhs + rhs),
            Sub => Ok(lhs - rhs),
            Mul => Ok(lhs * rhs),
            Div => Operation::divide(lhs, rhs),
            IDiv => Operation::divide_int(lhs, rhs),
            Mod => Operation::remainder(lhs, rhs),
            And => Ok(Operation::truth(lhs != 0.0 && rhs != 0.0)),
            Or => Ok(Operation::truth(lhs != 0.0 || rhs != 0.0)),
            Eq => Ok(Operation::truth(lhs == rhs)),
            NEq => Ok(Operation::truth(lhs != rhs)),
            LtCmp => Ok(Operation::truth(lhs < rhs)),
            LtEqCmp => Ok(Operation::truth(lhs <= rhs)),
            RiCmp => Ok(Operation::truth(lhs > rhs)),
            RiEqCmp => Ok(Operation::truth(lhs >= rhs)),
            _ => Err(error!(InternalError; format!("{} IS NOT AN OPERATION", op))),
        }
    }

    fn truth(b: bool) -> f64 {
        if b {
            1.0
        } else {
            0.0
        }
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            return Err(error!(ArithmeticError; "DIVISION BY ZERO"));
        }
        Ok(lhs / rhs)
    }

    pub fn divide_int(lhs: f64, rhs: f64) -> Result<f64> {
        Ok(Operation::divide(lhs, rhs)?.floor())
    }

    pub fn remainder(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            return Err(error!(ArithmeticError; "MODULO BY ZERO"));
        }
        Ok(lhs % rhs)
    }
}

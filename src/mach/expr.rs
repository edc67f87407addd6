use super::{Opcode, Operand, Program};
use crate::error;
use crate::lang::token::{Class, Type};
use crate::lang::{Error, Operator, Symbol, TokenCode, TokenTable};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Priority of the `END` sentinel and the open parenthesis. An empty
/// operator stack in `rpn` stands for the sentinel.
const PRIORITY_END: i32 = -99;

fn priority(code: TokenCode) -> i32 {
    match Operator::from_code(code) {
        Some(op) if op.is_multiplicative() => 2,
        Some(_) => 1,
        None => PRIORITY_END,
    }
}

/// Positive when `a` binds tighter than `b`, negative when looser and
/// zero when both share a level. Operators of equal level associate left.
pub fn priority_cmp(a: TokenCode, b: TokenCode) -> i32 {
    priority(a) - priority(b)
}

fn is_operand(table: &TokenTable, code: TokenCode) -> bool {
    matches!(table.class(code), Some(Class::Literal) | Some(Class::Ident))
}

fn describe(table: &TokenTable, code: TokenCode) -> String {
    if code == Symbol::LineFeed.code() {
        "END OF LINE".to_string()
    } else {
        table.text(code).to_uppercase()
    }
}

/// Reorder an infix window into postfix.
pub fn rpn(table: &TokenTable, window: &[TokenCode]) -> Result<Vec<TokenCode>> {
    let open = Symbol::BrOpn.code();
    let close = Symbol::BrCls.code();
    let mut output = Vec::with_capacity(window.len());
    let mut pending: Vec<TokenCode> = vec![];
    for &code in window {
        if is_operand(table, code) {
            output.push(code);
        } else if code == open {
            pending.push(code);
        } else if code == close {
            loop {
                match pending.pop() {
                    Some(c) if c == open => break,
                    Some(c) => output.push(c),
                    None => return Err(error!(CompileError; "UNMATCHED )")),
                }
            }
        } else if Operator::from_code(code).is_some() {
            while let Some(&top) = pending.last() {
                if priority_cmp(top, code) < 0 {
                    break;
                }
                output.push(top);
                pending.pop();
            }
            pending.push(code);
        } else {
            return Err(error!(CompileError; format!("UNEXPECTED {}", describe(table, code))));
        }
    }
    while let Some(code) = pending.pop() {
        if code == open {
            return Err(error!(CompileError; "UNMATCHED ("));
        }
        output.push(code);
    }
    Ok(output)
}

/// Emit code for the infix `window`, leaving one entry on the operand
/// stack at run time. Returns the token whose slot holds the result.
pub fn expression(
    table: &mut TokenTable,
    program: &mut Program,
    window: &[TokenCode],
) -> Result<TokenCode> {
    if window.is_empty() {
        return Err(error!(CompileError; "MISSING EXPRESSION"));
    }
    let postfix = rpn(table, window)?;
    debug!(
        "rpn: {}",
        postfix
            .iter()
            .map(|c| table.text(*c))
            .collect::<Vec<_>>()
            .join(" ")
    );
    let mut tracking: Vec<TokenCode> = vec![];
    for code in postfix {
        match Operator::from_code(code) {
            None => {
                let constant = table
                    .get(code)
                    .map_or(false, |t| t.declared_type() == Type::Const);
                let op = if constant { Opcode::PushC } else { Opcode::Push };
                program.push(op, &[Operand::Var(code)])?;
                tracking.push(code);
            }
            Some(operator) => {
                let (lhs, rhs) = match (tracking.pop(), tracking.pop()) {
                    (Some(rhs), Some(lhs)) => (lhs, rhs),
                    _ => {
                        return Err(error!(CompileError;
                            format!("MISSING OPERAND FOR {}", describe(table, code))))
                    }
                };
                let temp = table.temp(tracking.len())?;
                program.push(
                    Opcode::from(operator),
                    &[Operand::Var(temp), Operand::Var(lhs), Operand::Var(rhs)],
                )?;
                tracking.push(temp);
            }
        }
    }
    match tracking.as_slice() {
        [result] => Ok(*result),
        _ => Err(error!(CompileError; "MISSING OPERATOR")),
    }
}

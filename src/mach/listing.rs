use super::expr::rpn;
use super::program::{Instruction, Operand};
use super::val::{format_array, Val};
use super::{Address, Program, Var};
use crate::lang::{Error, TokenCode, TokenTable};

/// ## Diagnostic dumps
///
/// Human readable views of the token table, the variables, postfix
/// expressions and compiled programs.

pub struct Listing {}

impl Listing {
    fn token_name(tokens: &TokenTable, code: TokenCode) -> String {
        match tokens.text(code) {
            "\n" => "\\n".to_string(),
            text => text.to_string(),
        }
    }

    /// `    3 :      Push                a`
    pub fn instruction(tokens: &TokenTable, addr: Address, ins: &Instruction) -> String {
        let mut s = format!("{:5} : {:>9}", addr, ins.opcode());
        for operand in ins.operands() {
            match operand {
                Operand::Var(code) => {
                    s.push_str(&format!("    {:>14}", Listing::token_name(tokens, *code)))
                }
                Operand::Addr(target) => s.push_str(&format!("    {:>14}", target)),
                Operand::Count(n) => s.push_str(&format!("    {:>14}", format!("#{}", n))),
                Operand::Empty => {}
            }
        }
        s
    }

    pub fn program(tokens: &TokenTable, program: &Program) -> String {
        program
            .iter()
            .map(|(addr, ins)| format!("{}\n", Listing::instruction(tokens, addr, ins)))
            .collect()
    }

    pub fn tokens(tokens: &TokenTable) -> String {
        tokens
            .iter()
            .map(|(code, _)| format!("tc[{:4}] : {}\n", code.index(), Listing::token_name(tokens, code)))
            .collect()
    }

    /// Postfix rendering of an infix token window, such as `a b c * +`.
    pub fn rpn(tokens: &TokenTable, window: &[TokenCode]) -> Result<String, Error> {
        Ok(rpn(tokens, window)?
            .iter()
            .map(|c| Listing::token_name(tokens, *c))
            .collect::<Vec<_>>()
            .join(" "))
    }

    /// User variables only, one per line.
    pub fn variables(tokens: &TokenTable, vars: &Var) -> String {
        vars.user_vars(tokens)
            .map(|(name, slot)| {
                let value = match &slot.val {
                    Val::None => String::new(),
                    Val::Number(n) => n.to_string(),
                    Val::Text(s) => format!("\"{}\"", s),
                    Val::Sound(sound) => {
                        let sound = sound.borrow();
                        format!(
                            "wave {} with {} filter(s)",
                            sound.wave.code(),
                            sound.filters.len()
                        )
                    }
                    Val::Filter(kind) => format!("{:?}", kind),
                    Val::Array(data) => format_array(data),
                };
                format!("{:>8}({}) : {}\n", name, slot.ty, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::tokenize;
    use crate::mach::compile;

    #[test]
    fn test_instruction_layout() {
        let mut tokens = TokenTable::new();
        let source = tokenize(&mut tokens, "x = a + 1").unwrap();
        let program = compile(&mut tokens, &source).unwrap();
        let text = Listing::program(&tokens, &program);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("    0 : {:>9}    {:>14}", "Push", "a"));
        let add: Vec<&str> = lines[2].split_whitespace().collect();
        assert_eq!(add, vec!["2", ":", "Add", "$0", "a", "1"]);
        assert_eq!(lines.last().unwrap().split_whitespace().nth(2), Some("Exit"));
    }

    #[test]
    fn test_rpn() {
        let mut tokens = TokenTable::new();
        let source = tokenize(&mut tokens, "(a + b) * c").unwrap();
        assert_eq!(Listing::rpn(&tokens, &source).unwrap(), "a b + c *");
    }
}

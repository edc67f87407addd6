use super::expr::expression;
use super::val::FilterKind;
use super::{Address, Opcode, Operand, Program};
use crate::error;
use crate::lang::token::{Class, Type};
use crate::lang::{Error, Symbol, TokenCode, TokenTable, Word};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Compile a token stream into a program ending in `Exit`.
pub fn compile(table: &mut TokenTable, tokens: &[TokenCode]) -> Result<Program> {
    let mut compiler = Compiler {
        table,
        tokens,
        pos: 0,
        line: 1,
        loops: 0,
        program: Program::new(),
    };
    match compiler.block(&[]) {
        Ok(_) => {}
        Err(error) => return Err(error.in_line_number(Some(compiler.line))),
    }
    compiler.program.push(Opcode::Exit, &[])?;
    debug!("compiled {} instructions", compiler.program.len());
    Ok(compiler.program)
}

struct Compiler<'a> {
    table: &'a mut TokenTable,
    tokens: &'a [TokenCode],
    pos: usize,
    line: usize,
    loops: usize,
    program: Program,
}

fn is_terminator(code: TokenCode) -> bool {
    code == Symbol::LineFeed.code() || code == Symbol::Colon.code()
}

/// Strip one pair of parentheses enclosing the whole window.
fn unwrap_parens(window: &[TokenCode]) -> &[TokenCode] {
    if window.len() < 2 || window[0] != Symbol::BrOpn.code() {
        return window;
    }
    let mut depth = 0;
    for (i, code) in window.iter().enumerate() {
        if *code == Symbol::BrOpn.code() {
            depth += 1;
        } else if *code == Symbol::BrCls.code() {
            depth -= 1;
            if depth == 0 {
                if i == window.len() - 1 {
                    return &window[1..i];
                }
                return window;
            }
        }
    }
    window
}

fn is_open(code: TokenCode) -> bool {
    code == Symbol::BrOpn.code() || code == Symbol::SqBrOpn.code()
}

fn is_close(code: TokenCode) -> bool {
    code == Symbol::BrCls.code() || code == Symbol::SqBrCls.code()
}

/// Elements of `[a, b, ...]` when the window is exactly one array literal.
fn array_literal(window: &[TokenCode]) -> Option<&[TokenCode]> {
    match window {
        [first, items @ .., last]
            if *first == Symbol::SqBrOpn.code() && *last == Symbol::SqBrCls.code() =>
        {
            Some(items)
        }
        _ => None,
    }
}

/// Split an argument list on commas outside brackets.
fn arguments(window: &[TokenCode]) -> Vec<&[TokenCode]> {
    let window = unwrap_parens(window);
    if window.is_empty() {
        return vec![];
    }
    let mut args = vec![];
    let mut depth = 0;
    let mut start = 0;
    for (i, code) in window.iter().enumerate() {
        if is_open(*code) {
            depth += 1;
        } else if is_close(*code) {
            depth -= 1;
        } else if *code == Symbol::Comma.code() && depth == 0 {
            args.push(&window[start..i]);
            start = i + 1;
        }
    }
    args.push(&window[start..]);
    args
}

impl<'a> Compiler<'a> {
    /// Next statement window, without its terminator.
    /// Returns `None` at the end of the token stream.
    fn window(&mut self) -> Option<&'a [TokenCode]> {
        let tokens = self.tokens;
        if self.pos >= tokens.len() {
            return None;
        }
        let start = self.pos;
        let mut end = start;
        while end < tokens.len() && !is_terminator(tokens[end]) {
            end += 1;
        }
        self.pos = end;
        Some(&tokens[start..end])
    }

    fn consume_terminator(&mut self) {
        if let Some(code) = self.tokens.get(self.pos) {
            if *code == Symbol::LineFeed.code() {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn emit(&mut self, op: Opcode, operands: &[Operand]) -> Result<Address> {
        self.program.set_line(self.line);
        self.program.push(op, operands)
    }

    fn expression(&mut self, window: &[TokenCode]) -> Result<TokenCode> {
        self.program.set_line(self.line);
        expression(self.table, &mut self.program, window)
    }

    /// A lone operand that names a whole slot rather than a number.
    fn is_reference(&self, code: TokenCode) -> bool {
        match self.table.get(code) {
            Some(token) => match token.class() {
                Class::Ident => true,
                Class::Literal => token.declared_type() != Type::Const,
                _ => false,
            },
            None => false,
        }
    }

    fn text(&self, code: TokenCode) -> String {
        self.table.text(code).to_uppercase()
    }

    /// Compile statements until one starting with a word in `ends`.
    /// Returns that word and the rest of its window.
    fn block(&mut self, ends: &[Word]) -> Result<Option<(Word, &'a [TokenCode])>> {
        loop {
            let window = match self.window() {
                Some(window) => window,
                None if ends.is_empty() => return Ok(None),
                None => return Err(error!(CompileError; format!("MISSING {}", ends[ends.len() - 1]))),
            };
            if let Some(&first) = window.first() {
                if let Some(word) = Word::from_code(first) {
                    if ends.contains(&word) {
                        return Ok(Some((word, &window[1..])));
                    }
                }
                self.statement(window)?;
            }
            self.consume_terminator();
        }
    }

    fn statement(&mut self, window: &'a [TokenCode]) -> Result<()> {
        let first = window[0];
        let rest = &window[1..];
        if let Some(word) = Word::from_code(first) {
            return match word {
                Word::Print => self.print(rest),
                Word::Beep => self.call(Opcode::Beep, rest, 2),
                Word::Play => self.call(Opcode::Play, rest, 4),
                Word::If => self.r#if(rest),
                Word::Loop => self.r#loop(rest),
                Word::Exit => self.exit(rest),
                Word::End | Word::Else | Word::Elsif => {
                    Err(error!(CompileError; format!("{} WITHOUT BLOCK", word)))
                }
                _ => Err(error!(CompileError; format!("UNSUPPORTED STATEMENT {}", word))),
            };
        }
        if self.table.class(first) == Some(Class::Ident) {
            return self.assignment(first, rest);
        }
        Err(error!(CompileError; format!("UNEXPECTED {}", self.text(first))))
    }

    fn print(&mut self, rest: &[TokenCode]) -> Result<()> {
        if rest.is_empty() {
            return Err(error!(CompileError; "MISSING EXPRESSION"));
        }
        match array_literal(rest) {
            Some(items) => {
                let temp = self.table.array_arg(0)?;
                self.define_array(temp, items)?;
                self.emit(Opcode::Push, &[Operand::Var(temp)])?;
            }
            None => {
                self.expression(rest)?;
            }
        }
        self.emit(Opcode::Print, &[])?;
        Ok(())
    }

    /// Push up to `max` arguments, padding absent ones with `Omit`.
    fn push_arguments(&mut self, rest: &[TokenCode], max: usize) -> Result<()> {
        let args = arguments(rest);
        if args.len() > max {
            return Err(error!(CompileError; "TOO MANY ARGUMENTS"));
        }
        for (index, arg) in args.iter().enumerate() {
            if arg.is_empty() {
                self.emit(Opcode::Omit, &[])?;
            } else if let Some(items) = array_literal(arg) {
                let temp = self.table.array_arg(index)?;
                self.define_array(temp, items)?;
                self.emit(Opcode::Push, &[Operand::Var(temp)])?;
            } else {
                self.expression(arg)?;
            }
        }
        for _ in args.len()..max {
            self.emit(Opcode::Omit, &[])?;
        }
        Ok(())
    }

    /// Elements are pushed in order and collected by a single `DefA`.
    fn define_array(&mut self, dest: TokenCode, items: &[TokenCode]) -> Result<()> {
        let items = arguments(items);
        for item in items.iter() {
            self.expression(item)?;
        }
        self.emit(Opcode::DefA, &[Operand::Var(dest), Operand::Count(items.len())])?;
        Ok(())
    }

    fn call(&mut self, op: Opcode, rest: &[TokenCode], max: usize) -> Result<()> {
        self.push_arguments(rest, max)?;
        self.emit(op, &[])?;
        Ok(())
    }

    fn exit(&mut self, rest: &[TokenCode]) -> Result<()> {
        if let Some(code) = rest.first() {
            return Err(error!(CompileError; format!("UNEXPECTED {}", self.text(*code))));
        }
        self.emit(Opcode::Exit, &[])?;
        Ok(())
    }

    /// `[NOT] expr THEN` compiled to a branch with an unpatched target.
    fn condition(&mut self, rest: &[TokenCode]) -> Result<Address> {
        let cond = match rest.split_last() {
            Some((last, cond)) if *last == Word::Then.code() => cond,
            _ => return Err(error!(CompileError; "MISSING THEN")),
        };
        let (op, cond) = match cond.split_first() {
            Some((first, cond)) if *first == Word::Not.code() => (Opcode::Jnz, cond),
            _ => (Opcode::Jz, cond),
        };
        self.expression(cond)?;
        self.emit(op, &[Operand::Addr(0)])
    }

    fn expect_end(&self, rest: &[TokenCode]) -> Result<()> {
        match rest.first() {
            None => Ok(()),
            Some(code) => Err(error!(CompileError; format!("UNEXPECTED {}", self.text(*code)))),
        }
    }

    fn r#if(&mut self, rest: &[TokenCode]) -> Result<()> {
        let mut exits = vec![];
        let mut branch = self.condition(rest)?;
        self.consume_terminator();
        loop {
            let ends = [Word::Elsif, Word::Else, Word::End];
            let (word, rest) = match self.block(&ends)? {
                Some(found) => found,
                None => return Err(error!(CompileError; "MISSING END")),
            };
            match word {
                Word::Elsif => {
                    exits.push(self.emit(Opcode::Jmp, &[Operand::Addr(0)])?);
                    self.program.patch(branch, self.program.len())?;
                    branch = self.condition(rest)?;
                    self.consume_terminator();
                }
                Word::Else => {
                    self.expect_end(rest)?;
                    exits.push(self.emit(Opcode::Jmp, &[Operand::Addr(0)])?);
                    self.program.patch(branch, self.program.len())?;
                    self.consume_terminator();
                    let (_, rest) = match self.block(&[Word::End])? {
                        Some(found) => found,
                        None => return Err(error!(CompileError; "MISSING END")),
                    };
                    self.expect_end(rest)?;
                    break;
                }
                _ => {
                    self.expect_end(rest)?;
                    self.program.patch(branch, self.program.len())?;
                    break;
                }
            }
        }
        let end = self.program.len();
        for addr in exits {
            self.program.patch(addr, end)?;
        }
        Ok(())
    }

    /// The counter slot is per nesting depth so nested loops keep their own.
    fn r#loop(&mut self, rest: &[TokenCode]) -> Result<()> {
        let count = match rest.split_last() {
            Some((last, count)) if *last == Word::Begin.code() => count,
            _ => return Err(error!(CompileError; "MISSING BEGIN")),
        };
        let counter = self.table.counter(self.loops)?;
        self.expression(count)?;
        self.emit(Opcode::CpyD, &[Operand::Var(counter)])?;
        let check = self.emit(Opcode::Jmp, &[Operand::Addr(0)])?;
        let body = self.program.len();
        self.consume_terminator();
        self.loops += 1;
        let found = self.block(&[Word::End]);
        self.loops -= 1;
        let (_, rest) = match found? {
            Some(found) => found,
            None => return Err(error!(CompileError; "MISSING END")),
        };
        self.expect_end(rest)?;
        self.program.patch(check, self.program.len())?;
        self.emit(Opcode::Loop, &[Operand::Addr(body), Operand::Var(counter)])?;
        Ok(())
    }

    fn assignment(&mut self, target: TokenCode, rest: &[TokenCode]) -> Result<()> {
        let (op, value) = match rest.split_first() {
            Some((op, value)) => (*op, value),
            None => return Err(error!(CompileError; "SYNTAX ERROR")),
        };
        if op == Symbol::Equ.code() {
            match value.split_first() {
                Some((first, args)) if *first == Word::Sound.code() => {
                    self.push_arguments(args, 1)?;
                    self.emit(Opcode::DefS, &[Operand::Var(target)])?;
                }
                Some((first, _)) if *first == Symbol::SqBrOpn.code() => match array_literal(value) {
                    Some(items) => self.define_array(target, items)?,
                    None => return Err(error!(CompileError; "UNMATCHED [")),
                },
                Some((first, [])) if self.is_reference(*first) => {
                    self.expression(value)?;
                    self.emit(Opcode::CpyP, &[Operand::Var(target)])?;
                }
                _ => {
                    self.expression(value)?;
                    self.emit(Opcode::CpyD, &[Operand::Var(target)])?;
                }
            }
            return Ok(());
        }
        if op == Symbol::LArrow.code() {
            return self.filter(target, value);
        }
        if let Some(compound) = Opcode::compound(op) {
            self.emit(Opcode::Push, &[Operand::Var(target)])?;
            self.expression(value)?;
            self.emit(compound, &[Operand::Var(target)])?;
            return Ok(());
        }
        Err(error!(CompileError; format!("UNEXPECTED {}", self.text(op))))
    }

    fn filter(&mut self, target: TokenCode, value: &[TokenCode]) -> Result<()> {
        let (name, args) = match value.split_first() {
            Some((name, args)) => (*name, args),
            None => return Err(error!(CompileError; "MISSING FILTER")),
        };
        let kind = self
            .table
            .get(name)
            .filter(|t| t.declared_type() == Type::Filter)
            .and_then(|t| FilterKind::from_index(t.value()));
        let kind = match kind {
            Some(kind) => kind,
            None => return Err(error!(CompileError; format!("UNKNOWN FILTER {}", self.text(name)))),
        };
        self.push_arguments(args, kind.arity())?;
        self.emit(Opcode::Filter, &[Operand::Var(target), Operand::Var(name)])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{tokenize, ErrorCode};

    fn ops(s: &str) -> Result<Vec<Opcode>> {
        let mut table = TokenTable::new();
        let tokens = tokenize(&mut table, s)?;
        let program = compile(&mut table, &tokens)?;
        Ok(program.iter().map(|(_, i)| i.opcode()).collect())
    }

    #[test]
    fn test_beep_pads_omitted() {
        use Opcode::*;
        assert_eq!(ops("BEEP").unwrap(), vec![Omit, Omit, Beep, Exit]);
        assert_eq!(ops("beep , 2").unwrap(), vec![Omit, PushC, Beep, Exit]);
        assert_eq!(ops("BEEP(440, 2)").unwrap(), vec![PushC, PushC, Beep, Exit]);
    }

    #[test]
    fn test_assignment_forms() {
        use Opcode::*;
        assert_eq!(ops("x = 1").unwrap(), vec![PushC, CpyD, Exit]);
        assert_eq!(ops("x = 1\ny = x").unwrap(), vec![PushC, CpyD, Push, CpyP, Exit]);
        assert_eq!(ops("x = 1 : x += 2").unwrap(), vec![PushC, CpyD, Push, PushC, Add2, Exit]);
        assert_eq!(ops("s = SOUND OSC_SAW_WAVE").unwrap(), vec![PushC, DefS, Exit]);
        assert_eq!(ops("s = SOUND\ns <- ADSR").unwrap(), vec![Omit, DefS, Omit, Omit, Omit, Omit, Filter, Exit]);
    }

    #[test]
    fn test_array_literals() {
        use Opcode::*;
        assert_eq!(ops("f = [440, 660 * 2]").unwrap(), vec![PushC, PushC, PushC, Mul, DefA, Exit]);
        assert_eq!(ops("f = []").unwrap(), vec![DefA, Exit]);
        assert_eq!(
            ops("PLAY [440, 660], 2").unwrap(),
            vec![PushC, PushC, DefA, Push, PushC, Omit, Omit, Play, Exit]
        );
        let mut table = TokenTable::new();
        let tokens = tokenize(&mut table, "PLAY([1, 2, 3])").unwrap();
        let program = compile(&mut table, &tokens).unwrap();
        let def = program.get(3).unwrap();
        assert_eq!(def.opcode(), DefA);
        assert_eq!(table.text(def.var(0).unwrap()), "$array0");
        assert_eq!(def.count(1).unwrap(), 3);
        assert_eq!(ops("f = [1, 2").unwrap_err().detail(), "UNMATCHED [");
        assert_eq!(ops("f = [1, , 2]").unwrap_err().detail(), "MISSING EXPRESSION");
    }

    #[test]
    fn test_if_patches_branches() {
        let mut table = TokenTable::new();
        let tokens = tokenize(&mut table, "IF 1 THEN\nPRINT 1\nELSE\nPRINT 2\nEND").unwrap();
        let program = compile(&mut table, &tokens).unwrap();
        let jz = program.get(1).unwrap();
        assert_eq!(jz.opcode(), Opcode::Jz);
        assert_eq!(jz.target().unwrap(), 5);
        let jmp = program.get(4).unwrap();
        assert_eq!(jmp.opcode(), Opcode::Jmp);
        assert_eq!(jmp.target().unwrap(), 7);
        assert_eq!(program.get(7).unwrap().opcode(), Opcode::Exit);
    }

    #[test]
    fn test_compile_errors() {
        let e = ops("IF 1\nPRINT 1\nEND").unwrap_err();
        assert_eq!(e.code(), ErrorCode::CompileError);
        assert_eq!(e.detail(), "MISSING THEN");
        let e = ops("LOOP 3 BEGIN\nPRINT 1\n").unwrap_err();
        assert_eq!(e.detail(), "MISSING END");
        let e = ops("PRINT 1\nEND").unwrap_err();
        assert_eq!(e.detail(), "END WITHOUT BLOCK");
        assert_eq!(e.line_number(), Some(2));
        let e = ops("s = SOUND\ns <- AMP 1, 2").unwrap_err();
        assert_eq!(e.detail(), "TOO MANY ARGUMENTS");
        assert_eq!(ops("PRINT").unwrap_err().detail(), "MISSING EXPRESSION");
    }
}

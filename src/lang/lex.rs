use super::token::{Class, Symbol, TokenCode, TokenTable, Type};
use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Convert source text into token codes, interning every lexeme.
/// Newlines are kept as `\n` tokens since they terminate statements.
pub fn tokenize(table: &mut TokenTable, s: &str) -> Result<Vec<TokenCode>> {
    OtoLexer::new(table, s).lex()
}

fn is_oto_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t' || c == b'\r'
}

fn is_oto_word_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_oto_word(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

struct OtoLexer<'a> {
    table: &'a mut TokenTable,
    src: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    tokens: Vec<TokenCode>,
}

impl<'a> OtoLexer<'a> {
    fn new(table: &'a mut TokenTable, src: &'a str) -> OtoLexer<'a> {
        OtoLexer {
            table,
            src,
            pos: 0,
            line: 1,
            line_start: 0,
            tokens: vec![],
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes().get(self.pos + offset).copied()
    }

    fn error(&self, start: usize, message: &str) -> Error {
        let col = (start - self.line_start)..(self.pos.max(start + 1) - self.line_start);
        error!(LexicalError, Some(self.line), ..&col; message)
    }

    fn lex(mut self) -> Result<Vec<TokenCode>> {
        while let Some(ch) = self.peek_at(0) {
            if is_oto_whitespace(ch) {
                self.pos += 1;
            } else if ch == b'#' {
                self.comment();
            } else if let Some(symbol) = self.symbol() {
                self.emit_symbol(symbol)?;
            } else if is_oto_word_start(ch) {
                self.word()?;
            } else if ch.is_ascii_digit() || ch == b'.' {
                self.number(self.pos)?;
            } else if ch == b'"' {
                self.string()?;
            } else {
                let start = self.pos;
                let len = self.src[start..].chars().next().map_or(1, char::len_utf8);
                self.pos += len;
                return Err(self.error(start, "UNRECOGNIZED CHARACTER"));
            }
        }
        Ok(self.tokens)
    }

    fn comment(&mut self) {
        while let Some(ch) = self.peek_at(0) {
            if ch == b'\n' {
                break;
            }
            self.pos += 1;
        }
    }

    /// Greedy: two-character symbols are tried before single characters.
    fn symbol(&self) -> Option<Symbol> {
        let rest = &self.bytes()[self.pos..];
        let two = Symbol::ALL
            .iter()
            .filter(|s| s.text().len() == 2)
            .find(|s| rest.starts_with(s.text().as_bytes()));
        if two.is_some() {
            return two.copied();
        }
        Symbol::ALL
            .iter()
            .filter(|s| s.text().len() == 1)
            .find(|s| rest.starts_with(s.text().as_bytes()))
            .copied()
    }

    /// A minus directly followed by a digit is a sign when no operand
    /// precedes it.
    fn expects_operand(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some(&code) => match self.table.class(code) {
                Some(Class::Symbol) => {
                    code != Symbol::BrCls.code() && code != Symbol::SqBrCls.code()
                }
                Some(Class::Word) => true,
                _ => false,
            },
        }
    }

    fn emit_symbol(&mut self, symbol: Symbol) -> Result<()> {
        if symbol == Symbol::Minus && self.expects_operand() {
            if let Some(next) = self.peek_at(1) {
                let dot_digit = next == b'.' && self.peek_at(2).map_or(false, |c| c.is_ascii_digit());
                if next.is_ascii_digit() || dot_digit {
                    let start = self.pos;
                    self.pos += 1;
                    return self.number(start);
                }
            }
        }
        let code = self.table.intern(symbol.text(), Type::Void)?;
        debug_assert_eq!(code, symbol.code());
        self.pos += symbol.text().len();
        self.tokens.push(code);
        if symbol == Symbol::LineFeed {
            self.line += 1;
            self.line_start = self.pos;
        }
        Ok(())
    }

    fn word(&mut self) -> Result<()> {
        let start = self.pos;
        while let Some(ch) = self.peek_at(0) {
            if !is_oto_word(ch) {
                break;
            }
            self.pos += 1;
        }
        let code = self.table.intern(&self.src[start..self.pos], Type::Void)?;
        self.tokens.push(code);
        Ok(())
    }

    fn number(&mut self, start: usize) -> Result<()> {
        let mut decimal = false;
        let mut digits = 0;
        while let Some(ch) = self.peek_at(0) {
            if ch.is_ascii_digit() {
                digits += 1;
            } else if ch == b'.' && !decimal {
                decimal = true;
            } else {
                break;
            }
            self.pos += 1;
        }
        if digits == 0 {
            return Err(self.error(start, "INVALID NUMBER"));
        }
        let code = self
            .table
            .intern(&self.src[start..self.pos], Type::Const)
            .map_err(|e| e.in_line_number(Some(self.line)))?;
        self.tokens.push(code);
        Ok(())
    }

    fn string(&mut self) -> Result<()> {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.peek_at(0) {
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(b'\n') | None => return Err(self.error(start, "UNTERMINATED STRING")),
                Some(_) => self.pos += 1,
            }
        }
        let code = self
            .table
            .intern(&self.src[start..self.pos], Type::String)?;
        self.tokens.push(code);
        Ok(())
    }
}

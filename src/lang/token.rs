use super::Error;
use crate::error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Fixed capacity of the token table.
pub const MAX_TOKENS: usize = 4096;

/// ## Dense token identity
///
/// Equal lexeme text always interns to the same code. Codes are handed
/// out in first-seen order and never reused.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenCode(u32);

impl TokenCode {
    pub const fn new(index: usize) -> TokenCode {
        TokenCode(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TokenCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Symbol,
    Word,
    Literal,
    Ident,
}

/// Declared type of a token; becomes the type tag of its variable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Void,
    Const,
    Float,
    Channel,
    Sound,
    Filter,
    File,
    InDevice,
    OutDevice,
    String,
    Array,
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Type::*;
        match self {
            Void => write!(f, "void"),
            Const => write!(f, "const"),
            Float => write!(f, "float"),
            Channel => write!(f, "channel"),
            Sound => write!(f, "sound"),
            Filter => write!(f, "filter"),
            File => write!(f, "file"),
            InDevice => write!(f, "input"),
            OutDevice => write!(f, "output"),
            String => write!(f, "string"),
            Array => write!(f, "array"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    LineFeed,
    Comma,
    Colon,
    SqBrOpn,
    SqBrCls,
    BrOpn,
    BrCls,
    LArrow,
    RArrow,
    EEq,
    NEq,
    Gt,
    Lt,
    Ge,
    Le,
    Plus,
    Minus,
    Aster,
    Slash,
    WSlash,
    Perce,
    Equ,
    PlusEqu,
    MinusEqu,
    AsterEqu,
    SlashEqu,
    PerceEqu,
}

impl Symbol {
    /// Registration order. Codes are the position in this list.
    pub const ALL: [Symbol; 27] = [
        Symbol::LineFeed,
        Symbol::Comma,
        Symbol::Colon,
        Symbol::SqBrOpn,
        Symbol::SqBrCls,
        Symbol::BrOpn,
        Symbol::BrCls,
        Symbol::LArrow,
        Symbol::RArrow,
        Symbol::EEq,
        Symbol::NEq,
        Symbol::Gt,
        Symbol::Lt,
        Symbol::Ge,
        Symbol::Le,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Aster,
        Symbol::Slash,
        Symbol::WSlash,
        Symbol::Perce,
        Symbol::Equ,
        Symbol::PlusEqu,
        Symbol::MinusEqu,
        Symbol::AsterEqu,
        Symbol::SlashEqu,
        Symbol::PerceEqu,
    ];

    pub fn text(self) -> &'static str {
        use Symbol::*;
        match self {
            LineFeed => "\n",
            Comma => ",",
            Colon => ":",
            SqBrOpn => "[",
            SqBrCls => "]",
            BrOpn => "(",
            BrCls => ")",
            LArrow => "<-",
            RArrow => "->",
            EEq => "==",
            NEq => "!=",
            Gt => ">",
            Lt => "<",
            Ge => ">=",
            Le => "<=",
            Plus => "+",
            Minus => "-",
            Aster => "*",
            Slash => "/",
            WSlash => "//",
            Perce => "%",
            Equ => "=",
            PlusEqu => "+=",
            MinusEqu => "-=",
            AsterEqu => "*=",
            SlashEqu => "/=",
            PerceEqu => "%=",
        }
    }

    pub const fn code(self) -> TokenCode {
        TokenCode(self as u32)
    }

    pub fn from_code(code: TokenCode) -> Option<Symbol> {
        Symbol::ALL.get(code.index()).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Begin,
    End,
    Define,
    Func,
    Track,
    Filter,
    If,
    Elsif,
    Else,
    Then,
    Loop,
    And,
    Or,
    Not,
    Oscil,
    Sound,
    Print,
    Beep,
    Play,
    Note,
    Mute,
    Bpm,
    Printwav,
    Exportwav,
    Importwav,
    Defse,
    Spectrum,
    Setfs,
    Midiin,
    Midiout,
    Exit,
}

const WORDS: [(&str, &str, Word); 31] = [
    ("begin", "BEGIN", Word::Begin),
    ("end", "END", Word::End),
    ("define", "DEFINE", Word::Define),
    ("func", "FUNC", Word::Func),
    ("track", "TRACK", Word::Track),
    ("filter", "FILTER", Word::Filter),
    ("if", "IF", Word::If),
    ("elsif", "ELSIF", Word::Elsif),
    ("else", "ELSE", Word::Else),
    ("then", "THEN", Word::Then),
    ("loop", "LOOP", Word::Loop),
    ("and", "AND", Word::And),
    ("or", "OR", Word::Or),
    ("not", "NOT", Word::Not),
    ("oscil", "OSCIL", Word::Oscil),
    ("sound", "SOUND", Word::Sound),
    ("print", "PRINT", Word::Print),
    ("beep", "BEEP", Word::Beep),
    ("play", "PLAY", Word::Play),
    ("note", "NOTE", Word::Note),
    ("mute", "MUTE", Word::Mute),
    ("bpm", "BPM", Word::Bpm),
    ("printwav", "PRINTWAV", Word::Printwav),
    ("exportwav", "EXPORTWAV", Word::Exportwav),
    ("importwav", "IMPORTWAV", Word::Importwav),
    ("defse", "DEFSE", Word::Defse),
    ("spectrum", "SPECTRUM", Word::Spectrum),
    ("setfs", "SETFS", Word::Setfs),
    ("midiin", "MIDIIN", Word::Midiin),
    ("midiout", "MIDIOUT", Word::Midiout),
    ("exit", "EXIT", Word::Exit),
];

impl Word {
    pub const fn code(self) -> TokenCode {
        TokenCode(Symbol::ALL.len() as u32 + self as u32)
    }

    pub fn from_code(code: TokenCode) -> Option<Word> {
        let index = code.index().checked_sub(Symbol::ALL.len())?;
        WORDS.get(index).map(|(_, _, w)| *w)
    }

    /// Case-uniform lookup: all lowercase or all uppercase, never mixed.
    pub fn from_string(s: &str) -> Option<Word> {
        WORDS
            .iter()
            .filter(|(lower, _, _)| lower.len() == s.len())
            .find(|(lower, upper, _)| *lower == s || *upper == s)
            .map(|(_, _, w)| *w)
    }

    pub fn text(self) -> &'static str {
        WORDS[self as usize].1
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Oscillator wave shapes, registered as named constants.
pub const WAVE_NAMES: [&str; 5] = [
    "OSC_SINE_WAVE",
    "OSC_SAW_WAVE",
    "OSC_SQUARE_WAVE",
    "OSC_TRIANGLE_WAVE",
    "OSC_WHITE_NOISE",
];

/// Filter kinds, registered after the waves. The value of each is its
/// position in this list.
pub const FILTER_NAMES: [&str; 11] = [
    "FADE_IN",
    "FADE_OUT",
    "AMP",
    "TREMOLO",
    "ADSR",
    "LOW_PASS",
    "HIGH_PASS",
    "VIBRATO",
    "WAH",
    "DELAY",
    "REVERB",
];

pub const FIRST_NAMED: TokenCode = Word::Exit.code().next();
/// Every code up to and including this one is pre-registered.
pub const LAST_BUILTIN: TokenCode =
    TokenCode::new(FIRST_NAMED.0 as usize + WAVE_NAMES.len() + FILTER_NAMES.len() - 1);

impl TokenCode {
    const fn next(self) -> TokenCode {
        TokenCode(self.0 + 1)
    }

    pub fn is_builtin(self) -> bool {
        self <= LAST_BUILTIN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
    DivideInt,
    Modulus,
    And,
    Or,
}

impl Operator {
    pub fn from_code(code: TokenCode) -> Option<Operator> {
        use Operator::*;
        if let Some(symbol) = Symbol::from_code(code) {
            return match symbol {
                Symbol::EEq => Some(Equal),
                Symbol::NEq => Some(NotEqual),
                Symbol::Gt => Some(Greater),
                Symbol::Lt => Some(Less),
                Symbol::Ge => Some(GreaterEqual),
                Symbol::Le => Some(LessEqual),
                Symbol::Plus => Some(Plus),
                Symbol::Minus => Some(Minus),
                Symbol::Aster => Some(Multiply),
                Symbol::Slash => Some(Divide),
                Symbol::WSlash => Some(DivideInt),
                Symbol::Perce => Some(Modulus),
                _ => None,
            };
        }
        match Word::from_code(code)? {
            Word::And => Some(And),
            Word::Or => Some(Or),
            _ => None,
        }
    }

    pub fn is_multiplicative(self) -> bool {
        use Operator::*;
        matches!(self, Multiply | Divide | DivideInt | Modulus)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    text: Rc<str>,
    class: Class,
    ty: Type,
    value: f64,
}

impl Token {
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn len(&self) -> usize {
        self.text.len()
    }
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
    pub fn class(&self) -> Class {
        self.class
    }
    pub fn declared_type(&self) -> Type {
        self.ty
    }
    /// Parsed value of a constant, or the index of a named filter.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// ## Token table
///
/// Symbols, reserved words and named constants are registered once,
/// in a fixed order, when the table is created.

#[derive(Debug)]
pub struct TokenTable {
    tokens: Vec<Token>,
    index: HashMap<Rc<str>, TokenCode>,
    ready: bool,
}

impl Default for TokenTable {
    fn default() -> Self {
        TokenTable::new()
    }
}

impl TokenTable {
    pub fn new() -> TokenTable {
        let mut table = TokenTable {
            tokens: Vec::with_capacity(MAX_TOKENS),
            index: HashMap::new(),
            ready: false,
        };
        table.register();
        table
    }

    fn register(&mut self) {
        let builtins = Symbol::ALL
            .iter()
            .map(|s| (s.text(), Class::Symbol, Type::Void, 0.0))
            .chain(WORDS.iter().map(|(s, _, _)| (*s, Class::Word, Type::Void, 0.0)))
            .chain(
                WAVE_NAMES
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (*s, Class::Literal, Type::Const, i as f64)),
            )
            .chain(
                FILTER_NAMES
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (*s, Class::Literal, Type::Filter, i as f64)),
            );
        for (text, class, ty, value) in builtins {
            let appended = self.append(text, class, ty, value);
            debug_assert!(appended.is_ok());
        }
        debug_assert_eq!(self.tokens.len(), LAST_BUILTIN.index() + 1);
        self.ready = true;
    }

    fn append(&mut self, text: &str, class: Class, ty: Type, value: f64) -> Result<TokenCode> {
        if self.tokens.len() >= MAX_TOKENS {
            return Err(error!(TooManyTokens));
        }
        let code = TokenCode::new(self.tokens.len());
        let text: Rc<str> = text.into();
        self.index.insert(text.clone(), code);
        self.tokens.push(Token {
            text,
            class,
            ty,
            value,
        });
        Ok(code)
    }

    /// Look up `text`, creating a new code on first sight.
    ///
    /// Numeric constants have their value parsed here so the variable
    /// slot can be filled as soon as it is created.
    pub fn intern(&mut self, text: &str, ty: Type) -> Result<TokenCode> {
        if self.ready {
            if let Some(word) = Word::from_string(text) {
                return Ok(word.code());
            }
        }
        if let Some(code) = self.index.get(text) {
            return Ok(*code);
        }
        let (class, value) = match ty {
            Type::Const => match text.parse::<f64>() {
                Ok(value) => (Class::Literal, value),
                Err(_) => return Err(error!(LexicalError; "INVALID NUMBER")),
            },
            Type::String => (Class::Literal, 0.0),
            _ => (Class::Ident, 0.0),
        };
        self.append(text, class, ty, value)
    }

    /// Anonymous result slot for tracking-stack depth `depth`.
    /// The name cannot be produced by the lexer.
    pub fn temp(&mut self, depth: usize) -> Result<TokenCode> {
        self.intern(&format!("${}", depth), Type::Void)
    }

    /// Anonymous counter slot for loop nesting depth `depth`.
    pub fn counter(&mut self, depth: usize) -> Result<TokenCode> {
        self.intern(&format!("$loop{}", depth), Type::Void)
    }

    /// Anonymous slot for an array literal passed as argument `index`.
    pub fn array_arg(&mut self, index: usize) -> Result<TokenCode> {
        self.intern(&format!("$array{}", index), Type::Void)
    }

    pub fn get(&self, code: TokenCode) -> Option<&Token> {
        self.tokens.get(code.index())
    }

    pub fn text(&self, code: TokenCode) -> &str {
        match self.get(code) {
            Some(token) => token.text(),
            None => "",
        }
    }

    pub fn class(&self, code: TokenCode) -> Option<Class> {
        self.get(code).map(|t| t.class)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenCode, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (TokenCode::new(i), t))
    }
}

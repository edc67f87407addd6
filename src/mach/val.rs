use crate::lang::TokenCode;
use std::cell::RefCell;
use std::rc::Rc;

/// Value held by a variable slot.
#[derive(Debug, Clone)]
pub enum Val {
    None,
    Number(f64),
    Text(Rc<str>),
    Sound(Rc<RefCell<Sound>>),
    Filter(FilterKind),
    Array(Rc<[f64]>),
}

/// `[440, 660]`
pub fn format_array(data: &[f64]) -> String {
    let items: Vec<String> = data.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// ## Operand stack entry
///
/// Every consumer matches on the variant before touching the payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// Reference to a variable slot.
    Var(TokenCode),
    /// Bare number with no backing slot.
    Immediate(f64),
    /// An optional argument that was left out.
    Omitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine = 0,
    Saw = 1,
    Square = 2,
    Triangle = 3,
    Noise = 4,
}

impl Wave {
    pub fn from_code(code: f64) -> Option<Wave> {
        if code.fract() != 0.0 {
            return None;
        }
        match code as i64 {
            0 => Some(Wave::Sine),
            1 => Some(Wave::Saw),
            2 => Some(Wave::Square),
            3 => Some(Wave::Triangle),
            4 => Some(Wave::Noise),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    FadeIn,
    FadeOut,
    Amp,
    Tremolo,
    Adsr,
    LowPass,
    HighPass,
    Vibrato,
    Wah,
    Delay,
    Reverb,
}

impl FilterKind {
    pub fn from_index(index: f64) -> Option<FilterKind> {
        use FilterKind::*;
        if index.fract() != 0.0 {
            return None;
        }
        match index as i64 {
            0 => Some(FadeIn),
            1 => Some(FadeOut),
            2 => Some(Amp),
            3 => Some(Tremolo),
            4 => Some(Adsr),
            5 => Some(LowPass),
            6 => Some(HighPass),
            7 => Some(Vibrato),
            8 => Some(Wah),
            9 => Some(Delay),
            10 => Some(Reverb),
            _ => None,
        }
    }

    /// Number of parameters taken from the operand stack.
    pub fn arity(self) -> usize {
        use FilterKind::*;
        match self {
            FadeIn | FadeOut | Amp | LowPass | HighPass | Wah | Reverb => 1,
            Tremolo | Vibrato | Delay => 2,
            Adsr => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub kind: FilterKind,
    pub args: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    pub wave: Wave,
    pub filters: Vec<Filter>,
}

impl Sound {
    pub fn new(wave: Wave) -> Sound {
        Sound {
            wave,
            filters: vec![],
        }
    }
}

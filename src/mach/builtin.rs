use super::val::{format_array, Entry, Filter, FilterKind, Sound, Val, Wave};
use super::{Config, Stack, Var};
use crate::error;
use crate::lang::token::Type;
use crate::lang::{Error, TokenCode};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub const DEFAULT_FREQUENCY: f64 = 500.0;
pub const DEFAULT_DURATION: f64 = 1.0;
pub const DEFAULT_VOLUME: u8 = 80;
pub const SAFE_VOLUME: u8 = 35;
pub const MAX_POLYPHONIC: usize = 16;

/// A simple tone request.
#[derive(Debug, Clone, PartialEq)]
pub struct Beep {
    pub frequency: f64,
    /// Seconds.
    pub duration: f64,
}

/// A rendered playback request handed to the audio host.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub frequencies: Vec<f64>,
    pub duration: f64,
    pub samples: u64,
    pub volume: u8,
    pub wave: Wave,
    pub filters: Vec<Filter>,
}

/// ## Built-in statements
///
/// Arguments were pushed in source order so they are popped last first.
/// Each pop decides by entry kind: a variable is dereferenced and its
/// type checked, an immediate is used as is, an omitted marker takes
/// the default or fails when the argument is mandatory.

pub struct Builtin<'a> {
    stack: &'a mut Stack<Entry>,
    vars: &'a mut Var,
}

impl<'a> Builtin<'a> {
    pub fn new(stack: &'a mut Stack<Entry>, vars: &'a mut Var) -> Builtin<'a> {
        Builtin { stack, vars }
    }

    fn entry_number(&self, entry: Entry) -> Result<Option<f64>> {
        match entry {
            Entry::Var(code) => Ok(Some(self.vars.fetch_number(code)?)),
            Entry::Immediate(n) => Ok(Some(n)),
            Entry::Omitted => Ok(None),
        }
    }

    pub fn number(&mut self) -> Result<f64> {
        let entry = self.stack.pop()?;
        match self.entry_number(entry)? {
            Some(n) => Ok(n),
            None => Err(error!(MissingArguments)),
        }
    }

    pub fn optional(&mut self, default: f64) -> Result<f64> {
        let entry = self.stack.pop()?;
        Ok(self.entry_number(entry)?.unwrap_or(default))
    }

    fn sound_of(&self, code: TokenCode) -> Result<Rc<RefCell<Sound>>> {
        let slot = self.vars.slot(code)?;
        match &slot.val {
            Val::Sound(sound) if slot.ty == Type::Sound => Ok(sound.clone()),
            _ => Err(error!(ArgumentTypeError; format!("EXPECTED SOUND, FOUND {}", slot.ty))),
        }
    }

    fn optional_sound(&mut self) -> Result<Option<Rc<RefCell<Sound>>>> {
        match self.stack.pop()? {
            Entry::Var(code) => Ok(Some(self.sound_of(code)?)),
            Entry::Immediate(_) => Err(error!(ArgumentTypeError; "EXPECTED SOUND, FOUND NUMBER")),
            Entry::Omitted => Ok(None),
        }
    }

    pub fn print(&mut self) -> Result<String> {
        let text = match self.stack.pop()? {
            Entry::Immediate(n) => n.to_string(),
            Entry::Omitted => return Err(error!(MissingArguments)),
            Entry::Var(code) => {
                let slot = self.vars.slot(code)?;
                match &slot.val {
                    Val::Number(n) => n.to_string(),
                    Val::Text(s) => s.to_string(),
                    Val::Sound(_) => "[sound]".to_string(),
                    Val::Filter(_) => "[filter]".to_string(),
                    Val::Array(data) => format_array(data),
                    Val::None => return Err(error!(ArgumentTypeError; "UNDEFINED VARIABLE")),
                }
            }
        };
        Ok(format!("{}\n", text))
    }

    pub fn beep(&mut self) -> Result<Beep> {
        let duration = self.optional(DEFAULT_DURATION)?;
        let frequency = self.optional(DEFAULT_FREQUENCY)?;
        Ok(Beep {
            frequency,
            duration,
        })
    }

    pub fn play(&mut self, config: &Config) -> Result<Playback> {
        let sound = self.optional_sound()?;
        let volume = self.optional(DEFAULT_VOLUME as f64)?;
        let duration = self.optional(DEFAULT_DURATION)?;
        let frequencies = self.frequencies()?;
        let mut volume = if (0.0..=100.0).contains(&volume) {
            volume as u8
        } else {
            warn!("volume {} out of range, using {}", volume, DEFAULT_VOLUME);
            DEFAULT_VOLUME
        };
        if config.safety {
            volume = SAFE_VOLUME;
        }
        let (wave, filters) = match sound {
            Some(sound) => {
                let sound = sound.borrow();
                (sound.wave, sound.filters.clone())
            }
            None => (Wave::Sine, vec![]),
        };
        Ok(Playback {
            frequencies,
            duration,
            samples: (config.sample_rate as f64 * duration.max(0.0)) as u64,
            volume,
            wave,
            filters,
        })
    }

    /// A single frequency or an array of them. Each is lifted to at least 1 Hz.
    fn frequencies(&mut self) -> Result<Vec<f64>> {
        let frequencies = match self.stack.pop()? {
            Entry::Var(code) => match &self.vars.slot(code)?.val {
                Val::Array(data) => data.iter().take(MAX_POLYPHONIC).copied().collect(),
                _ => vec![self.vars.fetch_number(code)?],
            },
            Entry::Immediate(n) => vec![n],
            Entry::Omitted => vec![DEFAULT_FREQUENCY],
        };
        Ok(frequencies
            .into_iter()
            .map(|f| if f <= 0.0 { 1.0 } else { f })
            .collect())
    }

    /// Array elements were pushed first to last.
    pub fn define_array(&mut self, dest: TokenCode, len: usize) -> Result<()> {
        let mut data = vec![0.0; len];
        for item in data.iter_mut().rev() {
            let entry = self.stack.pop()?;
            *item = match self.entry_number(entry)? {
                Some(n) => n,
                None => return Err(error!(ArgumentTypeError; "MISSING ARRAY ELEMENT")),
            };
        }
        self.vars.define(dest, Type::Array, Val::Array(data.into()))
    }

    pub fn define_sound(&mut self, dest: TokenCode) -> Result<()> {
        let code = self.optional(Wave::Sine.code() as f64)?;
        let wave = match Wave::from_code(code) {
            Some(wave) => wave,
            None => return Err(error!(ArgumentTypeError; format!("INVALID WAVE {}", code))),
        };
        let sound = Rc::new(RefCell::new(Sound::new(wave)));
        self.vars.define(dest, Type::Sound, Val::Sound(sound))
    }

    pub fn filter(&mut self, dest: TokenCode, name: TokenCode) -> Result<()> {
        let kind = match self.vars.slot(name)?.val {
            Val::Filter(kind) => kind,
            _ => return Err(error!(FilterError; "UNKNOWN FILTER")),
        };
        let args = self.filter_args(kind)?;
        let sound = self.sound_of(dest)?;
        sound.borrow_mut().filters.push(Filter { kind, args });
        Ok(())
    }

    fn filter_args(&mut self, kind: FilterKind) -> Result<Vec<f64>> {
        let mut args = vec![0.0; kind.arity()];
        for arg in args.iter_mut().rev() {
            *arg = self.number()?;
        }
        Ok(args)
    }
}

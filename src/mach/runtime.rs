use super::builtin::{self, Builtin};
use super::val::Entry;
use super::{compile, Address, Listing, Opcode, Operation, Program, Stack, Var};
use crate::error;
use crate::lang::{tokenize, Error, TokenTable};
use log::{debug, log_enabled, Level};

type Result<T> = std::result::Result<T, Error>;

const MAX_STACK: usize = 1024;

/// Machine settings chosen by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Samples per second used to size playback buffers.
    pub sample_rate: u32,
    /// Force every playback to a quiet volume.
    pub safety: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_rate: 44100,
            safety: false,
        }
    }
}

/// ## Events for the user interface
///
/// The main loop calls `execute` and acts on what comes back.
/// `Beep` and `Play` must complete before `execute` is called again.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Beep(builtin::Beep),
    Play(builtin::Playback),
    Error(Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Stopped,
    Running,
    Interrupt,
}

/// ## Virtual machine
///
/// Variables and tokens persist across `enter` calls so a session can
/// build on earlier lines.

#[derive(Debug)]
pub struct Runtime {
    config: Config,
    tokens: TokenTable,
    vars: Var,
    program: Program,
    pc: Address,
    stack: Stack<Entry>,
    state: State,
    pending: Option<Error>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        let tokens = TokenTable::new();
        let mut vars = Var::new();
        vars.sync(&tokens);
        Runtime {
            config,
            tokens,
            vars,
            program: Program::new(),
            pc: 0,
            stack: Stack::new("STACK OVERFLOW", MAX_STACK),
            state: State::Stopped,
            pending: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Compile `source` and get ready to run it.
    /// Compile errors are reported by the next `execute`.
    pub fn enter(&mut self, source: &str) -> bool {
        self.stack.clear();
        self.pc = 0;
        match self.build(source) {
            Ok(program) => {
                if log_enabled!(Level::Debug) {
                    debug!("program:\n{}", Listing::program(&self.tokens, &program));
                }
                self.program = program;
                self.state = State::Running;
                true
            }
            Err(error) => {
                self.program = Program::new();
                self.state = State::Stopped;
                self.pending = Some(error);
                false
            }
        }
    }

    fn build(&mut self, source: &str) -> Result<Program> {
        let tokens = tokenize(&mut self.tokens, source)?;
        self.vars.sync(&self.tokens);
        let program = compile(&mut self.tokens, &tokens);
        self.vars.sync(&self.tokens);
        program
    }

    pub fn interrupt(&mut self) {
        if self.state == State::Running {
            self.state = State::Interrupt;
        }
    }

    /// Stop because the host could not carry out the last event.
    /// Returns `error` tagged with the line that raised the event.
    pub fn abort(&mut self, error: Error) -> Error {
        self.state = State::Stopped;
        self.stack.clear();
        error.in_line_number(self.line_number())
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(error) = self.pending.take() {
            return Event::Error(error);
        }
        match self.state {
            State::Stopped => return Event::Stopped,
            State::Interrupt => {
                self.state = State::Stopped;
                return Event::Error(error!(Break).in_line_number(self.line_number()));
            }
            State::Running => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => {}
                Ok(Some(event)) => return event,
                Err(error) => {
                    self.state = State::Stopped;
                    debug!("stopped at {} with {}", self.pc, error);
                    return Event::Error(error.in_line_number(self.line_number()));
                }
            }
        }
        Event::Running
    }

    /// Line of the instruction most recently fetched.
    fn line_number(&self) -> Option<usize> {
        self.program.line_number(self.pc.saturating_sub(1))
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let ins = match self.program.get(self.pc) {
            Some(ins) => *ins,
            None => return Err(error!(InternalError; "MISSING EXIT")),
        };
        self.pc += 1;
        use Opcode::*;
        match ins.opcode() {
            Push => self.stack.push(Entry::Var(ins.var(0)?))?,
            PushC => {
                let n = self.vars.fetch_number(ins.var(0)?)?;
                self.stack.push(Entry::Immediate(n))?
            }
            Omit => self.stack.push(Entry::Omitted)?,
            CpyD => {
                let n = Builtin::new(&mut self.stack, &mut self.vars).number()?;
                self.vars.store_number(ins.var(0)?, n)?;
            }
            CpyP => match self.stack.pop()? {
                Entry::Var(src) => {
                    let slot = self.vars.slot(src)?.clone();
                    self.vars.store_slot(ins.var(0)?, slot)?;
                }
                Entry::Immediate(_) => {
                    return Err(error!(ArgumentTypeError; "EXPECTED VARIABLE"));
                }
                Entry::Omitted => return Err(error!(MissingArguments)),
            },
            Add | Sub | Mul | Div | IDiv | Mod | And | Or | Eq | NEq | LtCmp | LtEqCmp
            | RiCmp | RiEqCmp => {
                let (lhs, rhs) = self.pop_numbers()?;
                let n = Operation::binary(ins.opcode(), lhs, rhs)?;
                if let Some(dest) = ins.dest() {
                    self.vars.store_number(dest, n)?;
                }
                self.stack.push(Entry::Immediate(n))?;
            }
            Add2 | Sub2 | Mul2 | Div2 | Mod2 => {
                let (lhs, rhs) = self.pop_numbers()?;
                let base = match ins.opcode().base() {
                    Some(base) => base,
                    None => return Err(error!(InternalError; "NO BASE OPERATION")),
                };
                let n = Operation::binary(base, lhs, rhs)?;
                self.vars.store_number(ins.var(0)?, n)?;
            }
            Jmp => self.pc = ins.target()?,
            Jz => {
                let n = Builtin::new(&mut self.stack, &mut self.vars).number()?;
                if n == 0.0 {
                    self.pc = ins.target()?;
                }
            }
            Jnz => {
                let n = Builtin::new(&mut self.stack, &mut self.vars).number()?;
                if n != 0.0 {
                    self.pc = ins.target()?;
                }
            }
            Loop => {
                let counter = ins.var(1)?;
                let n = self.vars.fetch_number(counter)?.trunc();
                if n >= 1.0 {
                    self.vars.store_number(counter, n - 1.0)?;
                    self.pc = ins.target()?;
                }
            }
            Print => {
                let s = Builtin::new(&mut self.stack, &mut self.vars).print()?;
                return Ok(Some(Event::Print(s)));
            }
            Beep => {
                let beep = Builtin::new(&mut self.stack, &mut self.vars).beep()?;
                return Ok(Some(Event::Beep(beep)));
            }
            Play => {
                let config = self.config;
                let play = Builtin::new(&mut self.stack, &mut self.vars).play(&config)?;
                return Ok(Some(Event::Play(play)));
            }
            DefS => Builtin::new(&mut self.stack, &mut self.vars).define_sound(ins.var(0)?)?,
            DefA => Builtin::new(&mut self.stack, &mut self.vars)
                .define_array(ins.var(0)?, ins.count(1)?)?,
            Filter => {
                Builtin::new(&mut self.stack, &mut self.vars).filter(ins.var(0)?, ins.var(1)?)?
            }
            Exit => {
                self.state = State::Stopped;
                return Ok(Some(Event::Stopped));
            }
        }
        Ok(None)
    }

    fn pop_numbers(&mut self) -> Result<(f64, f64)> {
        let mut builtin = Builtin::new(&mut self.stack, &mut self.vars);
        let rhs = builtin.number()?;
        let lhs = builtin.number()?;
        Ok((lhs, rhs))
    }
}

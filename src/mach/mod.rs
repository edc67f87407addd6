/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for Oto.

*/

pub type Address = usize;

mod builtin;
mod compile;
mod expr;
mod listing;
mod opcode;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use builtin::{Beep, Playback};
pub use compile::compile;
pub use expr::{expression, priority_cmp, rpn};
pub use listing::Listing;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::{Instruction, Operand, Program};
pub use runtime::{Config, Event, Runtime};
pub use stack::Stack;
pub use val::{Entry, Filter, FilterKind, Sound, Val, Wave};
pub use var::{Slot, Var};

#[cfg(test)]
mod tests;

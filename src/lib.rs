//! # Oto
//!
//! A tiny language for making sounds. Programs print, beep, and play
//! tones shaped by oscillators and filters.
//!
//! Run the executable with a file name to play a program, or without one
//! to get an interactive session. If you get the following, you have
//! achieved success.
//! ```text
//! Oto sound language. Type HELP for help, EXIT to leave.
//! >>> █
//! ```
//!
//! Source text is lexed into interned tokens, compiled into fixed-stride
//! bytecode by way of reverse Polish notation, and run on a stack
//! machine. Sound requests come back to the host as events.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod audio;
pub mod lang;
pub mod mach;
pub mod term;

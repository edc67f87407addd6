/*!
# Terminal Host

Runs Oto source files and the interactive session. Sound requests from
the machine are handed to an [`Audio`](crate::audio::Audio) output and
finish before execution resumes.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

mod message;

pub use message::{describe, error_name, Language, Message};

use crate::audio::{Audio, Console, Mute};
use crate::mach::{Config, Event, Listing, Runtime};
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use log::{info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

const CYCLES: usize = 5000;

/// Host settings gathered from the command line.
#[derive(Debug, Clone)]
pub struct Options {
    pub file: Option<PathBuf>,
    /// Stay in the interactive session after running `file`.
    pub repl: bool,
    pub language: Language,
    /// Report compile and run times.
    pub time: bool,
    /// Print tokens and disassembly after compiling `file`.
    pub dump: bool,
    pub mute: bool,
    pub config: Config,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            file: None,
            repl: false,
            language: Language::English,
            time: false,
            dump: false,
            mute: false,
            config: Config::default(),
        }
    }
}

/// Returns the process exit status.
pub fn main(options: Options) -> i32 {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Error setting Ctrl-C handler: {}", error);
    }
    let mut audio: Box<dyn Audio> = if options.mute {
        Box::new(Mute)
    } else {
        Box::new(Console::new(std::io::stdout()))
    };
    let mut runtime = Runtime::new(options.config);
    let mut status = 0;
    if let Some(path) = &options.file {
        match run_file(&options, path, &mut runtime, audio.as_mut(), &interrupted) {
            Ok(true) => {}
            Ok(false) => status = 1,
            Err(error) => {
                eprintln!(
                    "{}",
                    Style::new()
                        .bold()
                        .paint(describe(&error, options.language))
                );
                status = 1;
            }
        }
    }
    if options.file.is_none() || options.repl {
        if let Err(error) = main_loop(&options, &mut runtime, audio.as_mut(), &interrupted) {
            eprintln!("{}", error);
            status = 1;
        }
    }
    audio.stop();
    status
}

fn run_file(
    options: &Options,
    path: &Path,
    runtime: &mut Runtime,
    audio: &mut dyn Audio,
    interrupted: &AtomicBool,
) -> Result<bool, Error> {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            return match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(InternalError; msg)),
            };
        }
    };
    info!("running {}", path.display());
    let lang = options.language;
    let start = Instant::now();
    let compiled = runtime.enter(&source);
    let compile_time = start.elapsed();
    if compiled && options.dump {
        print!("{}", Listing::tokens(runtime.tokens()));
        print!("{}", Listing::program(runtime.tokens(), runtime.program()));
    }
    let start = Instant::now();
    let ok = drive(runtime, audio, interrupted, lang, |s| {
        print!("{}", s);
        Ok(())
    })
    .map_err(|e| error!(InternalError; e.to_string()))?;
    if options.time {
        println!(
            "{} : {:.3} ms",
            Message::CompileTime.text(lang),
            compile_time.as_nanos() as f64 / 1_000_000.0
        );
        println!(
            "{} : {:.3} ms",
            Message::RunTime.text(lang),
            start.elapsed().as_nanos() as f64 / 1_000_000.0
        );
    }
    if options.dump {
        print!("{}", Listing::variables(runtime.tokens(), runtime.vars()));
    }
    Ok(ok)
}

/// Run until the machine stops. Returns false if it stopped on an error.
fn drive<F>(
    runtime: &mut Runtime,
    audio: &mut dyn Audio,
    interrupted: &AtomicBool,
    lang: Language,
    mut print: F,
) -> std::io::Result<bool>
where
    F: FnMut(&str) -> std::io::Result<()>,
{
    let mut ok = true;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
            audio.stop();
        }
        let result = match runtime.execute(CYCLES) {
            Event::Stopped => return Ok(ok),
            Event::Running => Ok(()),
            Event::Print(s) => {
                print(&s)?;
                Ok(())
            }
            Event::Beep(beep) => audio.beep(&beep).map_err(|e| runtime.abort(e)),
            Event::Play(playback) => audio.play(&playback).map_err(|e| runtime.abort(e)),
            Event::Error(error) => Err(error),
        };
        if let Err(error) = result {
            ok = false;
            let text = Style::new().bold().paint(describe(&error, lang));
            print(&format!("{}\n", text))?;
        }
    }
}

fn main_loop(
    options: &Options,
    runtime: &mut Runtime,
    audio: &mut dyn Audio,
    interrupted: &AtomicBool,
) -> std::io::Result<()> {
    let lang = options.language;
    let interface = Interface::new("oto")?;
    interface.set_prompt(">>> ")?;
    interface.write_fmt(format_args!("{}\n", Message::Banner.text(lang)))?;
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match line.trim().to_uppercase().as_str() {
            "" => continue,
            "EXIT" => {
                interface.write_fmt(format_args!("{}\n", Message::Bye.text(lang)))?;
                break;
            }
            "HELP" => {
                interface.write_fmt(format_args!("{}\n", Message::Help.text(lang)))?;
                continue;
            }
            "VARS" => {
                let vars = Listing::variables(runtime.tokens(), runtime.vars());
                if vars.is_empty() {
                    interface.write_fmt(format_args!("{}\n", Message::NoVariables.text(lang)))?;
                } else {
                    interface.write_fmt(format_args!("{}", vars))?;
                }
                continue;
            }
            _ => {}
        }
        interface.add_history_unique(line.clone());
        interrupted.store(false, Ordering::SeqCst);
        runtime.enter(&line);
        drive(runtime, audio, interrupted, lang, |s| {
            interface.write_fmt(format_args!("{}", s))
        })?;
    }
    Ok(())
}

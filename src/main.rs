//! # Oto
//!
//! Command line entry point. Runs a source file, the interactive
//! session, or both.

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use oto::mach::Config;
use oto::term::{self, Language, Options};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Lang {
    English,
    Kanji,
    Hiragana,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Language {
        match lang {
            Lang::English => Language::English,
            Lang::Kanji => Language::Kanji,
            Lang::Hiragana => Language::Hiragana,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Oto: a tiny language for making sounds.",
    long_about = "Runs an Oto source file, or starts an interactive session\n\
    when no file is given."
)]
struct Cli {
    /// Source file to run.
    file: Option<PathBuf>,

    /// Enter the interactive session after running FILE.
    #[arg(short, long)]
    repl: bool,

    /// Language of messages.
    #[arg(short, long, value_enum, default_value_t = Lang::English)]
    lang: Lang,

    /// Report compile and run times.
    #[arg(short, long)]
    time: bool,

    /// Limit every playback to a quiet volume.
    #[arg(short, long)]
    safe: bool,

    /// Discard all sound output.
    #[arg(short, long)]
    mute: bool,

    /// Samples per second.
    #[arg(long, value_name = "HZ", default_value_t = 44100)]
    sample_rate: u32,

    /// Print tokens, disassembly and variables.
    #[arg(short, long)]
    dump: bool,

    /// More log output. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = simple_logger::SimpleLogger::new()
        .with_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .env()
        .init()
    {
        eprintln!("{}", error);
    }

    let options = Options {
        file: cli.file,
        repl: cli.repl,
        language: cli.lang.into(),
        time: cli.time,
        dump: cli.dump,
        mute: cli.mute,
        config: Config {
            sample_rate: cli.sample_rate,
            safety: cli.safe,
        },
    };
    std::process::exit(term::main(options));
}

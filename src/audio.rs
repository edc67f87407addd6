/*!
# Audio Output

The virtual machine only describes sounds. Something implementing
[`Audio`] turns each request into output and returns once it is done.

*/

use crate::error;
use crate::lang::Error;
use crate::mach::{Beep, Playback};
use log::info;
use std::io::Write;
use std::time::Duration;

type Result<T> = std::result::Result<T, Error>;

/// Both calls block until the sound has finished.
pub trait Audio {
    fn beep(&mut self, beep: &Beep) -> Result<()>;
    fn play(&mut self, playback: &Playback) -> Result<()>;
    /// Cut off anything still sounding.
    fn stop(&mut self) {}
}

fn wait(seconds: f64) -> Result<()> {
    if seconds.is_nan() || seconds <= 0.0 {
        return Ok(());
    }
    match Duration::try_from_secs_f64(seconds) {
        Ok(duration) => {
            std::thread::sleep(duration);
            Ok(())
        }
        Err(_) => Err(error!(ArgumentTypeError; "DURATION OUT OF RANGE")),
    }
}

fn io_error(e: std::io::Error) -> Error {
    error!(InternalError; e.to_string())
}

/// Describes each sound on a writer and waits out its duration.
pub struct Console<W: Write> {
    out: W,
    realtime: bool,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Console<W> {
        Console {
            out,
            realtime: true,
        }
    }

    /// Return immediately instead of waiting for the sound to end.
    pub fn without_waiting(self) -> Console<W> {
        Console {
            realtime: false,
            ..self
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Audio for Console<W> {
    fn beep(&mut self, beep: &Beep) -> Result<()> {
        writeln!(
            self.out,
            "[Beep] frequency : {}, duration : {}",
            beep.frequency, beep.duration
        )
        .map_err(io_error)?;
        if self.realtime {
            wait(beep.duration)?;
        }
        Ok(())
    }

    fn play(&mut self, playback: &Playback) -> Result<()> {
        let frequencies: Vec<String> = playback.frequencies.iter().map(|f| f.to_string()).collect();
        writeln!(
            self.out,
            "[Play] frequency : [{}], duration : {:.2}, volume : {}, wave : {}, filters : {}",
            frequencies.join(", "),
            playback.duration,
            playback.volume,
            playback.wave.code(),
            playback.filters.len()
        )
        .map_err(io_error)?;
        if self.realtime {
            wait(playback.duration)?;
        }
        Ok(())
    }

    fn stop(&mut self) {
        let _ = self.out.flush();
    }
}

/// Discards all sound.
#[derive(Debug, Default)]
pub struct Mute;

impl Audio for Mute {
    fn beep(&mut self, beep: &Beep) -> Result<()> {
        info!("muted beep {} Hz", beep.frequency);
        Ok(())
    }

    fn play(&mut self, playback: &Playback) -> Result<()> {
        info!("muted playback of {} samples", playback.samples);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::Wave;

    #[test]
    fn test_console_describes_sound() {
        let mut console = Console::new(Vec::new()).without_waiting();
        console
            .beep(&Beep {
                frequency: 500.0,
                duration: 1.0,
            })
            .unwrap();
        console
            .play(&Playback {
                frequencies: vec![440.0],
                duration: 0.5,
                samples: 22050,
                volume: 80,
                wave: Wave::Square,
                filters: vec![],
            })
            .unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(
            out,
            "[Beep] frequency : 500, duration : 1\n\
             [Play] frequency : [440], duration : 0.50, volume : 80, wave : 2, filters : 0\n"
        );
    }

    #[test]
    fn test_duration_out_of_range() {
        let mut console = Console::new(Vec::new());
        let e = console
            .beep(&Beep {
                frequency: 440.0,
                duration: 1e20,
            })
            .unwrap_err();
        assert_eq!(e.code(), ErrorCode::ArgumentTypeError);
        assert_eq!(e.detail(), "DURATION OUT OF RANGE");
        let e = console
            .play(&Playback {
                frequencies: vec![440.0],
                duration: f64::INFINITY,
                samples: 0,
                volume: 80,
                wave: Wave::Sine,
                filters: vec![],
            })
            .unwrap_err();
        assert_eq!(e.detail(), "DURATION OUT OF RANGE");
        console
            .beep(&Beep {
                frequency: 440.0,
                duration: -1.0,
            })
            .unwrap();
    }
}

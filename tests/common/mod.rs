use oto::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Beep(beep) => {
                s.push_str(&format!("[Beep {} {}]\n", beep.frequency, beep.duration));
            }
            Event::Play(play) => {
                s.push_str(&format!(
                    "[Play {:?} {} {} {:?} {}]\n",
                    play.frequencies,
                    play.duration,
                    play.volume,
                    play.wave,
                    play.filters.len()
                ));
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

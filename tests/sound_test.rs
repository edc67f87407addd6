mod common;
use common::*;
use oto::mach::{Config, Event, FilterKind, Runtime, Wave};

#[test]
fn test_beep_defaults() {
    let mut r = Runtime::default();
    r.enter("BEEP");
    assert_eq!(exec(&mut r), "[Beep 500 1]\n");
    r.enter("BEEP 440, 0.5");
    assert_eq!(exec(&mut r), "[Beep 440 0.5]\n");
    r.enter("BEEP , 2");
    assert_eq!(exec(&mut r), "[Beep 500 2]\n");
}

#[test]
fn test_play_defaults() {
    let mut r = Runtime::default();
    r.enter("PLAY");
    assert_eq!(exec(&mut r), "[Play [500.0] 1 80 Sine 0]\n");
}

#[test]
fn test_play_clamps_out_of_range() {
    let mut r = Runtime::default();
    r.enter("PLAY 0, 2, 101");
    assert_eq!(exec(&mut r), "[Play [1.0] 2 80 Sine 0]\n");
    r.enter("PLAY -20, 1, -1");
    assert_eq!(exec(&mut r), "[Play [1.0] 1 80 Sine 0]\n");
}

#[test]
fn test_safety_volume() {
    let mut r = Runtime::new(Config {
        sample_rate: 44100,
        safety: true,
    });
    r.enter("PLAY 440, 1, 90");
    assert_eq!(exec(&mut r), "[Play [440.0] 1 35 Sine 0]\n");
}

#[test]
fn test_samples_follow_sample_rate() {
    let mut r = Runtime::new(Config {
        sample_rate: 8000,
        safety: false,
    });
    r.enter("PLAY 440, 0.5");
    match r.execute(100) {
        Event::Play(play) => assert_eq!(play.samples, 4000),
        event => panic!("{:?}", event),
    }
    assert_eq!(r.execute(100), Event::Stopped);
}

#[test]
fn test_sound_with_filters() {
    let mut r = Runtime::default();
    r.enter("s = SOUND OSC_SQUARE_WAVE\ns <- ADSR(0.1, 0.2, 0.7, 0.3)\ns <- AMP 2\nPLAY 220, 1, 50, s");
    match r.execute(100) {
        Event::Play(play) => {
            assert_eq!(play.wave, Wave::Square);
            assert_eq!(play.filters.len(), 2);
            assert_eq!(play.filters[0].kind, FilterKind::Adsr);
            assert_eq!(play.filters[0].args, vec![0.1, 0.2, 0.7, 0.3]);
            assert_eq!(play.filters[1].kind, FilterKind::Amp);
            assert_eq!(play.filters[1].args, vec![2.0]);
        }
        event => panic!("{:?}", event),
    }
}

#[test]
fn test_copied_sound_is_shared() {
    let mut r = Runtime::default();
    r.enter("a = SOUND\nb = a\nb <- AMP 1\nPLAY , , , a");
    assert_eq!(exec(&mut r), "[Play [500.0] 1 80 Sine 1]\n");
}

#[test]
fn test_sound_redefined_drops_filters() {
    let mut r = Runtime::default();
    r.enter("s = SOUND\ns <- WAH 3");
    exec(&mut r);
    r.enter("s = SOUND OSC_SAW_WAVE : PLAY , , , s");
    assert_eq!(exec(&mut r), "[Play [500.0] 1 80 Saw 0]\n");
}

#[test]
fn test_print_aggregates() {
    let mut r = Runtime::default();
    r.enter("s = SOUND\nPRINT s\nPRINT FADE_IN");
    assert_eq!(exec(&mut r), "[sound]\n[filter]\n");
}

#[test]
fn test_invalid_wave() {
    let mut r = Runtime::default();
    r.enter("s = SOUND 7");
    assert_eq!(exec(&mut r), "ARGUMENT TYPE ERROR IN 1; INVALID WAVE 7\n");
    r.enter("s = SOUND 2.5");
    assert_eq!(exec(&mut r), "ARGUMENT TYPE ERROR IN 1; INVALID WAVE 2.5\n");
}

#[test]
fn test_filter_errors() {
    let mut r = Runtime::default();
    r.enter("s = SOUND\ns <- TREMOLO 1");
    assert_eq!(exec(&mut r), "MISSING ARGUMENTS IN 2\n");
    r.enter("s <- AMP 1, 2");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 1; TOO MANY ARGUMENTS\n");
    r.enter("s <- x");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 1; UNKNOWN FILTER X\n");
    r.enter("x = 1\nx <- AMP 2");
    assert_eq!(
        exec(&mut r),
        "ARGUMENT TYPE ERROR IN 2; EXPECTED SOUND, FOUND float\n"
    );
}

#[test]
fn test_play_rejects_number_as_sound() {
    let mut r = Runtime::default();
    r.enter("PLAY 1, 1, 1, 5");
    assert_eq!(
        exec(&mut r),
        "ARGUMENT TYPE ERROR IN 1; EXPECTED SOUND, FOUND NUMBER\n"
    );
}

#[test]
fn test_play_array_of_frequencies() {
    let mut r = Runtime::default();
    r.enter("f = [440, 660]\nPLAY f");
    assert_eq!(exec(&mut r), "[Play [440.0, 660.0] 1 80 Sine 0]\n");
    r.enter("PLAY [220, 0, -5 + 1], 2");
    assert_eq!(exec(&mut r), "[Play [220.0, 1.0, 1.0] 2 80 Sine 0]\n");
}

#[test]
fn test_play_array_capped() {
    let mut r = Runtime::default();
    r.enter("f = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18]\nPLAY f");
    match r.execute(1000) {
        Event::Play(play) => {
            assert_eq!(play.frequencies.len(), 16);
            assert_eq!(play.frequencies[15], 16.0);
        }
        event => panic!("{:?}", event),
    }
}

#[test]
fn test_print_array() {
    let mut r = Runtime::default();
    r.enter("x = 2\nf = [1.5, x * 3]\nPRINT f\nPRINT [7, 8]\nPRINT []");
    assert_eq!(exec(&mut r), "[1.5, 6]\n[7, 8]\n[]\n");
}

#[test]
fn test_array_declaration_replaces_type() {
    let mut r = Runtime::default();
    r.enter("f = 1\nf = [3, 4]\ng = f\nPRINT g");
    assert_eq!(exec(&mut r), "[3, 4]\n");
    r.enter("f += 1");
    assert_eq!(
        exec(&mut r),
        "ARGUMENT TYPE ERROR IN 1; EXPECTED NUMBER, FOUND array\n"
    );
    r.enter("BEEP f");
    assert_eq!(
        exec(&mut r),
        "ARGUMENT TYPE ERROR IN 1; EXPECTED NUMBER, FOUND array\n"
    );
}

#[test]
fn test_array_syntax_errors() {
    let mut r = Runtime::default();
    r.enter("f = [440, 660");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 1; UNMATCHED [\n");
    r.enter("f = [1, y]");
    assert_eq!(exec(&mut r), "ARGUMENT TYPE ERROR IN 1; UNDEFINED VARIABLE\n");
}

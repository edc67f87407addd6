/*!
# `PLAY [<frequency>][, <duration>][, <volume>][, <sound>]`

## Purpose
Play a tone through a sound.

## Remarks
Frequency defaults to 500 Hz; zero or less becomes 1 Hz. An array of
frequencies plays them together, up to 16 of them. Duration
defaults to 1 second. Volume runs from 0 to 100 and defaults to 80;
anything outside that range uses 80. Started with `--safe`, volume is
always 35. Without a sound a plain sine wave is used.

## Example
```text
s = SOUND OSC_TRIANGLE_WAVE
PLAY 330, 0.5, 60, s
PLAY 440
PLAY [262, 330, 392], 2
```

*/

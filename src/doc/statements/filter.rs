/*!
# `<sound> <- <filter> [<arguments>]`

## Purpose
Add a filter to the end of a sound's filter chain.

## Remarks
Each filter takes a fixed number of arguments. Leaving one out is a
`MISSING ARGUMENTS` error when the statement runs. Giving too many is a
`COMPILE ERROR`.

| Filter      | Arguments |
|-------------|-----------|
| `FADE_IN`   | 1         |
| `FADE_OUT`  | 1         |
| `AMP`       | 1         |
| `TREMOLO`   | 2         |
| `ADSR`      | 4         |
| `LOW_PASS`  | 1         |
| `HIGH_PASS` | 1         |
| `VIBRATO`   | 2         |
| `WAH`       | 1         |
| `DELAY`     | 2         |
| `REVERB`    | 1         |

## Example
```text
s = SOUND OSC_SAW_WAVE
s <- ADSR(0.1, 0.2, 0.7, 0.3)
s <- LOW_PASS 1200
```

*/

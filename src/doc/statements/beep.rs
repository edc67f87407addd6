/*!
# `BEEP [<frequency>][, <duration>]`

## Purpose
Sound a plain tone.

## Remarks
Frequency defaults to 500 Hz and duration to 1 second. The program
waits until the tone has finished.

## Example
```text
BEEP 880, 0.2
BEEP , 2
```

*/

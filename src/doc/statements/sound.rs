/*!
# `<name> = SOUND [<wave>]`

## Purpose
Create a sound from an oscillator.

## Remarks
The wave is one of the `OSC_` constants, or 0 to 4. It defaults to the
sine wave. Anything else is an `ARGUMENT TYPE ERROR`. The variable is
redefined as a new sound with no filters.

## Example
```text
s = SOUND OSC_WHITE_NOISE
PRINT s
[sound]
```

*/

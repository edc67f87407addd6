/*!
# Expressions and Types

All arithmetic is done on 64-bit floating point numbers. A variable
takes its type from the first value assigned to it and keeps it.
Assigning a number to a sound variable is an error.

```text
freq = 440
s = SOUND
s2 = s       # s2 and s are the same sound
```

Names are letters, digits and underbars, starting with a letter or
underbar. Reserved words must be written all lowercase or all
uppercase; `Print` is an ordinary name.

## Literals

Numbers may have a fraction. A minus sign directly before a number is
part of it when no operand comes before it. Strings are quoted with
`"` and may not span lines. `#` starts a comment.

The following names are constants.

| Name                | Value |
|---------------------|-------|
| `OSC_SINE_WAVE`     | 0     |
| `OSC_SAW_WAVE`      | 1     |
| `OSC_SQUARE_WAVE`   | 2     |
| `OSC_TRIANGLE_WAVE` | 3     |
| `OSC_WHITE_NOISE`   | 4     |

## Arrays

Square brackets hold a list of numbers. Assigning one gives the variable
the array type, whatever it held before. Arrays can be printed, copied
and given to `PLAY` as its frequency.

```text
chord = [262, 330, 392]
PRINT chord          # [262, 330, 392]
```

## Operators

There are two levels of precedence. Operators of the same level are
evaluated left to right. Use parentheses for anything else.

| Level | Operators                                          |
|-------|----------------------------------------------------|
| 2     | `*` `/` `//` `%`                                    |
| 1     | `+` `-` `==` `!=` `<` `<=` `>` `>=` `AND` `OR`      |

`//` divides and rounds down. Comparisons, `AND` and `OR` give 1 for
true and 0 for false. Any non-zero number is true. Dividing by zero
is an `ARITHMETIC ERROR`.

```text
PRINT 1 + 2 < 4      # (1 + 2) < 4 is 1
PRINT 7 // 2 % 2     # (7 // 2) % 2 is 1
```

*/

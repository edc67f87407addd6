/*!
# `PRINT <expression>`

## Purpose
Output a value followed by a newline.

## Remarks
Numbers print without trailing zeros. Sounds and filters print as
`[sound]` and `[filter]`.

## Example
```text
PRINT "Hello World"
Hello World
PRINT 10 / 4
2.5
```

*/

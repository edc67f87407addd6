/*!
# `<name> = <expression>`
Also `<name> += <expression>` with `-=`, `*=`, `/=` and `%=`.

## Purpose
Store a value in a variable.

## Remarks
A name on its own on the right copies the whole variable, so sounds are
shared between the two names. A list in square brackets makes the
variable an array. A compound assignment needs the variable
to hold a number already.

## Example
```text
x = 2
x *= 3 + 1
PRINT x
8
```

*/

/*!
# `IF [NOT] <expression> THEN` ... `[ELSIF ...]` `[ELSE]` ... `END`

## Purpose
Run statements contingent on a predicate.

## Remarks
`THEN` ends the line. Any non-zero value is true. `NOT` runs the block
when the expression is zero.

## Example
```text
x = 3
IF x > 5 THEN
    PRINT "big"
ELSIF NOT x THEN
    PRINT "zero"
ELSE
    PRINT "small"
END
small
```

*/

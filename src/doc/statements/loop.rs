/*!
# `LOOP <count> BEGIN` ... `END`

## Purpose
Repeat statements a number of times.

## Remarks
The count is evaluated once, before the first pass, and its fraction
is dropped. A count below 1 skips the block. Loops may be nested.

## Example
```text
n = 0
LOOP 3 BEGIN
    n += 1
    PRINT n
END
1
2
3
```

*/

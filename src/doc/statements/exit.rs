/*!
# `EXIT`

## Purpose
Stop the program.

## Remarks
A program also stops after its last statement. In the interactive
session, `EXIT` on a line by itself leaves the session instead.

*/

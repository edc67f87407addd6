/*!
# Limits and Internals

Oto is a compiler. Source text is split into tokens, and every distinct
lexeme is interned once into a token table. The table holds at most
4096 entries, including the symbols, reserved words and constants that
are registered before anything else. Running out is a
`TOO MANY TOKENS` error.

Each token code also names a variable slot. Literals fill their own
slots, so `PRINT 3` reads the number 3 from a slot like any variable.

Expressions are reordered into reverse Polish notation and compiled to
instructions of one opcode and four operands. Every operator stores its
result in a hidden slot as well as pushing it on the stack. Run with
`--dump` to see the tokens and the disassembly.

```text
    0 :      Push                 a
    1 :     PushC                 1
    2 :       Add                $0                 a                 1
    3 :      CpyD                 x
    4 :      Exit
```

The operand stack holds at most 1024 entries. An entry is a variable
reference, a number, or a marker for a left out argument.

Loops keep their counters in hidden slots per nesting level.

*/

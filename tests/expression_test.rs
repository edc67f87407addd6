mod common;
use common::*;
use oto::mach::Runtime;

#[test]
fn test_precedence() {
    let mut r = Runtime::default();
    r.enter("PRINT 2 + 3 * 4");
    assert_eq!(exec(&mut r), "14\n");
    r.enter("PRINT (2 + 3) * 4");
    assert_eq!(exec(&mut r), "20\n");
}

#[test]
fn test_left_assoc() {
    let mut r = Runtime::default();
    r.enter("PRINT 1.5 / 2 * 3");
    assert_eq!(exec(&mut r), "2.25\n");
    r.enter("PRINT 10 - 4 - 3");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_int_division_and_modulus() {
    let mut r = Runtime::default();
    r.enter("PRINT 10 / 4");
    assert_eq!(exec(&mut r), "2.5\n");
    r.enter("PRINT 10 // 4");
    assert_eq!(exec(&mut r), "2\n");
    r.enter("PRINT 10 % 4");
    assert_eq!(exec(&mut r), "2\n");
    r.enter("PRINT -7 // 2");
    assert_eq!(exec(&mut r), "-4\n");
}

#[test]
fn test_comparisons_share_additive_level() {
    let mut r = Runtime::default();
    r.enter("PRINT 1 + 2 < 4");
    assert_eq!(exec(&mut r), "1\n");
    r.enter("PRINT 3 == 3");
    assert_eq!(exec(&mut r), "1\n");
    r.enter("PRINT 3 != 3");
    assert_eq!(exec(&mut r), "0\n");
    r.enter("PRINT 2 >= 3 or 1");
    assert_eq!(exec(&mut r), "1\n");
    r.enter("PRINT 1 and 0");
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_division_by_zero() {
    let mut r = Runtime::default();
    r.enter("PRINT 10 / 0");
    assert_eq!(exec(&mut r), "ARITHMETIC ERROR IN 1; DIVISION BY ZERO\n");
    r.enter("PRINT 1\nPRINT 10 % 0");
    assert_eq!(exec(&mut r), "1\nARITHMETIC ERROR IN 2; MODULO BY ZERO\n");
}

#[test]
fn test_undefined_variable() {
    let mut r = Runtime::default();
    r.enter("PRINT a + 1");
    assert_eq!(
        exec(&mut r),
        "ARGUMENT TYPE ERROR IN 1; UNDEFINED VARIABLE\n"
    );
}

#[test]
fn test_unbalanced_parens() {
    let mut r = Runtime::default();
    r.enter("PRINT (1 + 2");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 1; UNMATCHED (\n");
    r.enter("PRINT 1 + 2)");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 1; UNMATCHED )\n");
}

#[test]
fn test_constants() {
    let mut r = Runtime::default();
    r.enter("PRINT OSC_WHITE_NOISE * 2");
    assert_eq!(exec(&mut r), "8\n");
}

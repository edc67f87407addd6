mod common;
use common::*;
use oto::mach::Runtime;

#[test]
fn test_print_string() {
    let mut r = Runtime::default();
    r.enter(r#"PRINT "Hello World""#);
    assert_eq!(exec(&mut r), "Hello World\n");
}

#[test]
fn test_variables_persist_between_entries() {
    let mut r = Runtime::default();
    r.enter("x = 2");
    assert_eq!(exec(&mut r), "");
    r.enter("x *= 3 + 1 : PRINT x");
    assert_eq!(exec(&mut r), "8\n");
}

#[test]
fn test_compound_assignments() {
    let mut r = Runtime::default();
    r.enter("x = 10\nx += 5\nx -= 1\nx /= 2\nx %= 4\nPRINT x");
    assert_eq!(exec(&mut r), "3\n");
}

#[test]
fn test_if_elsif_else() {
    let mut r = Runtime::default();
    let program = "IF x > 5 THEN\nPRINT \"big\"\nELSIF NOT x THEN\nPRINT \"zero\"\nELSE\nPRINT \"small\"\nEND";
    r.enter("x = 9");
    exec(&mut r);
    r.enter(program);
    assert_eq!(exec(&mut r), "big\n");
    r.enter("x = 0");
    exec(&mut r);
    r.enter(program);
    assert_eq!(exec(&mut r), "zero\n");
    r.enter("x = 3");
    exec(&mut r);
    r.enter(program);
    assert_eq!(exec(&mut r), "small\n");
}

#[test]
fn test_if_without_else() {
    let mut r = Runtime::default();
    r.enter("IF 0 THEN : PRINT 1 : END : PRINT 2");
    assert_eq!(exec(&mut r), "2\n");
    r.enter("IF NOT 0 THEN : PRINT 1 : END");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_exit() {
    let mut r = Runtime::default();
    r.enter("PRINT 1\nEXIT\nPRINT 2");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_comments_and_blank_lines() {
    let mut r = Runtime::default();
    r.enter("# nothing here\n\nPRINT 1 # one\n\n");
    assert_eq!(exec(&mut r), "1\n");
}

#[test]
fn test_number_cannot_replace_sound() {
    let mut r = Runtime::default();
    r.enter("s = SOUND\ns = 3");
    assert_eq!(
        exec(&mut r),
        "ARGUMENT TYPE ERROR IN 2; CANNOT ASSIGN NUMBER TO sound\n"
    );
}

#[test]
fn test_compile_errors_report_line() {
    let mut r = Runtime::default();
    r.enter("PRINT 1\nIF 1\nEND");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 2; MISSING THEN\n");
    r.enter("LOOP 2 BEGIN\nPRINT 1");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 2; MISSING END\n");
    r.enter("ELSE");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 1; ELSE WITHOUT BLOCK\n");
    r.enter("BPM 120");
    assert_eq!(exec(&mut r), "COMPILE ERROR IN 1; UNSUPPORTED STATEMENT BPM\n");
}

#[test]
fn test_lexical_error() {
    let mut r = Runtime::default();
    r.enter("PRINT 1 ? 2");
    assert_eq!(
        exec(&mut r),
        "LEXICAL ERROR IN 1 (8..9); UNRECOGNIZED CHARACTER\n"
    );
}

#[test]
fn test_assign_string_and_filter() {
    let mut r = Runtime::default();
    r.enter("t = \"hi\" : f = FADE_IN : PRINT t : PRINT f");
    assert_eq!(exec(&mut r), "hi\n[filter]\n");
}

use oto::lang::{tokenize, Class, ErrorCode, Symbol, TokenTable, Word};

#[test]
fn test_words_are_case_uniform() {
    let mut t = TokenTable::new();
    let tokens = tokenize(&mut t, "print PRINT Print").unwrap();
    assert_eq!(tokens[0], Word::Print.code());
    assert_eq!(tokens[1], Word::Print.code());
    assert_ne!(tokens[2], Word::Print.code());
    assert_eq!(t.class(tokens[2]), Some(Class::Ident));
}

#[test]
fn test_same_text_same_code() {
    let mut t = TokenTable::new();
    let first = tokenize(&mut t, "freq = freq + 1").unwrap();
    assert_eq!(first[0], first[2]);
    let second = tokenize(&mut t, "PRINT freq").unwrap();
    assert_eq!(second[1], first[0]);
}

#[test]
fn test_symbols_have_fixed_codes() {
    let mut t = TokenTable::new();
    let tokens = tokenize(&mut t, "a <- b\n").unwrap();
    assert_eq!(tokens[1], Symbol::LArrow.code());
    assert_eq!(tokens[3], Symbol::LineFeed.code());
}

#[test]
fn test_minus_after_operand_is_operator() {
    let mut t = TokenTable::new();
    let tokens = tokenize(&mut t, "x-1").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1], Symbol::Minus.code());
    let tokens = tokenize(&mut t, "x = -1").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(t.text(tokens[2]), "-1");
}

#[test]
fn test_unterminated_string() {
    let mut t = TokenTable::new();
    let e = tokenize(&mut t, "print \"abc\nprint 1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::LexicalError);
    assert_eq!(e.line_number(), Some(1));
}

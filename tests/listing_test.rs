use oto::lang::{tokenize, TokenTable};
use oto::mach::{compile, Listing, Opcode, Operand, Runtime};

const SOURCE: &str = "s = SOUND OSC_SAW_WAVE
s <- DELAY 0.2, 0.5
x = 1
LOOP 2 BEGIN
    IF x % 2 == 1 THEN
        BEEP x * 100
    ELSE
        PLAY 440, 1, 60, s
    END
    x += 1
END
";

#[test]
fn test_disassembly_round_trip() {
    let mut tokens = TokenTable::new();
    let source = tokenize(&mut tokens, SOURCE).unwrap();
    let program = compile(&mut tokens, &source).unwrap();
    let text = Listing::program(&tokens, &program);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), program.len());
    for ((addr, ins), line) in program.iter().zip(lines) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields[0].parse::<usize>().unwrap(), addr);
        assert_eq!(fields[1], ":");
        assert_eq!(fields[2].parse::<Opcode>().unwrap(), ins.opcode());
        let operands: Vec<String> = ins
            .operands()
            .map(|operand| match operand {
                Operand::Var(code) => tokens.text(*code).to_string(),
                Operand::Addr(addr) => addr.to_string(),
                Operand::Count(n) => format!("#{}", n),
                Operand::Empty => String::new(),
            })
            .collect();
        assert_eq!(&fields[3..], operands.as_slice());
    }
    assert_eq!(program.get(program.len() - 1).unwrap().opcode(), Opcode::Exit);
}

#[test]
fn test_branch_targets_in_range() {
    let mut tokens = TokenTable::new();
    let source = tokenize(&mut tokens, SOURCE).unwrap();
    let program = compile(&mut tokens, &source).unwrap();
    for (_, ins) in program.iter() {
        if ins.opcode().is_branch() {
            assert!(ins.target().unwrap() < program.len());
        }
    }
}

#[test]
fn test_variable_dump_lists_user_variables() {
    let mut r = Runtime::default();
    r.enter("x = 2 * 3\ns = SOUND\nt = \"hi\"");
    while r.execute(100) != oto::mach::Event::Stopped {}
    assert_eq!(
        Listing::variables(r.tokens(), r.vars()),
        "       x(float) : 6\n       s(sound) : wave 0 with 0 filter(s)\n       t(string) : \"hi\"\n"
    );
}

#[test]
fn test_token_dump_starts_with_symbols() {
    let tokens = TokenTable::new();
    let dump = Listing::tokens(&tokens);
    let mut lines = dump.lines();
    assert_eq!(lines.next(), Some("tc[   0] : \\n"));
    assert_eq!(lines.next(), Some("tc[   1] : ,"));
    assert_eq!(dump.lines().count(), tokens.len());
}

#[test]
fn test_variable_dump_lists_arrays() {
    let mut r = Runtime::default();
    r.enter("f = [440, 660.5]\nPLAY [1, 2]");
    while r.execute(100) != oto::mach::Event::Stopped {}
    assert_eq!(
        Listing::variables(r.tokens(), r.vars()),
        "       f(array) : [440, 660.5]\n"
    );
    let text = Listing::program(r.tokens(), r.program());
    let def: Vec<&str> = text.lines().nth(2).unwrap().split_whitespace().collect();
    assert_eq!(def, vec!["2", ":", "DefA", "f", "#2"]);
}

use hackasm::{assemble, Error};

fn case(code: &str, expects: &[&str]) {
    let program = assemble(code.as_bytes()).unwrap();
    for encoded in &program.lines {
        println!("[{:04}] {} {}", encoded.rom, encoded.bin, encoded.line.text);
    }

    let bins: Vec<_> = program.lines.iter().map(|e| e.bin.as_str()).collect();
    assert_eq!(bins, expects);

    let mut out = vec![];
    program.write_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), expects);
    assert!(text.is_empty() || text.ends_with('\n'));
}

fn parse_error(code: &str) -> (usize, usize) {
    match assemble(code.as_bytes()) {
        Err(Error::Parse { line, source, .. }) => (line, source.pos),
        Err(err) => panic!("expected a parse error, got: {}", err),
        Ok(_) => panic!("expected a parse error for {:?}", code),
    }
}

#[test]
fn max() {
    case(
        "
// Computes R2 = max(R0, R1)
   @R0
   D=M              // D = first number
   @R1
   D=D-M            // D = first number - second number
   @OUTPUT_FIRST
   D;JGT            // if D>0 (first is greater) goto output_first
   @R1
   D=M              // D = second number
   @OUTPUT_D
   0;JMP            // goto output_d
(OUTPUT_FIRST)
   @R0
   D=M              // D = first number
(OUTPUT_D)
   @R2
   M=D              // M[2] = D (greatest number)
(INFINITE_LOOP)
   @INFINITE_LOOP
   0;JMP            // infinite loop
",
        &[
            "0000000000000000",
            "1111110000010000",
            "0000000000000001",
            "1111010011010000",
            "0000000000001010",
            "1110001100000001",
            "0000000000000001",
            "1111110000010000",
            "0000000000001100",
            "1110101010000111",
            "0000000000000000",
            "1111110000010000",
            "0000000000000010",
            "1110001100001000",
            "0000000000001110",
            "1110101010000111",
        ],
    );
}

#[test]
fn sum() {
    case(
        "
// Computes RAM[1] = 1 + 2 + ... + RAM[0]
    @i
    M=1     // i = 1
    @sum
    M=0     // sum = 0
(LOOP)
    @i
    D=M
    @R0
    D=D-M
    @END
    D;JGT   // if (i - n) > 0 goto END
    @i
    D=M
    @sum
    M=D+M   // sum += i
    @i
    M=M+1   // i++
    @LOOP
    0;JMP
(END)
    @sum
    D=M
    @R1
    M=D
(HALT)
    @HALT
    0;JMP
",
        &[
            "0000000000010000",
            "1110111111001000",
            "0000000000010001",
            "1110101010001000",
            "0000000000010000",
            "1111110000010000",
            "0000000000000000",
            "1111010011010000",
            "0000000000010010",
            "1110001100000001",
            "0000000000010000",
            "1111110000010000",
            "0000000000010001",
            "1111000010001000",
            "0000000000010000",
            "1111110111001000",
            "0000000000000100",
            "1110101010000111",
            "0000000000010001",
            "1111110000010000",
            "0000000000000001",
            "1110001100001000",
            "0000000000010110",
            "1110101010000111",
        ],
    );
}

#[test]
fn vm_style_symbols() {
    case(
        "(Main.main$ret.0)\n@Main.main$ret.0\n0;JMP\n@Main.count\nM=0\n",
        &[
            "0000000000000000",
            "1110101010000111",
            "0000000000010000",
            "1110101010001000",
        ],
    );
}

#[test]
fn empty_program() {
    case("", &[]);
    case("\n   \n// nothing here\n", &[]);
}

#[test]
fn malformed_lines() {
    assert_eq!(parse_error("@"), (1, 1));
    assert_eq!(parse_error("@0@"), (1, 3));
    assert_eq!(parse_error("@0\n(1Label)"), (2, 2));
    assert_eq!(parse_error("\nD="), (2, 2));
    assert_eq!(parse_error(";JMP"), (1, 1));
    assert_eq!(parse_error("@1\n\n  D / x"), (3, 3));
}

#[test]
fn failures_produce_no_program() {
    let err = assemble("@0\nD=M\n@foo\nMD=Q\n".as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "Cannot encode comp `Q`");
    match err {
        Error::Encode { line, text, .. } => {
            assert_eq!(line, 4);
            assert_eq!(text, "MD=Q");
        }
        err => panic!("unexpected error: {}", err),
    }
}

#[test]
fn undefined_symbols_become_variables() {
    let program = assemble("@a\n@b\n@a\n@R3\n@c\n".as_bytes()).unwrap();
    let addrs: Vec<_> = program
        .lines
        .iter()
        .map(|e| u16::from_str_radix(&e.bin, 2).unwrap())
        .collect();
    assert_eq!(addrs, vec![16, 17, 16, 3, 18]);
    assert_eq!(program.symbols.get("c"), Ok(18));
}

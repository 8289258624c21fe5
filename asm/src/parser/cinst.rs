use crate::{cursor::Cursor, error::ParseError};

/// `dest=comp;jump` split into its three mnemonics. Empty `dest`/`jump`
/// mean no store and no jump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputeInstruction {
    pub dest: String,
    pub comp: String,
    pub jump: String,
}

impl ComputeInstruction {
    pub fn new(dest: &str, comp: &str, jump: &str) -> Self {
        Self {
            dest: dest.to_string(),
            comp: comp.to_string(),
            jump: jump.to_string(),
        }
    }
}

/// Field the buffer is committed to at end of line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Comp,
    Jump,
}

pub struct ComputeParser<'a> {
    cursor: Cursor<'a>,
    buf: String,
    instr: ComputeInstruction,
    pending: Pending,
}

impl<'a> ComputeParser<'a> {
    /// Splits a C-instruction. Whitespace anywhere is ignored and `//` ends
    /// the instruction. The mnemonics themselves are checked by the encoder.
    pub fn parse(line: &'a str) -> Result<ComputeInstruction, ParseError> {
        let mut parser = ComputeParser {
            cursor: Cursor::new(line),
            buf: String::with_capacity(3),
            instr: ComputeInstruction::default(),
            pending: Pending::Comp,
        };
        while let Some((ch, pos)) = parser.cursor.next() {
            match ch {
                '=' => parser.close_dest(pos)?,
                ';' => parser.close_comp(pos)?,
                '/' => {
                    parser.check_comment(pos)?;
                    break;
                }
                ch if ch.is_whitespace() => {}
                ch => parser.buf.push(ch),
            }
        }
        parser.finish()
    }

    fn close_dest(&mut self, pos: usize) -> Result<(), ParseError> {
        if self.buf.is_empty() {
            return Err(ParseError::new(pos, "Dest must be set up before '='"));
        }
        if !self.instr.dest.is_empty() || self.pending == Pending::Jump {
            return Err(ParseError::new(pos, "Unexpected '='"));
        }
        self.instr.dest = std::mem::take(&mut self.buf);
        Ok(())
    }

    fn close_comp(&mut self, pos: usize) -> Result<(), ParseError> {
        if self.pending == Pending::Jump {
            return Err(ParseError::new(pos, "Unexpected second ';'"));
        }
        if self.buf.is_empty() {
            let msg = if self.instr.dest.is_empty() {
                "Computation absent before Jump"
            } else {
                "Computation operator absent after Destination"
            };
            return Err(ParseError::new(pos, msg));
        }
        self.instr.comp = std::mem::take(&mut self.buf);
        self.pending = Pending::Jump;
        Ok(())
    }

    fn check_comment(&self, pos: usize) -> Result<(), ParseError> {
        match self.cursor.peek() {
            Some('/') => Ok(()),
            _ => Err(ParseError::new(pos, "Expected '/' for the inline comment")),
        }
    }

    fn finish(mut self) -> Result<ComputeInstruction, ParseError> {
        let pos = self.cursor.pos();
        match self.pending {
            Pending::Jump => {
                if self.buf.is_empty() {
                    return Err(ParseError::new(pos, "Jump must be set up after ';'"));
                }
                self.instr.jump = self.buf;
            }
            Pending::Comp => {
                if self.buf.is_empty() && !self.instr.dest.is_empty() {
                    return Err(ParseError::new(
                        pos,
                        "Computation operator absent after Destination",
                    ));
                }
                self.instr.comp = self.buf;
            }
        }
        Ok(self.instr)
    }
}

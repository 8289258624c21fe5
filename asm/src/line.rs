/// A trimmed source line and its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub no: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(no: usize, raw: &str) -> Self {
        Self {
            no,
            text: raw.trim().to_string(),
        }
    }

    pub fn kind(&self) -> LineKind {
        classify(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Label,
    Address,
    Compute,
}

/// Classifies a trimmed line by its leading characters. Blank lines are the
/// caller's business.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with("//") {
        LineKind::Comment
    } else if line.starts_with('(') {
        LineKind::Label
    } else if line.starts_with('@') {
        LineKind::Address
    } else {
        LineKind::Compute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_prefix() {
        assert_eq!(classify("// comment"), LineKind::Comment);
        assert_eq!(classify("(LOOP)"), LineKind::Label);
        assert_eq!(classify("@i"), LineKind::Address);
        assert_eq!(classify("D=M"), LineKind::Compute);
        assert_eq!(classify("0;JMP"), LineKind::Compute);
        // a single slash is not a comment
        assert_eq!(classify("/ x"), LineKind::Compute);
    }

    #[test]
    fn source_line_is_trimmed() {
        let line = SourceLine::new(7, "\t  @R0 // first \r");
        assert_eq!(line.no, 7);
        assert_eq!(line.text, "@R0 // first");
        assert_eq!(line.kind(), LineKind::Address);
    }
}

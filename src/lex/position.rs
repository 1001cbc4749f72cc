use ecow::EcoString;

/// Read cursor into a source text: absolute character offset plus the
/// human-facing line and column, along with the name and full text of the
/// source it points into.
///
/// A freshly created position sits *before* the input (`offset == -1`,
/// `column == -1`) so that the first advance lands on offset 0. The lexer is
/// the only writer; anything that must survive a later advance (error ranges)
/// clones the position first.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Position {
    pub offset: i32,
    pub line: u32,
    pub column: i32,
    pub source_name: EcoString,
    pub source_text: EcoString,
}

impl Position {
    #[must_use]
    pub fn new(source_name: &str, source_text: &str) -> Self {
        Position {
            offset: -1,
            line: 0,
            column: -1,
            source_name: source_name.into(),
            source_text: source_text.into(),
        }
    }

    /// Move one character forward. `consumed_char` is the character the
    /// cursor is stepping over; stepping over a newline starts the next line.
    pub fn advance(&mut self, consumed_char: Option<char>) {
        self.offset += 1;
        self.column += 1;

        if consumed_char == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
    }
}

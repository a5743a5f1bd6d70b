/// Marker lines delimiting the meaningful region of a draw stream. The
/// markers only need to appear as a substring of a line, not match it whole.
pub const BEGIN_MARKER: &str = "%%%BEGIN";
pub const END_MARKER: &str = "%%%END";

/// One tokenized line of the drawing-command stream. The parser does not
/// interpret the tokens; a coordinate pair and a stroke keyword look the
/// same at this level.
#[derive(Debug, Clone, PartialEq)]
pub struct Command(pub Vec<String>);

impl Command {
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The line re-joined with single spaces, i.e. the original text modulo
    /// whitespace normalization.
    pub fn rejoin(&self) -> String {
        self.0.join(" ")
    }
}

pub type CommandStream = Vec<Command>;

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A position in the input where a top-level parse stopped
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// Byte position in `code` where parsing stopped
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// The unconsumed input from this location on
    pub fn residue(&self) -> &'code str {
        self.code.get(self.loc..).unwrap_or("")
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Note: We return byte offset instead of column number because column
    /// calculation depends on encoding, tab width and rendering. The byte
    /// offset within the line is unambiguous and useful for debugging.
    pub fn readable_position(&self) -> ReadablePosition {
        let consumed = self.code.get(..self.loc).unwrap_or(self.code);
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |idx| idx + 1);

        ReadablePosition {
            line,
            byte_offset: consumed.len() - line_start,
        }
    }

    /// Get lines of context around the position
    /// Returns up to 2 lines before and after the line parsing stopped on
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (idx, content) in self.code.split('\n').enumerate() {
            let current_line = idx + 1;
            if current_line < first || current_line > last {
                continue;
            }
            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The parser did not match at the reported location
    NoMatch,
    /// The parser matched but left unconsumed input behind
    TrailingInput,
}

/// Why and where a complete parse of an input did not succeed
///
/// Combinators never report failures themselves; this only records the
/// residue left by the top-level attempt so it can be shown to a human.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure<'code> {
    pub kind: FailureKind,
    pub loc: CodeLoc<'code>,
}

impl<'code> ParseFailure<'code> {
    pub fn new(kind: FailureKind, loc: CodeLoc<'code>) -> Self {
        Self { kind, loc }
    }

    /// Returns the byte position where parsing stopped
    pub fn position(&self) -> usize {
        self.loc.position()
    }

    pub fn residue(&self) -> &'code str {
        self.loc.residue()
    }
}

impl fmt::Display for ParseFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.loc.readable_position();
        let what = match self.kind {
            FailureKind::NoMatch => "No match",
            FailureKind::TrailingInput => "Unconsumed input",
        };
        writeln!(
            f,
            "{} at line {}, byte offset {} (absolute position: {})",
            what,
            pos.line,
            pos.byte_offset,
            self.loc.position()
        )?;
        writeln!(f)?;
        for line in self.loc.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Error for ParseFailure<'_> {}

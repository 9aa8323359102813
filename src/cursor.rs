use std::fmt;

/// A read-only view over the unconsumed part of an input string
///
/// A cursor is a borrowed `&str` plus a byte position that always lies on a
/// char boundary. It is `Copy`, so parsers take it by value and hand back an
/// advanced copy on success. A failing parser simply drops its copy, which
/// leaves the caller's cursor exactly where it was.
///
/// Two cursors compare equal when the same residual content remains, even if
/// they were created over different buffers.
#[derive(Copy, Clone)]
pub struct Cursor<'code> {
    data: &'code str,
    /// Byte position in `data` (always on a char boundary)
    position: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(data: &'code str) -> Self {
        Cursor { data, position: 0 }
    }

    /// Peek at the next character without consuming it
    ///
    /// Returns `None` at end of input
    pub fn value(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance past the next character
    ///
    /// If already at the end, returns a cursor still positioned at the end
    #[allow(clippy::should_implement_trait)]
    pub fn next(self) -> Self {
        match self.value() {
            Some(ch) => Cursor {
                data: self.data,
                position: self.position + ch.len_utf8(),
            },
            None => self,
        }
    }

    /// Advance by `len` bytes of the remaining input
    ///
    /// Returns `None` if `len` runs past the end or does not land on a char
    /// boundary.
    pub fn advance(self, len: usize) -> Option<Self> {
        if !self.remaining().is_char_boundary(len) {
            return None;
        }
        Some(Cursor {
            data: self.data,
            position: self.position + len,
        })
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Byte position of the cursor in the full input
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed remainder of the input (the residue)
    pub fn remaining(&self) -> &'code str {
        &self.data[self.position..]
    }

    /// The full input this cursor was created over
    pub fn source(&self) -> &'code str {
        self.data
    }

    /// Consume the cursor and return the full input and current position
    pub fn inner(self) -> (&'code str, usize) {
        (self.data, self.position)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Split off the maximal run of characters satisfying `predicate`
    ///
    /// Always succeeds; the run may be empty.
    pub fn take_while<F>(self, mut predicate: F) -> (&'code str, Self)
    where
        F: FnMut(char) -> bool,
    {
        let rest = self.remaining();
        let len = rest
            .char_indices()
            .find(|&(_, ch)| !predicate(ch))
            .map_or(rest.len(), |(idx, _)| idx);
        let taken = &rest[..len];
        (
            taken,
            Cursor {
                data: self.data,
                position: self.position + len,
            },
        )
    }

    /// The slice of input consumed between `self` and a later cursor `end`
    ///
    /// Both cursors must come from the same input; an `end` that lies behind
    /// `self` yields an empty slice.
    pub fn consumed_until(&self, end: &Cursor<'code>) -> &'code str {
        let stop = end.position.max(self.position);
        &self.data[self.position..stop]
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining()
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl<'code> From<&'code str> for Cursor<'code> {
    fn from(data: &'code str) -> Self {
        Cursor::new(data)
    }
}

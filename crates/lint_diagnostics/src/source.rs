use crate::Span;
use std::sync::Arc;

/// An immutable, NUL-terminated source buffer, reference-counted so
/// diagnostics may outlive the file handle that produced them (spec §3
/// "Source unit").
#[derive(Debug, Clone)]
pub struct SourceFile {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    name: Option<String>,
    // `text` excludes the trailing NUL; `buffer` is what callers that need
    // the sentinel (the lexer) should look at.
    text: String,
    buffer: Vec<u8>,
    line_starts: Vec<u32>,
}

impl SourceFile {
    pub fn new(text: impl Into<String>, name: Option<String>) -> Self {
        let text = text.into();
        let mut buffer = Vec::with_capacity(text.len() + 1);
        buffer.extend_from_slice(text.as_bytes());
        buffer.push(0);

        let line_starts = line_starts(&text);

        SourceFile {
            inner: Arc::new(Inner {
                name,
                text,
                buffer,
                line_starts,
            }),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.inner.text
    }

    /// The NUL-terminated byte buffer, required by the lexer (spec §4.1
    /// invariant: "Sentinel NUL at end of source is required").
    pub fn buffer(&self) -> &[u8] {
        &self.inner.buffer
    }

    pub fn len(&self) -> u32 {
        self.inner.text.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.inner.text.is_empty()
    }

    pub fn slice(&self, span: Span) -> &str {
        &self.inner.text[span.as_range()]
    }

    /// Resolve a byte offset to a 1-based `(line, column)` pair.
    pub fn line_column(&self, offset: u32) -> (u32, u32) {
        let starts = &self.inner.line_starts;
        let line_idx = match starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_at) => insert_at - 1,
        };
        let line_start = starts[line_idx];
        let column = self.inner.text[line_start as usize..offset as usize]
            .chars()
            .count() as u32;
        (line_idx as u32 + 1, column + 1)
    }
}

/// Byte offsets of the start of every line, `text`'s own start always first.
fn line_starts(text: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    starts.extend(text.match_indices('\n').map(|(i, _)| i as u32 + 1));
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nul_terminated() {
        let f = SourceFile::new("abc", None);
        assert_eq!(f.buffer().last(), Some(&0u8));
        assert_eq!(f.buffer().len(), 4);
    }

    #[test]
    fn line_column_resolution() {
        let f = SourceFile::new("abc\ndef\nghi", None);
        assert_eq!(f.line_column(0), (1, 1));
        assert_eq!(f.line_column(4), (2, 1));
        assert_eq!(f.line_column(9), (3, 2));
    }
}

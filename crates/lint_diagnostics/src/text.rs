use std::borrow::Cow;
use std::fmt;

/// A diagnostic-carried string that is either `'static` or heap-owned.
///
/// This is the clone-on-write string pattern spec §9 calls for: "Diagnostic
/// messages and source names can be either `'static` or heap-owned. Model as
/// a sum with variants `Borrowed(&str)`, `Owned(Box<str>)`". We use
/// `Cow<'static, str>` rather than hand-rolling the enum since it expresses
/// the exact same two variants with the standard library's own drop glue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(Cow<'static, str>);

impl Text {
    pub const fn borrowed(s: &'static str) -> Self {
        Text(Cow::Borrowed(s))
    }

    pub fn owned(s: impl Into<String>) -> Self {
        Text(Cow::Owned(s.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Text {
    fn from(s: &'static str) -> Self {
        Text(Cow::Borrowed(s))
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text(Cow::Owned(s))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::ops::Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

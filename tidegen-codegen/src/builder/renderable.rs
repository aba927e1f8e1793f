/// A piece of emitted code, independent of the indentation it lands at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line, terminated by `\n`.
    Line(String),
    /// Text written as is, with no indentation or terminator.
    Raw(String),
    /// A `// text` comment line.
    Comment(String),
    /// Fragments nested one level deeper.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    /// Lines nested one level deeper.
    pub fn indented_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Indent(lines.into_iter().map(|s| Self::Line(s.into())).collect())
    }
}

/// Something that lowers to a flat list of fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

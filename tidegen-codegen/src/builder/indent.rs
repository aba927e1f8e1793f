/// Unit of indentation written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// Four spaces, used for dispatch bodies.
    #[default]
    Spaces,
    /// One tab, used for fragments spliced into tab-indented host functions.
    Tab,
}

impl Indent {
    pub fn as_str(self) -> &'static str {
        match self {
            Indent::Spaces => "    ",
            Indent::Tab => "\t",
        }
    }
}

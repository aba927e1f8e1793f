use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated text while tracking the nesting level.
///
/// Chaining methods take `self` by value; `push_*` methods and [`emit`]
/// work through `&mut self` for loops and fragment trees.
///
/// ```
/// use tidegen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::c()
///     .line("if (x) {")
///     .indent()
///     .line("return 1;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "if (x) {\n    return 1;\n}\n");
/// ```
///
/// [`emit`]: CodeBuilder::emit
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    unit: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(unit: Indent) -> Self {
        Self {
            unit,
            depth: 0,
            out: String::new(),
        }
    }

    /// Four-space indentation.
    pub fn c() -> Self {
        Self::new(Indent::Spaces)
    }

    /// Tab indentation.
    pub fn tab() -> Self {
        Self::new(Indent::Tab)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.pad();
        self.out.push_str(s);
        self.out.push('\n');
        self
    }

    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.out.push_str(s);
        self
    }

    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("// {}", text))
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Step out one level; never goes below zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write every fragment of `node` at the current depth.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
            CodeFragment::Indent(nested) => {
                self.push_indent();
                for f in nested {
                    self.apply(f);
                }
                self.push_dedent();
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn raw(mut self, s: &str) -> Self {
        self.push_raw(s);
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.push_comment(text);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Fold `items` into the builder with `f`.
    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    pub fn build(self) -> String {
        self.out
    }

    fn pad(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(self.unit.as_str());
        }
    }
}

//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented source text.
///
/// ```
/// use modelgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("class Foo {")
///     .push_indent()
///     .push_line("int x;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "class Foo {\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a Javadoc comment.
    pub fn push_javadoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JavaDoc(text) => {
                self.push_javadoc(&text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::java();
        builder.push_dedent().push_line("int x;");
        assert_eq!(builder.build(), "int x;\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::javadoc("A class"),
                    CodeFragment::braced(
                        "public class Foo {",
                        vec![CodeFragment::line("private int x;")],
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "/** A class */\npublic class Foo {\n    private int x;\n}\n"
        );
    }

    #[test]
    fn test_nested_blocks_and_blank_lines() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.apply_fragment(CodeFragment::braced(
            "class A {",
            vec![
                CodeFragment::line("int x;"),
                CodeFragment::blank(),
                CodeFragment::braced("void f() {", vec![CodeFragment::line("return;")]),
            ],
        ));

        assert_eq!(
            builder.build(),
            "class A {\n  int x;\n\n  void f() {\n    return;\n  }\n}\n"
        );
    }
}

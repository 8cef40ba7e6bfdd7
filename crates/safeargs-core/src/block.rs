//! Nestable if/elseif/else accumulator for generated PHP.
//!
//! Statements are collected as pre-indented source lines in insertion order,
//! which is the canonical ordering for emitted guard and assignment logic.
//! Open blocks are tracked as an explicit stack, so closing or branching
//! without an open block is a checked precondition failure rather than
//! silent indentation corruption.

/// Spaces per indentation step in generated PHP.
const STEP: usize = 4;

/// Accumulates the lines of one or more (possibly nested) conditionals.
#[derive(Debug)]
pub struct ConditionalBlock {
    lines: Vec<String>,
    /// One marker per currently open block; depth = stack height.
    open: Vec<()>,
    base_indent: usize,
}

impl ConditionalBlock {
    /// A builder indented for a PHP method body (two steps).
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent(2 * STEP)
    }

    /// A builder with an explicit base indentation in spaces.
    #[must_use]
    pub fn with_indent(base_indent: usize) -> Self {
        Self {
            lines: Vec::new(),
            open: Vec::new(),
            base_indent,
        }
    }

    /// Current indentation for block delimiters: the base, plus one step per
    /// nesting level beyond the first.
    fn indent(&self) -> usize {
        self.base_indent + self.open.len().saturating_sub(1) * STEP
    }

    /// Open an `if` block. Nested when one is already open.
    pub fn open_if(&mut self, condition: &str) {
        self.open.push(());
        let pad = " ".repeat(self.indent());
        self.lines.push(format!("{pad}if ({condition}) {{"));
    }

    /// Append an `elseif` branch to the innermost open block.
    pub fn else_if(&mut self, condition: &str) {
        assert!(!self.open.is_empty(), "else_if() without an open if block");
        let pad = " ".repeat(self.indent());
        self.lines.push(format!("{pad}}} elseif ({condition}) {{"));
    }

    /// Append an `else` branch to the innermost open block.
    pub fn else_branch(&mut self) {
        assert!(!self.open.is_empty(), "else_branch() without an open if block");
        let pad = " ".repeat(self.indent());
        self.lines.push(format!("{pad}}} else {{"));
    }

    /// Append one statement line inside the innermost open block. The
    /// terminating `;` is added here.
    pub fn statement(&mut self, stmt: &str) {
        let pad = " ".repeat(self.indent() + STEP);
        self.lines.push(format!("{pad}{stmt};"));
    }

    /// Close the innermost open block.
    pub fn close(&mut self) {
        assert!(!self.open.is_empty(), "close() without an open if block");
        let pad = " ".repeat(self.indent());
        self.lines.push(format!("{pad}}}"));
        self.open.pop();
    }

    /// Consume the builder, yielding the accumulated lines in order.
    ///
    /// All opened blocks must have been closed.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        assert!(self.open.is_empty(), "unclosed if block");
        self.lines
    }
}

impl Default for ConditionalBlock {
    fn default() -> Self {
        Self::new()
    }
}

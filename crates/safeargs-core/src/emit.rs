//! Rendering of one PHP class definition.
//!
//! A [`ClassUnit`] is assembled right before rendering: constants, public
//! fields, and an optional constructor body, all in insertion order. It
//! borrows descriptor data, is rendered once, and is then discarded.

use std::fmt::Write;

use crate::descriptor::ArgDescriptor;
use crate::error::GenerateResult;

/// One class definition, ready to render.
#[derive(Debug)]
pub struct ClassUnit<'a> {
    name: String,
    constants: Vec<(String, String)>,
    fields: Vec<&'a ArgDescriptor>,
    constructor: Option<Vec<String>>,
}

impl<'a> ClassUnit<'a> {
    /// Create an empty class with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constants: Vec::new(),
            fields: Vec::new(),
            constructor: None,
        }
    }

    /// Append one `const NAME = "value";` declaration.
    pub fn push_constant(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.constants.push((name.into(), value.into()));
    }

    /// Append one public property declared by `descriptor`.
    pub fn push_field(&mut self, descriptor: &'a ArgDescriptor) {
        self.fields.push(descriptor);
    }

    /// Attach an already-assembled constructor body (pre-indented lines).
    pub fn set_constructor(&mut self, body: Vec<String>) {
        self.constructor = Some(body);
    }

    /// Render the class into `out`, preceded by blank-line spacing.
    pub fn render(&self, out: &mut String) -> GenerateResult<()> {
        writeln!(out)?;
        writeln!(out, "class {} {{", self.name)?;

        for (name, value) in &self.constants {
            writeln!(out, "    const {name} = \"{value}\";")?;
        }

        for field in &self.fields {
            write_field(out, field)?;
        }

        if let Some(body) = &self.constructor {
            writeln!(out)?;
            writeln!(out, "    function __construct() {{")?;
            for line in body {
                writeln!(out, "{line}")?;
            }
            writeln!(out, "    }}")?;
        }

        writeln!(out, "}}")?;
        Ok(())
    }
}

/// Write one public property declaration.
///
/// A `null` default makes the declared type nullable (`?type`); string
/// defaults other than the null sentinel are quoted.
fn write_field(out: &mut String, field: &ArgDescriptor) -> GenerateResult<()> {
    let nullable = if field.is_nullable() { "?" } else { "" };
    write!(
        out,
        "    public {nullable}{} ${}",
        field.data_type, field.field_name
    )?;

    if let Some(default) = &field.default_value {
        if field.data_type == "string" && !field.is_nullable() {
            write!(out, " = \"{default}\"")?;
        } else {
            write!(out, " = {default}")?;
        }
    }

    writeln!(out, ";")?;
    Ok(())
}

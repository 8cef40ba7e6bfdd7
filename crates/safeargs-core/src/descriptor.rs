//! Resolution of parsed schema entries into argument descriptors.
//!
//! This is the only place that looks at the string-or-mapping shape of an
//! argument spec; everything downstream consumes the flat [`ArgDescriptor`].

use tracing::debug;

use crate::error::{GenerateError, GenerateResult};
use crate::ident;
use crate::schema::{ArgSpec, SchemaDoc};

/// Suffix of the generated constants-holder class name.
const CONSTANTS_CLASS_SUFFIX: &str = "Arg";
/// Suffix of the generated data-binding class name.
const DATA_CLASS_SUFFIX: &str = "Args";

/// One declared argument, normalized for code generation.
#[derive(Debug, Clone)]
pub struct ArgDescriptor {
    /// The schema key as written, used verbatim as the runtime lookup key.
    pub raw_name: String,
    /// camelCase property name derived from `raw_name`.
    pub field_name: String,
    /// UPPER_SNAKE constant name derived from `raw_name`.
    pub constant_name: String,
    /// Declared type. `int`, `bool`, and `string` get special treatment;
    /// anything else passes through verbatim.
    pub data_type: String,
    /// Literal default text. `None` means the argument is required.
    pub default_value: Option<String>,
    /// Expression fragment appended to the raw read for boolean arguments.
    pub comparison_suffix: Option<String>,
}

impl ArgDescriptor {
    /// Resolve one argument spec. `entry` is the owning schema entry's root
    /// name, used only for error reporting.
    pub fn resolve(entry: &str, raw_name: &str, spec: &ArgSpec) -> GenerateResult<Self> {
        let (data_type, default_value, comparison_suffix) = match spec {
            ArgSpec::Shorthand(text) => match text.split_once(',') {
                // Everything after the first comma is the default, verbatim,
                // so defaults containing commas survive.
                Some((ty, default)) => (
                    ty.trim().to_owned(),
                    Some(default.trim().to_owned()),
                    None,
                ),
                None => (text.clone(), None, None),
            },
            ArgSpec::Structured(structured) => {
                let data_type =
                    structured
                        .data_type
                        .clone()
                        .ok_or_else(|| GenerateError::MissingType {
                            entry: entry.to_owned(),
                            argument: raw_name.to_owned(),
                        })?;
                (
                    data_type,
                    structured.default.as_ref().map(literal_text),
                    structured.true_comparison.clone(),
                )
            }
        };

        Ok(Self {
            raw_name: raw_name.to_owned(),
            field_name: ident::field_name(raw_name),
            constant_name: ident::constant_name(raw_name),
            data_type,
            default_value,
            comparison_suffix,
        })
    }

    /// Whether the argument has no default and must be present at runtime.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.default_value.is_none()
    }

    /// Whether the declared type is nullable (default is the literal `null`).
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.default_value.as_deref() == Some("null")
    }
}

/// One schema entry with its arguments resolved, ready for emission.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    /// Root name as written in the schema.
    pub root: String,
    /// Superglobal selector tag (`GET`, `POST`, ...).
    pub method: String,
    /// Arguments in schema order.
    pub args: Vec<ArgDescriptor>,
}

impl ResolvedEntry {
    /// Name of the generated constants-holder class.
    #[must_use]
    pub fn constants_class(&self) -> String {
        format!("{}{CONSTANTS_CLASS_SUFFIX}", self.root)
    }

    /// Name of the generated data-binding class.
    #[must_use]
    pub fn data_class(&self) -> String {
        format!("{}{DATA_CLASS_SUFFIX}", self.root)
    }
}

/// Resolve a whole schema document, preserving entry and argument order.
///
/// Fails on the first invalid argument, before any output is rendered.
pub fn resolve_schema(doc: &SchemaDoc) -> GenerateResult<Vec<ResolvedEntry>> {
    let mut entries = Vec::new();
    for item in doc {
        for (root, body) in item {
            let mut args = Vec::with_capacity(body.arguments.len());
            for argument in &body.arguments {
                for (raw_name, spec) in argument {
                    args.push(ArgDescriptor::resolve(root, raw_name, spec)?);
                }
            }
            debug!(entry = %root, method = %body.method, arguments = args.len(), "resolved schema entry");
            entries.push(ResolvedEntry {
                root: root.clone(),
                method: body.method.clone(),
                args,
            });
        }
    }
    Ok(entries)
}

/// Render a YAML scalar to its literal source text.
pub(crate) fn literal_text(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => "null".to_owned(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map_or_else(|_| String::new(), |s| s.trim_end().to_owned()),
    }
}

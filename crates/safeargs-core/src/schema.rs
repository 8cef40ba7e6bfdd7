//! Serde model of the safe-args YAML schema document.
//!
//! The document is an ordered sequence of single-key mappings, one per page:
//!
//! ```yaml
//! - Login:
//!     method: POST
//!     arguments:
//!       - username: string
//!       - remember:
//!           type: bool
//!           default: false
//!           true-comparison: "=== 'on'"
//! ```
//!
//! Argument specs come in two forms: a shorthand string
//! `"<type>[, <default>]"` or a structured mapping. The union is resolved
//! once, in [`crate::descriptor`]; nothing downstream inspects raw YAML.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::GenerateResult;

/// A parsed schema document: entries in document order, each a single-key
/// mapping from the page root name to its body.
pub type SchemaDoc = Vec<BTreeMap<String, EntryBody>>;

/// The body of one schema entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryBody {
    /// Request method tag selecting the raw-input superglobal (`GET`/`POST`).
    pub method: String,
    /// Declared arguments, in document order. Each item is a single-key
    /// mapping from the raw argument name to its spec.
    pub arguments: Vec<BTreeMap<String, ArgSpec>>,
}

/// One argument specification, before resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ArgSpec {
    /// Shorthand form: `"<type>"` or `"<type>, <default>"`.
    Shorthand(String),
    /// Structured form with explicit keys.
    Structured(StructuredSpec),
}

/// The structured argument form.
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredSpec {
    /// Declared data type. Kept optional at parse time so a missing key can
    /// be reported with its entry location instead of as a bare serde error.
    #[serde(rename = "type")]
    pub data_type: Option<String>,
    /// Default value; absence makes the argument required.
    pub default: Option<serde_yaml::Value>,
    /// Expression fragment appended to the raw read to produce a boolean.
    #[serde(rename = "true-comparison")]
    pub true_comparison: Option<String>,
}

/// A constants-table document: either a plain sequence of names (each
/// constant's value equals its name) or a mapping of name to value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TableDoc {
    /// Sequence form, e.g. a list of session keys.
    Names(Vec<String>),
    /// Mapping form, e.g. UI text identifiers to their strings.
    Values(serde_yaml::Mapping),
}

/// Parse a schema document from YAML text.
pub fn parse_schema(text: &str) -> GenerateResult<SchemaDoc> {
    Ok(serde_yaml::from_str(text)?)
}

/// Parse a constants-table document from YAML text.
pub fn parse_table(text: &str) -> GenerateResult<TableDoc> {
    Ok(serde_yaml::from_str(text)?)
}

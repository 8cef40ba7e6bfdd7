//! Whole-document generation.
//!
//! Drives the pipeline for every schema entry: resolve, assemble the
//! constructor, and render the constants class immediately followed by its
//! paired data class. Entries are independent of one another; output order
//! is schema order, then any constants tables in the order given.

use tracing::info;

use crate::constructor::assemble_constructor;
use crate::descriptor::{ResolvedEntry, literal_text, resolve_schema};
use crate::emit::ClassUnit;
use crate::error::GenerateResult;
use crate::schema::{SchemaDoc, TableDoc};

/// PHP open tag written at the start of the output stream.
const PHP_HEADER: &str = "<?php\n";

/// Generate the full output for a schema document plus any named constants
/// tables. Fails before producing any text if the schema is invalid.
pub fn generate(doc: &SchemaDoc, tables: &[(String, TableDoc)]) -> GenerateResult<String> {
    let entries = resolve_schema(doc)?;

    let mut out = String::from(PHP_HEADER);
    for entry in &entries {
        generate_entry(entry, &mut out)?;
    }
    for (name, table) in tables {
        generate_table(name, table, &mut out)?;
    }

    info!(
        entries = entries.len(),
        tables = tables.len(),
        bytes = out.len(),
        "generated class definitions"
    );
    Ok(out)
}

/// Render one entry's constants class and data-binding class, in that order.
pub fn generate_entry(entry: &ResolvedEntry, out: &mut String) -> GenerateResult<()> {
    let mut constants = ClassUnit::new(entry.constants_class());
    let mut data = ClassUnit::new(entry.data_class());

    for arg in &entry.args {
        constants.push_constant(arg.constant_name.as_str(), arg.raw_name.as_str());
        data.push_field(arg);
    }
    data.set_constructor(assemble_constructor(entry));

    constants.render(out)?;
    data.render(out)?;
    Ok(())
}

/// Render one constants-only class from a table document. Names are taken
/// verbatim (no normalization); in the sequence form each constant's value
/// equals its name.
pub fn generate_table(name: &str, table: &TableDoc, out: &mut String) -> GenerateResult<()> {
    let mut unit = ClassUnit::new(name);
    match table {
        TableDoc::Names(names) => {
            for n in names {
                unit.push_constant(n.as_str(), n.as_str());
            }
        }
        TableDoc::Values(map) => {
            for (key, value) in map {
                unit.push_constant(literal_text(key), literal_text(value));
            }
        }
    }
    unit.render(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{parse_schema, parse_table};

    #[test]
    fn test_should_generate_login_example_end_to_end() {
        let doc = parse_schema(
            "- Login:\n    method: POST\n    arguments:\n      - username: string\n      - remember:\n          type: bool\n          default: false\n          true-comparison: \"=== 'on'\"\n",
        )
        .unwrap();

        let expected = "<?php\n\
                        \n\
                        class LoginArg {\n    \
                        const USERNAME = \"username\";\n    \
                        const REMEMBER = \"remember\";\n\
                        }\n\
                        \n\
                        class LoginArgs {\n    \
                        public string $username;\n    \
                        public bool $remember = false;\n\
                        \n    \
                        function __construct() {\n        \
                        if (!isset($_POST[LoginArg::USERNAME])) {\n            \
                        die();\n        \
                        }\n        \
                        $this->username = $_POST[LoginArg::USERNAME];\n        \
                        if (isset($_POST[LoginArg::REMEMBER])) {\n            \
                        $this->remember = $_POST[LoginArg::REMEMBER] === 'on';\n        \
                        }\n    \
                        }\n\
                        }\n";

        assert_eq!(generate(&doc, &[]).unwrap(), expected);
    }

    #[test]
    fn test_should_order_class_pairs_by_schema_order() {
        let doc = parse_schema(
            "- Beta:\n    method: GET\n    arguments:\n      - a: string\n- Alpha:\n    method: GET\n    arguments:\n      - b: string\n",
        )
        .unwrap();
        let out = generate(&doc, &[]).unwrap();

        let positions: Vec<usize> = ["class BetaArg ", "class BetaArgs ", "class AlphaArg ", "class AlphaArgs "]
            .iter()
            .map(|needle| out.find(*needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_should_abort_without_output_on_schema_error() {
        let doc = parse_schema(
            "- Login:\n    method: POST\n    arguments:\n      - broken:\n          default: x\n",
        )
        .unwrap();
        assert!(generate(&doc, &[]).is_err());
    }

    #[test]
    fn test_should_render_tables_after_schema_entries() {
        let doc = parse_schema("- Login:\n    method: POST\n    arguments:\n      - username: string\n").unwrap();
        let keys = parse_table("- token\n- user-id\n").unwrap();
        let texts = parse_table("greeting: Hello there\n").unwrap();

        let out = generate(
            &doc,
            &[("SessionKey".to_owned(), keys), ("Text".to_owned(), texts)],
        )
        .unwrap();

        let args_at = out.find("class LoginArgs ").unwrap();
        let keys_at = out.find("class SessionKey ").unwrap();
        let texts_at = out.find("class Text ").unwrap();
        assert!(args_at < keys_at && keys_at < texts_at);
        assert!(out.contains("    const user-id = \"user-id\";\n"));
        assert!(out.contains("    const greeting = \"Hello there\";\n"));
    }
}

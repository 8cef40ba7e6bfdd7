//! Constructor body assembly for data-binding classes.
//!
//! The body is built in two passes over the entry's arguments, both in
//! schema order: first a `die()` presence guard for every required argument,
//! then one assignment per argument. Required arguments are assigned
//! unconditionally (the guard above already ensured presence); optional
//! arguments keep their declared default unless the raw key is present, in
//! which case a presence-guarded assignment overrides it.

use crate::block::ConditionalBlock;
use crate::descriptor::{ArgDescriptor, ResolvedEntry};

/// Build the full constructor body for one entry as pre-indented lines.
#[must_use]
pub fn assemble_constructor(entry: &ResolvedEntry) -> Vec<String> {
    let constants_class = entry.constants_class();

    // Pass 1: presence guards for required arguments.
    let mut guards = ConditionalBlock::new();
    for arg in entry.args.iter().filter(|a| a.is_required()) {
        guards.open_if(&format!("!isset({})", raw_read(entry, &constants_class, arg)));
        guards.statement("die()");
        guards.close();
    }
    let mut lines = guards.into_lines();

    // Pass 2: assignments for all arguments.
    for arg in &entry.args {
        let read = raw_read(entry, &constants_class, arg);
        let assignment = format!("$this->{} = {}", arg.field_name, value_expr(arg, &read));
        if arg.is_required() {
            lines.push(format!("        {assignment};"));
        } else {
            let mut guarded = ConditionalBlock::new();
            guarded.open_if(&format!("isset({read})"));
            guarded.statement(&assignment);
            guarded.close();
            lines.extend(guarded.into_lines());
        }
    }

    lines
}

/// The raw-input read expression: `$_<METHOD>[<Root>Arg::<CONST>]`.
fn raw_read(entry: &ResolvedEntry, constants_class: &str, arg: &ArgDescriptor) -> String {
    format!(
        "$_{}[{constants_class}::{}]",
        entry.method, arg.constant_name
    )
}

/// Apply type coercion to a raw read expression. `int` wraps the read in an
/// explicit cast; `bool` appends the comparison suffix when one is declared.
/// The two transforms compose in that order.
fn value_expr(arg: &ArgDescriptor, read: &str) -> String {
    let mut expr = if arg.data_type == "int" {
        format!("(int) {read}")
    } else {
        read.to_owned()
    };
    if arg.data_type == "bool" {
        if let Some(suffix) = &arg.comparison_suffix {
            expr = format!("{expr} {suffix}");
        }
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(raw: &str, data_type: &str, default: Option<&str>, suffix: Option<&str>) -> ArgDescriptor {
        ArgDescriptor {
            raw_name: raw.to_owned(),
            field_name: crate::ident::field_name(raw),
            constant_name: crate::ident::constant_name(raw),
            data_type: data_type.to_owned(),
            default_value: default.map(str::to_owned),
            comparison_suffix: suffix.map(str::to_owned),
        }
    }

    fn entry(root: &str, method: &str, args: Vec<ArgDescriptor>) -> ResolvedEntry {
        ResolvedEntry {
            root: root.to_owned(),
            method: method.to_owned(),
            args,
        }
    }

    #[test]
    fn test_should_guard_then_assign_required_argument() {
        let e = entry("Login", "POST", vec![arg("username", "string", None, None)]);
        assert_eq!(
            assemble_constructor(&e),
            [
                "        if (!isset($_POST[LoginArg::USERNAME])) {",
                "            die();",
                "        }",
                "        $this->username = $_POST[LoginArg::USERNAME];",
            ]
        );
    }

    #[test]
    fn test_should_cast_required_int_unconditionally() {
        let e = entry("Page", "GET", vec![arg("page-no", "int", None, None)]);
        let lines = assemble_constructor(&e);
        assert_eq!(
            lines.last().unwrap(),
            "        $this->pageNo = (int) $_GET[PageArg::PAGE_NO];"
        );
    }

    #[test]
    fn test_should_cast_optional_int_inside_presence_guard() {
        let e = entry("Page", "GET", vec![arg("page-no", "int", Some("1"), None)]);
        assert_eq!(
            assemble_constructor(&e),
            [
                "        if (isset($_GET[PageArg::PAGE_NO])) {",
                "            $this->pageNo = (int) $_GET[PageArg::PAGE_NO];",
                "        }",
            ]
        );
    }

    #[test]
    fn test_should_append_bool_comparison_suffix() {
        let e = entry(
            "Login",
            "POST",
            vec![arg("remember", "bool", Some("false"), Some("=== 'on'"))],
        );
        assert_eq!(
            assemble_constructor(&e),
            [
                "        if (isset($_POST[LoginArg::REMEMBER])) {",
                "            $this->remember = $_POST[LoginArg::REMEMBER] === 'on';",
                "        }",
            ]
        );
    }

    #[test]
    fn test_should_apply_suffix_to_required_bool_directly() {
        let e = entry(
            "Login",
            "POST",
            vec![arg("accepted", "bool", None, Some("=== '1'"))],
        );
        let lines = assemble_constructor(&e);
        assert_eq!(
            lines.last().unwrap(),
            "        $this->accepted = $_POST[LoginArg::ACCEPTED] === '1';"
        );
    }

    #[test]
    fn test_should_emit_all_guards_before_any_assignment() {
        let e = entry(
            "Form",
            "POST",
            vec![
                arg("first", "string", None, None),
                arg("second", "int", Some("0"), None),
                arg("third", "string", None, None),
            ],
        );
        let lines = assemble_constructor(&e);
        let last_die = lines.iter().rposition(|l| l.contains("die()")).unwrap();
        let first_assign = lines.iter().position(|l| l.contains("$this->")).unwrap();
        assert!(last_die < first_assign);

        // Guards cover required arguments only, in schema order.
        let guards: Vec<&String> = lines.iter().filter(|l| l.contains("!isset")).collect();
        assert_eq!(guards.len(), 2);
        assert!(guards[0].contains("FIRST"));
        assert!(guards[1].contains("THIRD"));
    }
}

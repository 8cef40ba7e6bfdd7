//! PHP class generation from a declarative request-argument schema.
//!
//! This crate turns a YAML schema of per-page argument declarations into PHP
//! source text. Each schema entry `Root` yields two classes:
//!
//! - `RootArg` — a constants holder mapping logical argument names to the raw
//!   key strings used to index the request superglobal, and
//! - `RootArgs` — a data-binding class whose zero-parameter constructor reads
//!   `$_GET`/`$_POST` (selected by the entry's `method` tag), `die()`s when a
//!   required key is absent, coerces types, and assigns the values to public
//!   properties.
//!
//! Generation is a one-shot, deterministic transformation: schema text is
//! parsed into a document, resolved into descriptors, and rendered to class
//! text. Any failure aborts the whole run before output is produced.

mod block;
mod constructor;
mod descriptor;
mod emit;
mod error;
mod generate;
mod ident;
mod schema;

pub use block::ConditionalBlock;
pub use constructor::assemble_constructor;
pub use descriptor::{ArgDescriptor, ResolvedEntry, resolve_schema};
pub use emit::ClassUnit;
pub use error::{GenerateError, GenerateResult};
pub use generate::{generate, generate_entry, generate_table};
pub use ident::{constant_name, field_name};
pub use schema::{
    ArgSpec, EntryBody, SchemaDoc, StructuredSpec, TableDoc, parse_schema, parse_table,
};

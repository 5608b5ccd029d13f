//! Go identifier naming.
//!
//! Every field is emitted under two names: an exported accessor
//! (`UpperCamelCase`) and an unexported storage name (`lowerCamelCase`)
//! used for both the struct field and the constructor parameter.

use convert_case::{Case, Casing};

/// Go reserved words, plus identifiers the generated code refers to.
///
/// A parameter named `fmt` would shadow the package used to build
/// validation errors, one named `len` would shadow the builtin used by
/// string length guards, and `nil` is returned by every constructor.
const RESERVED: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
    "fmt",
    "len",
    "nil",
    "true",
    "false",
];

/// Exported accessor name for a field.
///
/// Names that are already Go identifiers keep their spelling apart from
/// the first letter, so initialisms survive (`UserID`, `userID` ->
/// `UserID`). Anything else is converted (`user_id` -> `UserId`).
pub fn accessor_name(field: &str) -> String {
    if is_plain_identifier(field) {
        upper_first(field)
    } else {
        field.to_case(Case::Pascal)
    }
}

/// Unexported storage name for a field (`Name` -> `name`,
/// `HTTPServer` -> `httpServer`).
///
/// Names that collide with [`RESERVED`] identifiers get a trailing `_`.
pub fn storage_name(field: &str) -> String {
    storage_name_in(field, &[])
}

/// Storage name that also avoids the package names of `imports`, so
/// custom guards can still refer to those packages.
pub fn storage_name_in(field: &str, imports: &[String]) -> String {
    let name = unexported_name(field);
    let shadows_import = imports
        .iter()
        .any(|import| import_package_name(import) == name);
    if is_reserved(&name) || shadows_import {
        format!("{}_", name)
    } else {
        name
    }
}

/// Package name an import path is referred to by (`net/http` -> `http`).
pub fn import_package_name(path: &str) -> &str {
    let path = path.trim();
    path.rsplit('/').next().unwrap_or(path)
}

/// Check that a field name yields a usable accessor and storage name.
pub fn is_convertible(field: &str) -> bool {
    is_exported(&accessor_name(field)) && is_identifier(&unexported_name(field))
}

/// Check if `ident` is a Go identifier: a letter or `_`, then letters,
/// digits or `_`.
pub fn is_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Check if `ident` is an exported Go identifier.
pub fn is_exported(ident: &str) -> bool {
    is_identifier(ident) && ident.chars().next().is_some_and(char::is_uppercase)
}

fn is_plain_identifier(field: &str) -> bool {
    is_identifier(field) && !field.contains('_')
}

fn unexported_name(field: &str) -> String {
    if is_plain_identifier(field) {
        lower_leading(field)
    } else {
        field.to_case(Case::Camel)
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the leading capital run, keeping the capital that starts the
/// next word (`ID` -> `id`, `HTTPServer` -> `httpServer`, `UserID` -> `userID`).
fn lower_leading(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();
    let lowered = if run > 1 && chars.get(run).is_some_and(|c| c.is_lowercase()) {
        run - 1
    } else {
        run
    };

    let mut out = String::with_capacity(s.len());
    for (i, c) in chars.iter().enumerate() {
        if i < lowered {
            out.extend(c.to_lowercase());
        } else {
            out.push(*c);
        }
    }
    out
}

/// Name of the validating constructor for a value object.
pub fn constructor_name(struct_name: &str) -> String {
    format!("New{}", struct_name)
}

/// Check if an identifier cannot be used as a generated parameter name.
pub fn is_reserved(ident: &str) -> bool {
    RESERVED.contains(&ident)
}

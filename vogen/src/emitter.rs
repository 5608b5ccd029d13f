//! Go code emitter.
//!
//! Turns validated [`ValueObject`] definitions into the text of one Go
//! source file. Rendering is a pure function of the package name and the
//! definitions, so rendering the same input twice yields identical text.
//! The text is laid out the way `gofmt` prints it, so it builds without a
//! formatter in the pipeline.
//!
//! # Output
//!
//! - A generated-code banner and the package clause
//! - One import block: every definition's extra imports, plus `fmt` when
//!   a guard builds an error and `reflect` when `Equal` needs
//!   `reflect.DeepEqual`; sorted and de-duplicated
//! - For each value object, in order: doc comment, struct, `NewX`
//!   constructor with guard clauses, one accessor per field, `Equal`

use std::collections::BTreeSet;

use crate::model::{Field, ValueObject};
use crate::naming::{accessor_name, constructor_name, storage_name_in};

/// First line of every generated file.
pub const GENERATED_BANNER: &str = "// Code generated by vogen. DO NOT EDIT.";

/// Import used by guard clauses to build validation errors.
pub const BASE_IMPORT: &str = "fmt";

/// Import used by `Equal` for field types `==` cannot compare.
pub const DEEP_EQUAL_IMPORT: &str = "reflect";

/// Receiver name of generated methods.
const RECEIVER: &str = "o";

/// Render a complete Go source file.
pub fn render(package_name: &str, value_objects: &[ValueObject]) -> String {
    let mut output = String::new();

    output.push_str(GENERATED_BANNER);
    output.push_str("\n\n");
    output.push_str(&format!("package {}\n", package_name));
    output.push_str(&render_imports(value_objects));

    for vo in value_objects {
        output.push('\n');
        output.push_str(&render_value_object(vo));
    }

    output
}

/// Collect the import paths needed by `value_objects`.
pub fn collect_imports(value_objects: &[ValueObject]) -> BTreeSet<&str> {
    let mut imports = BTreeSet::new();
    for vo in value_objects {
        if vo.fields.iter().any(Field::has_validators) {
            imports.insert(BASE_IMPORT);
        }
        if vo.fields.iter().any(|f| !is_comparable(&f.ty)) {
            imports.insert(DEEP_EQUAL_IMPORT);
        }
        imports.extend(
            vo.imports
                .iter()
                .map(|import| import.trim())
                .filter(|import| !import.is_empty()),
        );
    }
    imports
}

/// Check if values of the Go type `ty` can be compared with `==`.
///
/// Slices, maps and funcs cannot; every other spelling is assumed to be
/// comparable.
pub fn is_comparable(ty: &str) -> bool {
    let ty = ty.trim_start();
    !(ty.starts_with("[]")
        || ty.starts_with("map[")
        || ty.starts_with("func(")
        || ty.starts_with("func "))
}

// =========================================================================
// File Header
// =========================================================================

fn render_imports(value_objects: &[ValueObject]) -> String {
    let imports = collect_imports(value_objects);
    if imports.is_empty() {
        return String::new();
    }

    let mut block = String::from("\nimport (\n");
    for import in imports {
        block.push_str(&format!("\t\"{}\"\n", import));
    }
    block.push_str(")\n");
    block
}

// =========================================================================
// Value Object
// =========================================================================

fn render_value_object(vo: &ValueObject) -> String {
    let mut out = String::new();

    if vo.comments.is_empty() {
        out.push_str(&format!("// {} represents a value object.\n", vo.name));
    } else {
        out.push_str(&render_comments(&vo.comments));
    }

    out.push_str(&render_struct(vo));
    out.push('\n');
    out.push_str(&render_constructor(vo));

    for field in &vo.fields {
        out.push('\n');
        out.push_str(&render_accessor(vo, field));
    }

    out.push('\n');
    out.push_str(&render_equal(vo));
    out
}

/// Storage names of all fields, in declaration order.
fn storage_names(vo: &ValueObject) -> Vec<String> {
    vo.fields
        .iter()
        .map(|f| storage_name_in(&f.name, &vo.imports))
        .collect()
}

/// Display width used to align columns.
fn width(s: &str) -> usize {
    s.chars().count()
}

/// Struct with field types aligned in one column.
fn render_struct(vo: &ValueObject) -> String {
    let names = storage_names(vo);
    let column = names.iter().map(|n| width(n)).max().unwrap_or(0);

    let mut out = format!("type {} struct {{\n", vo.name);
    for (name, field) in names.iter().zip(&vo.fields) {
        out.push_str(&format!("\t{:<column$} {}\n", name, field.ty, column = column));
    }
    out.push_str("}\n");
    out
}

/// Constructor taking one parameter per field, guarding each one.
fn render_constructor(vo: &ValueObject) -> String {
    let constructor = constructor_name(&vo.name);
    let names = storage_names(vo);
    let params: Vec<String> = names
        .iter()
        .zip(&vo.fields)
        .map(|(name, f)| format!("{} {}", name, f.ty))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("// {} creates a new {}.\n", constructor, vo.name));
    if vo.fields.iter().any(Field::has_validators) {
        out.push_str("// It returns an error if any field value fails validation.\n");
    }
    out.push_str(&format!(
        "func {}({}) ({}, error) {{\n",
        constructor,
        params.join(", "),
        vo.name
    ));

    for (name, field) in names.iter().zip(&vo.fields) {
        for validator in &field.validators {
            out.push_str(&validator.emit_guard_for(&vo.name, field, name));
        }
    }

    // Keyed elements are aligned after the colon.
    let column = names.iter().map(|n| width(n) + 1).max().unwrap_or(0);
    out.push_str(&format!("\treturn {}{{\n", vo.name));
    for name in &names {
        let key = format!("{}:", name);
        out.push_str(&format!("\t\t{:<column$} {},\n", key, name, column = column));
    }
    out.push_str("\t}, nil\n}\n");
    out
}

fn render_accessor(vo: &ValueObject, field: &Field) -> String {
    let accessor = accessor_name(&field.name);
    let mut out = String::new();

    if field.comments.is_empty() {
        out.push_str(&format!(
            "// {} returns the value of the {} field.\n",
            accessor, field.name
        ));
    } else {
        out.push_str(&render_comments(&field.comments));
    }

    out.push_str(&format!(
        "func ({r} {}) {}() {} {{\n\treturn {r}.{}\n}}\n",
        vo.name,
        accessor,
        field.ty,
        storage_name_in(&field.name, &vo.imports),
        r = RECEIVER
    ));
    out
}

/// Structural equality over all fields, in declaration order.
///
/// Fields of a type `==` cannot compare go through `reflect.DeepEqual`.
fn render_equal(vo: &ValueObject) -> String {
    let comparisons: Vec<String> = storage_names(vo)
        .iter()
        .zip(&vo.fields)
        .map(|(name, f)| {
            if is_comparable(&f.ty) {
                format!("{r}.{n} == other.{n}", r = RECEIVER, n = name)
            } else {
                format!("reflect.DeepEqual({r}.{n}, other.{n})", r = RECEIVER, n = name)
            }
        })
        .collect();

    format!(
        "// Equal reports whether {r} and other hold the same field values.\nfunc ({r} {}) Equal(other {}) bool {{\n\treturn {}\n}}\n",
        vo.name,
        vo.name,
        comparisons.join(" &&\n\t\t"),
        r = RECEIVER
    )
}

fn render_comments(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            out.push_str(&format!("// {}\n", line));
        }
    }
    out
}

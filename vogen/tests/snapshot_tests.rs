//! Snapshot tests for generated Go source.
//!
//! These tests use insta to capture and verify the exact rendered output.
//! Run `cargo insta review` to review and accept snapshot changes.

use vogen::{Field, Options, Validator, ValueObject, Vogen};

#[test]
fn snapshot_person_and_address() {
    let mut vogen = Vogen::new(
        Options::default()
            .with_file_path("testdata/example_output.go")
            .with_package_name("vo_example"),
    )
    .unwrap();

    vogen
        .append_value_objects([
            ValueObject::new("Person")
                .with_comment("Person is a Value Object to describe the feature of vogen.")
                .with_comment("This is sample comment.")
                .with_field(
                    Field::new("Name", "string")
                        .with_comment("Name is the name of the person.")
                        .with_validator(Validator::string_length(1, 64)),
                )
                .with_field(
                    Field::new("Age", "int")
                        .with_comment("Age is the age of the person.")
                        .with_validator(Validator::range_value(0, 150)),
                ),
            // Use auto generated comments.
            ValueObject::new("Address").with_field(Field::new("City", "string")),
        ])
        .unwrap();

    let output = vogen.render();
    insta::assert_snapshot!("person_and_address", output);
}

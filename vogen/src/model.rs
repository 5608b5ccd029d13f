//! Value object definitions.
//!
//! A [`ValueObject`] describes one generated Go type: its name, its fields
//! in declaration order, doc comments, and any extra packages its custom
//! validators need.

use serde::{Deserialize, Serialize};

use crate::error::{VogenError, VogenResult};
use crate::naming;
use crate::validator::Validator;

/// One field of a value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name; converted to an accessor and a storage name.
    pub name: String,

    /// Go type of the field, copied verbatim into the output.
    #[serde(rename = "type")]
    pub ty: String,

    /// Doc comment lines placed above the accessor.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    /// Validation rules, checked by the constructor in this order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Field {
    /// Create a field with no comments and no validators.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            comments: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Add a doc comment line.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Attach a validator after the ones already attached.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Check if the constructor needs to validate this field.
    pub fn has_validators(&self) -> bool {
        !self.validators.is_empty()
    }
}

/// Definition of one generated value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueObject {
    /// Go struct name.
    pub name: String,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Doc comment lines placed above the struct.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    /// Extra import paths needed by custom validators.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
}

impl ValueObject {
    /// Create a value object with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            comments: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a doc comment line.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Require an extra import path.
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Check the definition for structural completeness.
    ///
    /// Checks run in a fixed order and the first failure is returned: the
    /// struct name, then that fields exist, then each field's name and type
    /// in field order. A field name must also convert to an exported
    /// accessor and an unexported storage identifier. `position` is only used to identify an unnamed
    /// value object in the error.
    pub fn validate(&self, position: usize) -> VogenResult<()> {
        if self.name.is_empty() {
            return Err(VogenError::StructNameEmpty { position });
        }

        if self.fields.is_empty() {
            return Err(VogenError::InvalidField {
                struct_name: self.name.clone(),
            });
        }

        for (index, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() || !naming::is_convertible(&field.name) {
                return Err(VogenError::InvalidFieldName {
                    struct_name: self.name.clone(),
                    position: index,
                });
            }
            if field.ty.is_empty() {
                return Err(VogenError::InvalidFieldType {
                    struct_name: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        Ok(())
    }
}

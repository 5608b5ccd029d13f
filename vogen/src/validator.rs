//! Validation rules for value object fields.
//!
//! Each [`Validator`] turns into one guard clause at the top of the
//! generated constructor. Guards run in declaration order and the
//! constructor returns on the first one that fails:
//!
//! | Rule | Fails when | Message |
//! |------|------------|---------|
//! | `PositiveValue` | `v < 0` | `value is negative: v` |
//! | `NegativeValue` | `v >= 0` | `value is positive: v` |
//! | `MaxValue { max }` | `v > max` | `value exceeds the maximum value: v` |
//! | `MinValue { min }` | `v < min` | `value is less than the minimum value: v` |
//! | `RangeValue { min, max }` | `v < min \|\| v > max` | `value is out of range: v` |
//! | `StringLength { min, max }` | `len(v) < min \|\| len(v) > max` | `length is out of range: len(v)` |
//! | `Custom { condition, message }` | `condition` | `value <message>: v` |

use serde::{Deserialize, Serialize};

use crate::model::Field;
use crate::naming;

/// Placeholder replaced with the parameter name in custom conditions.
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// Validation rule attached to a field.
///
/// Serialized with a `rule` tag so definitions can be written as
/// `{ rule = "range_value", min = 0, max = 150 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Validator {
    /// Rejects negative values.
    PositiveValue,

    /// Rejects zero and positive values.
    NegativeValue,

    /// Rejects values greater than `max`.
    MaxValue { max: i64 },

    /// Rejects values less than `min`.
    MinValue { min: i64 },

    /// Rejects values outside `min..=max`.
    RangeValue { min: i64, max: i64 },

    /// Rejects strings whose length is outside `min..=max`.
    StringLength { min: usize, max: usize },

    /// Rejects values for which the Go expression `condition` is true.
    ///
    /// Packages used by the condition must be listed in the owning value
    /// object's `imports`.
    Custom { condition: String, message: String },
}

impl Validator {
    /// Create a positive value validator.
    pub fn positive_value() -> Self {
        Validator::PositiveValue
    }

    /// Create a negative value validator.
    pub fn negative_value() -> Self {
        Validator::NegativeValue
    }

    /// Create a maximum value validator.
    pub fn max_value(max: i64) -> Self {
        Validator::MaxValue { max }
    }

    /// Create a minimum value validator.
    pub fn min_value(min: i64) -> Self {
        Validator::MinValue { min }
    }

    /// Create a range validator; both bounds are inclusive.
    pub fn range_value(min: i64, max: i64) -> Self {
        Validator::RangeValue { min, max }
    }

    /// Create a string length validator; both bounds are inclusive.
    pub fn string_length(min: usize, max: usize) -> Self {
        Validator::StringLength { min, max }
    }

    /// Create a custom validator.
    ///
    /// `condition` is the failure condition; occurrences of `{value}` are
    /// replaced with the parameter holding the field value.
    pub fn custom(condition: impl Into<String>, message: impl Into<String>) -> Self {
        Validator::Custom {
            condition: condition.into(),
            message: message.into(),
        }
    }

    /// Short rule name, as used in definition files.
    pub fn kind(&self) -> &'static str {
        match self {
            Validator::PositiveValue => "positive_value",
            Validator::NegativeValue => "negative_value",
            Validator::MaxValue { .. } => "max_value",
            Validator::MinValue { .. } => "min_value",
            Validator::RangeValue { .. } => "range_value",
            Validator::StringLength { .. } => "string_length",
            Validator::Custom { .. } => "custom",
        }
    }

    /// Emit the guard clause for `field` inside the constructor of `owner`.
    ///
    /// The fragment is indented for a function body and ends with a newline.
    pub fn emit_guard(&self, owner: &str, field: &Field) -> String {
        self.emit_guard_for(owner, field, &naming::storage_name(&field.name))
    }

    /// Emit the guard clause with `value` as the parameter name.
    pub fn emit_guard_for(&self, owner: &str, field: &Field, value: &str) -> String {
        let value = value.to_string();

        let (condition, message, argument) = match self {
            Validator::PositiveValue => (
                format!("{} < 0", value),
                "value is negative".to_string(),
                value.clone(),
            ),
            Validator::NegativeValue => (
                format!("{} >= 0", value),
                "value is positive".to_string(),
                value.clone(),
            ),
            Validator::MaxValue { max } => (
                format!("{} > {}", value, max),
                "value exceeds the maximum value".to_string(),
                value.clone(),
            ),
            Validator::MinValue { min } => (
                format!("{} < {}", value, min),
                "value is less than the minimum value".to_string(),
                value.clone(),
            ),
            Validator::RangeValue { min, max } => (
                format!("{v} < {} || {v} > {}", min, max, v = value),
                "value is out of range".to_string(),
                value.clone(),
            ),
            Validator::StringLength { min, max } => (
                format!("len({v}) < {} || len({v}) > {}", min, max, v = value),
                "length is out of range".to_string(),
                format!("len({})", value),
            ),
            Validator::Custom { condition, message } => (
                condition.replace(VALUE_PLACEHOLDER, &value),
                format!("value {}", escape_format(message)),
                value.clone(),
            ),
        };

        format!(
            "\tif {} {{\n\t\treturn {}{{}}, fmt.Errorf(\"struct '{}' field '{}' {}: %v\", {})\n\t}}\n",
            condition,
            owner,
            escape_string(owner),
            escape_string(&field.name),
            message,
            argument
        )
    }
}

/// Escape text for use inside a Go interpreted string literal.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape text for use inside a `fmt.Errorf` format string.
fn escape_format(s: &str) -> String {
    escape_string(s).replace('%', "%%")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age() -> Field {
        Field::new("Age", "int")
    }

    #[test]
    fn test_positive_value_guard() {
        let guard = Validator::positive_value().emit_guard("Person", &age());
        assert_eq!(
            guard,
            "\tif age < 0 {\n\t\treturn Person{}, fmt.Errorf(\"struct 'Person' field 'Age' value is negative: %v\", age)\n\t}\n"
        );
    }

    #[test]
    fn test_negative_value_guard() {
        let guard = Validator::negative_value().emit_guard("Person", &age());
        assert!(guard.contains("if age >= 0 {"));
        assert!(guard.contains("value is positive: %v"));
    }

    #[test]
    fn test_max_and_min_value_guards() {
        let max = Validator::max_value(150).emit_guard("Person", &age());
        assert!(max.contains("if age > 150 {"));
        assert!(max.contains("exceeds the maximum value"));

        let min = Validator::min_value(-5).emit_guard("Person", &age());
        assert!(min.contains("if age < -5 {"));
        assert!(min.contains("less than the minimum value"));
    }

    #[test]
    fn test_range_value_guard() {
        let guard = Validator::range_value(0, 10).emit_guard("Person", &age());
        assert!(guard.contains("if age < 0 || age > 10 {"));
        assert!(guard.contains("return Person{}, fmt.Errorf("));
        assert!(guard.contains("value is out of range: %v\", age)"));
    }

    #[test]
    fn test_string_length_guard_reports_length() {
        let field = Field::new("Name", "string");
        let guard = Validator::string_length(1, 5).emit_guard("Person", &field);
        assert!(guard.contains("if len(name) < 1 || len(name) > 5 {"));
        assert!(guard.contains("length is out of range: %v\", len(name))"));
    }

    #[test]
    fn test_guard_uses_escaped_parameter_name() {
        let field = Field::new("Type", "string");
        let guard = Validator::string_length(1, 3).emit_guard("Token", &field);
        assert!(guard.contains("len(type_)"));
        assert!(guard.contains("field 'Type'"));
    }

    #[test]
    fn test_custom_guard() {
        let field = Field::new("Email", "string");
        let guard = Validator::custom("!strings.Contains({value}, \"@\")", "is not 100% an \"email\"")
            .emit_guard("User", &field);
        assert!(guard.contains("if !strings.Contains(email, \"@\") {"));
        assert!(guard.contains("value is not 100%% an \\\"email\\\": %v"));
    }

    #[test]
    fn test_guard_for_explicit_parameter_name() {
        let field = Field::new("Strings", "string");
        let guard = Validator::custom("strings.TrimSpace({value}) == \"\"", "is blank")
            .emit_guard_for("Words", &field, "strings_");
        assert!(guard.contains("if strings.TrimSpace(strings_) == \"\" {"));
        assert!(guard.contains("field 'Strings' value is blank: %v\", strings_)"));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Validator::positive_value().kind(), "positive_value");
        assert_eq!(Validator::range_value(0, 1).kind(), "range_value");
        assert_eq!(Validator::custom("x", "y").kind(), "custom");
    }

    #[test]
    fn test_deserialize_tagged_rule() {
        let rule: Validator =
            serde_json::from_str(r#"{"rule":"range_value","min":0,"max":150}"#).unwrap();
        assert_eq!(rule, Validator::range_value(0, 150));

        let rule: Validator = serde_json::from_str(r#"{"rule":"positive_value"}"#).unwrap();
        assert_eq!(rule, Validator::PositiveValue);
    }
}

// src/validation.rs

use crate::CatalogError;
use serde_json::Value;

/// Field checks shared by the entities and by record decoding.
///
/// Entity setters take typed values and only need the domain checks
/// (`validate_name`). The `expect_*` helpers guard the JSON boundary,
/// where a field may hold any value.
pub struct FieldValidator;

impl FieldValidator {
    /// Names must be longer than one character.
    pub fn validate_name(entity: &str, name: &str) -> Result<(), CatalogError> {
        if name.chars().count() <= 1 {
            return Err(CatalogError::value_error(format!(
                "{} name must be longer than 1 character, got {:?}",
                entity, name
            )));
        }
        Ok(())
    }

    pub fn expect_str<'a>(field: &str, value: &'a Value) -> Result<&'a str, CatalogError> {
        value.as_str().ok_or_else(|| {
            CatalogError::type_error(format!(
                "`{}` must be a string, got {}",
                field,
                json_kind(value)
            ))
        })
    }

    /// Accepts any array (including empty) whose elements are all strings.
    pub fn expect_string_list(field: &str, value: &Value) -> Result<Vec<String>, CatalogError> {
        let items = value.as_array().ok_or_else(|| {
            CatalogError::type_error(format!(
                "`{}` must be a list of strings, got {}",
                field,
                json_kind(value)
            ))
        })?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    CatalogError::type_error(format!(
                        "`{}[{}]` must be a string, got {}",
                        field,
                        index,
                        json_kind(item)
                    ))
                })
            })
            .collect()
    }

    /// Reads a field out of a record object.
    pub fn required_field<'a>(record: &'a Value, field: &str) -> Result<&'a Value, CatalogError> {
        let object = record.as_object().ok_or_else(|| {
            CatalogError::type_error(format!("record must be an object, got {}", json_kind(record)))
        })?;

        object
            .get(field)
            .ok_or_else(|| CatalogError::key_error(format!("record has no `{}` field", field)))
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

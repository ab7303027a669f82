use crate::{CatalogError, CourseKind, validation::FieldValidator};
use serde_json::Value;

/// Teacher entry of the teacher data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherRecord {
    pub name: String,
}

/// Course entry of the course data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
    pub kind: CourseKind,
    pub topics: Vec<String>,
}

/// Reads the `name` field of a raw record without decoding the rest.
///
/// Lookups scan with this so that only the selected record has to be
/// fully well-formed. A name that is not a string can never equal a lookup
/// key, so it yields `None`; a missing `name` is still a `Key` error.
pub fn record_name(record: &Value) -> Result<Option<&str>, CatalogError> {
    let name = FieldValidator::required_field(record, "name")?;
    Ok(name.as_str())
}

fn decoded_name(record: &Value) -> Result<String, CatalogError> {
    let name = FieldValidator::required_field(record, "name")?;
    Ok(FieldValidator::expect_str("name", name)?.to_string())
}

impl TryFrom<&Value> for TeacherRecord {
    type Error = CatalogError;

    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        Ok(Self {
            name: decoded_name(record)?,
        })
    }
}

impl TryFrom<&Value> for CourseRecord {
    type Error = CatalogError;

    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        let name = decoded_name(record)?;

        let discriminator = FieldValidator::required_field(record, "type")?;
        let kind = CourseKind::try_from(FieldValidator::expect_str("type", discriminator)?)?;

        let topics = FieldValidator::required_field(record, "topics")?;
        let topics = FieldValidator::expect_string_list("topics", topics)?;

        Ok(Self { name, kind, topics })
    }
}

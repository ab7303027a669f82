use crate::CatalogError;
use serde_json::Value;

/// Supplies the raw teacher and course records.
///
/// Records come back in source order and undecoded; lookups decode them
/// field by field so a malformed record only fails the lookup that reaches
/// it.
pub trait RecordSource {
    fn teacher_records(&self) -> Result<Vec<Value>, CatalogError>;

    fn course_records(&self) -> Result<Vec<Value>, CatalogError>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn teacher_records(&self) -> Result<Vec<Value>, CatalogError> {
        (**self).teacher_records()
    }

    fn course_records(&self) -> Result<Vec<Value>, CatalogError> {
        (**self).course_records()
    }
}

use crate::{
    CatalogError,
    paths::CatalogPaths,
    ports::RecordSource,
    repositories::SnapshotRecordSource,
    validation::json_kind,
};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reads `teachers.json` and `courses.json` from disk.
///
/// Every call reopens and reparses the file, so edits made between two
/// lookups are picked up. Use [`JsonFileRecordSource::snapshot`] to read
/// both files once.
pub struct JsonFileRecordSource<P>
where
    P: CatalogPaths,
{
    paths: P,
}

impl<P> JsonFileRecordSource<P>
where
    P: CatalogPaths,
{
    pub fn new(paths: P) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &P {
        &self.paths
    }

    /// Loads both files into an immutable in-memory source.
    pub fn snapshot(&self) -> Result<SnapshotRecordSource, CatalogError> {
        Ok(SnapshotRecordSource::new(
            self.teacher_records()?,
            self.course_records()?,
        ))
    }
}

impl<P> RecordSource for JsonFileRecordSource<P>
where
    P: CatalogPaths,
{
    fn teacher_records(&self) -> Result<Vec<Value>, CatalogError> {
        load_records(&self.paths.teachers_path())
    }

    fn course_records(&self) -> Result<Vec<Value>, CatalogError> {
        load_records(&self.paths.courses_path())
    }
}

/// Parses a whole file as a JSON array of records.
fn load_records(path: &Path) -> Result<Vec<Value>, CatalogError> {
    let document: Value = {
        let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            CatalogError::Deserialization {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    };

    match document {
        Value::Array(records) => {
            debug!(path = %path.display(), count = records.len(), "loaded records");
            Ok(records)
        }
        other => Err(CatalogError::Deserialization {
            path: path.to_path_buf(),
            message: format!("expected a list of records, got {}", json_kind(&other)),
        }),
    }
}

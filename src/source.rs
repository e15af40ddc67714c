// Where a view's records come from

use crate::jsonl;
use crate::record::Record;
use eyre::{Result, bail};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Supplies the full record collection for a view
pub trait RecordSource<R: Record> {
    fn list_records(&self) -> Result<Vec<R>>;
}

/// Fixed in-memory collection
#[derive(Debug, Clone)]
pub struct StaticSource<R> {
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Record> RecordSource<R> for StaticSource<R> {
    fn list_records(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }
}

/// Records read from a JSONL file on every call
///
/// The file must exist; an absent path is an error rather than an empty view.
#[derive(Debug, Clone)]
pub struct JsonlSource<R> {
    path: PathBuf,
    _marker: PhantomData<R>,
}

impl<R> JsonlSource<R> {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _marker: PhantomData,
        }
    }

    /// `{dir}/{collection}.jsonl`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self
    where
        R: Record,
    {
        Self::new(dir.as_ref().join(format!("{}.jsonl", R::collection_name())))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Record> RecordSource<R> for JsonlSource<R> {
    fn list_records(&self) -> Result<Vec<R>> {
        if !self.path.exists() {
            bail!("Records file {:?} does not exist", self.path);
        }
        jsonl::read_jsonl(&self.path)
    }
}

/// Boxed source: a fixture file when given, otherwise the fallback collection
pub fn file_or<R: Record>(file: Option<&Path>, fallback: Vec<R>) -> Box<dyn RecordSource<R>> {
    match file {
        Some(path) => Box::new(JsonlSource::new(path)),
        None => Box::new(StaticSource::new(fallback)),
    }
}

use crate::index::Index;
use crate::record::Record;
use serde_json::Value;
use snafu::prelude::*;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
pub enum LoadError {
    #[snafu(display("JSON file not found: {}", path.display()))]
    NotFound { path: PathBuf },

    #[snafu(display("reading {}: {source}", path.display()))]
    Read {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("parsing {}: {source}", path.display()))]
    Parse {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[snafu(display("expected a list of server objects at the top level"))]
    ExpectedList,

    #[snafu(display("element {position} is not a server object"))]
    ExpectedObject { position: usize },
}

type LoadResult<T> = Result<T, LoadError>;

/// Reads the JSON file at `path` and builds the hostname index from it.
///
/// The document must be an array of objects. Elements without a usable
/// `hostname` are dropped, and later elements overwrite earlier ones under
/// the same lowercased hostname.
pub fn load_index(path: &Path) -> LoadResult<Index> {
    ensure!(path.exists(), NotFoundSnafu { path });

    let text = std::fs::read_to_string(path).context(ReadSnafu { path })?;
    let document: Value = serde_json::from_str(&text).context(ParseSnafu { path })?;

    let Value::Array(elements) = document else {
        return ExpectedListSnafu.fail();
    };

    let mut records = Vec::with_capacity(elements.len());
    for (position, element) in elements.into_iter().enumerate() {
        let Value::Object(fields) = element else {
            return ExpectedObjectSnafu { position }.fail();
        };
        records.push(Record::from(fields));
    }

    Ok(records.into_iter().collect())
}

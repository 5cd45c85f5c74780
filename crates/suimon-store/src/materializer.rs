//! Directory and file naming, and the write itself.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use suimon_types::{DataCategory, KindCode, RequestSpan, StationIdentity};
use thiserror::Error;
use tracing::info;

/// Default output root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "Download";

/// Extension of every written data file.
pub const EXTENSION: &str = "dat";

/// Errors that can occur while writing data files.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Creating the station directory failed.
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// Writing the data file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

/// Writes payloads under `<root>/<DataKindName>_<kind>_<water_system>_<river>_<station>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materializer {
    root: PathBuf,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl Materializer {
    /// Creates a materializer writing under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory for one station's data kind.
    #[must_use]
    pub fn station_dir(
        &self,
        category: DataCategory,
        kind: KindCode,
        identity: &StationIdentity,
    ) -> PathBuf {
        let name = format!(
            "{}_{}_{}_{}_{}",
            category.search_endpoint(),
            kind,
            component(identity.water_system()),
            component(identity.river()),
            component(identity.station()),
        );
        self.root.join(name)
    }

    /// Returns the file name for a span: `2019_03.dat`, `2019.dat` or `2015-2019.dat`.
    #[must_use]
    pub fn file_name(span: &RequestSpan) -> String {
        format!("{}.{EXTENSION}", span.label())
    }

    /// Writes `payload`, creating the station directory if needed and
    /// replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn write(
        &self,
        payload: &[u8],
        identity: &StationIdentity,
        category: DataCategory,
        kind: KindCode,
        span: &RequestSpan,
    ) -> Result<PathBuf, StoreError> {
        let dir = self.station_dir(category, kind, identity);
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(Self::file_name(span));
        fs::write(&path, payload).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = payload.len(), "wrote data file");
        Ok(path)
    }
}

/// Keeps a name inside a single path component.
fn component(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use suimon_types::YearMonth;
    use tempfile::TempDir;

    fn identity() -> StationIdentity {
        StationIdentity::new("利根川", "利根川", "八斗島")
    }

    #[test]
    fn test_default_root() {
        assert_eq!(Materializer::default().root(), Path::new("Download"));
    }

    #[test]
    fn test_station_dir() {
        let store = Materializer::new("/data");
        assert_eq!(
            store.station_dir(DataCategory::Rain, KindCode::new(1), &identity()),
            PathBuf::from("/data/SrchRainData_1_利根川_利根川_八斗島")
        );
        assert_eq!(
            store.station_dir(DataCategory::Water, KindCode::new(3), &StationIdentity::unknown()),
            PathBuf::from("/data/SrchWaterData_3_Unknown_Unknown_Unknown")
        );
    }

    #[test]
    fn test_file_names() {
        let month = RequestSpan::Month(YearMonth::new(2019, 3).unwrap());
        assert_eq!(Materializer::file_name(&month), "2019_03.dat");
        assert_eq!(Materializer::file_name(&RequestSpan::Year { year: 2019 }), "2019.dat");
        assert_eq!(
            Materializer::file_name(&RequestSpan::Period {
                start: 2015,
                end: 2019
            }),
            "2015-2019.dat"
        );
    }

    #[test]
    fn test_separator_in_name_stays_in_one_component() {
        let store = Materializer::new("/data");
        let odd = StationIdentity::new("a/b", "c", "d");
        let dir = store.station_dir(DataCategory::Rain, KindCode::new(1), &odd);
        assert_eq!(dir.parent(), Some(Path::new("/data")));
    }

    #[test]
    fn test_write_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = Materializer::new(tmp.path());
        let span = RequestSpan::Year { year: 2019 };

        let first = store
            .write(b"2019,1.0\n", &identity(), DataCategory::Rain, KindCode::new(3), &span)
            .unwrap();
        let bytes_first = fs::read(&first).unwrap();
        let second = store
            .write(b"2019,1.0\n", &identity(), DataCategory::Rain, KindCode::new(3), &span)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&second).unwrap(), bytes_first);
    }

    #[test]
    fn test_write_overwrites() {
        let tmp = TempDir::new().unwrap();
        let store = Materializer::new(tmp.path());
        let span = RequestSpan::Year { year: 2019 };

        store
            .write(b"long old content", &identity(), DataCategory::Rain, KindCode::new(3), &span)
            .unwrap();
        let path = store
            .write(b"new", &identity(), DataCategory::Rain, KindCode::new(3), &span)
            .unwrap();

        assert_eq!(fs::read(path).unwrap(), b"new");
    }

    #[test]
    fn test_distinct_stations_do_not_collide() {
        let tmp = TempDir::new().unwrap();
        let store = Materializer::new(tmp.path());
        let span = RequestSpan::Year { year: 2019 };
        let other = StationIdentity::new("利根川", "烏川", "岩鼻");

        let a = store
            .write(b"a", &identity(), DataCategory::Rain, KindCode::new(3), &span)
            .unwrap();
        let b = store
            .write(b"b", &other, DataCategory::Rain, KindCode::new(3), &span)
            .unwrap();

        assert_ne!(a, b);
        assert_eq!(fs::read(a).unwrap(), b"a");
        assert_eq!(fs::read(b).unwrap(), b"b");
    }
}

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::fixture::{load_fixtures, Fixture};
use crate::GoldcaseError;

/// A fixture paired with the file it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedFixture {
    pub file: String,
    pub fixture: Fixture,
}

fn is_fixture_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml")
}

/// Recursively collects `.yaml`/`.yml` files under `root`.
///
/// The list is sorted so execution order does not depend on the filesystem.
pub fn discover_fixture_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, GoldcaseError> {
    let root = root.as_ref();
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            let io = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            GoldcaseError::io(path, io)
        })?;
        if entry.file_type().is_file() && is_fixture_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    debug!(root = %root.display(), count = files.len(), "discovered fixture files");
    Ok(files)
}

/// Discovers and loads every fixture under `root`.
///
/// A malformed file aborts loading; no case from a bad file is ever run.
pub fn load_suite<P: AsRef<Path>>(root: P) -> Result<Vec<LoadedFixture>, GoldcaseError> {
    let mut loaded = Vec::new();
    for path in discover_fixture_files(root)? {
        let file = path.display().to_string();
        let fixtures = load_fixtures(&path)?;
        info!(file = %file, cases = fixtures.len(), "loaded fixtures");
        loaded.extend(fixtures.into_iter().map(|fixture| LoadedFixture {
            file: file.clone(),
            fixture,
        }));
    }
    Ok(loaded)
}

/// Wraps in-memory fixtures under a synthetic file name.
pub fn in_memory(file: &str, fixtures: Vec<Fixture>) -> Vec<LoadedFixture> {
    fixtures
        .into_iter()
        .map(|fixture| LoadedFixture {
            file: file.to_string(),
            fixture,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/models/solutions_test.rs"]
mod solutions_test;

use crate::models::{Tour, read_tour_file};
use crate::utils::GenericResult;
use std::fs;
use std::path::{Path, PathBuf};

const SOLUTION_EXTENSION: &str = ".txt";

/// Specifies a solution file with its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionSource {
    /// A display name: file name without extension.
    pub name: String,
    /// A path to the file.
    pub path: PathBuf,
}

/// A named tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// A display name.
    pub name: String,
    /// A tour.
    pub tour: Tour,
}

/// Resolves solution sources from the path: a single file or every `.txt` file in the directory.
/// Directory entries are not visited recursively and are ordered by their file names.
pub fn resolve_solutions(path: &Path) -> GenericResult<Vec<SolutionSource>> {
    if path.is_file() {
        let file_name = get_file_name(path).ok_or_else(|| format!("cannot get file name of '{}'", path.display()))?;

        return Ok(vec![SolutionSource { name: strip_extension(file_name).to_string(), path: path.to_path_buf() }]);
    }

    if !path.is_dir() {
        return Err(format!("solution path does not exist: '{}'", path.display()).into());
    }

    let mut sources = fs::read_dir(path)
        .map_err(|err| format!("cannot list solutions in '{}': '{err}'", path.display()))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("cannot list solutions in '{}': '{err}'", path.display()))?
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            get_file_name(&path)
                .filter(|file_name| file_name.ends_with(SOLUTION_EXTENSION))
                .map(|file_name| SolutionSource { name: strip_extension(file_name).to_string(), path: path.clone() })
        })
        .collect::<Vec<_>>();

    if sources.is_empty() {
        return Err(format!("no solutions found in '{}'", path.display()).into());
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(sources)
}

/// Reads tours of all given solution sources keeping their order.
pub fn read_solutions(sources: &[SolutionSource]) -> GenericResult<Vec<Solution>> {
    sources
        .iter()
        .map(|source| read_tour_file(source.path.as_path()).map(|tour| Solution { name: source.name.clone(), tour }))
        .collect()
}

fn get_file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

fn strip_extension(file_name: &str) -> &str {
    file_name.strip_suffix(SOLUTION_EXTENSION).unwrap_or(file_name)
}

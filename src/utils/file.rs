//! File reading utilities

use crate::error::{Result, SysfetchError};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a whole file, attaching the path to any error
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| SysfetchError::read_file(path, err))
}

/// Read first line of a file, trimmed
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| SysfetchError::read_file(path, err))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|err| SysfetchError::read_file(path, err))?;
    Ok(line.trim().to_string())
}

/// Return the first line that satisfies `matches`, stopping early.
/// Used for /proc files where the wanted key sits near the top.
pub fn find_line<P, F>(path: P, mut matches: F) -> Result<Option<String>>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> bool,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| SysfetchError::read_file(path, err))?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .map_err(|err| SysfetchError::read_file(path, err))?;
        if bytes_read == 0 {
            return Ok(None);
        }
        if matches(&line) {
            return Ok(Some(line.trim_end().to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_line_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hostname");
        fs::write(&path, "  box01 \nignored\n").unwrap();
        assert_eq!(read_first_line(&path).unwrap(), "box01");
    }

    #[test]
    fn find_line_stops_at_first_match() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cpuinfo");
        fs::write(&path, "processor\t: 0\nmodel name\t: A\nmodel name\t: B\n").unwrap();
        let found = find_line(&path, |l| l.contains("model name")).unwrap();
        assert_eq!(found.as_deref(), Some("model name\t: A"));
    }

    #[test]
    fn missing_file_error_names_path() {
        let err = read_file_safe("/nonexistent/sysfetch/file").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sysfetch/file"));
    }
}

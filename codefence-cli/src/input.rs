//! Input handling: file or stdin

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole input text from a file, or from stdin when no path is
/// given or the path is `-`
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => read_stdin(),
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            CliError::InvalidEncoding(path.display().to_string()).into()
        } else {
            anyhow::Error::new(source).context(format!("failed to read {}", path.display()))
        }
    })
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_existing_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "def f():").expect("write temp file");
        let text = read_text(Some(file.path())).expect("readable");
        assert_eq!(text, "def f():\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_text(Some(Path::new("/nonexistent/paste.txt")));
        let error = result.expect_err("missing file");
        assert!(error.to_string().contains("File not found"));
    }
}

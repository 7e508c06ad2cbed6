use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

/// Largest source text accepted, in bytes.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Path that selects stdin instead of a file.
const STDIN_PATH: &str = "-";

pub struct InputReader;

impl InputReader {
    /// Reads `path`, or stdin when `path` is `-`.
    pub fn read(path: &str) -> Result<String> {
        if path == STDIN_PATH {
            Self::read_stdin()
        } else {
            Self::read_file(path)
        }
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size (1 MB)",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!("Input size exceeds maximum allowed size (1 MB)");
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "ہم تہہ دل سے\nشکریہ ادا کرتے ہیں";
        write!(temp_file, "{content}").unwrap();

        let result = InputReader::read(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read("/nonexistent/path/to/file.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_file.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE + 1)).unwrap();

        let result = InputReader::read(file_path.to_str().unwrap());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_file_at_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("max_file.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE)).unwrap();

        let result = InputReader::read(file_path.to_str().unwrap()).unwrap();
        assert_eq!(result.len(), MAX_INPUT_SIZE);
    }
}

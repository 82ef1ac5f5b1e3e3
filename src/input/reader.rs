use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, IsTerminal, Read};

/// Upper bound on source text read from a file or stdin.
///
/// The text travels in a GET query string, so anything near this size is
/// already far beyond what an endpoint accepts.
pub const MAX_INPUT_SIZE: usize = 64 * 1024;

/// Picks the source text from an argument, a file, or stdin.
pub struct InputReader;

impl InputReader {
    /// Returns `text` if given, else the file contents, else stdin.
    ///
    /// An interactive stdin with neither argument yields empty input rather
    /// than blocking.
    pub fn read(text: Option<&str>, file_path: Option<&str>) -> Result<String> {
        match (text, file_path) {
            (Some(_), Some(_)) => bail!("Error: Pass either TEXT or --file, not both"),
            (Some(text), None) => Ok(text.to_string()),
            (None, Some(path)) => Self::read_file(path),
            (None, None) if io::stdin().is_terminal() => Ok(String::new()),
            (None, None) => Self::read_stdin(),
        }
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({size} bytes) exceeds maximum allowed size ({MAX_INPUT_SIZE} bytes)."
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
            bail!("Error: Input exceeds maximum allowed size ({MAX_INPUT_SIZE} bytes).");
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

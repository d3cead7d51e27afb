//! File and stream helpers: interactive line input, move log reading with
//! transparent `.zst` decompression, and output directory creation.

use std::io::{self, BufRead};
use std::path::Path;

/// Reads one trimmed line. `None` on EOF or a read error.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a text file, decompressing it first when the name ends in `.zst`.
/// A leading UTF-8 BOM is dropped.
///
/// ```rust,no_run
/// # use ratongato_cli::io_utils::read_text_auto;
/// let log = read_text_auto("games/2024-05-01.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> io::Result<String> {
    let mut content = if path.ends_with(".zst") {
        let compressed = std::fs::read(path)?;
        let raw = zstd::stream::decode_all(compressed.as_slice())?;
        String::from_utf8(raw).map_err(io::Error::other)?
    } else {
        std::fs::read_to_string(path)?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Creates the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

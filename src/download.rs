//! Hand-off helpers for generated HTML documents.

use crate::Error;
use base64::{engine::general_purpose, Engine as _};
use std::path::{Path, PathBuf};

const HTML_DATA_URL_PREFIX: &str = "data:text/html;charset=utf-8;base64,";

/// Wrap `html` in a self-contained `data:` URL that browsers offer as a download.
///
/// No validation is performed on the document.
pub fn create_download_link(html: &str) -> String {
    let encoded = general_purpose::STANDARD.encode(html.as_bytes());
    format!("{HTML_DATA_URL_PREFIX}{encoded}")
}

/// Derive a file stem from a game type label.
///
/// Path separators and other characters that are unsafe in file names are
/// replaced with `_`; non-ASCII labels such as "贪吃蛇" are kept as-is.
pub fn file_name_for(game_type: &str) -> String {
    let stem: String = game_type
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        "game".to_string()
    } else {
        stem
    }
}

/// Write `html` to `<dir>/<file_stem>.html` and return the path.
pub fn save_html(dir: impl AsRef<Path>, file_stem: &str, html: &str) -> Result<PathBuf, Error> {
    let path = dir.as_ref().join(format!("{}.html", file_name_for(file_stem)));
    std::fs::write(&path, html)?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "Saved generated game");
    Ok(path)
}

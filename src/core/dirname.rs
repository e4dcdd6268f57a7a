//! Media info from `TITLE (YEAR)` directory names.
//!
//! When the user doesn't pass a title and year, they come from the name
//! of the directory the tool runs in.

use crate::{Error, Result};
use chrono::Datelike;

/// Check that a year is plausible for a release: after the invention of
/// cinema, not more than ten years into the future.
pub fn validate_year(year: i32) -> Result<i32> {
    let max = chrono::Local::now().year() + 10;
    if year <= 1800 || year >= max {
        return Err(Error::BadYear(year));
    }
    Ok(year)
}

/// Parse a `TITLE (YEAR)` directory name into its parts.
pub fn parse_dir_name(name: &str) -> Result<(String, i32)> {
    if let Ok(re) = regex::Regex::new(r"^(.+?)\s+\((\d{4})\)$") {
        if let Some(caps) = re.captures(name.trim()) {
            let title = caps[1].trim().to_string();
            let year: i32 = caps[2]
                .parse()
                .map_err(|_| Error::BadDirName(name.to_string()))?;
            return Ok((title, validate_year(year)?));
        }
    }
    Err(Error::BadDirName(name.to_string()))
}

/// Title and year from the current directory's name.
pub fn title_year_from_cwd() -> Result<(String, i32)> {
    let cwd = std::env::current_dir()?;
    let name = cwd
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::BadDirName(cwd.display().to_string()))?;
    parse_dir_name(name)
}

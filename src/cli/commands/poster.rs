//! Poster command - export a stored poster to the current directory.

use crate::core::{dirname, store::MediaStore};
use crate::models::config::Config;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Name the poster is written under.
const POSTER_FILENAME: &str = "poster.jpg";

/// Look up a record's poster blob and write it next to the user.
///
/// The title comes from `--title` or from the cwd name. An existing
/// poster file is left alone unless `--replace` is set.
pub fn poster(config: &Config, title: Option<&str>, replace: bool) -> Result<()> {
    if Path::new(POSTER_FILENAME).exists() && !replace {
        println!("Found {}, quitting.", POSTER_FILENAME);
        return Ok(());
    }

    let title = match title {
        Some(t) => t.to_string(),
        None => dirname::title_year_from_cwd()?.0,
    };

    let store = MediaStore::open(config.db_path()?)?;
    let bytes = store.poster(&title)?;
    std::fs::write(POSTER_FILENAME, &bytes)?;
    println!("{} Wrote poster to {}", "✓".green(), POSTER_FILENAME);
    Ok(())
}

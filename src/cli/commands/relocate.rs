//! Relocate command - update a record's stored path.

use crate::core::store::MediaStore;
use crate::models::config::Config;
use anyhow::Result;
use colored::Colorize;

/// Point the record's path at the current working directory.
pub fn relocate(config: &Config, id: u64) -> Result<()> {
    let store = MediaStore::open(config.db_path()?)?;
    let path = std::env::current_dir()?.display().to_string();
    store.update_path(id, &path)?;

    if let Some((title, year)) = store.find_by_id(id)? {
        println!(
            "{} {} ({}) now points at {}",
            "✓".green(),
            title.bold(),
            year,
            path
        );
    }
    Ok(())
}

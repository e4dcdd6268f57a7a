//! List command - print stored records.

use crate::core::store::MediaStore;
use crate::models::config::Config;
use anyhow::Result;
use colored::Colorize;

/// Print stored records ordered by title and year.
pub fn list(config: &Config, limit: Option<usize>) -> Result<()> {
    let store = MediaStore::open(config.db_path()?)?;
    let records = store.list(limit)?;

    if records.is_empty() {
        println!("The database is empty.");
        return Ok(());
    }

    for record in &records {
        let director = if record.director.is_empty() {
            String::new()
        } else {
            format!(" -- {}", record.director)
        };
        println!(
            "{:>8}  {:5}  {} ({}){}\n          {}",
            record.id,
            record.media_type,
            record.title.bold(),
            record.year,
            director,
            record.path.dimmed()
        );
    }
    println!("\n{} record(s)", records.len());
    Ok(())
}

//! Scan command - resolve a title against TMDB and store the match.

use crate::core::{dirname, resolver, store::MediaStore};
use crate::models::config::Config;
use crate::models::media::{LocalRecord, ResolvedMedia};
use crate::services::tmdb::TmdbClient;
use anyhow::Result;
use colored::Colorize;

/// Run a full resolution: reconcile against the local store, search TMDB,
/// pick a candidate, enrich it, and persist it with its poster.
pub async fn scan(config: &Config, info: Option<&[String]>, tolerance: i32) -> Result<()> {
    let (title, year) = target_from_args(info)?;
    let store = MediaStore::open(config.db_path()?)?;

    // A record under this title and year means the work is already done;
    // don't touch the network.
    if let Some(id) = store.find_by_title_year(&title, year)? {
        println!(
            "{} Found {} ({}) in db. The Movie DB id is {}. Quitting.",
            "✓".green(),
            title.bold(),
            year,
            id
        );
        return Ok(());
    }

    let client = TmdbClient::new(config.tmdb.clone())?;
    println!("Searching TMDB for {} ({})...", title.bold(), year);
    let response = client.search_multi(Some(title.as_str())).await?;
    let mut media = resolver::select_candidate(&response, &title, year, tolerance)?;
    resolver::enrich_director(&client, &mut media).await?;
    println!(
        "{} Matched {} ({}) - TMDB id {}",
        "✓".green(),
        media.title.bold(),
        media.year(),
        media.tmdb_id
    );

    // Re-running a resolution for a stored id is a no-op, not an error.
    if store.find_by_id(media.tmdb_id)?.is_some() {
        println!(
            "{} Found {} ({}) in db. The Movie DB id is {}. Quitting.",
            "✓".green(),
            media.title.bold(),
            media.year(),
            media.tmdb_id
        );
        return Ok(());
    }

    let poster = fetch_poster(&client, &media).await;
    let path = std::env::current_dir()?.display().to_string();
    let record = LocalRecord::new(&media, poster, path);
    store.insert(&record)?;

    println!(
        "{} Wrote the following info to db (hiding the poster)\n{}",
        "✓".green(),
        serde_json::to_string_pretty(&record)?
    );
    Ok(())
}

/// Resolve the target title and year from `--info`, falling back to the
/// current directory name.
fn target_from_args(info: Option<&[String]>) -> Result<(String, i32)> {
    match info {
        Some([title, year]) => {
            let year: i32 = year
                .parse()
                .map_err(|_| anyhow::anyhow!("year must be a number, got '{}'", year))?;
            Ok((title.clone(), dirname::validate_year(year)?))
        }
        Some(_) => anyhow::bail!("--info expects TITLE YEAR"),
        None => {
            println!("Reading title and year from the current directory name");
            Ok(dirname::title_year_from_cwd()?)
        }
    }
}

/// Download the poster, if the media has one.
///
/// Resolution succeeds without a poster: a missing path or a failed
/// download leaves the record's poster column empty.
async fn fetch_poster(client: &TmdbClient, media: &ResolvedMedia) -> Option<Vec<u8>> {
    let poster_path = match &media.poster_path {
        Some(path) => path,
        None => {
            println!("{} {} has no poster, storing without one", "!".yellow(), media.title);
            return None;
        }
    };
    println!("Downloading poster...");
    match client.download_poster(poster_path).await {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::warn!(%err, "poster download failed, storing without one");
            println!("{} Poster download failed, storing without one", "!".yellow());
            None
        }
    }
}

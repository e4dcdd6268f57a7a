//! Candidate selection and enrichment.
//!
//! This module holds the decision logic of a resolution:
//!
//! 1. **Selection**: scan the multi-search results in API order, skip
//!    persons and malformed entries, accept the first candidate whose
//!    release year falls within the tolerance window
//! 2. **Enrichment**: for movies, a credits lookup fills in the director

use crate::models::media::{MediaCandidate, MediaKind, ResolvedMedia, SearchHit};
use crate::services::tmdb::{CreditsResponse, MultiSearchResponse, TmdbClient};
use crate::{Error, Result};

/// Select the first acceptable candidate from a multi-search response.
///
/// Results are scanned once, in the order the API returned them, trusting
/// its relevance ranking. A hit is skipped when it is a person, fails to
/// decode, or validates but misses the year window; the scan never backs
/// up to a discarded hit. Exhausting the list is a hard failure carrying
/// the first raw result so the operator can see what the API thought was
/// the best answer.
pub fn select_candidate(
    response: &MultiSearchResponse,
    title: &str,
    year: i32,
    tolerance: i32,
) -> Result<ResolvedMedia> {
    if response.total_results == 0 || response.results.is_empty() {
        return Err(Error::EmptyResults);
    }

    for raw in &response.results {
        let hit = match serde_json::from_value::<SearchHit>(raw.clone()) {
            Ok(hit) => hit,
            Err(err) => {
                tracing::debug!(%err, "skipping undecodable search result");
                continue;
            }
        };

        let Some(candidate) = MediaCandidate::from_hit(hit) else {
            continue;
        };

        if (candidate.year() - year).abs() <= tolerance {
            tracing::debug!(
                tmdb_id = candidate.tmdb_id,
                year = candidate.year(),
                "accepting candidate"
            );
            return Ok(candidate.into());
        }
        tracing::debug!(
            candidate = %candidate.title,
            candidate_year = candidate.year(),
            "candidate outside year tolerance"
        );
    }

    Err(Error::NoMatch {
        title: title.to_string(),
        year,
        first_result: response.results[0].to_string(),
    })
}

/// Fill in the director of a movie via the credits endpoint.
///
/// Shows are a no-op: no credits call is made and the director stays
/// empty. A movie whose credits list no director is an error.
pub async fn enrich_director(client: &TmdbClient, media: &mut ResolvedMedia) -> Result<()> {
    if media.kind != MediaKind::Movie {
        return Ok(());
    }
    let credits = client.movie_credits(media.tmdb_id).await?;
    media.director = first_director(&credits)?;
    Ok(())
}

/// Pick the first crew member credited as Director, in list order.
pub fn first_director(credits: &CreditsResponse) -> Result<String> {
    credits
        .crew
        .iter()
        .find(|member| member.job == "Director")
        .map(|member| member.name.clone())
        .ok_or(Error::NoDirector)
}

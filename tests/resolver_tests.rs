//! Integration tests for candidate selection and enrichment.
//!
//! Tests cover:
//! - Scan order and first-match acceptance
//! - Person and malformed-entry skipping
//! - Year tolerance boundaries
//! - Director extraction from credits

use media_catalog::core::resolver::{enrich_director, first_director, select_candidate};
use media_catalog::models::config::TmdbConfig;
use media_catalog::models::media::{MediaKind, ResolvedMedia};
use media_catalog::services::tmdb::{CreditsResponse, CrewMember, MultiSearchResponse, TmdbClient};
use media_catalog::Error;
use serde_json::json;

fn response(results: Vec<serde_json::Value>) -> MultiSearchResponse {
    MultiSearchResponse {
        total_results: results.len() as u32,
        results,
    }
}

fn movie(id: u64, title: &str, release_date: &str) -> serde_json::Value {
    json!({
        "id": id,
        "media_type": "movie",
        "title": title,
        "release_date": release_date,
        "overview": "an overview",
        "poster_path": "/abc.jpg",
    })
}

// ========== SELECTION TESTS ==========

#[test]
fn test_first_candidate_within_tolerance_wins() {
    // The second hit matches the target year exactly, but the first one
    // is already inside the window and the scan stops there.
    let resp = response(vec![
        movie(1, "Dune", "2020-09-01"),
        movie(2, "Dune", "2021-10-01"),
    ]);

    let media = select_candidate(&resp, "Dune", 2021, 2).unwrap();
    assert_eq!(media.tmdb_id, 1);
    assert_eq!(media.year(), 2020);
}

#[test]
fn test_person_results_are_skipped() {
    let resp = response(vec![
        json!({"media_type": "person", "id": 99, "name": "Dune Smith"}),
        movie(438631, "Dune", "2021-10-01"),
    ]);

    let media = select_candidate(&resp, "Dune", 2021, 2).unwrap();
    assert_eq!(media.tmdb_id, 438631);
    assert_eq!(media.year(), 2021);
    assert_eq!(media.kind, MediaKind::Movie);
    assert!(media.director.is_empty());
}

#[test]
fn test_tv_hits_use_their_own_field_names() {
    let resp = response(vec![json!({
        "id": 1396,
        "media_type": "tv",
        "name": "Breaking Bad",
        "first_air_date": "2008-01-20",
        "overview": "a chemistry teacher",
        "poster_path": "/bb.png",
    })]);

    let media = select_candidate(&resp, "Breaking Bad", 2008, 2).unwrap();
    assert_eq!(media.kind, MediaKind::Tv);
    assert_eq!(media.title, "Breaking Bad");
    assert_eq!(media.year(), 2008);
}

#[test]
fn test_person_only_results_fail_with_no_match() {
    let resp = response(vec![
        json!({"media_type": "person", "id": 1}),
        json!({"media_type": "person", "id": 2}),
    ]);

    match select_candidate(&resp, "Somebody", 2000, 2) {
        Err(Error::NoMatch { title, year, .. }) => {
            assert_eq!(title, "Somebody");
            assert_eq!(year, 2000);
        }
        other => panic!("Expected NoMatch, got {:?}", other.map(|m| m.title)),
    }
}

#[test]
fn test_out_of_tolerance_fails_with_no_match() {
    let resp = response(vec![movie(1, "Dune", "2021-10-01")]);

    let err = select_candidate(&resp, "Dune", 1990, 2).unwrap_err();
    assert!(matches!(err, Error::NoMatch { year: 1990, .. }));
}

#[test]
fn test_no_match_reports_first_raw_result() {
    let resp = response(vec![
        json!({"media_type": "person", "id": 7, "name": "First Hit"}),
        movie(1, "Way Off", "1950-01-01"),
    ]);

    match select_candidate(&resp, "Way Off", 2020, 2) {
        Err(Error::NoMatch { first_result, .. }) => {
            assert!(first_result.contains("First Hit"));
        }
        _ => panic!("Expected NoMatch"),
    }
}

#[test]
fn test_no_backtracking_to_discarded_candidates() {
    // Both hits are media, both outside the window. The scan must not
    // fall back to the closer one.
    let resp = response(vec![
        movie(1, "Old Cut", "2010-01-01"),
        movie(2, "Older Cut", "1995-01-01"),
    ]);

    assert!(matches!(
        select_candidate(&resp, "Old Cut", 2020, 5),
        Err(Error::NoMatch { .. })
    ));
}

#[test]
fn test_empty_results_error() {
    let resp = MultiSearchResponse {
        total_results: 0,
        results: vec![],
    };

    assert!(matches!(
        select_candidate(&resp, "Nothing", 2020, 2),
        Err(Error::EmptyResults)
    ));
}

#[test]
fn test_year_tolerance_is_inclusive() {
    let resp = response(vec![movie(1, "Edge", "2016-06-01")]);

    // |2016 - 2021| == 5: accepted at tolerance 5, rejected at 4.
    assert!(select_candidate(&resp, "Edge", 2021, 5).is_ok());
    assert!(select_candidate(&resp, "Edge", 2021, 4).is_err());
}

// ========== VALIDATION TESTS ==========

#[test]
fn test_malformed_poster_path_is_never_selected() {
    // In-window year but the poster path isn't an image reference.
    let bad = json!({
        "id": 1,
        "media_type": "movie",
        "title": "Dune",
        "release_date": "2021-10-01",
        "overview": "an overview",
        "poster_path": "/abc.exe",
    });

    let err = select_candidate(&response(vec![bad.clone()]), "Dune", 2021, 2).unwrap_err();
    assert!(matches!(err, Error::NoMatch { .. }));

    // A later well-formed hit still gets its turn.
    let resp = response(vec![bad, movie(2, "Dune", "2021-10-01")]);
    assert_eq!(select_candidate(&resp, "Dune", 2021, 2).unwrap().tmdb_id, 2);
}

#[test]
fn test_missing_release_date_is_skipped() {
    let undated = json!({
        "id": 1,
        "media_type": "movie",
        "title": "Dune",
        "overview": "an overview",
        "poster_path": "/abc.jpg",
    });

    let resp = response(vec![undated, movie(2, "Dune", "2021-10-01")]);
    assert_eq!(select_candidate(&resp, "Dune", 2021, 2).unwrap().tmdb_id, 2);
}

#[test]
fn test_empty_release_date_is_skipped() {
    let resp = response(vec![movie(1, "Dune", ""), movie(2, "Dune", "2021-10-01")]);
    assert_eq!(select_candidate(&resp, "Dune", 2021, 2).unwrap().tmdb_id, 2);
}

#[test]
fn test_unknown_media_type_is_skipped() {
    let resp = response(vec![
        json!({"media_type": "collection", "id": 5, "title": "Dune Saga"}),
        movie(2, "Dune", "2021-10-01"),
    ]);
    assert_eq!(select_candidate(&resp, "Dune", 2021, 2).unwrap().tmdb_id, 2);
}

#[test]
fn test_candidate_without_poster_is_acceptable() {
    let resp = response(vec![json!({
        "id": 3,
        "media_type": "movie",
        "title": "Obscure",
        "release_date": "1998-03-15",
        "overview": "no artwork survives",
        "poster_path": null,
    })]);

    let media = select_candidate(&resp, "Obscure", 1998, 2).unwrap();
    assert_eq!(media.poster_path, None);
}

// ========== ENRICHMENT TESTS ==========

fn credits(crew: Vec<(&str, &str)>) -> CreditsResponse {
    CreditsResponse {
        crew: crew
            .into_iter()
            .map(|(job, name)| CrewMember {
                job: job.to_string(),
                name: name.to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_first_director_in_list_order() {
    let credits = credits(vec![
        ("Producer", "Mary Parent"),
        ("Director", "Denis Villeneuve"),
        ("Director", "Somebody Else"),
    ]);

    assert_eq!(first_director(&credits).unwrap(), "Denis Villeneuve");
}

#[test]
fn test_no_director_in_credits_is_an_error() {
    let credits = credits(vec![("Producer", "Mary Parent"), ("Editor", "Joe Walker")]);

    assert!(matches!(first_director(&credits), Err(Error::NoDirector)));
}

#[test]
fn test_director_job_match_is_exact() {
    let credits = credits(vec![("Assistant Director", "Not The One")]);

    assert!(matches!(first_director(&credits), Err(Error::NoDirector)));
}

#[tokio::test]
async fn test_shows_skip_the_credits_lookup() {
    // The client points at an unroutable address: any credits call would
    // fail, so success proves no request was made.
    let config = TmdbConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        image_url: "http://127.0.0.1:1".to_string(),
        api_key: None,
        read_token: Some("test-token".to_string()),
    };
    let client = TmdbClient::new(config).unwrap();

    let mut media = ResolvedMedia {
        tmdb_id: 1396,
        kind: MediaKind::Tv,
        title: "Breaking Bad".to_string(),
        release_date: chrono::NaiveDate::from_ymd_opt(2008, 1, 20).unwrap(),
        overview: "a chemistry teacher".to_string(),
        poster_path: None,
        director: String::new(),
    };

    enrich_director(&client, &mut media).await.unwrap();
    assert!(media.director.is_empty());
}

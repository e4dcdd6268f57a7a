//! Media Catalog Library
//!
//! A library for resolving movie/TV titles against TMDB and persisting
//! the matches, with poster artwork, in a local SQLite database.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Error, Result};

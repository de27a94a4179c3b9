//! Search behavior tests.

mod common;

#[path = "search/filtering.rs"]
mod filtering;

#[path = "search/matching.rs"]
mod matching;

#[path = "search/ordering.rs"]
mod ordering;

#[path = "search/presentation.rs"]
mod presentation;

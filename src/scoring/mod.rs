// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Scores are plain integers built from two ingredients: how early the first
//! match sits in the page and how often the query occurs. Phrase matches weigh
//! occurrences fifteen times more than term matches, because typing a phrase
//! signals exact intent. Ordering is either pure relevance or the book's own
//! reading order with relevance inside each chapter.

mod core;
pub mod ranking;

pub use core::*;

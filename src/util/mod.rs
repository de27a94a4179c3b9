// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Text normalization for accent-insensitive matching, plus the char-offset
//! helpers the scorer and the snippet extractor share. Everything here works
//! in characters rather than bytes because the browser indexes strings that way.

pub mod normalize;
pub mod text;

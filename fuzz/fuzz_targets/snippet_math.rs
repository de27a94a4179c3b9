// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction and math rendering on hostile markup.
//!
//! Unbalanced dollars, template tags cut in half, multi-byte characters at
//! window edges. A snippet must never split a formula, and rendered output
//! must never carry raw markup.

#![no_main]

use arbitrary::Arbitrary;
use booksearch::{extract_snippet, render_markup_spans, sanitize, RenderError, RenderOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    content: String,
    query: String,
    max_length: u8,
}

fn wrap(source: &str, options: RenderOptions) -> Result<String, RenderError> {
    if source.contains('!') {
        return Err(RenderError::new("rejected"));
    }
    let tag = if options.display_mode { "div" } else { "span" };
    Ok(format!("<{tag}>x</{tag}>"))
}

fuzz_target!(|input: Input| {
    let content: String = input.content.chars().take(2000).collect();

    // INVARIANT 1: sanitizing is idempotent
    let clean = sanitize(&content);
    assert_eq!(sanitize(&clean), clean);

    let snippet = extract_snippet(&content, &input.query, usize::from(input.max_length));

    // INVARIANT 2: formulas are never cut in half
    let dollars = snippet.chars().filter(|&c| c == '$').count();
    assert_eq!(dollars % 2, 0, "odd dollars in {snippet:?}");

    // INVARIANT 3: escaped output never contains raw angle brackets
    let escaped = render_markup_spans(&snippet, None);
    assert!(!escaped.contains('<') && !escaped.contains('>'));

    // INVARIANT 4: rendered output only carries the renderer's own tags
    let rendered = render_markup_spans(&snippet, Some(&wrap));
    let stripped = rendered
        .replace("<span>x</span>", "")
        .replace("<div>x</div>", "");
    assert!(!stripped.contains('<') && !stripped.contains('>'));
});

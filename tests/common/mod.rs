//! Shared test utilities and fixtures.

#![allow(dead_code)]

use booksearch::{SearchIndex, SearchOptions};
use std::sync::LazyLock;

// Re-export canonical test utilities from booksearch::testing
pub use booksearch::testing::{make_doc, make_index, TagRenderer};

// ============================================================================
// FIXTURE BOOK
// ============================================================================

/// A small probability textbook, as the site generator would export it.
///
/// Four structural pages (two homes, a home `index.html` and a table of
/// contents) that mention Bayes, plus content pages across two parts.
pub const BOOK_JSON: &str = r#"[
    {"url": "/it/", "title": "Home", "content": "Benvenuti nel libro di probabilità. Teorema di Bayes."},
    {"url": "/it/index.html", "title": "Home", "content": "Indice: teorema di Bayes."},
    {"url": "/it/toc-big.html", "title": "Indice", "content": "Teorema di Bayes, variabili aleatorie."},
    {"url": "/en/", "title": "Home", "content": "Welcome. Bayes theorem."},
    {"url": "/it/I/1/1.html", "title": "Eventi", "content": "Uno spazio di probabilità è una terna. La probabilità $P(A)$ di un evento."},
    {"url": "/it/I/2/index.html", "title": "Probabilità condizionata", "content": "La probabilità condizionata $P(A|B)$ e il teorema di Bayes."},
    {"url": "/it/I/2/3.html", "title": "Teorema di Bayes", "content": "Il teorema di Bayes afferma che $$P(A|B) = \\frac{P(B|A)P(A)}{P(B)}$$ per ogni evento. Il teorema di Bayes è fondamentale."},
    {"url": "/it/I/5/1.html", "title": "Reti bayesiane", "content": "Una rete bayesiana usa il teorema di Bayes teorema di Bayes teorema di Bayes ripetutamente."},
    {"url": "/it/II/1/2.html", "title": "Catene di Markov", "content": "{% include nota.html %}Una catena di Markov ha memoria corta.Vediamo un esempio."},
    {"url": "/it/appendice.html", "title": "Appendice", "content": "Tavole e teorema di Bayes."}
]"#;

static BOOK: LazyLock<SearchIndex> =
    LazyLock::new(|| SearchIndex::from_json(BOOK_JSON).expect("fixture book is valid"));

/// The fixture book, parsed once per test binary.
pub fn book() -> &'static SearchIndex {
    &BOOK
}

/// URLs of the results for `query`, in result order.
pub fn result_urls(query: &str, options: &SearchOptions) -> Vec<String> {
    booksearch::search(book(), query, options)
        .iter()
        .map(|result| result.document.url.clone())
        .collect()
}

pub fn book_order() -> SearchOptions {
    SearchOptions::default().with_order(booksearch::SortOrder::BookOrder)
}

//! Query modes: exact phrases and all-terms matching.

use super::common::{book, make_index, result_urls};
use booksearch::{search, SearchOptions};

#[test]
fn test_single_word_matches_every_page_containing_it() {
    let mut urls = result_urls("bayes", &SearchOptions::default());
    urls.sort();
    assert_eq!(
        urls,
        vec![
            "/it/I/2/3.html",
            "/it/I/2/index.html",
            "/it/I/5/1.html",
            "/it/appendice.html",
        ]
    );
}

#[test]
fn test_whitespace_query_is_a_phrase() {
    // Contiguous "teorema di bayes" exists on four content pages
    assert_eq!(result_urls("teorema di bayes", &SearchOptions::default()).len(), 4);
    // Words present but never adjacent in this order
    assert!(result_urls("bayes di", &SearchOptions::default()).is_empty());
}

#[test]
fn test_quoted_phrase() {
    assert_eq!(
        result_urls("\"bayes teorema\"", &SearchOptions::default()),
        vec!["/it/I/5/1.html"]
    );
    assert!(result_urls("\"di teorema\"", &SearchOptions::default()).is_empty());
}

#[test]
fn test_phrase_score_counts_every_occurrence() {
    let results = search(book(), "\"bayes teorema\"", &SearchOptions::default());
    // First match at character 37, two non-overlapping occurrences
    assert_eq!(results[0].score, (5000 - 37) + 2 * 300);
}

#[test]
fn test_punctuated_terms_are_all_required() {
    assert_eq!(
        result_urls("markov,catena", &SearchOptions::default()),
        vec!["/it/II/1/2.html"]
    );
    assert_eq!(
        result_urls("catena,markov", &SearchOptions::default()),
        vec!["/it/II/1/2.html"]
    );
    assert!(result_urls("markov,bayes", &SearchOptions::default()).is_empty());
}

#[test]
fn test_matching_ignores_case_and_accents() {
    let plain = result_urls("probabilita", &SearchOptions::default());
    assert_eq!(plain, vec!["/it/I/2/index.html", "/it/I/1/1.html"]);
    assert_eq!(result_urls("PROBABILITÀ", &SearchOptions::default()), plain);
}

#[test]
fn test_title_contributes_to_score() {
    let results = search(book(), "probabilita", &SearchOptions::default());
    // Content and title each mention it once
    assert_eq!(results[0].document.url, "/it/I/2/index.html");
    assert_eq!(results[0].score, (5000 - 3) + 2 * 20);
}

#[test]
fn test_template_markup_is_not_searchable() {
    assert!(result_urls("include", &SearchOptions::default()).is_empty());
    assert!(result_urls("nota", &SearchOptions::default()).is_empty());
}

#[test]
fn test_glued_sentences_split_into_words() {
    // "corta.Vediamo" in the source
    assert_eq!(
        result_urls("\"corta vediamo\"", &SearchOptions::default()),
        vec!["/it/II/1/2.html"]
    );
    assert_eq!(
        result_urls("vediamo", &SearchOptions::default()),
        vec!["/it/II/1/2.html"]
    );
}

#[test]
fn test_formula_text_is_searchable() {
    let index = make_index(&[
        ("/it/I/1/1.html", "Uno", "Vale $\\frac{a}{b}$ sempre."),
        ("/it/I/1/2.html", "Due", "Nessuna formula qui."),
    ]);
    let results = search(&index, "frac", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.url, "/it/I/1/1.html");
}

#[test]
fn test_blank_and_unmatched_queries() {
    assert!(result_urls("", &SearchOptions::default()).is_empty());
    assert!(result_urls("  \"  \" ", &SearchOptions::default()).is_empty());
    assert!(result_urls("laplace", &SearchOptions::default()).is_empty());
}

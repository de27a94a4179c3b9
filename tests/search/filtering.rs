//! Structural pages never appear in results.

use super::common::{book, result_urls, BOOK_JSON};
use booksearch::{search, SearchIndex, SearchOptions};

const STRUCTURAL: [&str; 4] = ["/it/", "/it/index.html", "/it/toc-big.html", "/en/"];

#[test]
fn test_homes_and_toc_are_filtered() {
    let urls = result_urls("bayes", &SearchOptions::default());
    assert!(!urls.is_empty());
    for structural in STRUCTURAL {
        assert!(
            !urls.iter().any(|url| url == structural),
            "{structural} should be filtered: {urls:?}"
        );
    }
}

#[test]
fn test_structural_only_match_is_no_results() {
    // "benvenuti" only appears on the Italian home page
    assert!(result_urls("benvenuti", &SearchOptions::default()).is_empty());
    assert!(result_urls("welcome", &SearchOptions::default()).is_empty());
}

#[test]
fn test_languages_are_configurable() {
    let options = SearchOptions {
        languages: vec!["en".to_string()],
        ..SearchOptions::default()
    };
    let urls = result_urls("benvenuti", &options);
    assert_eq!(urls, vec!["/it/"]);
    assert!(result_urls("welcome", &options).is_empty());
}

#[test]
fn test_base_path_prefix_is_still_structural() {
    let json = BOOK_JSON.replace("\"/it/", "\"/libro/it/").replace("\"/en/", "\"/libro/en/");
    let index = SearchIndex::from_json(&json).unwrap();
    let results = search(&index, "bayes", &SearchOptions::default());

    assert_eq!(results.len(), search(book(), "bayes", &SearchOptions::default()).len());
    assert!(results.iter().all(|r| r.document.url.starts_with("/libro/it/I")
        || r.document.url == "/libro/it/appendice.html"));
}

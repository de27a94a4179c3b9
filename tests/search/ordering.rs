//! Relevance and book ordering, and the result cap.

use super::common::{book, book_order, make_index, result_urls};
use booksearch::{search, SearchOptions};

#[test]
fn test_relevance_order() {
    assert_eq!(
        result_urls("bayes", &SearchOptions::default()),
        vec![
            "/it/I/5/1.html",
            "/it/I/2/3.html",
            "/it/appendice.html",
            "/it/I/2/index.html",
        ]
    );
}

#[test]
fn test_relevance_scores() {
    let scores: Vec<u64> = search(book(), "bayes", &SearchOptions::default())
        .iter()
        .map(|r| r.score)
        .collect();
    assert_eq!(scores, vec![5091, 5046, 5000, 4970]);
}

#[test]
fn test_book_order() {
    assert_eq!(
        result_urls("bayes", &book_order()),
        vec![
            "/it/I/2/3.html",
            "/it/I/2/index.html",
            "/it/I/5/1.html",
            "/it/appendice.html",
        ]
    );
}

#[test]
fn test_book_order_prefers_score_within_a_chapter() {
    let index = make_index(&[
        ("/it/I/2/1.html", "Uno", "bayes"),
        ("/it/I/2/2.html", "Due", "bayes bayes"),
        ("/it/I/1/4.html", "Prima", "testo bayes"),
    ]);
    let urls: Vec<&str> = search(&index, "bayes", &book_order())
        .iter()
        .map(|r| r.document.url.as_str())
        .collect();
    assert_eq!(urls, vec!["/it/I/1/4.html", "/it/I/2/2.html", "/it/I/2/1.html"]);
}

#[test]
fn test_roman_parts_sort_numerically() {
    let index = make_index(&[
        ("/it/IX/1/1.html", "Nove", "bayes"),
        ("/it/IV/1/1.html", "Quattro", "bayes"),
        ("/it/V/1/1.html", "Cinque", "bayes"),
    ]);
    let urls: Vec<&str> = search(&index, "bayes", &book_order())
        .iter()
        .map(|r| r.document.url.as_str())
        .collect();
    assert_eq!(
        urls,
        vec!["/it/IV/1/1.html", "/it/V/1/1.html", "/it/IX/1/1.html"]
    );
}

#[test]
fn test_limit() {
    let options = SearchOptions::default().with_limit(2);
    assert_eq!(
        result_urls("bayes", &options),
        vec!["/it/I/5/1.html", "/it/I/2/3.html"]
    );

    let options = book_order().with_limit(1);
    assert_eq!(result_urls("bayes", &options), vec!["/it/I/2/3.html"]);

    assert!(result_urls("bayes", &SearchOptions::default().with_limit(0)).is_empty());
}

#[test]
fn test_default_cap_is_eighty() {
    let pages: Vec<(String, String)> = (1..=120)
        .map(|n| (format!("/it/II/{}/{}.html", n / 10 + 1, n % 10 + 1), format!("teorema {n}")))
        .collect();
    let borrowed: Vec<(&str, &str, &str)> = pages
        .iter()
        .map(|(url, content)| (url.as_str(), "", content.as_str()))
        .collect();
    let index = make_index(&borrowed);

    assert_eq!(search(&index, "teorema", &SearchOptions::default()).len(), 80);
    assert_eq!(search(&index, "teorema", &book_order()).len(), 80);
}

//! From scored results to displayable views.

use super::common::{book, make_index, TagRenderer};
use booksearch::{build_views, search, SearchOptions};

#[test]
fn test_view_renders_display_math() {
    let options = SearchOptions::default();
    let results = search(book(), "afferma", &options);
    let views = build_views(&results, "afferma", &options, Some(&TagRenderer));

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].label, "Teorema di Bayes");
    assert_eq!(
        views[0].snippet_html,
        "Il teorema di Bayes afferma che <M>P(A|B) = \\frac{P(B|A)P(A)}{P(B)}</M> \
         per ogni evento. Il teorema di Bayes è fondamentale."
    );
}

#[test]
fn test_view_without_renderer_keeps_source() {
    let options = SearchOptions::default();
    let results = search(book(), "afferma", &options);
    let views = build_views(&results, "afferma", &options, None);

    assert!(views[0]
        .snippet_html
        .contains("$$P(A|B) = \\frac{P(B|A)P(A)}{P(B)}$$"));
}

#[test]
fn test_views_follow_result_order_and_base_path() {
    let options = SearchOptions {
        base_path: "/libro/".to_string(),
        ..SearchOptions::default()
    };
    let results = search(book(), "bayes", &options);
    let views = build_views(&results, "bayes", &options, None);

    let urls: Vec<&str> = views.iter().map(|v| v.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "/libro/it/I/5/1.html",
            "/libro/it/I/2/3.html",
            "/libro/it/appendice.html",
            "/libro/it/I/2/index.html",
        ]
    );
    for (view, result) in views.iter().zip(&results) {
        assert_eq!(view.score, result.score);
    }
}

#[test]
fn test_snippet_window_keeps_formula_whole() {
    let content = format!(
        "{}Il teorema di Bayes dice che $P(A|B) = P(B|A)P(A)/P(B)$ e la formula vale sempre. {}",
        "premessa ".repeat(40),
        "coda ".repeat(60)
    );
    let index = make_index(&[("/it/I/2/3.html", "Bayes", &content)]);
    let options = SearchOptions {
        snippet_length: 60,
        ..SearchOptions::default()
    };
    let results = search(&index, "bayes", &options);
    let views = build_views(&results, "bayes", &options, Some(&TagRenderer));
    let html = &views[0].snippet_html;

    assert!(html.starts_with("… "), "{html}");
    assert!(html.ends_with(" …"), "{html}");
    assert!(html.contains("<m>P(A|B) = P(B|A)P(A)/P(B)</m>"), "{html}");
    assert!(!html.contains('$'), "{html}");
}

#[test]
fn test_failed_formula_falls_back_to_escaped_source() {
    let index = make_index(&[(
        "/it/I/1/1.html",
        "Errore",
        "Formula rotta $\\fail{x} < 1$ e buona $y > 0$ qui.",
    )]);
    let options = SearchOptions::default();
    let results = search(&index, "rotta", &options);
    let views = build_views(&results, "rotta", &options, Some(&TagRenderer));

    assert_eq!(
        views[0].snippet_html,
        "Formula rotta $\\fail{x} &lt; 1$ e buona <m>y > 0</m> qui."
    );
}

#[test]
fn test_untitled_page_is_labelled_by_url() {
    let index = make_index(&[("/it/I/3/1.html", "", "Variabili aleatorie discrete.")]);
    let options = SearchOptions::default();
    let results = search(&index, "aleatorie", &options);
    let views = build_views(&results, "aleatorie", &options, None);

    assert_eq!(views[0].label, "/it/I/3/1.html");
}

#[test]
fn test_views_serialize_for_the_page() {
    let options = SearchOptions::default();
    let results = search(book(), "afferma", &options);
    let views = build_views(&results, "afferma", &options, None);
    let json = serde_json::to_value(&views).unwrap();

    assert_eq!(json[0]["url"], "/it/I/2/3.html");
    assert_eq!(json[0]["label"], "Teorema di Bayes");
    assert!(json[0]["snippetHtml"].as_str().unwrap().starts_with("Il teorema"));
    assert!(json[0]["score"].as_u64().unwrap() > 0);
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Two policies. Relevance sorts by score alone. Book order groups results by
//! part and chapter (in reading order) and only lets the score decide within a
//! chapter, so a reader scanning the results walks the book front to back while
//! still seeing the best hit of each chapter first.
//!
//! Both comparators are used with a stable sort: documents that compare equal
//! keep their index order, which makes every search deterministic.

use crate::types::ScoredDocument;
use std::cmp::Ordering;

/// Position of a page in the book, derived from its URL.
///
/// Pages live at `/<lang>/<part>/<chapter>/<section>.html`, where `part` is a
/// Roman numeral. A chapter's own page (`index.html` or the bare directory)
/// sorts before its sections.
///
/// Field order matters: the derived `Ord` compares part, then chapter, then
/// section, then the section flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookOrderKey {
    pub part: u32,
    pub chapter: u32,
    pub section: u32,
    pub is_section: bool,
}

impl BookOrderKey {
    /// Key for anything that isn't shaped like a book page: sorts last.
    pub const LAST: Self = Self {
        part: u32::MAX,
        chapter: u32::MAX,
        section: u32::MAX,
        is_section: true,
    };

    /// Derive the key from a page URL.
    ///
    /// Recognised shapes (any prefix before the part is ignored, so deployment
    /// base paths and language segments don't matter):
    ///
    /// | URL tail              | part | chapter | section | is_section |
    /// |-----------------------|------|---------|---------|------------|
    /// | `I/2/3.html`          | 1    | 2       | 3       | true       |
    /// | `I/2/index.html`      | 1    | 2       | 0       | false      |
    /// | `I/2/`                | 1    | 2       | 0       | false      |
    /// | `I/2.html`            | 1    | 2       | 0       | false      |
    ///
    /// Everything else gets [`BookOrderKey::LAST`].
    ///
    /// # Example
    ///
    /// ```
    /// use booksearch::BookOrderKey;
    ///
    /// let key = BookOrderKey::from_url("/it/III/4/2.html");
    /// assert_eq!((key.part, key.chapter, key.section), (3, 4, 2));
    /// assert_eq!(BookOrderKey::from_url("/it/toc-big.html"), BookOrderKey::LAST);
    /// ```
    pub fn from_url(url: &str) -> Self {
        Self::parse(url).unwrap_or(Self::LAST)
    }

    fn parse(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let trailing_slash = path.ends_with('/');

        let (dirs, stem) = match segments.split_last() {
            Some((last, dirs)) if !trailing_slash => match last.strip_suffix(".html") {
                Some(stem) => (dirs, Some(stem)),
                None => (segments.as_slice(), None),
            },
            _ => (segments.as_slice(), None),
        };

        // `<part>/<chapter>/<stem>` or a chapter directory
        if let [.., part, chapter] = dirs {
            if let (Some(part), Ok(chapter)) = (parse_roman(part), chapter.parse::<u32>()) {
                return match stem {
                    None | Some("index") => Some(Self::chapter_page(part, chapter)),
                    Some(section) => section.parse::<u32>().ok().map(|section| Self {
                        part,
                        chapter,
                        section,
                        is_section: true,
                    }),
                };
            }
        }

        // `<part>/<chapter>.html`
        if let ([.., part], Some(chapter)) = (dirs, stem) {
            if let (Some(part), Ok(chapter)) = (parse_roman(part), chapter.parse::<u32>()) {
                return Some(Self::chapter_page(part, chapter));
            }
        }

        None
    }

    fn chapter_page(part: u32, chapter: u32) -> Self {
        Self {
            part,
            chapter,
            section: 0,
            is_section: false,
        }
    }
}

/// Parse an uppercase Roman numeral ("I", "IV", "XII").
fn parse_roman(numeral: &str) -> Option<u32> {
    if numeral.is_empty() {
        return None;
    }

    let values: Option<Vec<i64>> = numeral
        .chars()
        .map(|c| match c {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        })
        .collect();
    let values = values?;

    let mut total = 0i64;
    for (i, &value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if next > value => total -= value,
            _ => total += value,
        }
    }
    u32::try_from(total).ok().filter(|&n| n > 0)
}

/// Compare two results by relevance only (higher score first).
pub fn compare_by_relevance(a: &ScoredDocument<'_>, b: &ScoredDocument<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Compare two results in book order.
///
/// Sort order:
/// 1. **Part, chapter** - ascending (reading order)
/// 2. **Score** - descending, only within the same chapter
/// 3. **Section, section flag** - ascending, for equal scores
pub fn compare_by_book_order(a: &ScoredDocument<'_>, b: &ScoredDocument<'_>) -> Ordering {
    let (ka, kb) = (&a.order_key, &b.order_key);
    (ka.part, ka.chapter)
        .cmp(&(kb.part, kb.chapter))
        .then_with(|| b.score.cmp(&a.score))
        .then_with(|| (ka.section, ka.is_section).cmp(&(kb.section, kb.is_section)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;

    fn scored<'a>(doc: &'a Document, score: u64) -> ScoredDocument<'a> {
        ScoredDocument {
            score,
            document: doc,
            order_key: BookOrderKey::from_url(&doc.url),
        }
    }

    #[test]
    fn test_key_for_section_page() {
        let key = BookOrderKey::from_url("/it/I/2/3.html");
        assert_eq!(
            key,
            BookOrderKey {
                part: 1,
                chapter: 2,
                section: 3,
                is_section: true
            }
        );
    }

    #[test]
    fn test_key_for_chapter_pages() {
        let expected = BookOrderKey {
            part: 2,
            chapter: 7,
            section: 0,
            is_section: false,
        };
        assert_eq!(BookOrderKey::from_url("/en/II/7/index.html"), expected);
        assert_eq!(BookOrderKey::from_url("/en/II/7/"), expected);
        assert_eq!(BookOrderKey::from_url("/en/II/7.html"), expected);
    }

    #[test]
    fn test_key_ignores_base_path_query_and_fragment() {
        let key = BookOrderKey::from_url("/libro/it/IV/1/2.html?q=x#sez");
        assert_eq!((key.part, key.chapter, key.section), (4, 1, 2));
    }

    #[test]
    fn test_key_for_unrecognised_urls() {
        assert_eq!(BookOrderKey::from_url("/it/"), BookOrderKey::LAST);
        assert_eq!(BookOrderKey::from_url("/it/toc-big.html"), BookOrderKey::LAST);
        assert_eq!(BookOrderKey::from_url("/it/about.html"), BookOrderKey::LAST);
        assert_eq!(BookOrderKey::from_url("/it/I/2/extra.html"), BookOrderKey::LAST);
        assert_eq!(BookOrderKey::from_url(""), BookOrderKey::LAST);
    }

    #[test]
    fn test_chapter_page_sorts_before_its_sections() {
        let chapter = BookOrderKey::from_url("/it/I/2/index.html");
        let section = BookOrderKey::from_url("/it/I/2/1.html");
        assert!(chapter < section);
        assert!(section < BookOrderKey::LAST);
    }

    #[test]
    fn test_parse_roman() {
        assert_eq!(parse_roman("I"), Some(1));
        assert_eq!(parse_roman("IV"), Some(4));
        assert_eq!(parse_roman("IX"), Some(9));
        assert_eq!(parse_roman("XIV"), Some(14));
        assert_eq!(parse_roman("MCMXC"), Some(1990));
        assert_eq!(parse_roman("i"), None);
        assert_eq!(parse_roman("2"), None);
        assert_eq!(parse_roman(""), None);
    }

    #[test]
    fn test_relevance_prefers_higher_score() {
        let a = Document::new("/it/I/5/1.html", None, "");
        let b = Document::new("/it/I/2/1.html", None, "");
        assert_eq!(
            compare_by_relevance(&scored(&a, 900), &scored(&b, 100)),
            Ordering::Less
        );
    }

    #[test]
    fn test_book_order_chapter_beats_score() {
        let early = Document::new("/it/I/2/1.html", None, "");
        let late = Document::new("/it/I/5/1.html", None, "");
        assert_eq!(
            compare_by_book_order(&scored(&early, 100), &scored(&late, 900)),
            Ordering::Less
        );
    }

    #[test]
    fn test_book_order_within_chapter_uses_score() {
        let first = Document::new("/it/I/2/1.html", None, "");
        let third = Document::new("/it/I/2/3.html", None, "");
        assert_eq!(
            compare_by_book_order(&scored(&third, 900), &scored(&first, 100)),
            Ordering::Less
        );
    }

    #[test]
    fn test_book_order_tie_breaks_on_section() {
        let index = Document::new("/it/I/2/index.html", None, "");
        let first = Document::new("/it/I/2/1.html", None, "");
        let third = Document::new("/it/I/2/3.html", None, "");
        assert_eq!(
            compare_by_book_order(&scored(&first, 100), &scored(&third, 100)),
            Ordering::Less
        );
        assert_eq!(
            compare_by_book_order(&scored(&index, 100), &scored(&first, 100)),
            Ordering::Less
        );
    }
}

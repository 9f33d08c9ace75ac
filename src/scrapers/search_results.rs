use super::{attr, has_classes, is_tag, scan, PageScanner, ScanEvent};
use std::io::{self, Read};

/// Site-relative path prefix of game detail pages.
const DETAIL_PATH_PREFIX: &str = "/game/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    /// Inside a result title, waiting for its anchor.
    Armed,
}

/// Collects detail-page links from a search result page.
///
/// An `h3.product_title` arms the scanner; the next anchor pointing at a
/// detail page is resolved against `origin`, recorded, and disarms it.
/// Everything else is ignored.
pub struct SearchResultScanner {
    origin: String,
    state: State,
    links: Vec<String>,
}

impl SearchResultScanner {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            state: State::Idle,
            links: Vec::new(),
        }
    }
}

impl PageScanner for SearchResultScanner {
    type Output = Vec<String>;

    fn on_event(&mut self, event: ScanEvent<'_>) {
        let ScanEvent::Start(tag) = event else {
            return;
        };

        match self.state {
            State::Idle => {
                if is_tag(tag, "h3") && has_classes(tag, &["product_title"]) {
                    self.state = State::Armed;
                }
            }
            State::Armed => {
                if !is_tag(tag, "a") {
                    return;
                }
                if let Some(href) = attr(tag, "href").filter(|h| h.starts_with(DETAIL_PATH_PREFIX))
                {
                    self.links.push(format!("{}{}", self.origin, href));
                    self.state = State::Idle;
                }
            }
        }
    }

    fn finish(&mut self) -> Vec<String> {
        std::mem::take(&mut self.links)
    }
}

/// Absolute detail-page links of a search result page, in document order.
pub fn extract_links<R: Read>(content: R, origin: &str) -> io::Result<Vec<String>> {
    scan(SearchResultScanner::new(origin), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MARIO_ODYSSEY_URL, MARIO_PARTY_URL, SEARCH_RESULT, SEARCH_RESULT_NO_RESULT,
        SEARCH_RESULT_ONE_GAME,
    };

    const ORIGIN: &str = "https://www.metacritic.com";

    #[test]
    fn parse_search_page() {
        let links = extract_links(SEARCH_RESULT.as_bytes(), ORIGIN).unwrap();
        assert_eq!(links, vec![MARIO_PARTY_URL, MARIO_ODYSSEY_URL]);
    }

    #[test]
    fn single_result() {
        let links = extract_links(SEARCH_RESULT_ONE_GAME.as_bytes(), ORIGIN).unwrap();
        assert_eq!(links, vec![MARIO_PARTY_URL]);
    }

    #[test]
    fn no_results_is_not_an_error() {
        let links = extract_links(SEARCH_RESULT_NO_RESULT.as_bytes(), ORIGIN).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn empty_content_yields_nothing() {
        let links = extract_links(&b""[..], ORIGIN).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn one_link_per_title_in_document_order() {
        let html: String = (1..=5)
            .map(|i| {
                format!(
                    r#"<li><h3 class="product_title"><a href="/game/pc/game-{i}">Game {i}</a></h3><a href="/game/pc/game-{i}/critic-reviews">more</a></li>"#
                )
            })
            .collect();

        let links = extract_links(html.as_bytes(), "http://127.0.0.1:8080/").unwrap();

        let expected: Vec<String> = (1..=5)
            .map(|i| format!("http://127.0.0.1:8080/game/pc/game-{i}"))
            .collect();
        assert_eq!(links, expected);
    }

    #[test]
    fn armed_scanner_skips_non_detail_anchors() {
        let html = r#"
            <h3 class="product_title">
                <a name="anchor-without-href">x</a>
                <a href="https://elsewhere.example/game/x">x</a>
                <a href="/game/switch/celeste">Celeste</a>
            </h3>"#;

        let links = extract_links(html.as_bytes(), ORIGIN).unwrap();
        assert_eq!(links, vec!["https://www.metacritic.com/game/switch/celeste"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let html = r#"
            <h3 class="product_title"><a href="/game/pc/doom">Doom</a></h3>
            <h3 class="product_title"><a href="/game/pc/doom">Doom</a></h3>"#;

        let links = extract_links(html.as_bytes(), ORIGIN).unwrap();
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn title_without_anchor_stays_armed_until_end() {
        let html = r#"<h3 class="product_title">No link</h3><p>text</p>"#;
        let links = extract_links(html.as_bytes(), ORIGIN).unwrap();
        assert!(links.is_empty());
    }
}

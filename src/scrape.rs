//! Pulls the readable text out of the site's HTML pages.

use anyhow::{Result, anyhow};
use scraper::{ElementRef, Html, Selector};

/// Each level's description is an `<article class="day-desc">`.
pub const PUZZLE_SELECTOR: &str = ".day-desc";
/// The verdict after posting an answer.
pub const REPLY_SELECTOR: &str = "main > article";

/// Text of every child element of every match of `selector`, one child per
/// line. Text nodes sitting directly under a match are skipped.
pub fn extract_text(html: &str, selector: &str) -> Result<String> {
    let parsed =
        Selector::parse(selector).map_err(|e| anyhow!("invalid selector `{selector}`: {e:?}"))?;
    let doc = Html::parse_document(html);

    let mut out = String::new();
    for matched in doc.select(&parsed) {
        for child in matched.children().filter_map(ElementRef::wrap) {
            out.extend(child.text());
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_description_keeps_both_levels() {
        let html = r#"<html><body><main>
            <article class="day-desc"><h2>--- Day 1: Trebuchet?! ---</h2>
            <p>Something is <em>wrong</em> with global snow production.</p></article>
            <p>Your puzzle answer was <code>142</code>.</p>
            <article class="day-desc"><h2 id="part2">--- Part Two ---</h2><p>Letters count.</p></article>
            </main></body></html>"#;
        let text = extract_text(html, PUZZLE_SELECTOR).unwrap();
        assert_eq!(
            text,
            "--- Day 1: Trebuchet?! ---\n\
             Something is wrong with global snow production.\n\
             --- Part Two ---\n\
             Letters count.\n"
        );
    }

    #[test]
    fn reply_only_reads_main_articles() {
        let html = r#"<html><body>
            <article><p>not this one</p></article>
            <main><article><p>That's the right answer!</p><p>[<a href="/2023">Return</a>]</p></article></main>
            </body></html>"#;
        let text = extract_text(html, REPLY_SELECTOR).unwrap();
        assert_eq!(text, "That's the right answer!\n[Return]\n");
    }

    #[test]
    fn no_match_is_empty() {
        assert_eq!(extract_text("<p>hi</p>", PUZZLE_SELECTOR).unwrap(), "");
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(extract_text("<p>hi</p>", "main >").is_err());
    }
}

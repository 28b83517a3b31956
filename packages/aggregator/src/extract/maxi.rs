//! Maxi ICA Nordby extractor.
//!
//! The site has no embedded data blob, so only the structural scan runs.
//! Maxi pages are noisy; very short titles are rejected to filter out
//! navigation fragments.

use super::helpers::{scan_cards, CardHints};
use super::RawTuple;

const CARDS: CardHints = CardHints::new(
    r#"[class*="product"], [class*="offer"], article"#,
    r#"h2, h3, h4, [class*="title"], [class*="name"]"#,
    r#"[class*="price"]"#,
)
.with_min_name_chars(3);

pub(super) fn product_cards(html: &str) -> Option<Vec<RawTuple>> {
    scan_cards(html, &CARDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn scans_article_cards() {
        let html = r#"
            <article>
                <h2>Nötfärs 500 g</h2>
                <div class="price-tag">49,95 kr</div>
                <img src="/notfars.jpg">
            </article>
        "#;

        let tuples = product_cards(html).unwrap();
        assert_eq!(tuples.len(), 1);
        assert_eq!(tuples[0].name, "Nötfärs 500 g");
        assert_eq!(tuples[0].price, dec!(49.95));
    }

    #[test]
    fn rejects_too_short_names() {
        let html = r#"
            <article>
                <h2>Ny</h2>
                <div class="price">19,90</div>
            </article>
        "#;
        assert_eq!(product_cards(html), Some(vec![]));
    }
}

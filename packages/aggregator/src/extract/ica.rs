//! ICA Kvantum extractor.
//!
//! ICA injects a JSON blob into a script tag on the offers page; that is
//! the preferred strategy. The card scan covers page variants without the
//! blob.

use scraper::{Html, Selector};

use super::helpers::{parse_embedded_object, scan_cards, tuples_from_entries, CardHints};
use super::RawTuple;

const NAME_KEYS: &[&str] = &["name"];
const PRICE_KEYS: &[&str] = &["price", "currentPrice"];
const IMAGE_KEYS: &[&str] = &["image"];

const CARDS: CardHints = CardHints::new(
    r#"[class*="offer"], [class*="product-card"]"#,
    r#"[class*="title"], [class*="name"], h3, h4"#,
    r#"[class*="price"]"#,
);

/// Scan script tags for an object carrying an `offers` or `products` array.
pub(super) fn embedded_offers(html: &str) -> Option<Vec<RawTuple>> {
    let script_sel = Selector::parse("script").ok()?;
    let document = Html::parse_document(html);

    let mut tuples = Vec::new();
    for script in document.select(&script_sel) {
        let body = script.text().collect::<String>();
        if !body.contains(r#""offers""#) && !body.contains(r#""products""#) {
            continue;
        }
        let Some(data) = parse_embedded_object(&body) else {
            continue;
        };
        let entries = data
            .get("offers")
            .or_else(|| data.get("products"))
            .and_then(|v| v.as_array());
        if let Some(entries) = entries {
            tuples.extend(tuples_from_entries(entries, NAME_KEYS, PRICE_KEYS, IMAGE_KEYS));
        }
    }

    Some(tuples)
}

pub(super) fn offer_cards(html: &str) -> Option<Vec<RawTuple>> {
    scan_cards(html, &CARDS)
}

//! Willys extractor.
//!
//! Willys runs Next.js, so the preferred strategy reads the
//! `__NEXT_DATA__` payload. The card scan covers server-rendered variants.

use scraper::{Html, Selector};

use super::helpers::{scan_cards, tuples_from_entries, CardHints};
use super::RawTuple;

const NAME_KEYS: &[&str] = &["name", "title"];
const PRICE_KEYS: &[&str] = &["price", "currentPrice", "priceValue"];
const IMAGE_KEYS: &[&str] = &["image", "imageUrl"];

const CARDS: CardHints = CardHints::new(
    r#"[class*="offer-card"], [class*="product-card"], [class*="OfferCard"]"#,
    r#"[class*="title"], [class*="name"]"#,
    r#"[class*="price"]"#,
);

/// Read offers out of the Next.js page payload.
pub(super) fn next_data(html: &str) -> Option<Vec<RawTuple>> {
    let next_sel = Selector::parse("#__NEXT_DATA__").ok()?;
    let document = Html::parse_document(html);
    let payload = document.select(&next_sel).next()?.text().collect::<String>();
    let data: serde_json::Value = serde_json::from_str(&payload).ok()?;

    let page_props = data.get("props")?.get("pageProps")?;
    let entries = ["offers", "products", "weeklyOffers"]
        .iter()
        .find_map(|key| page_props.get(*key).and_then(|v| v.as_array()))?;

    Some(tuples_from_entries(entries, NAME_KEYS, PRICE_KEYS, IMAGE_KEYS))
}

pub(super) fn offer_cards(html: &str) -> Option<Vec<RawTuple>> {
    scan_cards(html, &CARDS)
}

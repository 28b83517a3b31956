//! Shared parsing helpers for the per-source extractors.

use regex::Regex;
use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use super::RawTuple;

/// Parse a displayed price like `"29,90 kr"`.
///
/// Strips everything except digits and commas, then normalizes the Swedish
/// decimal comma. A period is not a decimal separator here, so `"12.50"`
/// collapses to `1250`. Anything that does not end up as a finite number
/// strictly greater than zero is rejected.
pub(super) fn parse_price_text(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect::<String>()
        .replace(',', ".");
    let price: Decimal = cleaned.parse().ok()?;
    (price > Decimal::ZERO).then_some(price)
}

/// Pull a price out of a JSON entry, trying `keys` in order. Accepts both
/// numeric and string-typed values since the sources are inconsistent.
pub(super) fn json_price(entry: &Value, keys: &[&str]) -> Option<Decimal> {
    for key in keys {
        let price = match entry.get(key) {
            // Going through the display form keeps 19.9 as 19.9 instead of
            // the nearest binary float expansion.
            Some(Value::Number(n)) => n.to_string().parse().ok(),
            Some(Value::String(s)) => parse_price_text(s),
            _ => None,
        };
        if let Some(price) = price {
            if price > Decimal::ZERO {
                return Some(price);
            }
        }
    }
    None
}

/// First non-empty string under any of `keys`.
pub(super) fn json_text(entry: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| entry.get(*key).and_then(Value::as_str))
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
}

/// Map a JSON array of offer-like entries into tuples.
///
/// `name_keys`/`price_keys`/`image_keys` cover the key spellings seen
/// across the sources. Entries missing a name or a positive price are
/// dropped, not surfaced.
pub(super) fn tuples_from_entries(
    entries: &[Value],
    name_keys: &[&str],
    price_keys: &[&str],
    image_keys: &[&str],
) -> Vec<RawTuple> {
    entries
        .iter()
        .filter_map(|entry| {
            let name = json_text(entry, name_keys)?;
            let price = json_price(entry, price_keys)?;
            Some(RawTuple {
                name,
                price,
                image: json_text(entry, image_keys),
                in_offer: true,
            })
        })
        .collect()
}

/// Structural hints for scanning product/offer cards out of a document.
pub(super) struct CardHints {
    /// Selector for the card containers
    pub cards: &'static str,
    /// Selector for a title-like child
    pub title: &'static str,
    /// Selector for a price-like child
    pub price: &'static str,
    /// Minimum accepted name length in characters
    pub min_name_chars: usize,
}

impl CardHints {
    pub const fn new(cards: &'static str, title: &'static str, price: &'static str) -> Self {
        Self {
            cards,
            title,
            price,
            min_name_chars: 1,
        }
    }

    pub const fn with_min_name_chars(mut self, min: usize) -> Self {
        self.min_name_chars = min;
        self
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Scan the document for elements matching the card hints and pull one
/// tuple per card. Malformed cards are skipped.
pub(super) fn scan_cards(html: &str, hints: &CardHints) -> Option<Vec<RawTuple>> {
    let card_sel = Selector::parse(hints.cards).ok()?;
    let title_sel = Selector::parse(hints.title).ok()?;
    let price_sel = Selector::parse(hints.price).ok()?;
    let image_sel = Selector::parse("img").ok()?;

    let document = Html::parse_document(html);
    let mut tuples = Vec::new();

    for card in document.select(&card_sel) {
        let name = match card.select(&title_sel).next() {
            Some(el) => element_text(el),
            None => continue,
        };
        if name.chars().count() < hints.min_name_chars {
            continue;
        }

        let price_text = match card.select(&price_sel).next() {
            Some(el) => element_text(el),
            None => continue,
        };
        let Some(price) = parse_price_text(&price_text) else {
            continue;
        };

        let image = card
            .select(&image_sel)
            .next()
            .and_then(|el| el.value().attr("src"))
            .map(str::to_string);

        tuples.push(RawTuple {
            name,
            price,
            image,
            in_offer: true,
        });
    }

    Some(tuples)
}

/// Pull the outermost `{...}` block out of a script body and parse it.
/// Greedy: the match runs from the first `{` to the last `}`. Returns
/// `None` on any parse failure; the caller falls through to the next
/// strategy.
pub(super) fn parse_embedded_object(script: &str) -> Option<Value> {
    let block = Regex::new(r"\{[\s\S]*\}").ok()?;
    let found = block.find(script)?;
    serde_json::from_str(found.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn parses_swedish_price_text() {
        assert_eq!(parse_price_text("29,90 kr"), Some(dec!(29.90)));
        assert_eq!(parse_price_text("  14,50  "), Some(dec!(14.50)));
        assert_eq!(parse_price_text("Nu endast 9,95!"), Some(dec!(9.95)));
        // Only the comma counts as a decimal separator
        assert_eq!(parse_price_text("12.50"), Some(dec!(1250)));
    }

    #[test]
    fn rejects_garbage_and_non_positive_prices() {
        assert_eq!(parse_price_text(""), None);
        assert_eq!(parse_price_text("slut i lager"), None);
        assert_eq!(parse_price_text("0"), None);
        // Two decimal commas cannot parse
        assert_eq!(parse_price_text("1,2,3"), None);
    }

    #[test]
    fn json_price_tries_keys_in_order() {
        let entry = json!({"currentPrice": 19.9, "price": "24,90"});
        assert_eq!(json_price(&entry, &["price", "currentPrice"]), Some(dec!(24.90)));
        assert_eq!(json_price(&entry, &["currentPrice"]), Some(dec!(19.9)));
        assert_eq!(json_price(&entry, &["priceValue"]), None);
    }

    #[test]
    fn tuples_from_entries_drops_malformed() {
        let entries = vec![
            json!({"name": "Kaffe", "price": 49.9}),
            json!({"name": "", "price": 10.0}),
            json!({"name": "Gratis", "price": 0}),
            json!({"price": 12.0}),
        ];
        let tuples = tuples_from_entries(&entries, &["name"], &["price"], &["image"]);
        assert_eq!(tuples.len(), 1);
        assert_eq!(tuples[0].name, "Kaffe");
    }

    #[test]
    fn embedded_object_survives_surrounding_js() {
        let script = r#"window.__DATA__ = {"offers": [{"name": "Ost"}]};"#;
        let value = parse_embedded_object(script).unwrap();
        assert!(value.get("offers").is_some());
    }

    #[test]
    fn embedded_object_parse_failure_is_none() {
        assert!(parse_embedded_object("function() { return 1; }").is_none());
        assert!(parse_embedded_object("no braces here").is_none());
    }

    #[test]
    fn embedded_object_scan_is_greedy() {
        // Two separate objects: the match spans both and fails to parse
        let script = r#"var a = {"x": 1}; var b = {"y": 2};"#;
        assert!(parse_embedded_object(script).is_none());
    }
}

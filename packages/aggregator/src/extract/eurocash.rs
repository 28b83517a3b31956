//! Eurocash extractor. Structural scan only; the site is plain
//! server-rendered HTML.

use super::helpers::{scan_cards, CardHints};
use super::RawTuple;

const CARDS: CardHints = CardHints::new(
    r#"[class*="product"], [class*="offer"]"#,
    r#"h2, h3, [class*="title"]"#,
    r#"[class*="price"]"#,
);

pub(super) fn product_cards(html: &str) -> Option<Vec<RawTuple>> {
    scan_cards(html, &CARDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn scans_product_listings() {
        let html = r#"
            <div class="listing">
                <div class="product-item">
                    <h3>Mineralvatten 1,5 L</h3>
                    <span class="price">9,50</span>
                </div>
                <div class="product-item">
                    <h3>Cola 1,5 L</h3>
                    <span class="price">18,00</span>
                </div>
            </div>
        "#;

        let tuples = product_cards(html).unwrap();
        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples[0].price, dec!(9.50));
        assert_eq!(tuples[1].name, "Cola 1,5 L");
    }
}

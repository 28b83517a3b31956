//! The curated reference catalog.
//!
//! Prices are realistic SEK values for the Strömstad area (2024-2025).
//! Live extraction output is not merged into these entries; it only
//! drives the liveness flag (see `orchestrator`). A fuzzy name-matching
//! merge is a possible future improvement.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One source's price for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub price: Decimal,
    pub in_offer: bool,
}

/// A catalog product with its per-source price mapping.
///
/// The price map preserves source display order and holds at least one
/// entry; the enricher treats an empty map as a configuration defect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub unit: String,
    pub image: Option<String>,
    pub prices: IndexMap<String, PriceEntry>,
}

fn product(
    id: &str,
    name: &str,
    subtitle: &str,
    category: &str,
    subcategory: Option<&str>,
    unit: &str,
    prices: &[(&str, Decimal, bool)],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        subtitle: Some(subtitle.to_string()),
        category: category.to_string(),
        subcategory: subcategory.map(str::to_string),
        unit: unit.to_string(),
        image: None,
        prices: prices
            .iter()
            .map(|(store, price, in_offer)| {
                (
                    store.to_string(),
                    PriceEntry {
                        price: *price,
                        in_offer: *in_offer,
                    },
                )
            })
            .collect(),
    }
}

/// The full reference product set, in curated order. Enrichment re-orders
/// by savings.
pub fn reference_catalog() -> Vec<Product> {
    vec![
        // Mejeri
        product(
            "mellanmjolk-1l",
            "Mellanmjölk",
            "3% fetthalt · 1 L",
            "mejeri",
            Some("mjolk"),
            "1 L",
            &[
                ("ica", dec!(14.90), false),
                ("maxi", dec!(13.95), false),
                ("willys", dec!(14.50), false),
                ("eurocash", dec!(13.50), false),
            ],
        ),
        product(
            "lattmjolk-1l",
            "Lättmjölk",
            "0.5% fetthalt · 1 L",
            "mejeri",
            Some("mjolk"),
            "1 L",
            &[
                ("ica", dec!(13.90), false),
                ("maxi", dec!(12.95), false),
                ("willys", dec!(13.50), true),
                ("eurocash", dec!(12.50), false),
            ],
        ),
        product(
            "smor-500g",
            "Normalsaltat smör",
            "500 g",
            "mejeri",
            None,
            "500 g",
            &[
                ("ica", dec!(44.90), false),
                ("maxi", dec!(42.95), false),
                ("willys", dec!(39.90), true),
                ("eurocash", dec!(40.00), false),
            ],
        ),
        product(
            "agg-12",
            "Ägg M/L",
            "12-pack · frigående höns",
            "mejeri",
            None,
            "12-pack",
            &[
                ("ica", dec!(59.90), false),
                ("maxi", dec!(55.95), true),
                ("willys", dec!(54.90), false),
                ("eurocash", dec!(52.00), false),
            ],
        ),
        product(
            "hushallsost-400g",
            "Hushållsost",
            "28% fetthalt · 400 g",
            "mejeri",
            Some("ost"),
            "400 g",
            &[
                ("ica", dec!(54.90), false),
                ("maxi", dec!(49.95), false),
                ("willys", dec!(52.90), false),
                ("eurocash", dec!(47.00), false),
            ],
        ),
        product(
            "yoghurt-1kg",
            "Naturell yoghurt",
            "3% fetthalt · 1 kg",
            "mejeri",
            None,
            "1 kg",
            &[
                ("ica", dec!(29.90), false),
                ("maxi", dec!(27.95), false),
                ("willys", dec!(28.90), false),
                ("eurocash", dec!(26.50), false),
            ],
        ),
        product(
            "filmjolk-1l",
            "Filmjölk",
            "3% fetthalt · 1 L",
            "mejeri",
            Some("mjolk"),
            "1 L",
            &[
                ("ica", dec!(16.90), false),
                ("maxi", dec!(15.95), false),
                ("willys", dec!(16.50), false),
                ("eurocash", dec!(15.00), false),
            ],
        ),
        // Bröd
        product(
            "formbrod-700g",
            "Formbröd",
            "Vete · 700 g",
            "brod",
            None,
            "700 g",
            &[
                ("ica", dec!(29.90), false),
                ("willys", dec!(25.90), false),
                ("eurocash", dec!(24.00), false),
            ],
        ),
        product(
            "knackebrod-500g",
            "Råg-knäckebröd",
            "500 g",
            "brod",
            None,
            "500 g",
            &[
                ("ica", dec!(22.90), false),
                ("maxi", dec!(19.95), false),
                ("willys", dec!(21.90), false),
                ("eurocash", dec!(19.00), false),
            ],
        ),
        product(
            "baguette-2-pack",
            "Baguette",
            "2-pack · färsk",
            "brod",
            None,
            "2-pack",
            &[
                ("ica", dec!(19.90), false),
                ("maxi", dec!(17.95), false),
                ("willys", dec!(18.90), true),
            ],
        ),
        // Kött & fisk
        product(
            "kycklingfile-900g",
            "Kycklingfilé",
            "Färsk · 900 g",
            "kott",
            None,
            "900 g",
            &[
                ("ica", dec!(99.90), true),
                ("maxi", dec!(89.95), false),
                ("willys", dec!(94.90), false),
                ("eurocash", dec!(85.00), false),
            ],
        ),
        product(
            "notfars-500g",
            "Nötfärs",
            "12% fett · 500 g",
            "kott",
            None,
            "500 g",
            &[
                ("ica", dec!(54.90), false),
                ("maxi", dec!(49.95), false),
                ("willys", dec!(52.90), true),
                ("eurocash", dec!(47.00), false),
            ],
        ),
        product(
            "laxfile-400g",
            "Laxfilé",
            "Norsk atlantlax · 400 g",
            "fisk",
            None,
            "400 g",
            &[
                ("ica", dec!(79.90), false),
                ("maxi", dec!(74.95), true),
                ("willys", dec!(77.90), false),
            ],
        ),
        product(
            "skinka-200g",
            "Kokt skinka",
            "Skivad · 200 g",
            "kott",
            Some("chark"),
            "200 g",
            &[
                ("ica", dec!(29.90), false),
                ("maxi", dec!(27.95), false),
                ("willys", dec!(28.90), false),
                ("eurocash", dec!(25.00), false),
            ],
        ),
        // Frukt & grönt
        product(
            "applen-1kg",
            "Äpplen",
            "Gala · 1 kg",
            "frukt",
            None,
            "1 kg",
            &[
                ("ica", dec!(29.90), false),
                ("maxi", dec!(27.95), false),
                ("willys", dec!(25.90), true),
                ("eurocash", dec!(24.00), false),
            ],
        ),
        product(
            "bananer-1kg",
            "Bananer",
            "1 kg",
            "frukt",
            None,
            "1 kg",
            &[
                ("ica", dec!(22.90), false),
                ("maxi", dec!(19.95), false),
                ("willys", dec!(21.90), false),
                ("eurocash", dec!(18.00), false),
            ],
        ),
        product(
            "tomater-500g",
            "Tomater",
            "500 g",
            "frukt",
            None,
            "500 g",
            &[
                ("ica", dec!(19.90), false),
                ("maxi", dec!(17.95), false),
                ("willys", dec!(18.90), false),
                ("eurocash", dec!(16.00), false),
            ],
        ),
        product(
            "gurka-st",
            "Gurka",
            "1 st",
            "frukt",
            None,
            "1 st",
            &[
                ("ica", dec!(14.90), false),
                ("maxi", dec!(12.95), false),
                ("willys", dec!(13.90), false),
                ("eurocash", dec!(11.00), false),
            ],
        ),
        product(
            "morotter-1kg",
            "Morötter",
            "1 kg",
            "frukt",
            None,
            "1 kg",
            &[
                ("ica", dec!(14.90), false),
                ("maxi", dec!(13.95), false),
                ("willys", dec!(12.90), false),
                ("eurocash", dec!(12.00), false),
            ],
        ),
        // Torrvaror
        product(
            "pasta-500g",
            "Pasta",
            "Penne eller spaghetti · 500 g",
            "torrvaror",
            None,
            "500 g",
            &[
                ("ica", dec!(14.90), false),
                ("maxi", dec!(12.95), false),
                ("willys", dec!(13.90), false),
                ("eurocash", dec!(11.00), false),
            ],
        ),
        product(
            "ris-1kg",
            "Långkornigt ris",
            "1 kg",
            "torrvaror",
            None,
            "1 kg",
            &[
                ("ica", dec!(22.90), false),
                ("maxi", dec!(19.95), false),
                ("willys", dec!(21.90), false),
                ("eurocash", dec!(18.00), false),
            ],
        ),
        product(
            "vetemjol-2kg",
            "Vetemjöl",
            "2 kg",
            "torrvaror",
            None,
            "2 kg",
            &[
                ("ica", dec!(27.90), false),
                ("maxi", dec!(24.95), false),
                ("willys", dec!(25.90), false),
                ("eurocash", dec!(22.00), false),
            ],
        ),
        product(
            "tomatkross-400g",
            "Krossade tomater",
            "400 g",
            "torrvaror",
            None,
            "400 g",
            &[
                ("ica", dec!(10.90), false),
                ("maxi", dec!(9.95), false),
                ("willys", dec!(10.50), false),
                ("eurocash", dec!(8.50), false),
            ],
        ),
        // Dryck
        product(
            "kaffe-500g",
            "Bryggkaffe",
            "Mellanrost · 500 g",
            "dryck",
            None,
            "500 g",
            &[
                ("ica", dec!(79.90), false),
                ("maxi", dec!(74.95), false),
                ("willys", dec!(69.90), true),
                ("eurocash", dec!(67.00), false),
            ],
        ),
        product(
            "apelsinjuice-1l",
            "Apelsinjuice",
            "Med fruktkött · 1 L",
            "dryck",
            None,
            "1 L",
            &[
                ("ica", dec!(24.90), false),
                ("maxi", dec!(22.95), false),
                ("willys", dec!(23.90), false),
                ("eurocash", dec!(21.00), false),
            ],
        ),
        product(
            "cola-1.5l",
            "Cola",
            "1,5 L",
            "dryck",
            None,
            "1,5 L",
            &[
                ("ica", dec!(22.90), false),
                ("maxi", dec!(19.95), false),
                ("willys", dec!(20.90), false),
                ("eurocash", dec!(18.00), false),
            ],
        ),
        product(
            "vatten-1.5l",
            "Mineralvatten",
            "Naturellt · 1,5 L",
            "dryck",
            None,
            "1,5 L",
            &[
                ("ica", dec!(12.90), false),
                ("maxi", dec!(10.95), false),
                ("willys", dec!(11.90), false),
                ("eurocash", dec!(9.50), false),
            ],
        ),
        // Snacks & godis
        product(
            "chips-200g",
            "Chips",
            "Naturell · 200 g",
            "snacks",
            None,
            "200 g",
            &[
                ("ica", dec!(24.90), false),
                ("maxi", dec!(22.95), false),
                ("willys", dec!(23.90), true),
                ("eurocash", dec!(20.00), false),
            ],
        ),
        product(
            "choklad-200g",
            "Mjölkchoklad",
            "200 g",
            "snacks",
            None,
            "200 g",
            &[
                ("ica", dec!(29.90), false),
                ("maxi", dec!(26.95), false),
                ("willys", dec!(27.90), false),
                ("eurocash", dec!(25.00), false),
            ],
        ),
        // Fryst
        product(
            "vaniljglass-1l",
            "Vaniljglass",
            "1 L",
            "frys",
            None,
            "1 L",
            &[
                ("ica", dec!(39.90), false),
                ("maxi", dec!(34.95), true),
                ("willys", dec!(37.90), false),
                ("eurocash", dec!(33.00), false),
            ],
        ),
        product(
            "fryst-spenat-500g",
            "Fryst hackad spenat",
            "500 g",
            "frys",
            None,
            "500 g",
            &[
                ("ica", dec!(19.90), false),
                ("willys", dec!(17.90), false),
                ("eurocash", dec!(16.00), false),
            ],
        ),
        // Hygien
        product(
            "tandkram-75ml",
            "Tandkräm",
            "Fluor · 75 ml",
            "hygien",
            None,
            "75 ml",
            &[
                ("ica", dec!(24.90), false),
                ("maxi", dec!(22.95), false),
                ("willys", dec!(19.90), false),
                ("eurocash", dec!(19.00), false),
            ],
        ),
        product(
            "schampo-250ml",
            "Schampo",
            "Normalt hår · 250 ml",
            "hygien",
            None,
            "250 ml",
            &[
                ("ica", dec!(34.90), false),
                ("maxi", dec!(29.95), true),
                ("willys", dec!(32.90), false),
                ("eurocash", dec!(28.00), false),
            ],
        ),
        // Städ
        product(
            "diskmedel-500ml",
            "Diskmedel",
            "Citron · 500 ml",
            "stad",
            None,
            "500 ml",
            &[
                ("ica", dec!(22.90), false),
                ("maxi", dec!(19.95), false),
                ("willys", dec!(21.90), false),
                ("eurocash", dec!(18.00), false),
            ],
        ),
        product(
            "tvattmedel-1.5kg",
            "Tvättmedel",
            "Colour · 1,5 kg",
            "stad",
            None,
            "1,5 kg",
            &[
                ("ica", dec!(79.90), false),
                ("maxi", dec!(74.95), false),
                ("willys", dec!(69.90), true),
                ("eurocash", dec!(65.00), false),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_35_products_with_unique_ids() {
        let catalog = reference_catalog();
        assert_eq!(catalog.len(), 35);
        let ids: HashSet<_> = catalog.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_product_has_at_least_one_price() {
        for p in reference_catalog() {
            assert!(!p.prices.is_empty(), "{} has no prices", p.id);
            for entry in p.prices.values() {
                assert!(entry.price > Decimal::ZERO, "{} has non-positive price", p.id);
            }
        }
    }

    #[test]
    fn price_keys_reference_registered_sources() {
        for p in reference_catalog() {
            for store in p.prices.keys() {
                assert!(
                    crate::sources::find(store).is_some(),
                    "{} prices unknown source {}",
                    p.id,
                    store
                );
            }
        }
    }

    #[test]
    fn serializes_with_camel_case_wire_shape() {
        let catalog = reference_catalog();
        let json = serde_json::to_value(&catalog[0]).unwrap();
        assert_eq!(json["id"], "mellanmjolk-1l");
        assert_eq!(json["prices"]["ica"]["inOffer"], false);
        assert!(json["image"].is_null());
    }
}

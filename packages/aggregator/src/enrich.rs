//! Catalog enrichment: derives the cheapest source, its price and the
//! savings versus the most expensive source for every product, then orders
//! the catalog by savings descending.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Product;
use crate::error::DataError;

/// A product annotated with its comparison fields.
///
/// Invariant: `best_price == min(prices)` and
/// `savings == max(prices) - best_price`; both are recomputed from the
/// price map on every enrichment and never stored independently of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub best_store: String,
    pub best_price: Decimal,
    pub savings: Decimal,
}

/// Enrich and order a catalog. Pure; fails only on a product with an empty
/// price map, which is a configuration defect rather than a runtime
/// condition.
pub fn enrich(products: Vec<Product>) -> Result<Vec<EnrichedProduct>, DataError> {
    let mut enriched = products
        .into_iter()
        .map(enrich_one)
        .collect::<Result<Vec<_>, _>>()?;

    // Stable sort keeps the curated order for equal savings
    enriched.sort_by(|a, b| b.savings.cmp(&a.savings));
    Ok(enriched)
}

fn enrich_one(product: Product) -> Result<EnrichedProduct, DataError> {
    let mut cheapest: Option<(&str, Decimal)> = None;
    let mut dearest: Option<Decimal> = None;

    for (store, entry) in &product.prices {
        // Strict comparisons: the first store wins ties, matching the map's
        // display order
        if cheapest.map_or(true, |(_, price)| entry.price < price) {
            cheapest = Some((store.as_str(), entry.price));
        }
        if dearest.map_or(true, |price| entry.price > price) {
            dearest = Some(entry.price);
        }
    }

    let Some(((best_store, best_price), worst_price)) = cheapest.zip(dearest) else {
        return Err(DataError::EmptyPriceMap {
            product: product.id.clone(),
        });
    };

    Ok(EnrichedProduct {
        best_store: best_store.to_string(),
        best_price,
        savings: worst_price - best_price,
        product,
    })
}

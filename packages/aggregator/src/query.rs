//! Filtered lookups against the cached catalog.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CatalogCache;
use crate::enrich::EnrichedProduct;
use crate::error::DataError;

/// Sentinel meaning "no filter on this axis". Both spellings appear in the
/// storefront (`all` in the API docs, `alla` in the Swedish UI).
fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case("all") || value.eq_ignore_ascii_case("alla")
}

/// AND-composed product filter; every supplied predicate must match.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact category match, skipped for the "all" sentinel
    pub category: Option<String>,
    /// Exact subcategory match
    pub subcategory: Option<String>,
    /// Substring match against name or subtitle
    pub text: Option<String>,
    /// Product must carry a price entry for this source
    pub store: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        let p = &product.product;

        if let Some(category) = self.category.as_deref().filter(|v| !is_all(v)) {
            if !p.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(subcategory) = self.subcategory.as_deref().filter(|v| !is_all(v)) {
            match p.subcategory.as_deref() {
                Some(actual) if actual.eq_ignore_ascii_case(subcategory) => {}
                _ => return false,
            }
        }

        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            let needle = text.to_lowercase();
            let name_hit = p.name.to_lowercase().contains(&needle);
            let subtitle_hit = p
                .subtitle
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&needle));
            if !name_hit && !subtitle_hit {
                return false;
            }
        }

        if let Some(store) = self.store.as_deref().filter(|v| !is_all(v)) {
            if !p.prices.contains_key(store) {
                return false;
            }
        }

        true
    }
}

/// Client-selectable ordering applied to the returned sequence only; the
/// cached catalog keeps its savings ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    Name,
    Savings,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "name" => Some(Self::Name),
            "savings" => Some(Self::Savings),
            _ => None,
        }
    }

    pub fn apply(self, products: &mut [EnrichedProduct]) {
        match self {
            Self::PriceAsc => products.sort_by(|a, b| a.best_price.cmp(&b.best_price)),
            Self::PriceDesc => products.sort_by(|a, b| b.best_price.cmp(&a.best_price)),
            Self::Name => products
                .sort_by(|a, b| a.product.name.to_lowercase().cmp(&b.product.name.to_lowercase())),
            Self::Savings => products.sort_by(|a, b| b.savings.cmp(&a.savings)),
        }
    }
}

/// Response payload for a catalog query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub products: Vec<EnrichedProduct>,
    pub last_updated: Option<DateTime<Utc>>,
    pub is_live: bool,
}

/// Serves filtered lookups, refreshing the cache first when it is stale.
pub struct QueryService {
    cache: Arc<CatalogCache>,
}

impl QueryService {
    pub fn new(cache: Arc<CatalogCache>) -> Self {
        Self { cache }
    }

    /// Filter the cached catalog. An empty result is a successful response,
    /// never an error; an error here means no usable state exists at all.
    pub async fn query(
        &self,
        filter: &ProductFilter,
        sort: Option<SortKey>,
    ) -> Result<QueryResult, DataError> {
        let state = self.cache.ensure_fresh().await?;

        let mut products: Vec<EnrichedProduct> = state
            .products
            .as_deref()
            .map(|all| all.iter().filter(|p| filter.matches(p)).cloned().collect())
            .unwrap_or_default();

        if let Some(sort) = sort {
            sort.apply(&mut products);
        }

        Ok(QueryResult {
            products,
            last_updated: state.last_updated,
            is_live: state.is_live,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PriceEntry, Product};
    use crate::enrich::enrich;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn mejeri_product(id: &str, stores: &[(&str, Decimal)]) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            subtitle: Some("3% fetthalt · 1 L".to_string()),
            category: "mejeri".to_string(),
            subcategory: None,
            unit: "1 L".to_string(),
            image: None,
            prices: stores
                .iter()
                .map(|(store, price)| {
                    (
                        store.to_string(),
                        PriceEntry {
                            price: *price,
                            in_offer: false,
                        },
                    )
                })
                .collect(),
        }
    }

    fn fixture() -> Vec<EnrichedProduct> {
        enrich(vec![
            mejeri_product("mjolk", &[("ica", dec!(14.90)), ("willys", dec!(13.50))]),
            mejeri_product("fil", &[("willys", dec!(16.50)), ("eurocash", dec!(15.00))]),
        ])
        .unwrap()
    }

    #[test]
    fn category_and_store_filter_intersect() {
        let products = fixture();
        let filter = ProductFilter {
            category: Some("mejeri".to_string()),
            store: Some("ica".to_string()),
            ..Default::default()
        };

        let hits: Vec<_> = products.iter().filter(|p| filter.matches(p)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product.id, "mjolk");
    }

    #[test]
    fn all_sentinels_disable_an_axis() {
        let products = fixture();
        for sentinel in ["all", "alla", "ALLA"] {
            let filter = ProductFilter {
                category: Some(sentinel.to_string()),
                store: Some(sentinel.to_string()),
                ..Default::default()
            };
            assert_eq!(products.iter().filter(|p| filter.matches(p)).count(), 2);
        }
    }

    #[test]
    fn text_filter_searches_name_and_subtitle_case_insensitively() {
        let products = fixture();

        let by_name = ProductFilter {
            text: Some("MJOLK".to_string()),
            ..Default::default()
        };
        assert_eq!(products.iter().filter(|p| by_name.matches(p)).count(), 1);

        let by_subtitle = ProductFilter {
            text: Some("fetthalt".to_string()),
            ..Default::default()
        };
        assert_eq!(products.iter().filter(|p| by_subtitle.matches(p)).count(), 2);
    }

    #[test]
    fn filter_axes_commute() {
        let products = fixture();
        let category = ProductFilter {
            category: Some("mejeri".to_string()),
            ..Default::default()
        };
        let text = ProductFilter {
            text: Some("fil".to_string()),
            ..Default::default()
        };

        let cat_then_text: Vec<_> = products
            .iter()
            .filter(|p| category.matches(p))
            .filter(|p| text.matches(p))
            .map(|p| p.product.id.clone())
            .collect();
        let text_then_cat: Vec<_> = products
            .iter()
            .filter(|p| text.matches(p))
            .filter(|p| category.matches(p))
            .map(|p| p.product.id.clone())
            .collect();

        assert_eq!(cat_then_text, text_then_cat);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let products = fixture();
        let filter = ProductFilter {
            category: Some("frys".to_string()),
            ..Default::default()
        };
        assert_eq!(products.iter().filter(|p| filter.matches(p)).count(), 0);
    }

    #[test]
    fn sort_keys_reorder_without_touching_savings_order_semantics() {
        let mut products = fixture();

        SortKey::PriceAsc.apply(&mut products);
        assert_eq!(products[0].product.id, "mjolk");

        SortKey::PriceDesc.apply(&mut products);
        assert_eq!(products[0].product.id, "fil");

        SortKey::Name.apply(&mut products);
        assert_eq!(products[0].product.id, "fil");
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!(SortKey::parse("price-asc"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::parse("savings"), Some(SortKey::Savings));
        assert_eq!(SortKey::parse("popularity"), None);
    }
}

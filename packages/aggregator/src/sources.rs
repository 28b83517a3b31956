//! Static registry of the retail sources we aggregate.
//!
//! Loaded once at process start and immutable afterwards. Display metadata
//! (colors, short names) is consumed by the storefront via `/stores`.

use serde::Serialize;

/// One external retailer whose pages are scraped for price signals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub color: &'static str,
    pub text_color: &'static str,
    pub url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers_url: Option<&'static str>,
}

impl Source {
    /// The URL to scrape: the dedicated offers page when one exists.
    pub fn scrape_url(&self) -> &'static str {
        self.offers_url.unwrap_or(self.url)
    }
}

const SOURCES: &[Source] = &[
    Source {
        id: "ica",
        name: "ICA Kvantum",
        short_name: "ICA",
        color: "#E2001A",
        text_color: "#fff",
        url: "https://www.ica.se/butiker/kvantum/stromstad/ica-kvantum-stromstad-1003740/",
        offers_url: Some(
            "https://www.ica.se/butiker/kvantum/stromstad/ica-kvantum-stromstad-1003740/erbjudanden/",
        ),
    },
    Source {
        id: "maxi",
        name: "Maxi ICA Nordby",
        short_name: "Maxi",
        color: "#003087",
        text_color: "#fff",
        url: "https://www.maximatnordby.se/",
        offers_url: None,
    },
    Source {
        id: "willys",
        name: "Willys",
        short_name: "Willys",
        color: "#009F3E",
        text_color: "#fff",
        url: "https://www.willys.se/erbjudanden/ehandel",
        offers_url: None,
    },
    Source {
        id: "eurocash",
        name: "Eurocash",
        short_name: "Eurocash",
        color: "#E6B000",
        text_color: "#000",
        url: "https://www.eurocash.se/butiker/stromstad/",
        offers_url: None,
    },
];

/// All registered sources, in display order.
pub fn registry() -> &'static [Source] {
    SOURCES
}

/// Look up a source by its stable key.
pub fn find(id: &str) -> Option<&'static Source> {
    SOURCES.iter().find(|s| s.id == id)
}

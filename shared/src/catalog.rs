use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A purchasable save-the-date bundle. Built once at startup and never mutated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Gradient classes painted on the card swatch.
    pub accent: String,
}

fn product(
    id: &str,
    name: &str,
    price: &str,
    description: &str,
    tags: &[&str],
    accent: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        accent: accent.to_string(),
    }
}

lazy_static! {
    static ref PRODUCTS: Vec<Product> = vec![
        product(
            "suite-lumen",
            "Lumen Cascade",
            "$189 / 50 cards",
            "Iridescent foil on heavyweight cotton, a vellum overlay, and a matching animated micro-site for hybrid celebrations.",
            &["Foil", "Vellum", "Micro-site"],
            "from-primary-500 via-sky-500 to-emerald-400",
        ),
        product(
            "suite-terracotta",
            "Terracotta Bloom",
            "$149 / 50 cards",
            "Hand-painted florals in warm clay tones with deckled edges and a seeded-paper RSVP insert.",
            &["Deckled edge", "Seeded paper", "Botanical"],
            "from-orange-400 via-rose-400 to-amber-300",
        ),
        product(
            "suite-midnight",
            "Midnight Monogram",
            "$169 / 50 cards",
            "Letterpressed monogram on ink-black stock with gold edge painting and a custom wax seal.",
            &["Letterpress", "Wax seal", "Monogram"],
            "from-slate-900 via-indigo-900 to-amber-400",
        ),
        product(
            "suite-coastline",
            "Coastline Postmark",
            "$129 / 50 cards",
            "A vintage travel postcard with a custom map illustration, ideal for destination weekends.",
            &["Destination", "Illustrated map", "Postcard"],
            "from-cyan-400 via-sky-500 to-blue-700",
        ),
    ];
}

/// The full catalog, in display order.
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Resolves a weak product reference. Absent ids are not an error.
pub fn find_product<'a>(catalog: &'a [Product], id: &str) -> Option<&'a Product> {
    catalog.iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids = products()
            .iter()
            .map(|product| product.id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), products().len());
    }

    #[test]
    fn catalog_keeps_spotlight_suite_first() {
        assert_eq!(products()[0].id, "suite-lumen");
        assert_eq!(products()[0].name, "Lumen Cascade");
    }

    #[test]
    fn find_product_resolves_known_ids_only() {
        let found = find_product(products(), "suite-midnight").map(|p| p.name.as_str());
        assert_eq!(found, Some("Midnight Monogram"));
        assert!(find_product(products(), "suite-retired").is_none());
        assert!(find_product(&[], "suite-lumen").is_none());
    }
}

//! Products listed on the storefront.
//!
//! The catalog is static site content. Prices and names are copied into the
//! cart when a product is added and are not looked up again afterwards.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use cart::CartItem;

/// A product card on the home page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
    /// Unit price in rupees.
    pub price: f64,
    /// Unit shipping weight in kilograms.
    pub weight: f64,
}

impl Product {
    /// Candidate line for the cart store.
    #[must_use]
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.id, self.name, self.price).with_weight(self.weight)
    }
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "groundnut-oil-1l",
        name: "Cold-Pressed Groundnut Oil (1 L)",
        blurb: "Wood-pressed in small batches, unrefined.",
        price: 320.0,
        weight: 1.0,
    },
    Product {
        id: "jaggery-500g",
        name: "Organic Jaggery (500 g)",
        blurb: "Chemical-free cane jaggery blocks.",
        price: 120.0,
        weight: 0.5,
    },
    Product {
        id: "a2-ghee-500ml",
        name: "A2 Cow Ghee (500 ml)",
        blurb: "Bilona-churned from cultured curd.",
        price: 650.0,
        weight: 0.5,
    },
    Product {
        id: "atta-5kg",
        name: "Stone-Ground Whole Wheat Atta (5 kg)",
        blurb: "Chakki-milled from single-origin wheat.",
        price: 410.0,
        weight: 5.0,
    },
];

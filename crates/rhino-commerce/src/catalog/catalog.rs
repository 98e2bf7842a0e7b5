//! The store catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductSpec, RelatedProduct, Review};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Static catalog content for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// The product on the detail page.
    pub featured: Product,
    /// Teasers shown beside the featured product.
    pub related: Vec<RelatedProduct>,
}

impl Catalog {
    /// Create a catalog from its parts.
    pub fn new(featured: Product, related: Vec<RelatedProduct>) -> Self {
        Self { featured, related }
    }

    /// The RhinoFuse line-up, priced in `currency` whole units.
    pub fn rhinofuse(currency: Currency) -> Self {
        let price = |amount: i64| Money::from_major(amount, currency);

        let featured = Product {
            id: ProductId::from(1u32),
            name: "RhinoFuse Ultimate".to_string(),
            description: "The RhinoFuse Ultimate is an advanced AI-enabled diagnostic chip for \
                motorcycles, designed for riders who prioritize safety and performance. It offers \
                real-time health monitoring, predictive AI alerts, and weather & road condition \
                tracking to ensure a smooth and secure ride."
                .to_string(),
            features: [
                "Real-time engine health monitoring",
                "Predictive AI alerts for upcoming failures",
                "Weather & road condition tracking",
                "Compact and easy-to-install design",
                "Compatible with most motorcycles",
                "Water and dust resistant (IP67)",
                "6-month battery life with auto-recharge",
                "Mobile app integration",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            price: price(6999),
            images: ["/bikefuse1.jpg", "/bikefuse2.jpg", "/bikefuse3.jpg", "/bikefuse5.png"]
                .into_iter()
                .map(String::from)
                .collect(),
            specs: vec![
                ProductSpec::new("Dimensions", "45mm x 45mm x 15mm"),
                ProductSpec::new("Weight", "80g"),
                ProductSpec::new("Connectivity", "Bluetooth 5.0, Wi-Fi"),
                ProductSpec::new("Battery", "Lithium-ion, 1200mAh"),
                ProductSpec::new(
                    "Sensors",
                    "Accelerometer, Gyroscope, Temperature, Humidity, Pressure",
                ),
                ProductSpec::new("Compatibility", "All motorcycles with OBD-II port"),
            ],
            reviews: vec![
                Review::new(
                    1u32,
                    "Jayanth Nayak",
                    5,
                    "This device saved me from a major engine failure. Worth every penny!",
                    date(2023, 10, 15),
                ),
                Review::new(
                    2u32,
                    "Peter Dsouza",
                    4,
                    "Easy to install and very accurate predictions. App could be better.",
                    date(2023, 9, 28),
                ),
                Review::new(
                    3u32,
                    "Ganesh Acharya",
                    5,
                    "As a long-distance rider, this gives me peace of mind. Highly recommended!",
                    date(2023, 8, 30),
                ),
            ],
            badge: Some("Best Seller".to_string()),
        };

        let related = vec![
            RelatedProduct::new(
                2u32,
                "RhinoFuseLite",
                price(4999),
                "https://in.element14.com/productimages/large/en_GB/9943862-40.jpg",
            ),
            RelatedProduct::new(
                3u32,
                "Smart Helmet HUD",
                price(8999),
                "https://www.yooshopper.com/cdn/shop/files/3_6a5e0f53-c61d-4f31-abf5-375f63a34232.jpg?v=1716889612&width=1445",
            ),
            RelatedProduct::new(
                4u32,
                "Bike Security System",
                price(5999),
                "https://m.media-amazon.com/images/I/71uoQUc7u2L.jpg",
            ),
            RelatedProduct::new(5u32, "GPS Tracker Pro", price(3499), "/gps.jpg"),
        ];

        Self::new(featured, related)
    }

    /// Look up the featured product by ID.
    pub fn product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        if &self.featured.id == id {
            Ok(&self.featured)
        } else {
            Err(CommerceError::ProductNotFound(id.to_string()))
        }
    }

    /// Look up a related product by ID.
    pub fn related_product(&self, id: &ProductId) -> Option<&RelatedProduct> {
        self.related.iter().find(|p| &p.id == id)
    }

    /// Currency the catalog is priced in.
    pub fn currency(&self) -> Currency {
        self.featured.price.currency
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::rhinofuse(Currency::INR)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

//! Product detail tabs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which section of the product details is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductTab {
    #[default]
    Overview,
    Specs,
    Reviews,
    Support,
}

impl ProductTab {
    /// Tabs in display order.
    pub const ALL: [ProductTab; 4] = [
        ProductTab::Overview,
        ProductTab::Specs,
        ProductTab::Reviews,
        ProductTab::Support,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductTab::Overview => "Overview",
            ProductTab::Specs => "Specs",
            ProductTab::Reviews => "Reviews",
            ProductTab::Support => "Support",
        }
    }
}

impl fmt::Display for ProductTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Static page dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A page of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    /// Marketing landing page.
    Landing,
    /// Product detail and add-to-cart.
    Products,
    /// Cart review and quantity edit.
    Cart,
    /// Address/payment entry and order placement.
    Checkout,
    /// Any unknown path.
    NotFound,
}

impl Page {
    /// Pages reachable by path, in navigation order.
    pub const ROUTABLE: [Page; 4] = [Page::Landing, Page::Products, Page::Cart, Page::Checkout];

    /// Resolve a request path.
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Page::Landing,
            "/products" => Page::Products,
            "/cart" => Page::Cart,
            "/checkout" => Page::Checkout,
            _ => Page::NotFound,
        }
    }

    /// Canonical path, or `None` for `NotFound`.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Page::Landing => Some("/"),
            Page::Products => Some("/products"),
            Page::Cart => Some("/cart"),
            Page::Checkout => Some("/checkout"),
            Page::NotFound => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "RhinoFuse",
            Page::Products => "RhinoFuse Ultimate",
            Page::Cart => "Your Cart",
            Page::Checkout => "Checkout",
            Page::NotFound => "Page Not Found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().unwrap_or("<not found>"))
    }
}

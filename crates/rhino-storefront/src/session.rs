//! The shopping session.
//!
//! One `StoreSession` per visitor owns the catalog, the cart and the
//! checkout form. Pages borrow it and call its methods; every cart mutation
//! and every order goes through here so it can be logged against the
//! session ID.

use rhino_commerce::prelude::*;
use rhino_core::{LogFormat, Page, SessionId, StoreConfig};
use rhino_observability::StructuredLogger;

use crate::error::StorefrontError;

/// In-memory state of one shopping session.
#[derive(Debug, Clone)]
pub struct StoreSession {
    store_name: String,
    catalog: Catalog,
    cart: CartStore,
    checkout: CheckoutFlow,
    page: Page,
    logger: StructuredLogger,
}

impl StoreSession {
    /// Start a session for the given store configuration.
    pub fn new(config: &StoreConfig) -> Result<Self, StorefrontError> {
        config.validate()?;
        let currency = Currency::from_code(&config.store.currency)?;
        let policy = QuantityPolicy::new(config.store.max_quantity_per_item);

        Ok(Self::from_parts(
            config.store.name.clone(),
            currency,
            policy,
            config.logging.format,
        ))
    }

    /// Start a session from the file named by `RHINO_CONFIG`, or defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = StoreConfig::from_env()?;
        Ok(Self::new(&config)?)
    }

    fn from_parts(
        store_name: String,
        currency: Currency,
        policy: QuantityPolicy,
        format: LogFormat,
    ) -> Self {
        let logger = StructuredLogger::new(SessionId::generate())
            .with_component("storefront")
            .with_format(format)
            .with_page(Page::Landing);

        logger
            .info_builder("Session started")
            .field("store", store_name.as_str())
            .field("currency", currency.code())
            .field_i64("max_quantity", policy.max())
            .emit();

        Self {
            store_name,
            catalog: Catalog::rhinofuse(currency),
            cart: CartStore::new(currency).with_policy(policy),
            checkout: CheckoutFlow::new(),
            page: Page::Landing,
            logger,
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Record a navigation and return the page the path resolves to.
    pub fn navigate(&mut self, path: &str) -> Page {
        let page = Page::from_path(path);
        self.page = page;
        self.logger.set_page(page);

        if page == Page::NotFound {
            self.logger
                .warn_builder("Unknown path")
                .field("path", path)
                .emit();
        } else {
            self.logger.debug(&format!("Navigated to {}", page.title()));
        }
        page
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add a catalog product (featured or related) to the cart.
    ///
    /// Returns the line's quantity after the add.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: i64) -> Result<i64, StorefrontError> {
        let (name, price) = match self.catalog.product(id) {
            Ok(product) => (product.name.clone(), product.price),
            Err(err) => match self.catalog.related_product(id) {
                Some(related) => (related.name.clone(), related.price),
                None => {
                    self.logger
                        .warn_builder("Add to cart rejected")
                        .field("product", id.as_str())
                        .field("error", err.to_string())
                        .emit();
                    return Err(err.into());
                }
            },
        };

        let line_quantity = self.cart.add_item(id.clone(), name, price, quantity)?;

        self.logger
            .info_builder("Added to cart")
            .field("product", id.as_str())
            .field_i64("requested", quantity)
            .field_i64("line_quantity", line_quantity)
            .field("total", self.cart.total().to_string())
            .emit();

        Ok(line_quantity)
    }

    /// Set a line's quantity. Returns the stored quantity if the line exists.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Option<i64> {
        let stored = self.cart.update_quantity(id, quantity);
        self.log_quantity_change(id, stored);
        stored
    }

    /// Set a line's quantity from raw quantity-field text.
    pub fn update_quantity_input(
        &mut self,
        id: &ProductId,
        input: &str,
    ) -> Result<Option<i64>, StorefrontError> {
        match self.cart.update_quantity_input(id, input) {
            Ok(stored) => {
                self.log_quantity_change(id, stored);
                Ok(stored)
            }
            Err(err) => {
                self.logger
                    .warn_builder("Quantity input rejected")
                    .field("product", id.as_str())
                    .field("input", input)
                    .emit();
                Err(err.into())
            }
        }
    }

    fn log_quantity_change(&self, id: &ProductId, stored: Option<i64>) {
        if let Some(quantity) = stored {
            self.logger
                .info_builder("Quantity updated")
                .field("product", id.as_str())
                .field_i64("quantity", quantity)
                .field("total", self.cart.total().to_string())
                .emit();
        }
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove_item(id);
        self.logger
            .info_builder("Removed from cart")
            .field("product", id.as_str())
            .field_bool("removed", removed)
            .emit();
        removed
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        let lines = self.cart.len();
        self.cart.clear();
        self.logger
            .info_builder("Cart cleared")
            .field_i64("lines", lines as i64)
            .emit();
    }

    // ------------------------------------------------------------------
    // Checkout
    // ------------------------------------------------------------------

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.checkout.set_address(address);
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.checkout.set_payment_method(method);
        self.logger
            .debug_builder("Payment method selected")
            .field("method", method.code())
            .emit();
    }

    /// Place the order for the current cart. Never fails.
    pub fn place_order(&mut self) -> OrderAck {
        let has_address = !self.checkout.address().trim().is_empty();
        let ack = self.checkout.place_order(&mut self.cart);

        self.logger
            .info_builder("Order placed")
            .field("order_id", ack.order_id.as_str())
            .field("payment_method", ack.payment_method.code())
            .field_i64("items", ack.item_count)
            .field("total", ack.total.to_string())
            .field_bool("has_address", has_address)
            .emit();

        ack
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    /// The page of the last navigation.
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn session_id(&self) -> &SessionId {
        self.logger.session_id()
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }
}

impl Default for StoreSession {
    fn default() -> Self {
        Self::from_parts(
            "RhinoFuse".to_string(),
            Currency::default(),
            QuantityPolicy::default(),
            LogFormat::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhino_core::StoreSettings;

    fn featured_id() -> ProductId {
        ProductId::new("1")
    }

    #[test]
    fn test_default_session() {
        let session = StoreSession::default();
        assert_eq!(session.store_name(), "RhinoFuse");
        assert_eq!(session.page(), Page::Landing);
        assert!(session.cart().is_empty());
        assert_eq!(session.cart().currency(), Currency::INR);
    }

    #[test]
    fn test_new_from_config() {
        let config = StoreConfig {
            store: StoreSettings {
                name: "RhinoFuse EU".to_string(),
                currency: "eur".to_string(),
                max_quantity_per_item: 5,
            },
            ..Default::default()
        };

        let session = StoreSession::new(&config).unwrap();
        assert_eq!(session.store_name(), "RhinoFuse EU");
        assert_eq!(session.catalog().currency(), Currency::EUR);
        assert_eq!(session.cart().policy().max(), 5);
    }

    #[test]
    fn test_new_rejects_unknown_currency() {
        let mut config = StoreConfig::default();
        config.store.currency = "XYZ".to_string();

        assert_eq!(
            StoreSession::new(&config).unwrap_err(),
            StorefrontError::Commerce(CommerceError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = StoreConfig::default();
        config.store.max_quantity_per_item = 0;

        assert!(matches!(
            StoreSession::new(&config),
            Err(StorefrontError::Config(_))
        ));
    }

    #[test]
    fn test_navigate() {
        let mut session = StoreSession::default();
        assert_eq!(session.navigate("/cart"), Page::Cart);
        assert_eq!(session.page(), Page::Cart);
        assert_eq!(session.navigate("/nowhere"), Page::NotFound);
    }

    #[test]
    fn test_add_featured_and_related() {
        let mut session = StoreSession::default();
        assert_eq!(session.add_to_cart(&featured_id(), 2), Ok(2));
        assert_eq!(session.add_to_cart(&ProductId::new("5"), 1), Ok(1));

        assert_eq!(session.cart().len(), 2);
        assert_eq!(
            session.cart().total(),
            Money::from_major(2 * 6999 + 3499, Currency::INR)
        );
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = StoreSession::default();
        let result = session.add_to_cart(&ProductId::new("42"), 1);

        assert_eq!(
            result,
            Err(StorefrontError::Commerce(CommerceError::ProductNotFound(
                "42".to_string()
            )))
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_quantity_input() {
        let mut session = StoreSession::default();
        session.add_to_cart(&featured_id(), 1).unwrap();

        assert_eq!(session.update_quantity_input(&featured_id(), "4"), Ok(Some(4)));
        assert!(session.update_quantity_input(&featured_id(), "four").is_err());
        assert_eq!(session.cart().get(&featured_id()).unwrap().quantity(), 4);
        assert_eq!(session.update_quantity(&featured_id(), -1), Some(1));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut session = StoreSession::default();
        session.add_to_cart(&featured_id(), 1).unwrap();
        session.add_to_cart(&ProductId::new("2"), 1).unwrap();

        assert!(session.remove_item(&featured_id()));
        assert!(!session.remove_item(&featured_id()));
        session.clear_cart();
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_place_order() {
        let mut session = StoreSession::default();
        session.add_to_cart(&featured_id(), 3).unwrap();
        session.set_address("Indiranagar, Bengaluru");
        session.set_payment_method(PaymentMethod::Card);

        let ack = session.place_order();
        assert_eq!(ack.item_count, 3);
        assert_eq!(ack.total, Money::from_major(20997, Currency::INR));
        assert!(session.cart().is_empty());
        assert_eq!(session.checkout().last_ack(), Some(&ack));
    }
}

//! Product page state.

use rhino_commerce::catalog::Product;
use rhino_commerce::checkout::OrderAck;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::session::StoreSession;
use crate::state::{Gallery, ProductTab, QuantityStepper};

/// How long the "Added to Cart" confirmation shows before the cart panel
/// opens.
pub const FEEDBACK_SETTLE_MS: u32 = 1500;

/// Confirmation on the add-to-cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AddToCartFeedback {
    #[default]
    Idle,
    Added,
}

/// Slide-over cart on the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CartPanel {
    #[default]
    Closed,
    Open,
}

/// Everything the product page tracks besides the session itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPageState {
    pub tab: ProductTab,
    pub gallery: Gallery,
    pub stepper: QuantityStepper,
    feedback: AddToCartFeedback,
    panel: CartPanel,
}

impl ProductPageState {
    /// State for `product`, with the stepper bound to the session's
    /// quantity policy.
    pub fn new(product: &Product, session: &StoreSession) -> Self {
        Self {
            tab: ProductTab::default(),
            gallery: Gallery::new(product.images.len()),
            stepper: QuantityStepper::new(session.cart().policy()),
            feedback: AddToCartFeedback::Idle,
            panel: CartPanel::Closed,
        }
    }

    pub fn feedback(&self) -> AddToCartFeedback {
        self.feedback
    }

    pub fn panel(&self) -> CartPanel {
        self.panel
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel == CartPanel::Open
    }

    pub fn select_tab(&mut self, tab: ProductTab) {
        self.tab = tab;
    }

    /// Add the stepper quantity of the featured product and show the
    /// confirmation. Call [`settle_feedback`](Self::settle_feedback) after
    /// [`FEEDBACK_SETTLE_MS`].
    pub fn add_to_cart(&mut self, session: &mut StoreSession) -> Result<i64, StorefrontError> {
        let id = session.catalog().featured.id.clone();
        let quantity = session.add_to_cart(&id, self.stepper.value())?;
        self.feedback = AddToCartFeedback::Added;
        Ok(quantity)
    }

    /// End the confirmation and reveal the cart.
    pub fn settle_feedback(&mut self) {
        if self.feedback == AddToCartFeedback::Added {
            self.feedback = AddToCartFeedback::Idle;
            self.panel = CartPanel::Open;
        }
    }

    /// Add to cart and open the cart straight away.
    pub fn buy_now(&mut self, session: &mut StoreSession) -> Result<i64, StorefrontError> {
        let quantity = self.add_to_cart(session)?;
        self.panel = CartPanel::Open;
        Ok(quantity)
    }

    pub fn open_panel(&mut self) {
        self.panel = CartPanel::Open;
    }

    pub fn close_panel(&mut self) {
        self.panel = CartPanel::Closed;
    }

    /// Place the order from the cart panel and close it.
    pub fn place_order(&mut self, session: &mut StoreSession) -> OrderAck {
        let ack = session.place_order();
        self.panel = CartPanel::Closed;
        ack
    }
}

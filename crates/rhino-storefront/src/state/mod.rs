//! Page-level UI state.
//!
//! Each toggle the pages need is a tagged value rather than a set of
//! booleans, so impossible combinations (two overlays open, a modal gallery
//! with no image) cannot be represented.

mod gallery;
mod landing;
mod product_page;
mod stepper;
mod tabs;
mod typewriter;

pub use gallery::{Gallery, GalleryKey, GalleryView};
pub use landing::{Overlay, HEADLINES, NAV_SECTIONS};
pub use product_page::{AddToCartFeedback, CartPanel, ProductPageState, FEEDBACK_SETTLE_MS};
pub use stepper::QuantityStepper;
pub use tabs::ProductTab;
pub use typewriter::{Typewriter, DELETE_DELAY_MS, HOLD_MS, TYPE_DELAY_MS};

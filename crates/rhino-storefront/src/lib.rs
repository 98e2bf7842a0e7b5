//! RhinoFuse storefront.
//!
//! - `StoreSession` - Per-visitor catalog, cart and checkout, with logging
//! - `state` - Page state: tabs, gallery, stepper, overlays, typewriter
//! - `app` - Leptos views, mounted in the browser (`csr` feature, built
//!   with Trunk from `index.html`)

pub mod error;
pub mod session;
pub mod state;

#[cfg(feature = "csr")]
pub mod app;

pub use error::StorefrontError;
pub use session::StoreSession;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

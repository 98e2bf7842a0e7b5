//! Landing page state.

use serde::{Deserialize, Serialize};

/// Rotating hero headlines.
pub const HEADLINES: [&str; 3] = [
    "Your Bike, Smarter Than Ever",
    "RhinoFuse: Ride with Confidence",
    "Monitor. Predict. Protect.",
];

/// In-page sections reachable from the navigation.
pub const NAV_SECTIONS: [&str; 4] = ["home", "about", "features", "contact"];

/// What is layered over the landing page. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    None,
    Menu,
    Login,
    Register,
}

impl Overlay {
    /// Open the mobile menu, or close it if it is open.
    pub fn toggle_menu(&mut self) {
        *self = match self {
            Overlay::Menu => Overlay::None,
            _ => Overlay::Menu,
        };
    }

    /// Show the login form. Replaces whatever was open.
    pub fn open_login(&mut self) {
        *self = Overlay::Login;
    }

    /// Show the registration form. Replaces whatever was open.
    pub fn open_register(&mut self) {
        *self = Overlay::Register;
    }

    pub fn close(&mut self) {
        *self = Overlay::None;
    }

    pub fn is_menu_open(&self) -> bool {
        *self == Overlay::Menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle() {
        let mut overlay = Overlay::default();
        overlay.toggle_menu();
        assert!(overlay.is_menu_open());
        overlay.toggle_menu();
        assert_eq!(overlay, Overlay::None);
    }

    #[test]
    fn test_login_from_menu_closes_menu() {
        let mut overlay = Overlay::default();
        overlay.toggle_menu();
        overlay.open_login();
        assert_eq!(overlay, Overlay::Login);
        assert!(!overlay.is_menu_open());
    }

    #[test]
    fn test_register_replaces_login() {
        let mut overlay = Overlay::Login;
        overlay.open_register();
        assert_eq!(overlay, Overlay::Register);
        overlay.close();
        assert_eq!(overlay, Overlay::None);
    }
}

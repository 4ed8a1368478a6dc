//! View and session models for the storefront.

pub mod layout;
pub mod session;

pub use layout::{Layout, NavLink, NavPage};
pub use session::{Flash, FlashKind, keys as session_keys};

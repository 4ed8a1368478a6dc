//! View and session models for admin.

pub mod layout;
pub mod session;

pub use layout::{Layout, NavLink, Section};
pub use session::{Flash, FlashKind, keys as session_keys};

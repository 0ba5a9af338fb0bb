//! Hesiod Application Layer
pub mod ports;
pub mod resolver;

pub use resolver::{HesiodResolver, MAX_REALM_REDIRECTS};

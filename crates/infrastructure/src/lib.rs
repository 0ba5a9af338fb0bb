//! Hesiod Infrastructure Layer: production TXT lookup adapters
pub mod dns;

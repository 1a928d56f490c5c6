//! DNS Select Infrastructure Layer
pub mod dns;
pub mod geo;

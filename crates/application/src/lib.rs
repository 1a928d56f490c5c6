//! DNS Select Application Layer
pub mod criteria;
pub mod ports;
pub mod selectors;
pub mod services;
pub mod use_cases;

//! DNS Select Domain Layer
pub mod config;
pub mod edns;
pub mod errors;
pub mod geo;
pub mod metadata;
pub mod select_record;
pub mod selector;

pub use config::{CliOverrides, Config, ConfigError};
pub use edns::{ClientSubnetOption, EdnsOption, EDNS_CLIENT_SUBNET};
pub use errors::DomainError;
pub use geo::{GeoCity, GeoMatch};
pub use ipnetwork::IpNetwork;
pub use metadata::{ecs_scope_key, QueryMetadata, ValueFn, ECS_SCOPE_SUFFIX};
pub use select_record::{SelectRecord, RANDOM_SELECTOR};
pub use selector::{SelectionResult, SelectorCriteria, SelectorKey};

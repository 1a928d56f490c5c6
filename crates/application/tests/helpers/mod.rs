#![allow(dead_code)]

mod mocks;

pub use mocks::{ecs_option, MockGeoLookup, MockRequest};

pub mod request;
pub mod wire;

pub use request::{Transport, WireRequest};
pub use wire::{encode_query, parse_query, ParsedQuery, Question, WireError, DEFAULT_UDP_PAYLOAD};

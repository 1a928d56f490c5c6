use dns_select_application::ports::QueryRequest;
use dns_select_domain::EdnsOption;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::debug;

use super::wire::{parse_query, ParsedQuery, WireError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Udp,
    Tcp,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udp" => Ok(Transport::Udp),
            "tcp" => Ok(Transport::Tcp),
            other => Err(format!("Unknown transport '{}', expected udp or tcp", other)),
        }
    }
}

/// A decoded query together with the transport facts it arrived with.
#[derive(Debug, Clone)]
pub struct WireRequest {
    source: String,
    transport: Transport,
    query: ParsedQuery,
}

impl WireRequest {
    pub fn new(query: ParsedQuery, source: SocketAddr, transport: Transport) -> Self {
        Self {
            source: source.ip().to_string(),
            transport,
            query,
        }
    }

    pub fn from_wire(
        buf: &[u8],
        source: SocketAddr,
        transport: Transport,
    ) -> Result<Self, WireError> {
        let query = parse_query(buf)?;
        debug!(
            id = query.id,
            questions = query.questions.len(),
            edns = query.has_edns(),
            client = %source,
            transport = %transport,
            "Query decoded"
        );
        Ok(Self::new(query, source, transport))
    }

    pub fn query(&self) -> &ParsedQuery {
        &self.query
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }
}

impl QueryRequest for WireRequest {
    fn source_address(&self) -> &str {
        &self.source
    }

    fn protocol(&self) -> &str {
        self.transport.as_str()
    }

    fn edns_options(&self) -> Option<&[EdnsOption]> {
        self.query.edns_options.as_deref()
    }
}

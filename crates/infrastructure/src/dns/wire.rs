//! Query codec built on `hickory-proto`.
//!
//! Decoding keeps only what selection reads: the header id, the question
//! section and the options of the OPT record, mapped onto the domain's
//! EDNS types. Encoding builds the query a resolver would forward.

use dns_select_domain::{ClientSubnetOption, EdnsOption, IpNetwork};
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::opt::{ClientSubnet, EdnsOption as HickoryEdnsOption};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use thiserror::Error;

/// Requestor UDP payload size advertised by encoded queries.
pub const DEFAULT_UDP_PAYLOAD: u16 = 1232;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Failed to decode DNS message: {0}")]
    Decode(String),

    #[error("Failed to encode DNS message: {0}")]
    Encode(String),

    #[error("Invalid domain name '{0}'")]
    InvalidName(String),

    #[error("Message is not a standard query")]
    NotAQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Presentation form without the trailing dot; `"."` for the root.
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub id: u16,
    pub questions: Vec<Question>,
    /// Requestor's UDP payload size, when an OPT record is present.
    pub udp_payload_size: Option<u16>,
    /// Options of the OPT record, `None` without one.
    pub edns_options: Option<Vec<EdnsOption>>,
}

impl ParsedQuery {
    pub fn has_edns(&self) -> bool {
        self.edns_options.is_some()
    }
}

/// Decodes a raw DNS query.
pub fn parse_query(buf: &[u8]) -> Result<ParsedQuery, WireError> {
    let message = Message::from_vec(buf).map_err(|e| WireError::Decode(e.to_string()))?;

    if message.message_type() != MessageType::Query || message.op_code() != OpCode::Query {
        return Err(WireError::NotAQuery);
    }

    let questions = message
        .queries()
        .iter()
        .map(|query| Question {
            name: presentation_name(query.name()),
            qtype: u16::from(query.query_type()),
            qclass: u16::from(query.query_class()),
        })
        .collect();

    let edns = message.extensions().as_ref();

    Ok(ParsedQuery {
        id: message.id(),
        questions,
        udp_payload_size: edns.map(|edns| edns.max_payload()),
        edns_options: edns.map(edns_options),
    })
}

/// Encodes an `A`/`IN` query for `name`. With `ecs`, the query carries an
/// OPT record holding that network as its Client Subnet option.
pub fn encode_query(id: u16, name: &str, ecs: Option<IpNetwork>) -> Result<Vec<u8>, WireError> {
    let name = Name::from_str(name).map_err(|_| WireError::InvalidName(name.to_string()))?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(RecordType::A);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    if let Some(subnet) = ecs {
        let mut edns = Edns::new();
        edns.set_max_payload(DEFAULT_UDP_PAYLOAD);
        edns.options_mut().insert(HickoryEdnsOption::Subnet(ClientSubnet::new(
            subnet.network(),
            subnet.prefix(),
            0,
        )));
        message.set_edns(edns);
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| WireError::Encode(e.to_string()))?;

    Ok(buf)
}

fn edns_options(edns: &Edns) -> Vec<EdnsOption> {
    edns.options()
        .as_ref()
        .iter()
        .map(|(code, option)| match option {
            HickoryEdnsOption::Subnet(subnet) => {
                EdnsOption::ClientSubnet(ClientSubnetOption::from_addr(
                    subnet.addr(),
                    subnet.source_prefix(),
                    subnet.scope_prefix(),
                ))
            }
            _ => EdnsOption::Other {
                code: u16::from(*code),
            },
        })
        .collect()
}

fn presentation_name(name: &Name) -> String {
    if name.is_root() {
        return ".".to_string();
    }
    name.to_ascii().trim_end_matches('.').to_string()
}

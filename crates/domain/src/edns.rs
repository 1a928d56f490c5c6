use std::net::IpAddr;

/// EDNS option code assigned to Client Subnet (RFC 7871).
pub const EDNS_CLIENT_SUBNET: u16 = 8;

/// Address family numbers used in the Client Subnet option.
pub const FAMILY_IPV4: u16 = 1;
pub const FAMILY_IPV6: u16 = 2;

/// Client Subnet option as seen by the selection layer.
///
/// `address` holds the full-length address bytes (4 or 16), zero padded
/// past the transmitted prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSubnetOption {
    pub family: u16,
    pub source_prefix: u8,
    pub scope_prefix: u8,
    pub address: Vec<u8>,
}

impl ClientSubnetOption {
    pub fn new(family: u16, source_prefix: u8, scope_prefix: u8, address: Vec<u8>) -> Self {
        Self {
            family,
            source_prefix,
            scope_prefix,
            address,
        }
    }

    pub fn from_addr(addr: IpAddr, source_prefix: u8, scope_prefix: u8) -> Self {
        let (family, address) = match addr {
            IpAddr::V4(v4) => (FAMILY_IPV4, v4.octets().to_vec()),
            IpAddr::V6(v6) => (FAMILY_IPV6, v6.octets().to_vec()),
        };
        Self::new(family, source_prefix, scope_prefix, address)
    }
}

/// One option of a query's OPT record, in the order the decoder reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdnsOption {
    ClientSubnet(ClientSubnetOption),

    /// Any option selection does not look at.
    Other { code: u16 },
}

impl EdnsOption {
    pub fn code(&self) -> u16 {
        match self {
            EdnsOption::ClientSubnet(_) => EDNS_CLIENT_SUBNET,
            EdnsOption::Other { code } => *code,
        }
    }
}

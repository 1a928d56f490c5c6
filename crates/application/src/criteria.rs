use dns_select_domain::{ClientSubnetOption, EdnsOption, QueryMetadata, SelectorCriteria};
use ipnetwork::IpNetwork;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::debug;

use crate::ports::QueryRequest;

/// Derives the selection criteria for `request`.
///
/// Never fails: an unparsable source address leaves `src` unset and a
/// missing or unusable Client Subnet option leaves `ecs` unset.
pub fn extract_criteria<'a>(
    metadata: &'a QueryMetadata,
    request: &dyn QueryRequest,
) -> SelectorCriteria<'a> {
    SelectorCriteria {
        metadata,
        src: parse_source(request.source_address()),
        protocol: Arc::from(request.protocol()),
        ecs: client_subnet(request),
    }
}

/// Returns the client network announced through EDNS Client Subnet.
///
/// Options are processed in declaration order and the last usable one wins.
/// Options whose prefix does not fit the address are skipped.
pub fn client_subnet(request: &dyn QueryRequest) -> Option<IpNetwork> {
    let mut subnet = None;

    for option in request.edns_options()? {
        match option {
            EdnsOption::ClientSubnet(ecs) => match subnet_from_option(ecs) {
                Some(network) => subnet = Some(network),
                None => {
                    debug!(
                        source_prefix = ecs.source_prefix,
                        address_len = ecs.address.len(),
                        "Ignoring client subnet option with invalid prefix"
                    );
                }
            },
            EdnsOption::Other { .. } => {}
        }
    }

    subnet
}

fn subnet_from_option(ecs: &ClientSubnetOption) -> Option<IpNetwork> {
    let addr = match ecs.address.len() {
        4 => {
            let octets: [u8; 4] = ecs.address.as_slice().try_into().ok()?;
            IpAddr::from(octets)
        }
        16 => {
            let octets: [u8; 16] = ecs.address.as_slice().try_into().ok()?;
            IpAddr::from(octets)
        }
        _ => return None,
    };

    // Mask width is bounded by the address length, not by the family field.
    let max_prefix = ecs.address.len() * 8;
    if usize::from(ecs.source_prefix) > max_prefix {
        return None;
    }

    IpNetwork::new(addr, ecs.source_prefix).ok()
}

/// Parses a transport source address, either a bare IP or `ip:port`.
pub(crate) fn parse_source(source: &str) -> Option<IpAddr> {
    source
        .parse::<IpAddr>()
        .ok()
        .or_else(|| source.parse::<SocketAddr>().ok().map(|s| s.ip()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ecs(address: Vec<u8>, source_prefix: u8) -> EdnsOption {
        EdnsOption::ClientSubnet(ClientSubnetOption::new(1, source_prefix, 0, address))
    }

    #[test]
    fn test_subnet_from_ipv4_option() {
        let option = ClientSubnetOption::new(1, 24, 0, vec![203, 0, 113, 0]);
        let network = subnet_from_option(&option).unwrap();
        assert_eq!(network, "203.0.113.0/24".parse::<IpNetwork>().unwrap());
    }

    #[test]
    fn test_subnet_from_ipv6_option() {
        let mut address = vec![0x20, 0x01, 0x0d, 0xb8];
        address.resize(16, 0);
        let option = ClientSubnetOption::new(2, 32, 0, address);

        let network = subnet_from_option(&option).unwrap();
        assert_eq!(network, "2001:db8::/32".parse::<IpNetwork>().unwrap());
    }

    #[test]
    fn test_prefix_longer_than_address_is_rejected() {
        let option = ClientSubnetOption::new(1, 33, 0, vec![203, 0, 113, 0]);
        assert!(subnet_from_option(&option).is_none());
    }

    #[test]
    fn test_prefix_limit_follows_address_length() {
        // IPv6-sized address under an IPv4 family tag still allows /64.
        let option = ClientSubnetOption::new(1, 64, 0, vec![0; 16]);
        assert!(subnet_from_option(&option).is_some());
    }

    #[test]
    fn test_unusual_address_length_is_rejected() {
        let option = ClientSubnetOption::new(1, 8, 0, vec![10, 0, 0]);
        assert!(subnet_from_option(&option).is_none());
    }

    #[test]
    fn test_parse_source_accepts_socket_address() {
        assert_eq!(parse_source("192.0.2.1"), Some("192.0.2.1".parse().unwrap()));
        assert_eq!(parse_source("[2001:db8::1]:5353"), Some("2001:db8::1".parse().unwrap()));
        assert_eq!(parse_source("not-an-ip"), None);
        assert_eq!(parse_source(""), None);
    }

    struct Request(Option<Vec<EdnsOption>>);

    impl QueryRequest for Request {
        fn source_address(&self) -> &str {
            "198.51.100.7"
        }

        fn protocol(&self) -> &str {
            "udp"
        }

        fn edns_options(&self) -> Option<&[EdnsOption]> {
            self.0.as_deref()
        }
    }

    #[test]
    fn test_invalid_option_keeps_previous_subnet() {
        let request = Request(Some(vec![
            ecs(vec![203, 0, 113, 0], 24),
            ecs(vec![198, 51, 100, 0], 40),
        ]));

        assert_eq!(
            client_subnet(&request),
            Some("203.0.113.0/24".parse().unwrap())
        );
    }
}

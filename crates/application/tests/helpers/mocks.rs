use dns_select_application::ports::{GeoLookup, QueryRequest};
use dns_select_domain::{ClientSubnetOption, EdnsOption, GeoCity, GeoMatch, IpNetwork};
use std::net::IpAddr;
use std::sync::Mutex;

pub struct MockRequest {
    source: String,
    protocol: String,
    edns: Option<Vec<EdnsOption>>,
}

impl MockRequest {
    pub fn new(source: &str, protocol: &str) -> Self {
        Self {
            source: source.to_string(),
            protocol: protocol.to_string(),
            edns: None,
        }
    }

    pub fn with_edns(mut self, options: Vec<EdnsOption>) -> Self {
        self.edns = Some(options);
        self
    }

    pub fn with_ecs(self, address: &str, source_prefix: u8) -> Self {
        self.with_edns(vec![ecs_option(address, source_prefix)])
    }
}

impl QueryRequest for MockRequest {
    fn source_address(&self) -> &str {
        &self.source
    }

    fn protocol(&self) -> &str {
        &self.protocol
    }

    fn edns_options(&self) -> Option<&[EdnsOption]> {
        self.edns.as_deref()
    }
}

pub fn ecs_option(address: &str, source_prefix: u8) -> EdnsOption {
    let addr: IpAddr = address.parse().unwrap();
    EdnsOption::ClientSubnet(ClientSubnetOption::from_addr(addr, source_prefix, 0))
}

/// Longest-prefix table that records every address it was asked about.
pub struct MockGeoLookup {
    entries: Vec<(IpNetwork, GeoCity)>,
    queried: Mutex<Vec<IpAddr>>,
}

impl MockGeoLookup {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn with_country(mut self, cidr: &str, code: &str) -> Self {
        let city = GeoCity {
            country_code: Some(code.into()),
            ..GeoCity::default()
        };
        self.entries.push((cidr.parse().unwrap(), city));
        self
    }

    pub fn with_city(mut self, cidr: &str, city: GeoCity) -> Self {
        self.entries.push((cidr.parse().unwrap(), city));
        self
    }

    pub fn queried(&self) -> Vec<IpAddr> {
        self.queried.lock().unwrap().clone()
    }
}

impl GeoLookup for MockGeoLookup {
    fn lookup(&self, ip: IpAddr) -> Option<GeoMatch> {
        self.queried.lock().unwrap().push(ip);
        self.entries
            .iter()
            .filter(|(network, _)| network.contains(ip))
            .max_by_key(|(network, _)| network.prefix())
            .map(|(network, city)| GeoMatch {
                city: city.clone(),
                network_prefix: network.prefix(),
            })
    }
}

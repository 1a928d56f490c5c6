use dns_select_application::ports::GeoLookup;
use dns_select_domain::config::GeoNetworkConfig;
use dns_select_domain::{DomainError, GeoCity, GeoMatch};
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use tracing::info;

/// GeoIP table built from configured networks. The most specific network
/// containing an address wins.
#[derive(Debug, Default)]
pub struct StaticGeoDatabase {
    networks: Vec<(IpNetwork, GeoCity)>,
}

impl StaticGeoDatabase {
    pub fn new(entries: &[GeoNetworkConfig]) -> Result<Self, DomainError> {
        let mut networks = Vec::with_capacity(entries.len());

        for entry in entries {
            let network: IpNetwork = entry
                .cidr
                .parse()
                .map_err(|e| DomainError::InvalidCidr(format!("{}: {}", entry.cidr, e)))?;
            networks.push((network, entry.city.clone()));
        }

        info!(networks = networks.len(), "GeoIP table loaded");
        Ok(Self { networks })
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl GeoLookup for StaticGeoDatabase {
    fn lookup(&self, ip: IpAddr) -> Option<GeoMatch> {
        let mut best_match: Option<(u8, &GeoCity)> = None;

        for (network, city) in &self.networks {
            if network.contains(ip) {
                let prefix = network.prefix();

                match best_match {
                    None => best_match = Some((prefix, city)),
                    Some((existing_prefix, _)) if prefix > existing_prefix => {
                        best_match = Some((prefix, city));
                    }
                    _ => {}
                }
            }
        }

        best_match.map(|(network_prefix, city)| GeoMatch {
            city: city.clone(),
            network_prefix,
        })
    }
}

use dns_select_domain::GeoMatch;
use std::net::IpAddr;

pub trait GeoLookup: Send + Sync {
    fn lookup(&self, ip: IpAddr) -> Option<GeoMatch>;
}

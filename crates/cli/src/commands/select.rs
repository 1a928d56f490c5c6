use anyhow::Context;
use clap::Args;
use dns_select_domain::{Config, IpNetwork};
use dns_select_infrastructure::dns::{encode_query, Transport, WireRequest};
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, info};

use crate::di::SelectionServices;

const QUERY_ID: u16 = 0;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// SELECT record name to resolve
    #[arg(long)]
    name: String,

    /// Client address (IP or IP:port)
    #[arg(long)]
    client: String,

    /// Transport the query arrived on
    #[arg(long, default_value = "udp")]
    protocol: Transport,

    /// EDNS Client Subnet to attach, e.g. 203.0.113.0/24
    #[arg(long, value_name = "CIDR")]
    ecs: Option<IpNetwork>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

pub fn run_select(config: &Config, args: SelectArgs) -> anyhow::Result<()> {
    let record = config
        .select
        .find(&args.name)
        .with_context(|| format!("No SELECT record named '{}'", args.name))?;

    let services = SelectionServices::new(config)?;

    let source = parse_client(&args.client)?;
    let wire = encode_query(QUERY_ID, &args.name, args.ecs)?;
    debug!(bytes = wire.len(), "Query encoded");
    let request = WireRequest::from_wire(&wire, source, args.protocol)?;

    let outcome = services
        .use_case
        .execute(&request, std::slice::from_ref(record));

    info!(
        name = %record.name,
        scope = outcome.ecs_scope_prefix_length,
        "Selection complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    for answer in &outcome.answers {
        let origin = if answer.selected { "selected" } else { "base" };
        println!("{} -> {} ({})", answer.name, answer.target, origin);
    }
    println!("ECS scope: /{}", outcome.ecs_scope_prefix_length);
    Ok(())
}

fn parse_client(value: &str) -> anyhow::Result<SocketAddr> {
    if let Ok(ip) = value.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, 0));
    }
    value
        .parse::<SocketAddr>()
        .with_context(|| format!("Invalid client address '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_accepts_ip_and_socket() {
        assert_eq!(parse_client("192.0.2.1").unwrap().port(), 0);
        assert_eq!(parse_client("192.0.2.1:5353").unwrap().port(), 5353);
        assert_eq!(
            parse_client("[2001:db8::1]:53").unwrap().ip(),
            "2001:db8::1".parse::<IpAddr>().unwrap()
        );
        assert!(parse_client("nope").is_err());
    }

    #[test]
    fn test_request_round_trips_through_wire() {
        let ecs: IpNetwork = "203.0.113.77/24".parse().unwrap();
        let wire = encode_query(QUERY_ID, "www.example.com.", Some(ecs)).unwrap();
        let client = parse_client("192.0.2.1").unwrap();

        let request = WireRequest::from_wire(&wire, client, Transport::Udp).unwrap();

        assert_eq!(request.query().questions[0].name, "www.example.com");
        assert!(request.query().has_edns());
    }
}

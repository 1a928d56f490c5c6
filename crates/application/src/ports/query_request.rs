use dns_select_domain::EdnsOption;

/// Read-only view of an inbound query, as exposed by the transport layer.
pub trait QueryRequest {
    /// Client address as reported by the transport (e.g. `"192.0.2.1"`).
    fn source_address(&self) -> &str;

    /// Transport identifier, `"udp"` or `"tcp"`.
    fn protocol(&self) -> &str;

    /// Options of the query's OPT record, or `None` when it carries none.
    fn edns_options(&self) -> Option<&[EdnsOption]>;
}

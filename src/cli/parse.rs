use sograph_core::format::OutputFormat;
use sograph_core::graph::ReaddPolicy;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse re-add policy from string
pub fn parse_readd_policy(s: &str) -> std::result::Result<ReaddPolicy, String> {
    s.parse::<ReaddPolicy>().map_err(|e| e.to_string())
}

//! Connection target resolution.
//!
//! # Responsibilities
//! - Turn a loosely-formatted connection string into a concrete (host, port)
//! - Tolerate absent, bare-hostname, and malformed inputs
//! - Never fail: a wrong-but-defined target beats a crash at check time
//!
//! # Design Decisions
//! - Default host and port are supplied by the caller, not hardcoded here;
//!   each indicator documents its own default target
//! - Malformed URIs fall back to the full default, never a partial parse
//! - Resolution is recomputed on every check invocation; targets are not cached

use std::fmt;

use url::Url;

/// Resolved (host, port) pair used to reach a dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
}

impl ConnectionTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Resolve a connection string into a reachable target.
///
/// Accepts the raw configuration value (absent, a bare hostname, or a full
/// URI), the URI scheme the dependency is expected to use, and the default
/// target to fall back to.
///
/// - absent or empty input returns the default target
/// - input without a `<scheme>://` prefix is treated as a bare hostname,
///   keeping the default port
/// - a parsable URI yields its hostname and port, substituting the default
///   port when the URI carries none
/// - an unparsable URI yields the full default target
pub fn resolve(raw: Option<&str>, scheme: &str, default: &ConnectionTarget) -> ConnectionTarget {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return default.clone(),
    };

    let prefix = format!("{scheme}://");
    if !raw.starts_with(&prefix) {
        // Bare hostname, e.g. "cache.internal".
        return ConnectionTarget::new(raw, default.port);
    }

    match Url::parse(raw) {
        Ok(parsed) => {
            // An empty host ("redis://") parses; it is still not reachable.
            let host = match parsed.host_str() {
                Some(h) if !h.is_empty() => h.to_owned(),
                _ => default.host.clone(),
            };
            ConnectionTarget {
                host,
                port: parsed.port().unwrap_or(default.port),
            }
        }
        // Malformed URI (bad port, empty host, garbage): full default,
        // never a partial parse.
        Err(_) => default.clone(),
    }
}

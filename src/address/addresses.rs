use std::fmt;

/// Address at which a node participates in the Raft protocol, as `host:port`.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct RaftAddress(String);

impl RaftAddress {
    pub fn new(address: impl Into<String>) -> Self {
        RaftAddress(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RaftAddress {
    fn from(address: &str) -> Self {
        RaftAddress::new(address)
    }
}

impl From<String> for RaftAddress {
    fn from(address: String) -> Self {
        RaftAddress(address)
    }
}

impl fmt::Display for RaftAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address at which a node's cluster RPC service listens. Only obtainable from a `RaftAddress`
/// through an `AddressResolver`.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct ServiceAddress {
    host: String,
    port: u16,
}

impl ServiceAddress {
    pub(crate) fn new(host: impl Into<String>, port: u16) -> Self {
        ServiceAddress {
            host: host.into(),
            port,
        }
    }

    /// Plaintext endpoint URI for the gRPC channel. An empty host names this machine.
    pub(crate) fn uri(&self) -> String {
        if self.host.is_empty() {
            format!("http://127.0.0.1:{}", self.port)
        } else {
            format!("http://{}", self)
        }
    }
}

impl fmt::Display for ServiceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AddressResolutionError {
    #[error("address {0}: missing port in address")]
    MissingPort(String),
    #[error("address {0}: too many colons in address")]
    TooManyColons(String),
    #[error("address {0}: missing ']' in address")]
    MissingBracket(String),
    #[error("address {0}: unexpected '[' or ']' in address")]
    UnexpectedBracket(String),
    #[error("address {address}: port {port:?} is not a number")]
    NonNumericPort { address: String, port: String },
    #[error("address {address}: port {port} plus offset {offset} is out of range")]
    PortOutOfRange { address: String, port: u16, offset: u16 },
}

/// Splits `host:port`, `[host]:port` or `[host%zone]:port` into host and port. The port is not
/// validated here. An IPv6 host must be bracketed.
pub(crate) fn split_host_port(address: &str) -> Result<(&str, &str), AddressResolutionError> {
    let last_colon = address
        .rfind(':')
        .ok_or_else(|| AddressResolutionError::MissingPort(address.to_string()))?;

    let (host, host_start, host_end) = if address.starts_with('[') {
        let close = address
            .find(']')
            .ok_or_else(|| AddressResolutionError::MissingBracket(address.to_string()))?;
        match close + 1 {
            end if end == address.len() => return Err(AddressResolutionError::MissingPort(address.to_string())),
            end if end == last_colon => {}
            // Either ']' isn't followed by a colon, or it is followed by a colon that is not the
            // last one.
            end if address.as_bytes()[end] == b':' => {
                return Err(AddressResolutionError::TooManyColons(address.to_string()))
            }
            _ => return Err(AddressResolutionError::MissingPort(address.to_string())),
        }
        (&address[1..close], 1, close + 1)
    } else {
        let host = &address[..last_colon];
        if host.contains(':') {
            return Err(AddressResolutionError::TooManyColons(address.to_string()));
        }
        (host, 0, 0)
    };

    if address[host_start..].contains('[') || address[host_end..].contains(']') {
        return Err(AddressResolutionError::UnexpectedBracket(address.to_string()));
    }

    Ok((host, &address[last_colon + 1..]))
}

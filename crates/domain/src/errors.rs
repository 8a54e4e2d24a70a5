use thiserror::Error;

/// Coarse classification used for logging and error tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The DNS exchange itself failed (network, timeout, name resolution).
    Transport,
    /// A response arrived but cannot be used.
    Protocol,
    /// No primary produced a usable serial for a cycle.
    Quorum,
    /// A background job died unexpectedly.
    Internal,
    Configuration,
}

impl ErrorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Protocol => "protocol",
            Self::Quorum => "quorum",
            Self::Internal => "internal",
            Self::Configuration => "configuration",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Failed to resolve {server}: {message}")]
    ServerResolution { server: String, message: String },

    #[error("Transport timeout querying {server}")]
    TransportTimeout { server: String },

    #[error("Failed to exchange with {server}: {message}")]
    TransportError { server: String, message: String },

    #[error("Invalid DNS response from {server}: {message}")]
    InvalidDnsResponse { server: String, message: String },

    #[error("Failed to get a valid answer from {server}: response code {rcode}")]
    UnsuccessfulResponse { server: String, rcode: String },

    #[error("No records returned for SOA query to {server}")]
    EmptyAnswer { server: String },

    #[error("Too many records ({count}) returned for SOA query to {server}")]
    AmbiguousAnswer { server: String, count: usize },

    #[error("No SOA record returned by {server}")]
    NotSoa { server: String },

    #[error("No primary server responded for {domain}")]
    NoPrimaryResponded { domain: String },

    #[error("Job {job} panicked: {message}")]
    JobPanicked { job: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::ServerResolution { .. }
            | Self::TransportTimeout { .. }
            | Self::TransportError { .. } => ErrorClass::Transport,
            Self::InvalidDnsResponse { .. }
            | Self::UnsuccessfulResponse { .. }
            | Self::EmptyAnswer { .. }
            | Self::AmbiguousAnswer { .. }
            | Self::NotSoa { .. } => ErrorClass::Protocol,
            Self::NoPrimaryResponded { .. } => ErrorClass::Quorum,
            Self::JobPanicked { .. } => ErrorClass::Internal,
            Self::InvalidDomainName(_)
            | Self::InvalidServerAddress(_)
            | Self::ConfigError(_) => ErrorClass::Configuration,
        }
    }
}

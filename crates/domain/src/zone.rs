use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::DomainError;

/// A DNS zone whose SOA serial is monitored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone {
    name: Arc<str>,
}

impl Zone {
    /// Accepts `example.com` or `example.com.`; the stored name has no
    /// trailing dot.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        let bare = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if bare.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name cannot be empty".to_string(),
            ));
        }
        if bare.len() > 253 || bare.split('.').any(|label| label.is_empty() || label.len() > 63) {
            return Err(DomainError::InvalidDomainName(trimmed.to_string()));
        }

        Ok(Self { name: bare.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified form used in the query question.
    pub fn fqdn(&self) -> String {
        format!("{}.", self.name)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Zone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

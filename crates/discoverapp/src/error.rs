use crate::model::Domain;
use thiserror::Error;

/// Errors surfaced by the discovery engine.
///
/// Lookups against the taxonomy or the context tables never fail; they return
/// empty collections instead. The `Unknown*` variants below are raised only by
/// store mutations that would break a [`FilterState`](crate::store::FilterState)
/// invariant. When one is returned, the state has not been touched.
#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Subfilter '{value}' is not available for {domain}")]
    UnknownSubfilter { domain: Domain, value: String },

    #[error("'{value}' is not a valid {domain} filter option")]
    UnknownAttribute { domain: Domain, value: String },

    #[error("Tag '{0}' is not part of the tag taxonomy")]
    UnknownTag(String),

    #[error("Unknown content domain: {0}")]
    UnknownDomain(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DiscoverError {
    /// True for errors raised by a rejected store mutation.
    ///
    /// Surfaces use this to drop a stale interaction silently and re-derive
    /// their options from the context resolver.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            DiscoverError::UnknownSubfilter { .. }
                | DiscoverError::UnknownAttribute { .. }
                | DiscoverError::UnknownTag(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DiscoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_violations_are_flagged() {
        let err = DiscoverError::UnknownSubfilter {
            domain: Domain::Artists,
            value: "concerts".into(),
        };
        assert!(err.is_invariant_violation());
        assert!(DiscoverError::UnknownTag("Polka".into()).is_invariant_violation());
        assert!(!DiscoverError::UnknownDomain("planets".into()).is_invariant_violation());
    }

    #[test]
    fn error_messages_name_the_domain() {
        let err = DiscoverError::UnknownAttribute {
            domain: Domain::Resources,
            value: "boat".into(),
        };
        assert_eq!(err.to_string(), "'boat' is not a valid resources filter option");
    }
}

use thiserror::Error;

/// A path token that is not a valid flavor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid flavor id: {0:?}")]
pub struct InvalidFlavorId(pub String);

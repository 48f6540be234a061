use thiserror::Error;

/// Failures raised by the lookups and calculators.
///
/// The `Display` text is the message handed back to the caller verbatim, so
/// it must stay human-readable and echo the caller's original input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnowledgeError {
    #[error("Could not identify mangrove species '{0}'. Please try using scientific name or Swahili name.")]
    SpeciesNotFound(String),

    #[error("Information about mangroves in '{0}' is not available in our database.")]
    SiteNotFound(String),

    #[error("Please provide a valid positive number for area in hectares.")]
    InvalidArea,
}

/// Coarse classification of a [`KnowledgeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
}

impl KnowledgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SpeciesNotFound(_) | Self::SiteNotFound(_) => ErrorKind::NotFound,
            Self::InvalidArea => ErrorKind::InvalidArgument,
        }
    }
}

pub type KnowledgeResult<T> = std::result::Result<T, KnowledgeError>;

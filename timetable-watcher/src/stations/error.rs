//! Station validation error types.

/// Returned when a station slug is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("start or destination station is invalid: unknown station `{slug}`")]
pub struct InvalidStation {
    slug: String,
}

impl InvalidStation {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    /// The slug that failed validation.
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Errors building a station registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two stations share a slug
    #[error("duplicate station slug `{0}`")]
    DuplicateStation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = InvalidStation::new("invalid-station");
        assert_eq!(
            err.to_string(),
            "start or destination station is invalid: unknown station `invalid-station`"
        );
        assert_eq!(err.slug(), "invalid-station");

        let err = RegistryError::DuplicateStation("london-st-pancras");
        assert_eq!(
            err.to_string(),
            "duplicate station slug `london-st-pancras`"
        );
    }
}

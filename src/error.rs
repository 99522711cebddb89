pub type GridgifResult<T> = Result<T, GridgifError>;

#[derive(thiserror::Error, Debug)]
pub enum GridgifError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("paint error: {0}")]
    Paint(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridgifError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn paint(msg: impl Into<String>) -> Self {
        Self::Paint(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            GridgifError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(GridgifError::paint("x").to_string().contains("paint error:"));
    }

    #[test]
    fn transparent_variants_preserve_source() {
        let base = std::io::Error::other("boom");
        let err = GridgifError::Io(base);
        assert!(err.to_string().contains("boom"));

        let err = GridgifError::Other(anyhow::anyhow!("painter gave up"));
        assert!(err.to_string().contains("painter gave up"));
    }
}

pub type StoregenResult<T> = Result<T, StoregenError>;

#[derive(thiserror::Error, Debug)]
pub enum StoregenError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error("color error: {0}")]
    Color(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoregenError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            StoregenError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            StoregenError::geometry("x")
                .to_string()
                .contains("geometry error:")
        );
        assert!(StoregenError::color("x").to_string().contains("color error:"));
        assert!(StoregenError::font("x").to_string().contains("font error:"));
        assert!(
            StoregenError::render("x")
                .to_string()
                .contains("render error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = StoregenError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("missing element `{0}`")]
    MissingElement(String),

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("browser api unavailable: {0}")]
    BrowserApi(&'static str),
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_target() {
        let err = SiteError::MissingElement("seeAllBtn".to_string());
        assert_eq!(err.to_string(), "missing element `seeAllBtn`");
    }

    #[test]
    fn json_errors_convert_into_config_errors() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SiteError = parse_err.into();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }
}

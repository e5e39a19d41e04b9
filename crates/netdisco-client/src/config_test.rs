//! Unit tests for client configuration and credentials

#[cfg(test)]
mod tests {
    use crate::config::{ClientConfig, Credentials, DEFAULT_TIMEOUT};
    use crate::error::NetdiscoError;
    use std::time::Duration;

    #[test]
    fn test_default_config_is_secure() {
        let config = ClientConfig::new("https://netdisco.example.com:443");
        assert!(config.verify_certificate);
        assert!(config.enforce_encryption);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_validate_accepts_https() {
        let config = ClientConfig::new("https://netdisco.example.com:443");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_http_when_enforced() {
        let config = ClientConfig::new("http://netdisco.example.com");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, NetdiscoError::Configuration(_)));
    }

    #[test]
    fn test_validate_allows_http_when_not_enforced() {
        let config = ClientConfig::new("http://127.0.0.1:2050").with_enforce_encryption(false);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new("https://netdisco.example.com")
            .with_verify_certificate(false)
            .with_timeout(Duration::from_secs(5));
        assert!(!config.verify_certificate);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.enforce_encryption);
    }

    #[test]
    fn test_validate_checks_scheme_prefix_not_substring() {
        // "https://" appearing later in the URL must not satisfy the check
        let config = ClientConfig::new("http://evil.example/?next=https://netdisco");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = ClientConfig::new("");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, NetdiscoError::Configuration(_)));
    }

    #[test]
    fn test_basic_blob_known_value() {
        let credentials = Credentials::new("admindisco", "foo");
        assert_eq!(credentials.basic_blob(), "YWRtaW5kaXNjbzpmb28=");
    }

    #[test]
    fn test_basic_blob_keeps_colons_in_password() {
        use base64::{Engine as _, engine::general_purpose};

        let credentials = Credentials::new("admin", "pa:ss:word");
        let decoded = general_purpose::STANDARD
            .decode(credentials.basic_blob())
            .expect("Blob should be valid base64");
        assert_eq!(decoded, b"admin:pa:ss:word");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("admindisco", "s3cret");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("admindisco"));
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}

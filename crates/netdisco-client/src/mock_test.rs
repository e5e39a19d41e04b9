//! Unit tests for the mock Netdisco client

#[cfg(test)]
mod tests {
    use crate::config::Credentials;
    use crate::mock::MockNetdiscoClient;
    use crate::netdisco_trait::NetdiscoClientTrait;
    use crate::query::SearchQuery;

    #[tokio::test]
    async fn test_mock_session_lifecycle() {
        let mock = MockNetdiscoClient::new("http://test-netdisco");
        assert!(mock.session_token().is_none());

        let credentials = Credentials::new("admindisco", "foo");
        let token = mock.login(&credentials).await.expect("Login should succeed");
        assert_eq!(token.as_str(), "mock-api-key");
        assert_eq!(mock.session_token(), Some(token));

        assert!(mock.logout().await);
        assert!(mock.session_token().is_none());
    }

    #[tokio::test]
    async fn test_mock_returns_canned_response_and_records_request() {
        let mock = MockNetdiscoClient::new("http://test-netdisco");
        mock.set_response("api/v1/search/vlan", r#"[{"vlan":64}]"#);

        let query = SearchQuery::new().param("q", "64");
        let body = mock.search_vlan(&query).await.expect("Search should succeed");
        assert_eq!(body, r#"[{"vlan":64}]"#);

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "api/v1/search/vlan");
        assert_eq!(requests[0].params, query);
    }

    #[tokio::test]
    async fn test_mock_defaults_to_empty_array() {
        let mock = MockNetdiscoClient::new("http://test-netdisco");
        let body = mock
            .search_device(&SearchQuery::new())
            .await
            .expect("Search should succeed");
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_mock_as_trait_object() {
        let client: Box<dyn NetdiscoClientTrait> =
            Box::new(MockNetdiscoClient::new("http://test-netdisco"));
        assert_eq!(client.base_url(), "http://test-netdisco");

        let body = client
            .get("api/v1/report/device/portutilization", &SearchQuery::new())
            .await
            .expect("GET should succeed");
        assert_eq!(body, "[]");
    }
}

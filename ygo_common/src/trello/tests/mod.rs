//! Unit tests for the Trello client.

mod labels_tests;

use super::TrelloClient;

pub(super) fn client_with_mock(mock_uri: &str) -> TrelloClient {
    TrelloClient::new("test_key".to_string(), "test_token".to_string()).with_base_url(mock_uri)
}

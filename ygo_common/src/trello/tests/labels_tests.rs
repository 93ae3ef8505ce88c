//! Tests for the label cache.

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client_with_mock;
use crate::colour::LabelColour;
use crate::trello::{LabelCache, TrelloLabel};

fn label(id: &str, color: Option<&str>) -> TrelloLabel {
    TrelloLabel {
        id: id.to_string(),
        name: String::new(),
        color: color.map(str::to_string),
    }
}

#[test]
fn first_label_per_colour_wins() {
    let cache = LabelCache::from_labels(&[
        label("p1", Some("purple")),
        label("p2", Some("purple")),
        label("y1", Some("yellow")),
        label("n1", None),
        label("s1", Some("sky")),
    ]);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(LabelColour::Purple), Some("p1"));
    assert_eq!(cache.get(LabelColour::Yellow), Some("y1"));
    assert_eq!(cache.get(LabelColour::Green), None);
}

#[test]
fn save_then_load_restores_cache() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("labels.json");

    let mut cache = LabelCache::default();
    cache.insert(LabelColour::Green, "60cb4b49c8246138305d2b30");
    cache.insert(LabelColour::Purple, "60cb4b49c8246138305d2b3a");
    cache.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"purple\""));

    assert_eq!(LabelCache::load(&path), cache);
}

#[test]
fn missing_or_corrupt_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(LabelCache::load(&missing).is_empty());

    let corrupt = dir.path().join("corrupt.json");
    std::fs::write(&corrupt, "{ not json").unwrap();
    assert!(LabelCache::load(&corrupt).is_empty());
}

#[tokio::test]
async fn refresh_fetches_and_saves_board_labels() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());
    let dir = TempDir::new().unwrap();
    let cache_path = dir.path().join("labels.json");

    Mock::given(method("GET"))
        .and(path("/boards/b1/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": "l-red", "name": "", "color": "red" },
            { "id": "l-blue", "name": "Fresh", "color": "blue" },
            { "id": "l-none", "name": "Plain", "color": null }
        ])))
        .mount(&mock_server)
        .await;

    let cache = client.refresh_label_cache("b1", &cache_path).await.unwrap();
    assert_eq!(cache.get(LabelColour::Red), Some("l-red"));
    assert_eq!(cache.get(LabelColour::Blue), Some("l-blue"));
    assert_eq!(cache.len(), 2);

    assert_eq!(LabelCache::load(&cache_path), cache);
}

//! Tests for the subject filter and discovery passes.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn record(value: serde_json::Value) -> CardRecord {
    serde_json::from_value(value).unwrap()
}

fn dragon_filter() -> SubjectFilter {
    SubjectFilter::new("Dragon", "Dragon")
}

fn blue_eyes() -> serde_json::Value {
    serde_json::json!({
        "name": "Blue-Eyes White Dragon",
        "type": "Normal Monster",
        "race": "Dragon",
        "card_sets": [
            { "set_code": "LOB-EN001", "set_rarity": "Ultra Rare" },
            { "set_code": "SDK-001", "set_rarity": "Ultra Rare" },
            { "set_code": "MVP1-ENSV3", "set_rarity": "Secret Rare" }
        ]
    })
}

fn dragon_named_spellcaster() -> serde_json::Value {
    serde_json::json!({
        "name": "Dragon Master Knight Caster",
        "type": "Effect Monster",
        "race": "Spellcaster",
        "card_sets": [
            { "set_code": "DRL2-EN001", "set_rarity": "Ultra Rare" }
        ]
    })
}

#[test]
fn race_match_wins_over_name_match() {
    let filter = dragon_filter();
    assert_eq!(filter.matches(&record(blue_eyes())), Some(SubjectMatch::Race));
}

#[test]
fn name_fragment_match_is_name_only() {
    let filter = dragon_filter();
    assert_eq!(
        filter.matches(&record(dragon_named_spellcaster())),
        Some(SubjectMatch::NameOnly)
    );

    let ends_with = record(serde_json::json!({
        "name": "Paladin of the Dragon",
        "type": "Effect Monster",
        "race": "Warrior"
    }));
    assert_eq!(filter.matches(&ends_with), Some(SubjectMatch::NameOnly));
}

#[test]
fn fragment_inside_a_word_does_not_match() {
    let filter = dragon_filter();
    let card = record(serde_json::json!({
        "name": "Dragonic Knight Warrior",
        "type": "Effect Monster",
        "race": "Warrior"
    }));
    assert_eq!(filter.matches(&card), None);
}

#[test]
fn spells_and_traps_never_match() {
    let filter = dragon_filter();
    let spell = record(serde_json::json!({
        "name": "Dragon Ravine",
        "type": "Spell Card",
        "race": "Field"
    }));
    assert_eq!(filter.matches(&spell), None);
}

#[test]
fn candidates_only_for_printings_at_the_queried_rarity() {
    let records = vec![record(blue_eyes())];
    let candidates = candidates_from(&records, "Ultra Rare", &dragon_filter());

    let listings: Vec<String> = candidates.iter().map(|c| c.card.listing()).collect();
    assert_eq!(
        listings,
        vec![
            "Blue-Eyes White Dragon (LOB - Ultra Rare)",
            "Blue-Eyes White Dragon (SDK - Ultra Rare)",
        ]
    );
    assert!(candidates.iter().all(|c| c.subject == SubjectMatch::Race));
}

#[test]
fn tiers_are_ordered_most_common_first() {
    let tiers = query_tiers(&RarityVocabulary::default());
    assert_eq!(tiers.len(), QUERY_TIERS.len());
    assert_eq!(tiers.first(), Some(&"Ultra Rare"));
    assert_eq!(tiers.last(), Some(&"10000 Secret Rare"));

    let vocab = RarityVocabulary::default();
    let ranks: Vec<usize> = tiers.iter().map(|t| vocab.rank(t).unwrap()).collect();
    assert!(ranks.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn discover_runs_race_and_name_searches_per_tier() {
    let mock_server = MockServer::start().await;
    let client = YgoProDeckClient::new().with_base_url(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/cardinfo.php"))
        .and(query_param("rarity", "Ultra Rare"))
        .and(query_param("race", "Dragon"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [blue_eyes()] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/cardinfo.php"))
        .and(query_param("rarity", "Ultra Rare"))
        .and(query_param("fname", "Dragon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "data": [blue_eyes(), dragon_named_spellcaster()] }),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Every other tier finds nothing
    Mock::given(method("GET"))
        .and(path("/cardinfo.php"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            serde_json::json!({ "error": "No card matching your query was found in the database." }),
        ))
        .expect((QUERY_TIERS.len() as u64 - 1) * 2)
        .mount(&mock_server)
        .await;

    let candidates = discover(&client, &RarityVocabulary::default(), &dragon_filter())
        .await
        .unwrap();

    let listings: Vec<String> = candidates.iter().map(|c| c.card.listing()).collect();
    assert_eq!(
        listings,
        vec![
            "Blue-Eyes White Dragon (LOB - Ultra Rare)",
            "Blue-Eyes White Dragon (SDK - Ultra Rare)",
            "Blue-Eyes White Dragon (LOB - Ultra Rare)",
            "Blue-Eyes White Dragon (SDK - Ultra Rare)",
            "Dragon Master Knight Caster (DRL2 - Ultra Rare)",
        ]
    );
    assert_eq!(candidates[4].subject, SubjectMatch::NameOnly);
}

#[tokio::test]
async fn discover_stops_on_server_error() {
    let mock_server = MockServer::start().await;
    let client = YgoProDeckClient::new().with_base_url(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/cardinfo.php"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = discover(&client, &RarityVocabulary::default(), &dragon_filter()).await;
    assert!(matches!(result, Err(ygo_common::Error::HttpStatus { .. })));
}

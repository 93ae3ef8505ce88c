//! Unit tests for export normalization.

use super::*;

const TEXT_HEADER: &str = "Collection export\nqty,name,printing,condition,edition,language,price,note\n";

fn text_options() -> ImportOptions {
    ImportOptions::default()
}

fn listings(summary: &ImportSummary) -> Vec<String> {
    summary.cards.iter().map(CardIdentifier::listing).collect()
}

#[test]
fn parses_text_rows_after_header() {
    let content = format!(
        "{TEXT_HEADER}\
1,Blue-Eyes White Dragon,LOB - UR,NM,1st,EN,10.00,\n\
3,Stardust Dragon,TDGS - Ghost Rare,NM,1st,EN,80.00,\n"
    );

    let summary = normalize_export(
        &content,
        ExportLayout::Text,
        &text_options(),
        &RarityVocabulary::default(),
    );

    assert_eq!(summary.malformed, 0);
    assert_eq!(
        listings(&summary),
        vec![
            "Blue-Eyes White Dragon (LOB - Ultra Rare)",
            "Stardust Dragon (TDGS - Ghost Rare)",
        ]
    );
}

#[test]
fn malformed_row_is_skipped_and_rest_still_imported() {
    let content = format!(
        "{TEXT_HEADER}\
1,Dark Magician,SDY\n\
1,Blue-Eyes White Dragon,LOB - UR,NM,1st,EN,10.00,\n"
    );

    let summary = normalize_export(
        &content,
        ExportLayout::Text,
        &text_options(),
        &RarityVocabulary::default(),
    );

    assert_eq!(summary.malformed, 1);
    assert_eq!(
        listings(&summary),
        vec!["Blue-Eyes White Dragon (LOB - Ultra Rare)"]
    );
}

#[test]
fn blank_and_short_lines_are_not_malformed() {
    let content = format!(
        "{TEXT_HEADER}\n   \nshort,row\n\
1,Blue-Eyes White Dragon,LOB - UR,NM,1st,EN,10.00,\n"
    );

    let summary = normalize_export(
        &content,
        ExportLayout::Text,
        &text_options(),
        &RarityVocabulary::default(),
    );

    assert_eq!(summary.malformed, 0);
    assert_eq!(summary.cards.len(), 1);
}

#[test]
fn first_row_per_name_wins_without_repeats() {
    let content = format!(
        "{TEXT_HEADER}\
2,Blue-Eyes White Dragon,LOB - UR,NM,1st,EN,10.00,\n\
1,Blue-Eyes White Dragon,SDK - UR,NM,1st,EN,5.00,\n"
    );

    let summary = normalize_export(
        &content,
        ExportLayout::Text,
        &text_options(),
        &RarityVocabulary::default(),
    );

    assert_eq!(
        listings(&summary),
        vec!["Blue-Eyes White Dragon (LOB - Ultra Rare)"]
    );
}

#[test]
fn repeats_expand_by_quantity() {
    let content = format!(
        "{TEXT_HEADER}\
2,Blue-Eyes White Dragon,LOB - UR,NM,1st,EN,10.00,\n\
1,Blue-Eyes White Dragon,SDK - UR,NM,1st,EN,5.00,\n\
x,Dark Magician,SDY - C,NM,1st,EN,1.00,\n"
    );
    let options = ImportOptions {
        allow_repeats: true,
        ..ImportOptions::default()
    };

    let summary = normalize_export(
        &content,
        ExportLayout::Text,
        &options,
        &RarityVocabulary::default(),
    );

    assert_eq!(summary.malformed, 1);
    assert_eq!(
        listings(&summary),
        vec![
            "Blue-Eyes White Dragon (LOB - Ultra Rare)",
            "Blue-Eyes White Dragon (LOB - Ultra Rare)",
            "Blue-Eyes White Dragon (SDK - Ultra Rare)",
        ]
    );
}

#[test]
fn parses_csv_rows_with_quoted_names() {
    let content = "header one\nheader two\n\
1,1,6007213,\"Chaos Emperor, the Dragon of Armageddon\",IOC-EN000,Invasion of Chaos,1st Edition,Secret Rare,ScR,English,Near Mint,1,2,3,2024-01-01,\n\
2,4,89631139,Blue-Eyes White Dragon,LOB-EN001,Legend of Blue Eyes White Dragon,Unlimited,Ultra Rare,UR,English,Played,1,2,3,2024-01-01,\n";

    let summary = normalize_export(
        content,
        ExportLayout::Csv,
        &ImportOptions::default(),
        &RarityVocabulary::default(),
    );

    assert_eq!(summary.malformed, 0);
    assert_eq!(
        summary.sorted_listings(),
        vec![
            "Blue-Eyes White Dragon (LOB - Ultra Rare)",
            "Chaos Emperor, the Dragon of Armageddon (IOC - Secret Rare)",
        ]
    );
}

#[test]
fn csv_row_with_text_column_count_is_malformed() {
    let content = "h\nh\n1,Blue-Eyes White Dragon,LOB - UR,NM,1st,EN,10.00,\n";

    let summary = normalize_export(
        content,
        ExportLayout::Csv,
        &ImportOptions::default(),
        &RarityVocabulary::default(),
    );

    assert_eq!(summary.malformed, 1);
    assert!(summary.cards.is_empty());
}

#[test]
fn header_lines_are_configurable() {
    let content = "1,Blue-Eyes White Dragon,LOB - UR,NM,1st,EN,10.00,\n";
    let options = ImportOptions {
        header_lines: 0,
        ..ImportOptions::default()
    };

    let summary = normalize_export(
        content,
        ExportLayout::Text,
        &options,
        &RarityVocabulary::default(),
    );
    assert_eq!(summary.cards.len(), 1);
}

//! Integration tests for reading export files from disk.

use std::io::Write;
use std::path::Path;

use collection_import::{import_file, ExportLayout, ImportOptions};
use tempfile::NamedTempFile;
use ygo_common::{Error, RarityVocabulary};

fn write_export(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn imports_csv_export_detected_from_extension() {
    let file = write_export(
        "Export\nheaders\n\
1,2,89631139,Blue-Eyes White Dragon,LOB-EN001,Legend of Blue Eyes White Dragon,1st Edition,Ultra Rare,UR,English,Near Mint,1,2,3,2024-01-01,\n\
1,1,46986414,Dark Magician,SDY-006,Starter Deck: Yugi,Unlimited,Ultra Rare,UR,English,Near Mint,1,2,3,2024-01-01,\n",
        ".csv",
    );

    let layout = ExportLayout::from_path(file.path());
    assert_eq!(layout, ExportLayout::Csv);

    let summary = import_file(
        file.path(),
        layout,
        &ImportOptions::default(),
        &RarityVocabulary::default(),
    )
    .unwrap();

    assert_eq!(
        summary.sorted_listings(),
        vec![
            "Blue-Eyes White Dragon (LOB - Ultra Rare)",
            "Dark Magician (SDY - Ultra Rare)",
        ]
    );
}

#[test]
fn imports_text_export_with_repeats() {
    let file = write_export(
        "Export\nheaders\n2,Blue-Eyes White Dragon,LOB - SR,NM,1st,EN,10.00,\n",
        ".txt",
    );
    let options = ImportOptions {
        allow_repeats: true,
        ..ImportOptions::default()
    };

    let summary = import_file(
        file.path(),
        ExportLayout::Text,
        &options,
        &RarityVocabulary::default(),
    )
    .unwrap();

    assert_eq!(
        summary.sorted_listings(),
        vec![
            "Blue-Eyes White Dragon (LOB - Super Rare)",
            "Blue-Eyes White Dragon (LOB - Super Rare)",
        ]
    );
}

#[test]
fn empty_export_imports_nothing() {
    let file = write_export("", ".csv");
    let summary = import_file(
        file.path(),
        ExportLayout::Csv,
        &ImportOptions::default(),
        &RarityVocabulary::default(),
    )
    .unwrap();
    assert!(summary.cards.is_empty());
    assert_eq!(summary.malformed, 0);
}

#[test]
fn missing_file_is_an_io_error() {
    let result = import_file(
        Path::new("/nonexistent/all.csv"),
        ExportLayout::Csv,
        &ImportOptions::default(),
        &RarityVocabulary::default(),
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

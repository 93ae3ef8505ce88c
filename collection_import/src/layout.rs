//! Fixed-column layouts of collection exports.
//!
//! Card names may contain the delimiter, so each layout names how many
//! columns precede the name and how many follow it; the name is whatever lies
//! between. Field accessors are defined against those two groups.

use std::path::Path;

use clap::ValueEnum;
use ygo_common::card::set_prefix;
use ygo_common::{CardIdentifier, Error, RarityVocabulary, Result};

/// No supported layout has fewer columns than this
pub const MIN_FIELDS: usize = 8;

const DELIMITER: &str = ",";

/// Separator between set code and rarity in the text layout's printing column
const PRINTING_SEPARATOR: &str = " - ";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportLayout {
    /// `quantity, name…, printing ("SET - Rarity"), <5 more columns>`
    Text,
    /// `<id>, quantity, <id>, name…, print code, <2 columns>, rarity, <8 more columns>`
    Csv,
}

/// Column positions of one layout
struct Schema {
    /// Columns before the name
    leading: usize,
    /// Columns after the name
    trailing: usize,
    /// Index among the leading columns
    quantity: usize,
    /// Index among the trailing columns
    printing: usize,
    /// Index among the trailing columns; `None` when the printing column
    /// carries the rarity
    rarity: Option<usize>,
    /// Strip `"` from names
    quoted_names: bool,
}

const TEXT_SCHEMA: Schema = Schema {
    leading: 1,
    trailing: 6,
    quantity: 0,
    printing: 0,
    rarity: None,
    quoted_names: false,
};

const CSV_SCHEMA: Schema = Schema {
    leading: 3,
    trailing: 12,
    quantity: 1,
    printing: 0,
    rarity: Some(3),
    quoted_names: true,
};

impl ExportLayout {
    fn schema(&self) -> &'static Schema {
        match self {
            ExportLayout::Text => &TEXT_SCHEMA,
            ExportLayout::Csv => &CSV_SCHEMA,
        }
    }

    /// `.csv` files use the CSV layout, everything else the text layout
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportLayout::Csv,
            _ => ExportLayout::Text,
        }
    }

    /// Fewest columns a row must have: every named column plus one for
    /// the name
    pub fn min_fields(&self) -> usize {
        let schema = self.schema();
        MIN_FIELDS.max(schema.leading + 1 + schema.trailing)
    }

    /// Split a row, rejecting rows with too few columns
    pub fn split<'a>(&self, line: usize, content: &'a str) -> Result<ExportRow<'a>> {
        let fields: Vec<&str> = content.split(DELIMITER).collect();
        if fields.len() < self.min_fields() {
            return Err(Error::MalformedRow {
                line,
                content: content.to_string(),
                reason: format!(
                    "{} fields, expected at least {}",
                    fields.len(),
                    self.min_fields()
                ),
            });
        }
        Ok(ExportRow {
            layout: *self,
            line,
            content,
            fields,
        })
    }
}

/// One row of an export, with named field access
#[derive(Debug)]
pub struct ExportRow<'a> {
    layout: ExportLayout,
    line: usize,
    content: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> ExportRow<'a> {
    fn trailing(&self, index: usize) -> &'a str {
        self.fields[self.fields.len() - self.layout.schema().trailing + index].trim()
    }

    fn malformed(&self, reason: impl Into<String>) -> Error {
        Error::MalformedRow {
            line: self.line,
            content: self.content.to_string(),
            reason: reason.into(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn name(&self) -> String {
        let schema = self.layout.schema();
        let end = self.fields.len() - schema.trailing;
        let name = self.fields[schema.leading..end].join(DELIMITER);
        let name = name.trim();
        if schema.quoted_names {
            name.replace('"', "")
        } else {
            name.to_string()
        }
    }

    pub fn quantity(&self) -> Result<u32> {
        let raw = self.fields[self.layout.schema().quantity].trim();
        raw.parse()
            .map_err(|_| self.malformed(format!("quantity '{raw}' is not a number")))
    }

    /// Printing column: `SET - Rarity` (text) or a print code (CSV)
    pub fn printing(&self) -> &'a str {
        self.trailing(self.layout.schema().printing)
    }

    pub fn set_code(&self) -> Result<String> {
        match self.layout.schema().rarity {
            Some(_) => Ok(set_prefix(self.printing()).to_string()),
            None => self
                .split_printing()
                .map(|(set, _)| set.to_string()),
        }
    }

    /// Raw rarity label as exported (long name or short code)
    pub fn rarity_label(&self) -> Result<&'a str> {
        match self.layout.schema().rarity {
            Some(index) => Ok(self.trailing(index)),
            None => self.split_printing().map(|(_, rarity)| rarity),
        }
    }

    fn split_printing(&self) -> Result<(&'a str, &'a str)> {
        let printing = self.printing();
        printing
            .rfind(PRINTING_SEPARATOR)
            .map(|idx| {
                (
                    printing[..idx].trim(),
                    printing[idx + PRINTING_SEPARATOR.len()..].trim(),
                )
            })
            .ok_or_else(|| self.malformed(format!("printing '{printing}' has no rarity")))
    }

    /// Build the card identifier, expanding short rarity codes.
    ///
    /// A rarity the vocabulary does not know is logged and kept as exported.
    pub fn card(&self, vocabulary: &RarityVocabulary) -> Result<CardIdentifier> {
        let name = self.name();
        if name.is_empty() {
            return Err(self.malformed("empty card name"));
        }
        let set_code = self.set_code()?;
        if set_code.is_empty() {
            return Err(self.malformed("empty set code"));
        }

        let label = self.rarity_label()?;
        let rarity = match vocabulary.normalize(label) {
            Ok(rarity) => rarity.to_string(),
            Err(e) => {
                log::error!("Line {}: {}", self.line, e);
                label.to_string()
            }
        };

        Ok(CardIdentifier::new(name, set_code, rarity))
    }
}

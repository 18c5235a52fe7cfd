//! Domain types for the dictionary API.
//!
//! # Design
//! The response tree mirrors the upstream JSON one-to-one, with serde renames
//! from the API's abbreviated keys (`def`, `tr`, `pos`, `ts`, ...) to
//! descriptive field names. Every sequence and string leaf defaults to empty
//! because the service omits them freely depending on the language pair.

use serde::{Deserialize, Serialize};

/// Request family-related words in the results.
pub const FLAG_FAMILY: u32 = 0x0001;
/// Search by word form (morphology).
pub const FLAG_MORPHO: u32 = 0x0004;
/// Restrict results to the part of speech of the searched word.
pub const FLAG_POS_FILTER: u32 = 0x0008;

/// Parameters of a single lookup call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Source and target language, e.g. `"en-ru"`.
    pub lang: String,
    pub text: String,
    #[serde(default)]
    pub family: bool,
    #[serde(default)]
    pub morpho: bool,
    #[serde(default)]
    pub pos_filter: bool,
}

impl LookupRequest {
    pub fn new(lang: &str, text: &str) -> Self {
        Self {
            lang: lang.to_string(),
            text: text.to_string(),
            family: false,
            morpho: false,
            pos_filter: false,
        }
    }

    pub fn family(mut self, on: bool) -> Self {
        self.family = on;
        self
    }

    pub fn morpho(mut self, on: bool) -> Self {
        self.morpho = on;
        self
    }

    pub fn pos_filter(mut self, on: bool) -> Self {
        self.pos_filter = on;
        self
    }

    /// Bitmask sent as the `flags` form field. Bit `0x0002` is never set.
    pub fn flags_mask(&self) -> u32 {
        let mut mask = 0;
        if self.family {
            mask |= FLAG_FAMILY;
        }
        if self.morpho {
            mask |= FLAG_MORPHO;
        }
        if self.pos_filter {
            mask |= FLAG_POS_FILTER;
        }
        mask
    }
}

/// Root of a lookup response. `code` is zero on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "def", default)]
    pub definitions: Vec<Definition>,
}

impl LookupResult {
    /// The first translation of the first definition, if any.
    pub fn first_translation(&self) -> Option<&Translation> {
        self.definitions.first()?.translations.first()
    }
}

/// A dictionary entry for the looked-up word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "pos", default)]
    pub part_of_speech: String,
    #[serde(rename = "ts", default)]
    pub transcription: String,
    #[serde(rename = "tr", default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "pos", default)]
    pub part_of_speech: String,
    #[serde(rename = "ts", default)]
    pub transcription: String,
    #[serde(rename = "syn", default)]
    pub synonyms: Vec<TextNote>,
    #[serde(rename = "mean", default)]
    pub meanings: Vec<TextNote>,
    #[serde(rename = "ex", default)]
    pub examples: Vec<Example>,
}

/// A usage example together with its translations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "tr", default)]
    pub translations: Vec<TextNote>,
}

/// Leaf node holding a single piece of text (synonym, meaning, example translation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNote {
    #[serde(default)]
    pub text: String,
}

/// Supported language pairs in the order the service returns them.
pub type LanguagePairList = Vec<String>;

//! # Deck Loader
//!
//! Reads a deck asset (a JSON array of cards) by name.
//!
//! Lookup order for asset `name`:
//!
//! 1. `<root>/<name>.json` on disk
//! 2. the assets compiled into the binary (only `Phonetic` ships)
//!
//! [`AssetBundle::load`] is fail-silent: any failure becomes an empty deck,
//! which the UI shows as a finished session. [`AssetBundle::try_load`] is
//! the same lookup with the error kept, for callers that want to report it.

use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::core::card::Card;

pub const ASSET_EXTENSION: &str = "json";
pub const DEFAULT_DECK: &str = "Phonetic";
pub const DEFAULT_ASSET_DIR: &str = "assets";

const EMBEDDED_ASSETS: &[(&str, &str)] =
    &[("Phonetic", include_str!("../../assets/Phonetic.json"))];

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum LoadError {
    NotFound(String),
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(name) => write!(f, "deck asset not found: {name}"),
            LoadError::Io(e) => write!(f, "deck I/O error: {e}"),
            LoadError::Parse(e) => write!(f, "deck parse error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

// ============================================================================
// Bundle
// ============================================================================

/// Where deck assets are looked up.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    root: PathBuf,
    embedded: bool,
}

impl Default for AssetBundle {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_DIR)
    }
}

impl AssetBundle {
    /// Disk directory first, compiled-in assets as fallback.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            embedded: true,
        }
    }

    /// Disk directory only.
    pub fn disk_only(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            embedded: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a deck, returning an empty list on any failure.
    pub fn load(&self, name: &str) -> Vec<Card> {
        match self.try_load(name) {
            Ok(cards) => cards,
            Err(e) => {
                warn!("Falling back to an empty deck: {}", e);
                Vec::new()
            }
        }
    }

    /// Load a deck, keeping the reason for failure.
    pub fn try_load(&self, name: &str) -> Result<Vec<Card>, LoadError> {
        let contents = self.read(name)?;
        let cards = parse_cards(&contents)?;
        for card in cards.iter().filter(|c| !c.is_well_paired()) {
            warn!(
                "Card {} has {} examples but {} markers; extra entries are not shown",
                card.phonetic,
                card.examples.len(),
                card.marked_letters.len()
            );
        }
        info!("Loaded {} cards from asset {}", cards.len(), name);
        Ok(cards)
    }

    fn read(&self, name: &str) -> Result<String, LoadError> {
        if !is_plain_name(name) {
            return Err(LoadError::NotFound(name.to_string()));
        }

        let path = self.root.join(format!("{name}.{ASSET_EXTENSION}"));
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!("Read deck asset from {}", path.display());
                return Ok(contents);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(LoadError::Io(e)),
        }

        if self.embedded {
            if let Some((_, contents)) = EMBEDDED_ASSETS.iter().find(|(n, _)| *n == name) {
                debug!("Using embedded deck asset {}", name);
                return Ok((*contents).to_string());
            }
        }
        Err(LoadError::NotFound(name.to_string()))
    }
}

// ============================================================================
// Deck Check
// ============================================================================

/// A card whose examples and markers differ in length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub phonetic: String,
    pub examples: usize,
    pub markers: usize,
}

/// Outcome of validating one deck asset.
#[derive(Debug)]
pub struct CheckReport {
    pub deck: String,
    pub result: Result<CheckSummary, LoadError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub cards: usize,
    pub mismatched: Vec<Mismatch>,
}

impl CheckReport {
    /// Strictly load `name` from `bundle` and collect mismatched cards.
    pub fn run(bundle: &AssetBundle, name: &str) -> Self {
        let result = bundle.try_load(name).map(|cards| CheckSummary {
            cards: cards.len(),
            mismatched: cards
                .iter()
                .filter(|c| !c.is_well_paired())
                .map(|c| Mismatch {
                    phonetic: c.phonetic.clone(),
                    examples: c.examples.len(),
                    markers: c.marked_letters.len(),
                })
                .collect(),
        });
        Self {
            deck: name.to_string(),
            result,
        }
    }

    /// The deck loaded and every card is well paired.
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(summary) if summary.mismatched.is_empty())
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(summary) => {
                write!(f, "{}: {} cards", self.deck, summary.cards)?;
                for m in &summary.mismatched {
                    write!(
                        f,
                        "\n  {}: {} examples, {} markers",
                        m.phonetic, m.examples, m.markers
                    )?;
                }
                Ok(())
            }
            Err(e) => write!(f, "{}: {e}", self.deck),
        }
    }
}

/// Load a deck through the default bundle (`./assets`, then embedded).
pub fn load(asset_name: &str) -> Vec<Card> {
    AssetBundle::default().load(asset_name)
}

/// Parse a JSON array of cards. One bad record fails the whole array.
pub fn parse_cards(contents: &str) -> Result<Vec<Card>, LoadError> {
    serde_json::from_str(contents).map_err(LoadError::Parse)
}

/// Asset names are single path components: no separators, no `..`.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

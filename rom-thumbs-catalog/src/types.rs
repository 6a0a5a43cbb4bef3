use serde::{Deserialize, Serialize};

use rom_thumbs_core::ConsoleId;

/// Thumbnail art categories provided by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThumbnailKind {
    /// In-game snapshot, aka gameplay screenshot
    Snapshot,
    /// Scan of the game's box or cover
    Boxart,
    /// The game's introductory title screen
    TitleScreen,
}

/// All kind variants in priority-default order.
const ALL_KINDS: &[ThumbnailKind] = &[
    ThumbnailKind::Snapshot,
    ThumbnailKind::Boxart,
    ThumbnailKind::TitleScreen,
];

impl ThumbnailKind {
    /// User-facing name used for CLI arguments and settings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::Boxart => "boxart",
            Self::TitleScreen => "title_screen",
        }
    }

    /// Marker value identifying this kind in catalog CSV rows.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Snapshot => "Named_Snaps",
            Self::Boxart => "Named_Boxarts",
            Self::TitleScreen => "Named_Titles",
        }
    }

    /// Parse a CSV marker value. Unknown markers return `None`; the loader
    /// drops those rows rather than treating them as errors, so the catalog
    /// stays tolerant of novel entry types.
    pub fn from_marker(marker: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|k| k.marker() == marker)
    }

    /// All three kind variants.
    pub fn all() -> &'static [ThumbnailKind] {
        ALL_KINDS
    }
}

impl std::fmt::Display for ThumbnailKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string cannot be parsed into a `ThumbnailKind`.
#[derive(Debug, Clone)]
pub struct KindParseError(pub String);

impl std::fmt::Display for KindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid thumbnail type '{}' (valid types: snapshot, boxart, title_screen)",
            self.0
        )
    }
}

impl std::error::Error for KindParseError {}

impl std::str::FromStr for ThumbnailKind {
    type Err = KindParseError;

    /// Parse a kind from its user-facing name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.name() == lower)
            .ok_or_else(|| KindParseError(s.to_string()))
    }
}

/// One row of the thumbnail catalog, immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Console this thumbnail belongs to (from the data file's stem)
    pub console: ConsoleId,
    /// Art category parsed from the row's marker column
    pub kind: ThumbnailKind,
    /// Game title exactly as it appears in the catalog
    pub raw_title: String,
    /// Region tag from the title's last parenthesized group, if any
    pub region: Option<String>,
    /// Download URL for the thumbnail image
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_round_trip() {
        for &kind in ThumbnailKind::all() {
            assert_eq!(ThumbnailKind::from_marker(kind.marker()), Some(kind));
        }
    }

    #[test]
    fn names_round_trip() {
        for &kind in ThumbnailKind::all() {
            let parsed: ThumbnailKind = kind.name().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn name_parsing_is_case_insensitive() {
        let parsed: ThumbnailKind = "Boxart".parse().unwrap();
        assert_eq!(parsed, ThumbnailKind::Boxart);
        let parsed: ThumbnailKind = "TITLE_SCREEN".parse().unwrap();
        assert_eq!(parsed, ThumbnailKind::TitleScreen);
    }

    #[test]
    fn unknown_marker_returns_none() {
        assert_eq!(ThumbnailKind::from_marker("Named_Logos"), None);
    }

    #[test]
    fn unknown_name_returns_err() {
        let result: Result<ThumbnailKind, _> = "screenshot".parse();
        assert!(result.is_err());
    }
}

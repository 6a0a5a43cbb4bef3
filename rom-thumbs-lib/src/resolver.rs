use std::collections::HashSet;

use rom_thumbs_catalog::{CatalogIndex, CatalogRecord, ThumbnailKind};
use rom_thumbs_core::ConsoleId;

use crate::inventory::RomEntry;

/// Two-level candidate preference: thumbnail kind first, then region.
///
/// Kind is a hard priority tier — the first kind in the order with any
/// candidates wins and later kinds are never considered for that ROM.
/// Region preference then picks among that kind's same-title variants.
#[derive(Debug, Clone)]
pub struct Preferences {
    thumbnail_order: Vec<ThumbnailKind>,
    region_order: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            thumbnail_order: vec![
                ThumbnailKind::Snapshot,
                ThumbnailKind::Boxart,
                ThumbnailKind::TitleScreen,
            ],
            region_order: vec!["usa".into(), "europe".into(), "world".into()],
        }
    }
}

impl Preferences {
    /// Build preferences from user-supplied orders. Duplicates are removed
    /// preserving first occurrence, regions are lowercased for
    /// case-insensitive matching, and an empty list falls back to the
    /// corresponding default order.
    pub fn new(thumbnail_order: Vec<ThumbnailKind>, region_order: Vec<String>) -> Self {
        let defaults = Self::default();

        let mut kinds = Vec::new();
        for kind in thumbnail_order {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        if kinds.is_empty() {
            kinds = defaults.thumbnail_order;
        }

        let mut regions = Vec::new();
        for region in region_order {
            let region = region.trim().to_lowercase();
            if !region.is_empty() && !regions.contains(&region) {
                regions.push(region);
            }
        }
        if regions.is_empty() {
            regions = defaults.region_order;
        }

        Self {
            thumbnail_order: kinds,
            region_order: regions,
        }
    }

    pub fn thumbnail_order(&self) -> &[ThumbnailKind] {
        &self.thumbnail_order
    }

    pub fn region_order(&self) -> &[String] {
        &self.region_order
    }
}

/// A ROM joined to the single catalog candidate chosen for it.
#[derive(Debug, Clone)]
pub struct ResolvedMatch {
    pub rom: RomEntry,
    pub chosen: CatalogRecord,
}

/// Join the inventory against the catalog and select one candidate per ROM.
///
/// Pure function of its inputs: the same catalog, inventory, and
/// preferences always yield the same matches in the same order (inventory
/// order). ROMs whose key is absent from the catalog yield no match and no
/// error; a console with no catalog data at all is warned about once.
pub fn resolve_matches(
    catalog: &CatalogIndex,
    inventory: &[RomEntry],
    prefs: &Preferences,
) -> Vec<ResolvedMatch> {
    let mut missing_consoles: HashSet<ConsoleId> = HashSet::new();
    let mut matches = Vec::new();

    for rom in inventory {
        if !catalog.has_console(&rom.console) {
            if missing_consoles.insert(rom.console.clone()) {
                log::warn!(
                    "Console '{}' not found in catalog data; skipping its ROMs",
                    rom.console
                );
            }
            continue;
        }

        if let Some(chosen) = select_candidate(catalog, rom, prefs) {
            matches.push(ResolvedMatch {
                rom: rom.clone(),
                chosen: chosen.clone(),
            });
        }
    }

    matches
}

/// Pick the candidate for one ROM: first kind in the order with a non-empty
/// candidate list, then region preference within that kind.
fn select_candidate<'a>(
    catalog: &'a CatalogIndex,
    rom: &RomEntry,
    prefs: &Preferences,
) -> Option<&'a CatalogRecord> {
    for &kind in prefs.thumbnail_order() {
        let candidates = catalog.candidates(&rom.console, kind, &rom.title);
        if !candidates.is_empty() {
            return Some(pick_by_region(candidates, prefs.region_order()));
        }
    }
    None
}

/// First candidate whose region contains a preferred region entry
/// (case-insensitive), scanning preferences in priority order. Falls back
/// to the first candidate in catalog order so an unmatched region still
/// yields a result.
fn pick_by_region<'a>(candidates: &'a [CatalogRecord], region_order: &[String]) -> &'a CatalogRecord {
    for preferred in region_order {
        for candidate in candidates {
            if let Some(region) = &candidate.region {
                if region.to_lowercase().contains(preferred.as_str()) {
                    return candidate;
                }
            }
        }
    }
    &candidates[0]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rom_thumbs_core::CanonicalTitle;

    use super::*;

    fn genesis() -> ConsoleId {
        ConsoleId::resolve("genesis")
    }

    fn rom(title: &str) -> RomEntry {
        RomEntry {
            console: genesis(),
            title: CanonicalTitle::from_title(title),
            path: PathBuf::from(format!("/roms/genesis/{title} (USA).bin")),
        }
    }

    fn catalog_with(rows: &[(ThumbnailKind, &str, &str)]) -> CatalogIndex {
        // Titles are quoted since region tags may contain commas
        let csv: String = rows
            .iter()
            .map(|(kind, title, url)| format!("{},\"{}\",{}\n", kind.marker(), title, url))
            .collect();
        let mut index = CatalogIndex::new();
        index.index_console(genesis(), &csv);
        index
    }

    #[test]
    fn region_selection_precedence() {
        // USA wins under the default order regardless of input order
        let catalog = catalog_with(&[
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (Japan)", "http://t/jp.png"),
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (Europe)", "http://t/eu.png"),
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (USA)", "http://t/us.png"),
        ]);

        let matches = resolve_matches(
            &catalog,
            &[rom("Sonic the Hedgehog")],
            &Preferences::default(),
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].chosen.url, "http://t/us.png");
    }

    #[test]
    fn region_fallback_keeps_first_encountered() {
        let catalog = catalog_with(&[
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (Japan)", "http://t/jp.png"),
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (Brazil)", "http://t/br.png"),
        ]);

        let prefs = Preferences::new(vec![], vec!["usa".into(), "europe".into()]);
        let matches = resolve_matches(&catalog, &[rom("Sonic the Hedgehog")], &prefs);
        assert_eq!(matches[0].chosen.url, "http://t/jp.png");
    }

    #[test]
    fn multi_region_token_matches_by_containment() {
        let catalog = catalog_with(&[
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (Japan)", "http://t/jp.png"),
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (USA, Europe)", "http://t/us-eu.png"),
        ]);

        let matches = resolve_matches(
            &catalog,
            &[rom("Sonic the Hedgehog")],
            &Preferences::default(),
        );
        assert_eq!(matches[0].chosen.url, "http://t/us-eu.png");
    }

    #[test]
    fn kind_priority_isolation() {
        // Only snapshots exist; an order preferring boxart still returns a
        // snapshot rather than blending kinds
        let catalog = catalog_with(&[(
            ThumbnailKind::Snapshot,
            "Sonic the Hedgehog (USA)",
            "http://t/snap.png",
        )]);

        let prefs = Preferences::new(
            vec![ThumbnailKind::Boxart, ThumbnailKind::Snapshot],
            vec![],
        );
        let matches = resolve_matches(&catalog, &[rom("Sonic the Hedgehog")], &prefs);
        assert_eq!(matches[0].chosen.kind, ThumbnailKind::Snapshot);
    }

    #[test]
    fn first_kind_with_candidates_is_a_hard_tier() {
        let catalog = catalog_with(&[
            (ThumbnailKind::Snapshot, "Sonic the Hedgehog (Japan)", "http://t/snap-jp.png"),
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (USA)", "http://t/box-us.png"),
        ]);

        // Snapshot tier wins even though boxart has the preferred region
        let matches = resolve_matches(
            &catalog,
            &[rom("Sonic the Hedgehog")],
            &Preferences::default(),
        );
        assert_eq!(matches[0].chosen.url, "http://t/snap-jp.png");
    }

    #[test]
    fn unmatched_key_yields_no_match() {
        let catalog = catalog_with(&[(
            ThumbnailKind::Boxart,
            "Sonic the Hedgehog (USA)",
            "http://t/us.png",
        )]);

        let matches = resolve_matches(
            &catalog,
            &[rom("Streets of Rage")],
            &Preferences::default(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn missing_console_yields_no_match() {
        let catalog = catalog_with(&[(
            ThumbnailKind::Boxart,
            "Sonic the Hedgehog (USA)",
            "http://t/us.png",
        )]);

        let snes_rom = RomEntry {
            console: ConsoleId::resolve("snes"),
            title: CanonicalTitle::from_title("Super Metroid"),
            path: PathBuf::from("/roms/snes/Super Metroid (USA).sfc"),
        };
        let matches = resolve_matches(&catalog, &[snes_rom], &Preferences::default());
        assert!(matches.is_empty());
    }

    #[test]
    fn output_follows_inventory_order() {
        let catalog = catalog_with(&[
            (ThumbnailKind::Boxart, "Streets of Rage (USA)", "http://t/sor.png"),
            (ThumbnailKind::Boxart, "Sonic the Hedgehog (USA)", "http://t/sonic.png"),
        ]);

        let inventory = [rom("Sonic the Hedgehog"), rom("Streets of Rage")];
        let matches = resolve_matches(&catalog, &inventory, &Preferences::default());
        let urls: Vec<&str> = matches.iter().map(|m| m.chosen.url.as_str()).collect();
        assert_eq!(urls, vec!["http://t/sonic.png", "http://t/sor.png"]);
    }

    #[test]
    fn preferences_dedup_preserving_order() {
        let prefs = Preferences::new(
            vec![
                ThumbnailKind::Boxart,
                ThumbnailKind::Snapshot,
                ThumbnailKind::Boxart,
            ],
            vec!["Japan".into(), "usa".into(), "JAPAN".into()],
        );
        assert_eq!(
            prefs.thumbnail_order(),
            &[ThumbnailKind::Boxart, ThumbnailKind::Snapshot]
        );
        assert_eq!(prefs.region_order(), &["japan".to_string(), "usa".to_string()]);
    }

    #[test]
    fn empty_preference_lists_fall_back_to_defaults() {
        let prefs = Preferences::new(vec![], vec!["  ".into()]);
        assert_eq!(
            prefs.thumbnail_order(),
            Preferences::default().thumbnail_order()
        );
        assert_eq!(prefs.region_order(), Preferences::default().region_order());
    }
}

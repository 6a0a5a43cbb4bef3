use serde::{Deserialize, Serialize};

/// Canonical console identifier as used by the thumbnail catalog.
///
/// This centralizes console identity in one place, replacing ad-hoc string
/// matching throughout the codebase. Folder names found on disk resolve to
/// the catalog's naming scheme (e.g., `genesis` →
/// `Sega_-_Mega_Drive_-_Genesis`); names with no table entry pass through
/// unchanged so a catalog that already uses the on-disk name still matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsoleId(String);

/// Folder name → catalog console identifier.
///
/// Sorted by folder name; lookup is a binary search on the exact name as it
/// appears on disk (case-sensitive).
const CONSOLE_TABLE: &[(&str, &str)] = &[
    ("3do", "The_3DO_Company_-_3DO"),
    ("amiga", "Commodore_-_Amiga"),
    ("amiga1200", "Commodore_-_Amiga"),
    ("amiga600", "Commodore_-_Amiga"),
    ("amigacd32", "Commodore_-_CD32"),
    ("amstradcpc", "Amstrad_-_CPC"),
    ("arcade", "MAME"),
    ("arcadia", "Emerson_-_Arcadia_2001"),
    ("arduboy", "Arduboy_Inc_-_Arduboy"),
    ("atari2600", "Atari_-_2600"),
    ("atari5200", "Atari_-_5200"),
    ("atari7800", "Atari_-_7800"),
    ("atari800", "Atari_-_8-bit"),
    ("atarijaguar", "Atari_-_Jaguar"),
    ("atarilynx", "Atari_-_Lynx"),
    ("atarist", "Atari_-_ST"),
    ("atarixe", "Atari_-_8-bit"),
    ("atomiswave", "Atomiswave"),
    ("c64", "Commodore_-_64"),
    ("cdtv", "Commodore_-_CDTV"),
    ("channelf", "Fairchild_-_Channel_F"),
    ("colecovision", "Coleco_-_ColecoVision"),
    ("cps", "FBNeo_-_Arcade_Games"),
    ("cps1", "FBNeo_-_Arcade_Games"),
    ("cps2", "FBNeo_-_Arcade_Games"),
    ("cps3", "FBNeo_-_Arcade_Games"),
    ("dreamcast", "Sega_-_Dreamcast"),
    ("famicom", "Nintendo_-_Nintendo_Entertainment_System"),
    ("fba", "FBNeo_-_Arcade_Games"),
    ("fbneo", "FBNeo_-_Arcade_Games"),
    ("fds", "Nintendo_-_Family_Computer_Disk_System"),
    ("gamegear", "Sega_-_Game_Gear"),
    ("gb", "Nintendo_-_Game_Boy"),
    ("gba", "Nintendo_-_Game_Boy_Advance"),
    ("gbc", "Nintendo_-_Game_Boy_Color"),
    ("gc", "Nintendo_-_GameCube"),
    ("genesis", "Sega_-_Mega_Drive_-_Genesis"),
    ("gx4000", "Amstrad_-_GX4000"),
    ("intellivision", "Mattel_-_Intellivision"),
    ("mame", "MAME"),
    ("mark3", "Sega_-_Master_System_-_Mark_III"),
    ("mastersystem", "Sega_-_Master_System_-_Mark_III"),
    ("megacd", "Sega_-_Mega-CD_-_Sega_CD"),
    ("megacdjp", "Sega_-_Mega-CD_-_Sega_CD"),
    ("megadrive", "Sega_-_Mega_Drive_-_Genesis"),
    ("megadrivejp", "Sega_-_Mega_Drive_-_Genesis"),
    ("msx", "Microsoft_-_MSX"),
    ("msx1", "Microsoft_-_MSX"),
    ("msx2", "Microsoft_-_MSX2"),
    ("n3ds", "Nintendo_-_Nintendo_3DS"),
    ("n64", "Nintendo_-_Nintendo_64"),
    ("n64dd", "Nintendo_-_Nintendo_64DD"),
    ("naomi", "Sega_-_Naomi"),
    ("naomi2", "Sega_-_Naomi_2"),
    ("naomigd", "Sega_-_Naomi"),
    ("nds", "Nintendo_-_Nintendo_DS"),
    ("neogeo", "SNK_-_Neo_Geo"),
    ("neogeocd", "SNK_-_Neo_Geo_CD"),
    ("neogeocdjp", "SNK_-_Neo_Geo_CD"),
    ("nes", "Nintendo_-_Nintendo_Entertainment_System"),
    ("ngp", "SNK_-_Neo_Geo_Pocket"),
    ("ngpc", "SNK_-_Neo_Geo_Pocket_Color"),
    ("odyssey2", "Magnavox_-_Odyssey2"),
    ("pc88", "NEC_-_PC-8001_-_PC-8801"),
    ("pc98", "NEC_-_PC-98"),
    ("pcengine", "NEC_-_PC_Engine_-_TurboGrafx_16"),
    ("pcenginecd", "NEC_-_PC_Engine_CD_-_TurboGrafx-CD"),
    ("pcfx", "NEC_-_PC-FX"),
    ("plus4", "Commodore_-_Plus-4"),
    ("pokemini", "Nintendo_-_Pokemon_Mini"),
    ("ps2", "Sony_-_PlayStation_2"),
    ("ps3", "Sony_-_PlayStation_3"),
    ("ps4", "Sony_-_PlayStation_4"),
    ("psp", "Sony_-_PlayStation_Portable"),
    ("psvita", "Sony_-_PlayStation_Vita"),
    ("psx", "Sony_-_PlayStation"),
    ("pv1000", "Casio_-_PV-1000"),
    ("satellaview", "Nintendo_-_Satellaview"),
    ("saturn", "Sega_-_Saturn"),
    ("saturnjp", "Sega_-_Saturn"),
    ("scummvm", "ScummVM"),
    ("scv", "Epoch_-_Super_Cassette_Vision"),
    ("sega32x", "Sega_-_32X"),
    ("sega32xjp", "Sega_-_32X"),
    ("sega32xna", "Sega_-_32X"),
    ("segacd", "Sega_-_Mega-CD_-_Sega_CD"),
    ("sfc", "Nintendo_-_Super_Nintendo_Entertainment_System"),
    ("sg-1000", "Sega_-_SG-1000"),
    ("snes", "Nintendo_-_Super_Nintendo_Entertainment_System"),
    ("snesna", "Nintendo_-_Super_Nintendo_Entertainment_System"),
    ("sufami", "Nintendo_-_Sufami_Turbo"),
    ("supergrafx", "NEC_-_PC_Engine_SuperGrafx"),
    ("supracan", "Funtech_-_Super_Acan"),
    ("tg-cd", "NEC_-_PC_Engine_CD_-_TurboGrafx-CD"),
    ("tg16", "NEC_-_PC_Engine_-_TurboGrafx_16"),
    ("vectrex", "GCE_-_Vectrex"),
    ("vic20", "Commodore_-_VIC-20"),
    ("videopac", "Philips_-_Videopac"),
    ("virtualboy", "Nintendo_-_Virtual_Boy"),
    ("wii", "Nintendo_-_Wii"),
    ("wiiu", "Nintendo_-_Wii_U"),
    ("wonderswan", "Bandai_-_WonderSwan"),
    ("wonderswancolor", "Bandai_-_WonderSwan_Color"),
    ("x1", "Sharp_-_X1"),
    ("x68000", "Sharp_-_X68000"),
    ("xbox", "Microsoft_-_Xbox"),
    ("xbox360", "Microsoft_-_Xbox_360"),
    ("zx81", "Sinclair_-_ZX_81"),
    ("zxspectrum", "Sinclair_-_ZX_Spectrum"),
];

impl ConsoleId {
    /// Resolve a console folder name to its catalog identifier.
    ///
    /// Unmapped names pass through unchanged, so folders for consoles the
    /// table doesn't know about still get a best-effort match against a
    /// catalog that may use that exact name.
    pub fn resolve(folder_name: &str) -> Self {
        match CONSOLE_TABLE.binary_search_by_key(&folder_name, |&(folder, _)| folder) {
            Ok(i) => ConsoleId(CONSOLE_TABLE[i].1.to_string()),
            Err(_) => ConsoleId(folder_name.to_string()),
        }
    }

    /// True if the folder name has a table entry (resolution was not a
    /// pass-through).
    pub fn is_mapped(folder_name: &str) -> bool {
        CONSOLE_TABLE
            .binary_search_by_key(&folder_name, |&(folder, _)| folder)
            .is_ok()
    }

    /// Construct directly from a catalog identifier (e.g., a data file stem).
    pub fn from_catalog_name(name: impl Into<String>) -> Self {
        ConsoleId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConsoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_folder_name() {
        for pair in CONSOLE_TABLE.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "table out of order: '{}' before '{}'",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn known_folders_resolve() {
        let cases = [
            ("genesis", "Sega_-_Mega_Drive_-_Genesis"),
            ("megadrive", "Sega_-_Mega_Drive_-_Genesis"),
            ("snes", "Nintendo_-_Super_Nintendo_Entertainment_System"),
            ("nes", "Nintendo_-_Nintendo_Entertainment_System"),
            ("psx", "Sony_-_PlayStation"),
            ("tg-cd", "NEC_-_PC_Engine_CD_-_TurboGrafx-CD"),
            ("3do", "The_3DO_Company_-_3DO"),
            ("zxspectrum", "Sinclair_-_ZX_Spectrum"),
        ];
        for (folder, expected) in cases {
            assert_eq!(
                ConsoleId::resolve(folder).as_str(),
                expected,
                "folder '{}' should resolve to '{}'",
                folder,
                expected
            );
        }
    }

    #[test]
    fn unmapped_folder_passes_through() {
        assert_eq!(ConsoleId::resolve("commodore16").as_str(), "commodore16");
        assert!(!ConsoleId::is_mapped("commodore16"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // Folder names are matched exactly as they appear on disk
        assert_eq!(ConsoleId::resolve("Genesis").as_str(), "Genesis");
        assert_eq!(
            ConsoleId::resolve("genesis").as_str(),
            "Sega_-_Mega_Drive_-_Genesis"
        );
    }

    #[test]
    fn catalog_name_round_trips() {
        let id = ConsoleId::from_catalog_name("Sega_-_Saturn");
        assert_eq!(id, ConsoleId::resolve("saturn"));
    }
}

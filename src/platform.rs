use crate::error::ScoutError;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Platforms the catalog search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    // Mobile
    IOS,
    // Sega
    Dreamcast,
    // Sony
    PS,
    PS2,
    PS3,
    PS4,
    PSP,
    PSVita,
    // Nintendo
    GameCube,
    GBA,
    N64,
    N3DS,
    NDS,
    Switch,
    Wii,
    WiiU,
    // Microsoft
    PC,
    Xbox,
    Xbox360,
    XboxOne,
}

static PLATFORM_NAMES: Lazy<HashMap<&'static str, Platform>> = Lazy::new(|| {
    HashMap::from([
        ("ios", Platform::IOS),
        ("iphone", Platform::IOS),
        ("dreamcast", Platform::Dreamcast),
        ("dc", Platform::Dreamcast),
        ("ps", Platform::PS),
        ("ps1", Platform::PS),
        ("playstation", Platform::PS),
        ("ps2", Platform::PS2),
        ("playstation 2", Platform::PS2),
        ("ps3", Platform::PS3),
        ("playstation 3", Platform::PS3),
        ("ps4", Platform::PS4),
        ("playstation 4", Platform::PS4),
        ("psp", Platform::PSP),
        ("playstation portable", Platform::PSP),
        ("vita", Platform::PSVita),
        ("ps vita", Platform::PSVita),
        ("psvita", Platform::PSVita),
        ("playstation vita", Platform::PSVita),
        ("gamecube", Platform::GameCube),
        ("gc", Platform::GameCube),
        ("gba", Platform::GBA),
        ("game boy advance", Platform::GBA),
        ("gameboy advance", Platform::GBA),
        ("n64", Platform::N64),
        ("nintendo 64", Platform::N64),
        ("3ds", Platform::N3DS),
        ("n3ds", Platform::N3DS),
        ("nintendo 3ds", Platform::N3DS),
        ("ds", Platform::NDS),
        ("nds", Platform::NDS),
        ("nintendo ds", Platform::NDS),
        ("switch", Platform::Switch),
        ("nintendo switch", Platform::Switch),
        ("wii", Platform::Wii),
        ("wii u", Platform::WiiU),
        ("wiiu", Platform::WiiU),
        ("pc", Platform::PC),
        ("xbox", Platform::Xbox),
        ("xbox 360", Platform::Xbox360),
        ("xbox360", Platform::Xbox360),
        ("xbox one", Platform::XboxOne),
        ("xboxone", Platform::XboxOne),
    ])
});

impl Platform {
    /// Numeric code the catalog uses in the `plats[...]` search parameter.
    pub fn code(self) -> &'static str {
        match self {
            Platform::IOS => "9",
            Platform::Dreamcast => "15",
            Platform::PS => "10",
            Platform::PS2 => "6",
            Platform::PS3 => "1",
            Platform::PS4 => "72496",
            Platform::PSP => "7",
            Platform::PSVita => "67365",
            Platform::GameCube => "13",
            Platform::GBA => "11",
            Platform::N64 => "14",
            Platform::N3DS => "16",
            Platform::NDS => "4",
            Platform::Switch => "268409",
            Platform::Wii => "8",
            Platform::WiiU => "68410",
            Platform::PC => "3",
            Platform::Xbox => "12",
            Platform::Xbox360 => "2",
            Platform::XboxOne => "80000",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::IOS => "Apple iOS",
            Platform::Dreamcast => "Dreamcast",
            Platform::PS => "PlayStation",
            Platform::PS2 => "PlayStation 2",
            Platform::PS3 => "PlayStation 3",
            Platform::PS4 => "PlayStation 4",
            Platform::PSP => "PlayStation Portable",
            Platform::PSVita => "PlayStation Vita",
            Platform::GameCube => "GameCube",
            Platform::GBA => "Game Boy Advance",
            Platform::N64 => "Nintendo 64",
            Platform::N3DS => "Nintendo 3DS",
            Platform::NDS => "Nintendo DS",
            Platform::Switch => "Nintendo Switch",
            Platform::Wii => "Nintendo Wii",
            Platform::WiiU => "Nintendo Wii U",
            Platform::PC => "PC",
            Platform::Xbox => "Xbox",
            Platform::Xbox360 => "Xbox 360",
            Platform::XboxOne => "Xbox One",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase().replace(['-', '_'], " ");
        PLATFORM_NAMES.get(key.as_str()).copied()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ScoutError::Config(format!("Unknown platform '{s}'")))
    }
}

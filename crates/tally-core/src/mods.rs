use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

/// Gameplay modifier, identified by its bit index in the stored mask
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum GameMod {
    #[strum(serialize = "NF")]
    NoFail = 0,
    #[strum(serialize = "EZ")]
    Easy = 1,
    #[strum(serialize = "TD")]
    TouchDevice = 2,
    #[strum(serialize = "HD")]
    Hidden = 3,
    #[strum(serialize = "HR")]
    HardRock = 4,
    #[strum(serialize = "SD")]
    SuddenDeath = 5,
    #[strum(serialize = "DT")]
    DoubleTime = 6,
    #[strum(serialize = "RX")]
    Relax = 7,
    #[strum(serialize = "HT")]
    HalfTime = 8,
    #[strum(serialize = "NC")]
    Nightcore = 9,
    #[strum(serialize = "FL")]
    Flashlight = 10,
    #[strum(serialize = "AT")]
    Autoplay = 11,
    #[strum(serialize = "SO")]
    SpunOut = 12,
    #[strum(serialize = "AP")]
    Autopilot = 13,
    #[strum(serialize = "PF")]
    Perfect = 14,
}

impl GameMod {
    pub fn bit(&self) -> u32 {
        1 << (*self as u8)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    pub fn is_set(&self, mask: u32) -> bool {
        mask & self.bit() != 0
    }

    /// Mods present in `mask`, in bit order. Unknown bits are ignored.
    pub fn from_mask(mask: u32) -> Vec<GameMod> {
        GameMod::iter().filter(|m| m.is_set(mask)).collect()
    }

    pub fn to_mask(mods: &[GameMod]) -> u32 {
        mods.iter().fold(0, |mask, m| mask | m.bit())
    }
}

/// Render a mod mask as comma-separated acronyms (e.g. "HD,HR")
pub fn format_mods(mask: u32) -> String {
    let mods = GameMod::from_mask(mask);
    if mods.is_empty() {
        return "None".to_string();
    }
    mods.iter()
        .map(|m| m.short_name())
        .collect::<Vec<_>>()
        .join(",")
}

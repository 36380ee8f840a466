//! The twelve zodiac animals and the year → animal cycle.

use serde::Serialize;

/// Lunar year that starts the cycle (Rat).
pub const EPOCH_YEAR: i32 = 4;

/// Sign glyphs, in cycle order.
pub const SIGNS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Pictographs, index-aligned with [`SIGNS`].
pub const EMOJIS: [&str; 12] = [
    "🐭", "🐂", "🐯", "🐰", "🐲", "🐍", "🐴", "🐑", "🐵", "🐔", "🐶", "🐷",
];

/// English animal names, index-aligned with [`SIGNS`].
pub const NAMES: [&str; 12] = [
    "rat", "ox", "tiger", "rabbit", "dragon", "snake", "horse", "goat", "monkey", "rooster",
    "dog", "pig",
];

/// Sign and pictograph of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ZodiacResult {
    pub sign: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    /// All animals in cycle order; `ALL[i].index() == i`.
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Rat,
        Zodiac::Ox,
        Zodiac::Tiger,
        Zodiac::Rabbit,
        Zodiac::Dragon,
        Zodiac::Snake,
        Zodiac::Horse,
        Zodiac::Goat,
        Zodiac::Monkey,
        Zodiac::Rooster,
        Zodiac::Dog,
        Zodiac::Pig,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_lunar_year(lunar_year: i32) -> Self {
        // zodiac_index is always < 12
        Self::ALL[zodiac_index(lunar_year)]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn sign(self) -> &'static str {
        SIGNS[self.index()]
    }

    pub fn emoji(self) -> &'static str {
        EMOJIS[self.index()]
    }

    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    pub fn result(self) -> ZodiacResult {
        ZodiacResult {
            sign: self.sign(),
            emoji: self.emoji(),
        }
    }
}

/// Position of `lunar_year` in the 12-year cycle, always in `0..12`.
///
/// `%` keeps the sign of the dividend, so years before [`EPOCH_YEAR`] need
/// the second modulo to land back in range.
pub fn zodiac_index(lunar_year: i32) -> usize {
    let offset = i64::from(lunar_year) - i64::from(EPOCH_YEAR);
    let index = (offset % 12 + 12) % 12;
    index as usize
}

use crate::{
    error::{InvalidInput, Result},
    filter::Filter,
};
use std::fmt::Display;

pub const NOTES_PER_OCTAVE: u8 = 12;

/// A note without an octave. C is 0 and B is 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass {
    index: u8,
}

const SHARP_NAMES: [&str; NOTES_PER_OCTAVE as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; NOTES_PER_OCTAVE as usize] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

const BOTH_NAMES: [&str; NOTES_PER_OCTAVE as usize] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A",
    "A#/Bb", "B",
];

impl PitchClass {
    const fn from_index(index: u8) -> Self {
        assert!(index < NOTES_PER_OCTAVE);
        Self { index }
    }

    /// Reduces any integer into a pitch class. Negative values wrap around so -1 is B.
    pub const fn wrapping_from(value: i128) -> Self {
        Self::from_index(value.rem_euclid(NOTES_PER_OCTAVE as i128) as u8)
    }

    pub const C: Self = Self::from_index(0);
    pub const C_SHARP: Self = Self::from_index(1);
    pub const D_FLAT: Self = Self::C_SHARP;
    pub const D: Self = Self::from_index(2);
    pub const D_SHARP: Self = Self::from_index(3);
    pub const E_FLAT: Self = Self::D_SHARP;
    pub const E: Self = Self::from_index(4);
    pub const F: Self = Self::from_index(5);
    pub const F_SHARP: Self = Self::from_index(6);
    pub const G_FLAT: Self = Self::F_SHARP;
    pub const G: Self = Self::from_index(7);
    pub const G_SHARP: Self = Self::from_index(8);
    pub const A_FLAT: Self = Self::G_SHARP;
    pub const A: Self = Self::from_index(9);
    pub const A_SHARP: Self = Self::from_index(10);
    pub const B_FLAT: Self = Self::A_SHARP;
    pub const B: Self = Self::from_index(11);

    pub const fn index(self) -> u8 {
        self.index
    }

    /// True for the seven pitch classes with a single name (the white keys).
    pub const fn is_natural(self) -> bool {
        matches!(self.index, 0 | 2 | 4 | 5 | 7 | 9 | 11)
    }

    /// The name of this pitch class spelled according to `filter`. Naturals ignore the filter.
    pub const fn alpha(self, filter: Filter) -> &'static str {
        let names = match filter {
            Filter::Sharp => &SHARP_NAMES,
            Filter::Flat => &FLAT_NAMES,
            Filter::Both => &BOTH_NAMES,
        };
        names[self.index as usize]
    }

    /// Parses a single spelling such as "C", "C#" or "Db". Returns the pitch class along with
    /// the filter matching the accidental that was written, if any. Spellings that never come out
    /// of `alpha` (e.g. "Cb" or "E#") are rejected.
    pub fn from_alpha(s: &str) -> Result<(Self, Option<Filter>)> {
        let (names, filter) = if s.ends_with('#') {
            (&SHARP_NAMES, Some(Filter::Sharp))
        } else if s.len() > 1 && s.ends_with('b') {
            (&FLAT_NAMES, Some(Filter::Flat))
        } else {
            (&SHARP_NAMES, None)
        };
        match names.iter().position(|&name| name == s) {
            Some(index) => Ok((Self::from_index(index as u8), filter)),
            None => Err(InvalidInput::Spelling(s.to_string())),
        }
    }

    pub const fn wrapping_add_semitones(self, num_semitones: i64) -> Self {
        Self::wrapping_from(self.index as i128 + num_semitones as i128)
    }

    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NOTES_PER_OCTAVE).map(Self::from_index)
    }
}

/// Formats the sharp spelling.
impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.alpha(Filter::Sharp))
    }
}

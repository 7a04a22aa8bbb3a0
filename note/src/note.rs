//! Notes in 12-tone equal temperament following the A_440Hz convention. A note is identified by
//! its absolute semitone index where C in octave 0 is 0, so C_4 is 48 and A_4 is 57. The pitch
//! class ("numeric", 0 to 11) and the octave are both derived from the absolute index. Octaves
//! below 0 are allowed and the pitch class wraps around, so the note one semitone below C_0 is
//! B_-1.
use crate::{
    error::{InvalidInput, Result},
    filter::{Filter, FilterToken},
    pitch_class::{NOTES_PER_OCTAVE, PitchClass},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, ops::RangeInclusive, str::FromStr};

pub const A_4_FREQ_HZ: f64 = 440.0;
pub const A_4_ABSOLUTE: i64 = 57;

pub fn freq_hz_of_absolute(absolute: i64) -> f64 {
    A_4_FREQ_HZ * semitone_ratio((absolute - A_4_ABSOLUTE) as f64)
}

pub fn semitone_ratio(num_semitones: f64) -> f64 {
    2.0_f64.powf(num_semitones / (NOTES_PER_OCTAVE as f64))
}

/// Settings shared by every way of constructing a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteOptions {
    /// When `None`, notes parsed from strings keep the accidental they were written with and all
    /// other notes are spelled with sharps.
    pub flat_sharp_filter: Option<Filter>,
}

impl NoteOptions {
    pub const fn new() -> Self {
        Self {
            flat_sharp_filter: None,
        }
    }

    pub const fn with_filter(self, filter: Filter) -> Self {
        Self {
            flat_sharp_filter: Some(filter),
        }
    }

    /// Like `with_filter` but takes an unvalidated token such as `"b"` or `false`.
    pub fn with_filter_token<'a>(
        self,
        token: impl Into<FilterToken<'a>>,
    ) -> Result<Self> {
        Ok(self.with_filter(Filter::validate(token)?))
    }

    fn filter_or_default(self) -> Filter {
        self.flat_sharp_filter.unwrap_or_default()
    }
}

/// The shapes of input a note can be constructed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteInput<'a> {
    #[default]
    Random,
    /// Semitones relative to C_4, as taken by `Note::new`.
    Relative(i64),
    /// A string like "C#4", "Bb6" or "C", as taken by `Note::parse`.
    Text(&'a str),
}

impl From<i64> for NoteInput<'_> {
    fn from(numeric: i64) -> Self {
        Self::Relative(numeric)
    }
}

impl<'a> From<&'a str> for NoteInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

/// A pitch class together with the octave it falls in, with no spelling attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Baseline {
    pub numeric: u8,
    pub octave: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NoteRepr", into = "NoteRepr")]
pub struct Note {
    absolute: i64,
    flat_sharp_filter: Filter,
}

#[derive(Serialize, Deserialize)]
struct NoteRepr {
    absolute: i64,
    flat_sharp_filter: Filter,
}

impl TryFrom<NoteRepr> for Note {
    type Error = InvalidInput;

    fn try_from(repr: NoteRepr) -> Result<Self> {
        Self::checked(repr.absolute as i128, repr.flat_sharp_filter)
    }
}

impl From<Note> for NoteRepr {
    fn from(note: Note) -> Self {
        Self {
            absolute: note.absolute,
            flat_sharp_filter: note.flat_sharp_filter,
        }
    }
}

impl Note {
    pub const MIN_OCTAVE: i64 = -1000;
    pub const MAX_OCTAVE: i64 = 999;
    pub const MIN_ABSOLUTE: i64 = Self::MIN_OCTAVE * NOTES_PER_OCTAVE as i64;
    pub const MAX_ABSOLUTE: i64 =
        (Self::MAX_OCTAVE + 1) * NOTES_PER_OCTAVE as i64 - 1;

    /// Octave assumed when none is given.
    pub const DEFAULT_OCTAVE: i64 = 4;

    /// Octaves that random notes are drawn from.
    pub const RANDOM_OCTAVES: RangeInclusive<i64> = 0..=8;

    fn checked(absolute: i128, flat_sharp_filter: Filter) -> Result<Self> {
        if absolute < Self::MIN_ABSOLUTE as i128
            || absolute > Self::MAX_ABSOLUTE as i128
        {
            log::debug!("absolute semitone {} is out of range", absolute);
            return Err(InvalidInput::OutOfRange { absolute });
        }
        Ok(Self {
            absolute: absolute as i64,
            flat_sharp_filter,
        })
    }

    const fn c_absolute(octave: i64) -> i128 {
        octave as i128 * NOTES_PER_OCTAVE as i128
    }

    /// Dispatches to the constructor matching the shape of `input`.
    pub fn from_input(input: NoteInput<'_>, options: NoteOptions) -> Result<Self> {
        match input {
            NoteInput::Random => Ok(Self::random(options)),
            NoteInput::Relative(numeric) => Self::with_options(numeric, options),
            NoteInput::Text(s) => Self::parse_with(s, options),
        }
    }

    /// Construct a note `numeric` semitones away from C_4. Values outside 0..12 spill into
    /// neighbouring octaves, so -1 is B_3 and 12 is C_5.
    pub fn new(numeric: i64) -> Result<Self> {
        Self::with_options(numeric, NoteOptions::new())
    }

    pub fn with_options(numeric: i64, options: NoteOptions) -> Result<Self> {
        Self::checked(
            Self::c_absolute(Self::DEFAULT_OCTAVE) + numeric as i128,
            options.filter_or_default(),
        )
    }

    pub fn from_absolute(absolute: i64) -> Result<Self> {
        Self::from_absolute_with(absolute, NoteOptions::new())
    }

    pub fn from_absolute_with(absolute: i64, options: NoteOptions) -> Result<Self> {
        Self::checked(absolute as i128, options.filter_or_default())
    }

    /// Parses strings like "C", "C#4", "Bb6" or "A-1". The octave defaults to 4.
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_with(s, NoteOptions::new())
    }

    pub fn parse_with(s: &str, options: NoteOptions) -> Result<Self> {
        let octave_start = s
            .find(|c: char| c == '-' || c.is_ascii_digit())
            .unwrap_or(s.len());
        let (alpha, octave) = s.split_at(octave_start);
        let (pitch_class, written_filter) = PitchClass::from_alpha(alpha)
            .map_err(|_| Self::bad_spelling(s))?;
        let octave = if octave.is_empty() {
            Self::DEFAULT_OCTAVE
        } else {
            octave.parse::<i64>().map_err(|_| Self::bad_spelling(s))?
        };
        let flat_sharp_filter = options
            .flat_sharp_filter
            .or(written_filter)
            .unwrap_or_default();
        Self::checked(
            Self::c_absolute(octave) + pitch_class.index() as i128,
            flat_sharp_filter,
        )
    }

    fn bad_spelling(s: &str) -> InvalidInput {
        log::debug!("{:?} is not a note", s);
        InvalidInput::Spelling(s.to_string())
    }

    /// Generate a note with a uniformly random pitch class in one of `RANDOM_OCTAVES`.
    pub fn random(options: NoteOptions) -> Self {
        Self::random_from_rng(&mut rand::rng(), options)
    }

    pub fn random_from_rng<R: Rng + ?Sized>(
        rng: &mut R,
        options: NoteOptions,
    ) -> Self {
        let numeric = rng.random_range(0..NOTES_PER_OCTAVE) as i64;
        let octave = rng.random_range(Self::RANDOM_OCTAVES);
        let note = Self {
            absolute: octave * NOTES_PER_OCTAVE as i64 + numeric,
            flat_sharp_filter: options.filter_or_default(),
        };
        log::trace!("random note: {}", note);
        note
    }

    /// Fold a pitch class that may lie outside 0..12 into the octave, e.g. (12, 5) becomes
    /// (0, 6) and (-1, 6) becomes (11, 5). The octave defaults to 4.
    pub fn baseline(numeric: i64, octave: impl Into<Option<i64>>) -> Baseline {
        let octave = octave.into().unwrap_or(Self::DEFAULT_OCTAVE);
        Baseline {
            numeric: PitchClass::wrapping_from(numeric as i128).index(),
            octave: octave
                .saturating_add(numeric.div_euclid(NOTES_PER_OCTAVE as i64)),
        }
    }

    pub const fn absolute(self) -> i64 {
        self.absolute
    }

    pub const fn pitch_class(self) -> PitchClass {
        PitchClass::wrapping_from(self.absolute as i128)
    }

    pub const fn numeric(self) -> u8 {
        self.pitch_class().index()
    }

    pub const fn octave(self) -> i64 {
        self.absolute.div_euclid(NOTES_PER_OCTAVE as i64)
    }

    pub const fn baselined(self) -> Baseline {
        Baseline {
            numeric: self.numeric(),
            octave: self.octave(),
        }
    }

    pub const fn alpha(self) -> &'static str {
        self.pitch_class().alpha(self.flat_sharp_filter)
    }

    pub const fn flat_sharp_filter(self) -> Filter {
        self.flat_sharp_filter
    }

    pub fn frequency(self) -> f64 {
        freq_hz_of_absolute(self.absolute)
    }

    /// The same pitch spelled according to a different filter.
    pub const fn respelled(self, flat_sharp_filter: Filter) -> Self {
        Self {
            flat_sharp_filter,
            ..self
        }
    }

    /// Moves this note by `semitones` in place. If the result would fall outside the supported
    /// range the note is left untouched and an error is returned.
    pub fn transpose(&mut self, semitones: i64) -> Result<&mut Self> {
        *self = Self::checked(
            self.absolute as i128 + semitones as i128,
            self.flat_sharp_filter,
        )?;
        Ok(self)
    }
}

/// The default note is C_4 spelled with sharps.
impl Default for Note {
    fn default() -> Self {
        Self {
            absolute: Self::c_absolute(Self::DEFAULT_OCTAVE) as i64,
            flat_sharp_filter: Filter::default(),
        }
    }
}

/// Example formats: "C4", "C#4", "Db-1", "C#/Db4". Only the first three can be parsed back.
impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.alpha(), self.octave())
    }
}

impl FromStr for Note {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

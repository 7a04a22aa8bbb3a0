//! Western music theory primitives. A `Note` is a single pitch that can be read back as a pitch
//! class, an octave, an absolute semitone index, a name and a frequency. Pitch classes with two
//! common names are spelled according to a `Filter`.
mod error;
mod filter;
mod note;
mod pitch_class;

pub use error::{InvalidInput, Result};
pub use filter::{Filter, FilterToken};
pub use note::{
    A_4_ABSOLUTE, A_4_FREQ_HZ, Baseline, Note, NoteInput, NoteOptions,
    freq_hz_of_absolute, semitone_ratio,
};
pub use pitch_class::{NOTES_PER_OCTAVE, PitchClass};

//! Notes
//!
//! Named pitches bound to a [`ChromaticScale`], with chord derivation.

use std::fmt::Display;

use crate::chord::{Chord, ChordFamily};
use crate::scale::{ChromaticScale, ScaleError, SEMITONES};

/// Twelve chromatic pitch classes, one fixed flat spelling each.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NoteName {
    /// C
    C,
    /// D flat
    Db,
    /// D
    D,
    /// E flat
    Eb,
    /// E
    E,
    /// F
    F,
    /// G flat
    Gb,
    /// G
    G,
    /// A flat
    Ab,
    /// A
    A,
    /// B flat
    Bb,
    /// B
    B,
}

impl NoteName {
    /// All pitch classes in chromatic order, C first.
    pub const ALL: [NoteName; SEMITONES as usize] = [
        NoteName::C,
        NoteName::Db,
        NoteName::D,
        NoteName::Eb,
        NoteName::E,
        NoteName::F,
        NoteName::Gb,
        NoteName::G,
        NoteName::Ab,
        NoteName::A,
        NoteName::Bb,
        NoteName::B,
    ];

    /// Pitch class at a chromatic index, reduced euclidean-mod 12 so any
    /// signed index maps to a name.
    pub fn from_index(index: i32) -> NoteName {
        NoteName::ALL[index.rem_euclid(SEMITONES) as usize]
    }

    /// Position in the chromatic table (C = 0, B = 11).
    pub fn position(self) -> usize {
        self as usize
    }

    /// Parse a pitch class from its fixed spelling (e.g. `"Db"`).
    pub fn parse(name: &str) -> Option<NoteName> {
        NoteName::ALL.iter().copied().find(|n| n.as_str() == name)
    }

    /// The fixed spelling of this pitch class.
    pub const fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Db => "Db",
            NoteName::D => "D",
            NoteName::Eb => "Eb",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Gb => "Gb",
            NoteName::G => "G",
            NoteName::Ab => "Ab",
            NoteName::A => "A",
            NoteName::Bb => "Bb",
            NoteName::B => "B",
        }
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named pitch with a frequency, bound to the scale that produced it.
///
/// `Note` is an immutable value: octave shifts and renaming return new notes
/// instead of mutating in place, so notes held by a [`Chord`] or the catalog
/// can be shared freely across threads.
///
/// Invariant: `frequency` is always a positive finite number; every
/// constructor enforces it, so internal index math never leaves the
/// logarithm's domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    name: NoteName,
    frequency: f64,
    scale: ChromaticScale,
}

impl Note {
    /// Create a note from an explicit name, frequency, and scale.
    ///
    /// Returns [`ScaleError::NonPositiveFrequency`] unless `frequency` is a
    /// positive finite number. The name is taken as given, not recomputed.
    pub fn new(name: NoteName, frequency: f64, scale: ChromaticScale) -> Result<Note, ScaleError> {
        if frequency <= 0.0 || !frequency.is_finite() {
            return Err(ScaleError::NonPositiveFrequency { frequency });
        }
        Ok(Note {
            name,
            frequency,
            scale,
        })
    }

    /// Name the nearest pitch class for a raw frequency on the given scale.
    pub fn from_frequency(frequency: f64, scale: ChromaticScale) -> Result<Note, ScaleError> {
        let index = scale.to_index(frequency)?;
        Ok(Note {
            name: NoteName::from_index(index),
            frequency,
            scale,
        })
    }

    /// Derive a sibling note from a raw frequency through this note's scale.
    pub fn with_frequency(&self, frequency: f64) -> Result<Note, ScaleError> {
        Note::from_frequency(frequency, self.scale)
    }

    /// Note at a chromatic index on a scale. Infallible since
    /// [`ChromaticScale::to_frequency`] only produces positive frequencies.
    pub(crate) fn at_index(scale: ChromaticScale, index: i32) -> Note {
        Note {
            name: NoteName::from_index(index),
            frequency: scale.to_frequency(index),
            scale,
        }
    }

    /// The pitch class of this note.
    pub fn name(&self) -> NoteName {
        self.name
    }

    /// The frequency of this note in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// The scale this note is bound to.
    pub fn scale(&self) -> ChromaticScale {
        self.scale
    }

    /// This note's chromatic index on its scale.
    pub fn index(&self) -> i32 {
        self.scale.index_of(self.frequency)
    }

    /// Notes at the given semitone offsets from this note, in offset order.
    pub fn chord_notes(&self, offsets: &[i32]) -> Vec<Note> {
        let index = self.index();
        offsets
            .iter()
            .map(|&offset| Note::at_index(self.scale, index + offset))
            .collect()
    }

    /// Build the chord of the given family rooted on this note.
    ///
    /// The chord is named `<root><suffix>`, e.g. `"Dbmaj7"`.
    pub fn chord(&self, family: ChordFamily) -> Chord {
        Chord::from_root(self, family)
    }

    /// Major triad (offsets 0-4-7).
    pub fn major(&self) -> Chord {
        self.chord(ChordFamily::Major)
    }

    /// Major seventh (offsets 0-4-7-11).
    pub fn major7(&self) -> Chord {
        self.chord(ChordFamily::Major7)
    }

    /// Minor triad (offsets 0-3-7).
    pub fn minor(&self) -> Chord {
        self.chord(ChordFamily::Minor)
    }

    /// Minor seventh (offsets 0-3-7-10).
    pub fn minor7(&self) -> Chord {
        self.chord(ChordFamily::Minor7)
    }

    /// Dominant seventh (offsets 0-4-7-10).
    pub fn dominant(&self) -> Chord {
        self.chord(ChordFamily::Dominant)
    }

    /// Half-diminished seventh (offsets 0-3-6-10).
    pub fn half_diminished(&self) -> Chord {
        self.chord(ChordFamily::HalfDiminished)
    }

    /// Diminished seventh (offsets 0-3-6-9).
    pub fn diminished(&self) -> Chord {
        self.chord(ChordFamily::Diminished)
    }

    /// The same pitch class one octave higher.
    ///
    /// Doubling is exact in binary floating point, so the name stays correct
    /// for any number of shifts and `octave_up().octave_down()` restores the
    /// original frequency bit-for-bit.
    pub fn octave_up(&self) -> Note {
        Note {
            name: self.name,
            frequency: self.frequency * 2.0,
            scale: self.scale,
        }
    }

    /// The same pitch class one octave lower.
    pub fn octave_down(&self) -> Note {
        Note {
            name: self.name,
            frequency: self.frequency / 2.0,
            scale: self.scale,
        }
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.4}Hz)", self.name, self.frequency)
    }
}

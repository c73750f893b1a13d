//! Chords
//!
//! Chord families as fixed semitone-offset patterns, and the immutable
//! [`Chord`] values they produce.

use std::fmt::Display;

use crate::note::{Note, NoteName};

/// Number of chord families.
pub(crate) const NUM_FAMILIES: usize = 7;

/// Supported chord families in the same order as `FAMILY_INTERVALS`.
const FAMILIES: [ChordFamily; NUM_FAMILIES] = [
    ChordFamily::Major,
    ChordFamily::Major7,
    ChordFamily::Minor,
    ChordFamily::Minor7,
    ChordFamily::Dominant,
    ChordFamily::HalfDiminished,
    ChordFamily::Diminished,
];

/// Semitone offsets from the root matching `FAMILIES` order.
const FAMILY_INTERVALS: [&[i32]; NUM_FAMILIES] = [
    &[0, 4, 7],
    &[0, 4, 7, 11],
    &[0, 3, 7],
    &[0, 3, 7, 10],
    &[0, 4, 7, 10],
    &[0, 3, 6, 10],
    &[0, 3, 6, 9],
];

/// Supported chord qualities.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChordFamily {
    /// Major triad (e.g. C-E-G)
    Major,
    /// Major seventh chord (e.g. C-E-G-B)
    Major7,
    /// Minor triad (e.g. C-Eb-G)
    Minor,
    /// Minor seventh chord (e.g. C-Eb-G-Bb)
    Minor7,
    /// Dominant seventh chord (e.g. C-E-G-Bb)
    Dominant,
    /// Half-diminished seventh chord (e.g. C-Eb-Gb-Bb)
    HalfDiminished,
    /// Diminished seventh chord (e.g. C-Eb-Gb-A)
    Diminished,
}

impl ChordFamily {
    /// All chord families, in catalog order.
    pub const ALL: [ChordFamily; NUM_FAMILIES] = FAMILIES;

    /// Semitone offsets from the root, ascending, root first.
    pub const fn intervals(self) -> &'static [i32] {
        FAMILY_INTERVALS[self as usize]
    }

    /// Suffix appended to the root's name to form the chord name.
    pub const fn suffix(self) -> &'static str {
        match self {
            ChordFamily::Major => "",
            ChordFamily::Major7 => "maj7",
            ChordFamily::Minor => "m",
            ChordFamily::Minor7 => "m7",
            ChordFamily::Dominant => "7",
            ChordFamily::HalfDiminished => "m7b5",
            ChordFamily::Diminished => "dim7",
        }
    }

    /// Family name used for grouped catalog lookup.
    pub const fn name(self) -> &'static str {
        match self {
            ChordFamily::Major => "major",
            ChordFamily::Major7 => "major7",
            ChordFamily::Minor => "minor",
            ChordFamily::Minor7 => "minor7",
            ChordFamily::Dominant => "dominant",
            ChordFamily::HalfDiminished => "half_diminished",
            ChordFamily::Diminished => "diminished",
        }
    }

    /// Parse a family from its name (e.g. `"minor7"`).
    pub fn parse(name: &str) -> Option<ChordFamily> {
        FAMILIES.iter().copied().find(|f| f.name() == name)
    }
}

impl Display for ChordFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An immutable named collection of notes derived from a root.
///
/// Notes are stored in ascending offset order, root first. Each member is
/// also reachable by its own pitch class through [`Chord::note`].
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    name: String,
    notes: Vec<Note>,
}

impl Chord {
    /// Build a chord of the given family rooted on `root`.
    pub(crate) fn from_root(root: &Note, family: ChordFamily) -> Chord {
        Chord {
            name: format!("{}{}", root.name(), family.suffix()),
            notes: root.chord_notes(family.intervals()),
        }
    }

    /// The chord's name, `<root><suffix>` (e.g. `"Am7"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The chord's notes in ascending offset order, root first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The root note.
    pub fn root(&self) -> &Note {
        &self.notes[0]
    }

    /// Fetch a member note by its pitch class, if the chord contains it.
    pub fn note(&self, name: NoteName) -> Option<&Note> {
        self.notes.iter().find(|n| n.name() == name)
    }

    /// Number of notes in the chord (3 or 4).
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the chord has no notes. Never true for generated chords.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

//! Catalog
//!
//! Precomputed read-only lookup namespaces for the twelve base notes and
//! every chord they root, built once from a [`ChromaticScale`].

use std::collections::HashMap;

use lazy_static::lazy_static;
use thiserror::Error;

use crate::chord::{Chord, ChordFamily, NUM_FAMILIES};
use crate::note::{Note, NoteName};
use crate::scale::{ChromaticScale, SEMITONES};

/// Total number of generated chords (root x family).
pub(crate) const NUM_CHORDS: usize = SEMITONES as usize * NUM_FAMILIES;

lazy_static! {
    static ref STANDARD_CATALOG: Catalog = Catalog::build(ChromaticScale::new());
}

/// Errors from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested name is not one of the twelve pitch classes.
    #[error("unknown note `{name}`")]
    UnknownNote {
        /// The name that was looked up.
        name: String,
    },

    /// The requested name is not one of the generated chord names.
    #[error("unknown chord `{name}`")]
    UnknownChord {
        /// The name that was looked up.
        name: String,
    },

    /// The requested name is not one of the chord family names.
    #[error("unknown chord family `{name}`")]
    UnknownFamily {
        /// The name that was looked up.
        name: String,
    },
}

/// The precomputed set of all base notes and all generated chords.
///
/// Built eagerly by [`Catalog::build`] and read-only afterwards; safe to
/// share across threads since every held value is immutable.
#[derive(Debug)]
pub struct Catalog {
    scale: ChromaticScale,
    notes: Vec<Note>,
    chords: HashMap<String, Chord>,
    families: HashMap<ChordFamily, Vec<String>>,
}

impl Catalog {
    /// Build the full catalog for a scale: twelve base notes at the base
    /// octave, then one chord per (pitch class, family) pair.
    ///
    /// If two chords ever produced the same name, the later one would win;
    /// the naming scheme makes that impossible for the shipped families.
    pub fn build(scale: ChromaticScale) -> Catalog {
        let notes: Vec<Note> = (0..SEMITONES)
            .map(|index| Note::at_index(scale, index))
            .collect();

        let mut chords = HashMap::with_capacity(NUM_CHORDS);
        let mut families = HashMap::with_capacity(NUM_FAMILIES);
        for family in ChordFamily::ALL {
            let mut names = Vec::with_capacity(SEMITONES as usize);
            for note in &notes {
                let chord = note.chord(family);
                names.push(chord.name().to_string());
                chords.insert(chord.name().to_string(), chord);
            }
            families.insert(family, names);
        }

        Catalog {
            scale,
            notes,
            chords,
            families,
        }
    }

    /// The memoized catalog for the standard A = 440Hz scale.
    ///
    /// Built on first access, shared for the life of the process.
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }

    /// The scale this catalog was built from.
    pub fn scale(&self) -> ChromaticScale {
        self.scale
    }

    /// The twelve base notes in chromatic order, C first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The base note for a pitch class.
    pub fn note_by_class(&self, name: NoteName) -> &Note {
        &self.notes[name.position()]
    }

    /// Look up a base note by its spelling (e.g. `"Eb"`).
    pub fn note(&self, name: &str) -> Result<&Note, CatalogError> {
        NoteName::parse(name)
            .map(|n| self.note_by_class(n))
            .ok_or_else(|| CatalogError::UnknownNote {
                name: name.to_string(),
            })
    }

    /// Look up a chord by its full name (e.g. `"Dbmaj7"`).
    pub fn chord(&self, name: &str) -> Result<&Chord, CatalogError> {
        self.chords.get(name).ok_or_else(|| CatalogError::UnknownChord {
            name: name.to_string(),
        })
    }

    /// All generated chords, in no particular order.
    pub fn chords(&self) -> impl Iterator<Item = &Chord> {
        self.chords.values()
    }

    /// All chords of one family, in chromatic root order.
    pub fn family(&self, family: ChordFamily) -> impl Iterator<Item = &Chord> {
        self.families[&family].iter().map(|name| &self.chords[name])
    }

    /// All chords of the family with the given name (e.g. `"minor7"`),
    /// in chromatic root order.
    pub fn family_by_name(
        &self,
        name: &str,
    ) -> Result<impl Iterator<Item = &Chord>, CatalogError> {
        ChordFamily::parse(name)
            .map(|f| self.family(f))
            .ok_or_else(|| CatalogError::UnknownFamily {
                name: name.to_string(),
            })
    }

    /// Number of generated chords.
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// Whether the catalog holds no chords. Never true for built catalogs.
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

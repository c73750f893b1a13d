//! # chord_catalog
//!
//! Equal-tempered note/frequency conversion and chord derivation: map pitch
//! names to fundamental frequencies and build chord voicings (major, minor,
//! dominant, ...) from any root note, with a precomputed catalog of all
//! twelve pitch classes and every chord they root.
//!
//! ## Example
//! ```rust
//! use chord_catalog::{Catalog, ChromaticScale, Note, NoteName};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Name a raw frequency
//!     let scale = ChromaticScale::new();
//!     let note = Note::from_frequency(440.0, scale)?;
//!     assert_eq!(note.name(), NoteName::A);
//!
//!     // 2) Derive a chord from it
//!     let chord = note.minor7();
//!     assert_eq!(chord.name(), "Am7");
//!     assert_eq!(chord.notes().len(), 4);
//!
//!     // 3) Or use the prebuilt catalog
//!     let catalog = Catalog::standard();
//!     let c_major = catalog.chord("C")?;
//!     let third = c_major.note(NoteName::E).unwrap();
//!     println!("the third of C major is {third}");
//!
//!     Ok(())
//! }
//! ```
//!
//! An alternate tuning standard only needs a different reference pitch;
//! all note and chord logic runs in semitone-index space:
//! ```rust
//! use chord_catalog::{Catalog, ChromaticScale};
//!
//! let scale = ChromaticScale::builder().reference_frequency(432.0).build().unwrap();
//! let catalog = Catalog::build(scale);
//! assert_eq!(catalog.len(), 84);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Index/frequency conversion on the twelve-tone scale.
pub use scale::{ChromaticScale, ChromaticScaleBuilder, ScaleError, STANDARD_A};

/// Named pitches and chord derivation.
pub use note::{Note, NoteName};

/// Chord values and family definitions.
pub use chord::{Chord, ChordFamily};

/// Precomputed note and chord lookup.
pub use catalog::{Catalog, CatalogError};

/// Chromatic scale module.
pub mod scale;

/// Note module.
pub mod note;

/// Chord module.
pub mod chord;

/// Catalog module.
pub mod catalog;

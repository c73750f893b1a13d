//! Integration tests for scale conversion, note naming, chord derivation,
//! and catalog lookup.

use chord_catalog::{
    Catalog, CatalogError, ChordFamily, ChromaticScale, Note, NoteName, ScaleError,
};

const EPS: f64 = 1e-9;

fn names(notes: &[Note]) -> Vec<&'static str> {
    notes.iter().map(|n| n.name().as_str()).collect()
}

#[test]
fn index_frequency_round_trip_is_exact() {
    let scale = ChromaticScale::new();
    for i in -120..=120 {
        let freq = scale.to_frequency(i);
        assert_eq!(scale.to_index(freq).unwrap(), i, "round trip failed at {i}");
    }
}

#[test]
fn index_zero_is_c_above_standard_a() {
    let scale = ChromaticScale::new();
    let c = scale.to_frequency(0);
    assert!((c - 440.0 * 2f64.powf(0.25)).abs() < EPS);
    assert!((c - 523.2511306011972).abs() < 1e-6);
}

#[test]
fn standard_a_is_named_a() {
    let note = Note::from_frequency(440.0, ChromaticScale::new()).unwrap();
    assert_eq!(note.name(), NoteName::A);
    assert_eq!(note.index(), -3);
}

#[test]
fn half_step_boundary_splits_adjacent_indices() {
    // The cut between indices 4 and 5 sits at their geometric midpoint
    // (half away from zero, per `to_index` docs). Frequencies nudged to
    // either side must resolve to the nearer index.
    let scale = ChromaticScale::new();
    let mid = (scale.to_frequency(4) * scale.to_frequency(5)).sqrt();
    assert_eq!(scale.to_index(mid * (1.0 + 1e-6)).unwrap(), 5);
    assert_eq!(scale.to_index(mid * (1.0 - 1e-6)).unwrap(), 4);

    // Same cut below zero.
    let mid = (scale.to_frequency(-5) * scale.to_frequency(-4)).sqrt();
    assert_eq!(scale.to_index(mid * (1.0 + 1e-6)).unwrap(), -4);
    assert_eq!(scale.to_index(mid * (1.0 - 1e-6)).unwrap(), -5);
}

#[test]
fn non_positive_frequencies_are_domain_errors() {
    let scale = ChromaticScale::new();
    assert!(matches!(
        scale.to_index(0.0),
        Err(ScaleError::NonPositiveFrequency { .. })
    ));
    assert!(matches!(
        scale.to_index(-5.0),
        Err(ScaleError::NonPositiveFrequency { .. })
    ));
    assert!(matches!(
        scale.to_index(f64::NAN),
        Err(ScaleError::NonPositiveFrequency { .. })
    ));
    assert!(matches!(
        Note::new(NoteName::A, -440.0, scale),
        Err(ScaleError::NonPositiveFrequency { .. })
    ));
    assert!(matches!(
        ChromaticScale::builder().reference_frequency(0.0).build(),
        Err(ScaleError::NonPositiveReference { .. })
    ));
}

#[test]
fn octave_equivalence_preserves_pitch_class() {
    let scale = ChromaticScale::new();
    for freq in [27.5, 110.0, 261.63, 440.0, 523.25, 987.77] {
        let low = scale.to_index(freq).unwrap().rem_euclid(12);
        let high = scale.to_index(2.0 * freq).unwrap().rem_euclid(12);
        assert_eq!(low, high, "octave equivalence failed at {freq}Hz");
    }
}

#[test]
fn octave_shift_round_trips_bit_exactly() {
    let catalog = Catalog::standard();
    for note in catalog.notes() {
        let back = note.octave_up().octave_down();
        assert_eq!(back.frequency().to_bits(), note.frequency().to_bits());
        assert_eq!(back.name(), note.name());

        // Repeated shifts keep the name in sync with the frequency.
        let mut shifted = note.clone();
        for _ in 0..64 {
            shifted = shifted.octave_up();
        }
        for _ in 0..64 {
            shifted = shifted.octave_down();
        }
        assert_eq!(shifted.frequency().to_bits(), note.frequency().to_bits());
        assert_eq!(
            shifted.with_frequency(shifted.frequency()).unwrap().name(),
            note.name()
        );
    }
}

#[test]
fn c_major_is_c_e_g() {
    let catalog = Catalog::standard();
    let chord = catalog.note_by_class(NoteName::C).major();
    assert_eq!(chord.name(), "C");
    assert_eq!(names(chord.notes()), ["C", "E", "G"]);
}

#[test]
fn a_minor7_is_a_c_e_g() {
    let catalog = Catalog::standard();
    let chord = catalog.note_by_class(NoteName::A).minor7();
    assert_eq!(chord.name(), "Am7");
    assert_eq!(names(chord.notes()), ["A", "C", "E", "G"]);
}

#[test]
fn family_constructors_match_their_interval_tables() {
    let root = Note::from_frequency(440.0, ChromaticScale::new()).unwrap();
    let by_family = [
        (root.major(), ChordFamily::Major),
        (root.major7(), ChordFamily::Major7),
        (root.minor(), ChordFamily::Minor),
        (root.minor7(), ChordFamily::Minor7),
        (root.dominant(), ChordFamily::Dominant),
        (root.half_diminished(), ChordFamily::HalfDiminished),
        (root.diminished(), ChordFamily::Diminished),
    ];
    for (chord, family) in by_family {
        assert_eq!(chord, root.chord(family));
        assert_eq!(chord.len(), family.intervals().len());
        assert_eq!(chord.root().name(), NoteName::A);
        for (note, &offset) in chord.notes().iter().zip(family.intervals()) {
            assert_eq!(note.index(), root.index() + offset);
            assert_eq!(note.name(), NoteName::from_index(root.index() + offset));
        }
    }
}

#[test]
fn chord_members_are_reachable_by_pitch_class() {
    let chord = Catalog::standard().note_by_class(NoteName::C).major();
    let third = chord.note(NoteName::E).unwrap();
    assert_eq!(third.name(), NoteName::E);
    assert!(chord.note(NoteName::Db).is_none());
}

#[test]
fn catalog_holds_twelve_notes_and_eighty_four_chords() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.notes().len(), 12);
    assert_eq!(catalog.len(), 84);

    for (position, note) in catalog.notes().iter().enumerate() {
        assert_eq!(note.name(), NoteName::ALL[position]);
        assert_eq!(catalog.note_by_class(note.name()), note);
    }

    for family in ChordFamily::ALL {
        let chords: Vec<_> = catalog.family(family).collect();
        assert_eq!(chords.len(), 12);
        for (chord, root) in chords.iter().zip(NoteName::ALL) {
            assert_eq!(chord.name(), format!("{}{}", root, family.suffix()));
            assert_eq!(chord.root().name(), root);
            assert_eq!(catalog.chord(chord.name()).unwrap(), *chord);
        }
    }
}

#[test]
fn catalog_lookup_by_name() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.note("Eb").unwrap().name(), NoteName::Eb);
    assert_eq!(catalog.chord("Dbmaj7").unwrap().len(), 4);
    assert_eq!(catalog.family_by_name("minor7").unwrap().count(), 12);

    assert!(matches!(
        catalog.note("H"),
        Err(CatalogError::UnknownNote { .. })
    ));
    assert!(matches!(
        catalog.chord("Csus4"),
        Err(CatalogError::UnknownChord { .. })
    ));
    assert!(matches!(
        catalog.family_by_name("augmented"),
        Err(CatalogError::UnknownFamily { .. })
    ));

    // A failed lookup leaves the catalog intact.
    assert_eq!(catalog.len(), 84);
}

#[test]
fn standard_catalog_is_memoized() {
    let first = Catalog::standard() as *const Catalog;
    let second = Catalog::standard() as *const Catalog;
    assert_eq!(first, second);

    let a = Catalog::standard().note("A").unwrap();
    assert!((a.frequency() - 880.0).abs() < EPS);
}

#[test]
fn alternate_reference_retunes_without_renaming() {
    let scale = ChromaticScale::builder()
        .reference_frequency(432.0)
        .build()
        .unwrap();
    let catalog = Catalog::build(scale);

    assert_eq!(catalog.len(), 84);
    let c = catalog.note("C").unwrap();
    assert_eq!(c.name(), NoteName::C);
    assert!((c.frequency() - 432.0 * 2f64.powf(0.25)).abs() < EPS);

    let standard_c = Catalog::standard().note("C").unwrap();
    assert!(c.frequency() < standard_c.frequency());

    let chord = catalog.chord("Am7").unwrap();
    assert_eq!(names(chord.notes()), ["A", "C", "E", "G"]);
}

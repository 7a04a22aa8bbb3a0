use chordal_note::{Baseline, Filter, InvalidInput, Note, NoteInput, NoteOptions};

const NUM_CASES: usize = 10;

#[test]
fn random_note_when_no_input_is_given() {
    for _ in 0..=NUM_CASES {
        let note = Note::from_input(NoteInput::Random, NoteOptions::new()).unwrap();
        assert!(note.numeric() <= 11);
        assert!(note.frequency().is_finite());
        assert!(!note.alpha().is_empty());
    }
}

#[test]
fn garbage_string_is_rejected() {
    assert!(matches!(Note::parse("..."), Err(InvalidInput::Spelling(_))));
}

#[test]
fn parse_notes() {
    let note_c = Note::parse("C").unwrap();
    let note_neg_1 = Note::new(-1).unwrap();
    let note_b = Note::parse("B").unwrap();
    let note_12 = Note::new(12).unwrap();

    assert!(matches!(
        Note::new(12394100),
        Err(InvalidInput::OutOfRange { .. })
    ));
    assert!(matches!(
        "C#C#C#/Cb5Maj".parse::<Note>(),
        Err(InvalidInput::Spelling(_))
    ));

    assert_eq!(note_c.alpha(), "C");
    assert_eq!(note_neg_1.alpha(), "B");
    assert_eq!(note_b.alpha(), "B");
    assert_eq!(note_12.alpha(), "C");

    assert_eq!(note_c.numeric(), 0);
    assert_eq!(note_neg_1.numeric(), 11);
    assert_eq!(note_b.numeric(), 11);
    assert_eq!(note_12.numeric(), 0);

    assert_eq!(note_c.octave(), 4);
    assert_eq!(note_neg_1.octave(), 3);
    assert_eq!(note_b.octave(), 4);
    assert_eq!(note_12.octave(), 5);
}

fn assert_note(note: Note, alpha: &str, numeric: u8, octave: i64, absolute: i64) {
    assert_eq!(note.alpha(), alpha);
    assert_eq!(note.numeric(), numeric);
    assert_eq!(note.octave(), octave);
    assert_eq!(note.absolute(), absolute);
}

#[test]
fn parse_notes_with_filters() {
    assert_note(Note::new(-24).unwrap(), "C", 0, 2, 24);

    let flat = NoteOptions::new().with_filter_token("b").unwrap();
    assert_note(Note::with_options(25, flat).unwrap(), "Db", 1, 6, 73);
    let sharp = NoteOptions::new().with_filter_token("#").unwrap();
    assert_note(Note::with_options(25, sharp).unwrap(), "C#", 1, 6, 73);
    let both = NoteOptions::new().with_filter_token(false).unwrap();
    assert_note(Note::with_options(25, both).unwrap(), "C#/Db", 1, 6, 73);

    assert_note(Note::parse("Bb6").unwrap(), "Bb", 10, 6, 82);
    assert_note(Note::parse("C4").unwrap(), "C", 0, 4, 48);
    assert_note(Note::parse("C#4").unwrap(), "C#", 1, 4, 49);
}

#[test]
fn absolute_construction_matches_floor_division() {
    for absolute in -500..500 {
        let note = Note::from_absolute(absolute).unwrap();
        assert_eq!(note.numeric() as i64, ((absolute % 12) + 12) % 12);
        assert_eq!(note.octave(), absolute.div_euclid(12));
    }
}

#[test]
fn naturals_round_trip_through_strings() {
    for absolute in -30..130 {
        let note = Note::from_absolute(absolute).unwrap();
        if !note.pitch_class().is_natural() {
            continue;
        }
        let s = format!("{}{}", note.alpha(), note.octave());
        assert_eq!(Note::parse(&s).unwrap().numeric(), note.numeric());
    }
}

#[test]
fn baseline() {
    assert_eq!(Note::baseline(12, 5), Baseline { numeric: 0, octave: 6 });
    assert_eq!(Note::baseline(-1, 6), Baseline { numeric: 11, octave: 5 });
    assert_eq!(Note::baseline(-12, None), Baseline { numeric: 0, octave: 3 });
}

#[test]
fn transpose() {
    let mut note = Note::parse("C").unwrap();
    assert_note(note, "C", 0, 4, 48);

    note.transpose(12).unwrap();
    assert_note(note, "C", 0, 5, 60);

    note.transpose(-25).unwrap();
    assert_note(note, "B", 11, 2, 35);
}

#[test]
fn random_notes() {
    for _ in 0..NUM_CASES {
        let note = Note::random(NoteOptions::new());
        assert!(!note.alpha().is_empty());
        assert!(note.numeric() < 12);
    }
}

#[test]
fn random_rejects_invalid_filter() {
    for _ in 0..NUM_CASES {
        let result = NoteOptions::new()
            .with_filter_token("*&^%")
            .map(Note::random);
        assert_eq!(result, Err(InvalidInput::Filter("*&^%".to_string())));
    }
}

#[test]
fn random_with_valid_filters() {
    for _ in 0..NUM_CASES {
        let options = NoteOptions::new().with_filter(Filter::random());
        let note = Note::random(options);
        assert!(!note.alpha().is_empty());
        assert_eq!(note.flat_sharp_filter(), options.flat_sharp_filter.unwrap());
    }
}

use chordal_note::{Filter, Note, NoteInput, NoteOptions};
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Note to describe, e.g. "C#4" or "Bb". A random note is used if omitted.
    note: Option<String>,
    /// Interpret the note as semitones relative to C4 rather than a name.
    #[arg(short, long)]
    relative: bool,
    /// Spelling for accidentals: "#", "b" or "both".
    #[arg(short, long)]
    filter: Option<String>,
    /// Semitones to transpose by after construction.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    transpose: i64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = match args.filter.as_deref() {
        None => NoteOptions::new(),
        Some("both") => NoteOptions::new().with_filter(Filter::Both),
        Some(token) => NoteOptions::new().with_filter_token(token)?,
    };
    let input = match args.note.as_deref() {
        None => NoteInput::Random,
        Some(s) if args.relative => NoteInput::Relative(s.parse()?),
        Some(s) => NoteInput::Text(s),
    };
    let mut note = Note::from_input(input, options)?;
    if args.transpose != 0 {
        log::info!("transposing {} by {} semitones", note, args.transpose);
        note.transpose(args.transpose)?;
    }
    println!("note:      {}", note);
    println!("alpha:     {}", note.alpha());
    println!("numeric:   {}", note.numeric());
    println!("octave:    {}", note.octave());
    println!("absolute:  {}", note.absolute());
    println!("frequency: {:.3}Hz", note.frequency());
    Ok(())
}

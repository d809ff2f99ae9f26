//! Prints a tour of the markup language.
//!
//! Run with `cargo run --example markup`, or pass your own markup:
//! `cargo run --example markup -- "[red]hi[/]"`.

use tinted::{Color, ColorMode, Console, SinkConfig, Style};

fn main() -> tinted::Result<()> {
    let mode = match std::env::var("TINTED_COLOR").as_deref() {
        Ok("ansi256") => ColorMode::Ansi256,
        Ok("none") => ColorMode::NoColor,
        _ => ColorMode::TrueColor,
    };
    let mut console = Console::stdout(SinkConfig::default().with_color_mode(mode));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        for arg in &args {
            console.markup_line(arg.as_str())?;
        }
        return Ok(console.flush()?);
    }

    const LINES: [&str; 8] = [
        "[red]red[/] [green]green[/] [blue]blue[/] [b:yellow black]on yellow[/]",
        "[(255,128,0)]orange literal[/] and [b:(30,30,60)]dark background[/]",
        "[italics]italics[/] [underline]underline[/] [doubleunderline]double[/] [strikethrough]struck[/] [overline]overline[/]",
        "[red]outer [italics]inner [b:white]deepest[/] inner[/] outer[/] plain",
        "[allcaps]quiet words, loud output[/]",
        "[center cyan]centered[/]",
        "[right]right aligned[/]",
        r"escapes: \[not a tag] and a backslash \\ [/][/] stray closes are ignored",
    ];

    for line in LINES {
        console.markup_line(line)?;
    }

    let base = Color::new(200, 100, 50);
    for step in 1..=4u8 {
        let shade = base * (f32::from(step) / 4.0);
        console.write(&format!("{shade} "), &Style::new().with_bg(shade))?;
    }
    console.newline()?;

    Ok(console.flush()?)
}

//! Rendering behavior of the markup language, end to end.

use tintmark::{Color, Effects, Style, StyledRun, StyledText, render, strip_markup};

fn runs(input: &str) -> Vec<StyledRun> {
    StyledText::parse(input).into_iter().collect()
}

/// One line per run: text, fg, bg, effect names.
fn describe(input: &str) -> String {
    let slot = |color: Option<Color>| color.map_or("-".to_string(), |c| c.to_string());

    runs(input)
        .iter()
        .map(|run| {
            let effects: Vec<_> = run.style.effects.iter_names().map(|(name, _)| name).collect();
            format!(
                "{:?} fg={} bg={} fx={}",
                run.text,
                slot(run.style.fg),
                slot(run.style.bg),
                if effects.is_empty() { "-".to_string() } else { effects.join("+") },
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Plain text
// ============================================================================

#[test]
fn text_without_control_characters_is_one_default_run() {
    for input in ["Hello", "Hello World!", "a/b]c", "日本語 テキスト", "  spaced  "] {
        assert_eq!(runs(input), vec![StyledRun::plain(input)], "input: {input}");
    }
}

#[test]
fn empty_input_renders_nothing() {
    assert!(runs("").is_empty());
}

// ============================================================================
// Escapes
// ============================================================================

#[test]
fn escaped_bracket_is_literal() {
    assert_eq!(runs(r"\["), vec![StyledRun::plain("[")]);
}

#[test]
fn escaped_backslash_is_literal() {
    assert_eq!(runs(r"\\"), vec![StyledRun::plain("\\")]);
}

#[test]
fn escaped_tag_renders_as_text() {
    assert_eq!(strip_markup(r"\[red]x\[/]"), "[red]x[/]");
}

#[test]
fn lone_backslash_passes_through() {
    assert_eq!(strip_markup(r"C:\dir\file"), r"C:\dir\file");
    assert_eq!(strip_markup("end\\"), "end\\");
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn nesting_restores_the_exact_prior_style() {
    let red = Style::new().with_fg(Color::RED);
    assert_eq!(
        runs("[red]a[italics]b[/]c[/]d"),
        vec![
            StyledRun::new("a", red),
            StyledRun::new("b", red.with_effects(Effects::ITALICS)),
            StyledRun::new("c", red),
            StyledRun::plain("d"),
        ]
    );
}

#[test]
fn overlay_color_wins_then_returns_to_default() {
    assert_eq!(
        runs("[red][blue]x[/][/]y"),
        vec![
            StyledRun::new("x", Style::new().with_fg(Color::BLUE)),
            StyledRun::plain("y"),
        ]
    );
}

#[test]
fn effects_accumulate_across_tags() {
    assert_eq!(
        runs("[underline][blink]x[/][/]"),
        vec![StyledRun::new(
            "x",
            Style::new().with_effects(Effects::UNDERLINE | Effects::BLINK)
        )]
    );
}

#[test]
fn sibling_tags_do_not_clear_inherited_colors() {
    let runs = runs("[red b:white][italics]x[/][blink]y[/][/]");
    assert_eq!(runs[0].style.fg, Some(Color::RED));
    assert_eq!(runs[0].style.bg, Some(Color::WHITE));
    assert_eq!(runs[1].style.fg, Some(Color::RED));
    assert_eq!(runs[1].style.bg, Some(Color::WHITE));
    assert_eq!(runs[1].style.effects, Effects::BLINK);
}

#[test]
fn unknown_tag_still_opens_a_scope() {
    assert_eq!(
        runs("[red][bogus]x[/]y[/]z"),
        vec![
            StyledRun::new("x", Style::new().with_fg(Color::RED)),
            StyledRun::new("y", Style::new().with_fg(Color::RED)),
            StyledRun::plain("z"),
        ]
    );
}

#[test]
fn nested_render_snapshot() {
    insta::assert_snapshot!(
        describe("[b:navy]head [yellow underline]warn[doubleunderline]!![/][/] tail[/]."),
        @r#"
    "head " fg=- bg=(0,0,128) fx=-
    "warn" fg=(255,255,0) bg=(0,0,128) fx=UNDERLINE
    "!!" fg=(255,255,0) bg=(0,0,128) fx=UNDERLINE+DOUBLE_UNDERLINE
    " tail" fg=- bg=(0,0,128) fx=-
    "." fg=- bg=- fx=-
    "#
    );
}

// ============================================================================
// Leniency
// ============================================================================

#[test]
fn unmatched_close_tags_are_ignored() {
    assert_eq!(runs("[/][/][/]text"), vec![StyledRun::plain("text")]);
}

#[test]
fn extra_close_tags_after_balanced_scope() {
    assert_eq!(
        runs("[red]a[/][/]b"),
        vec![
            StyledRun::new("a", Style::new().with_fg(Color::RED)),
            StyledRun::plain("b"),
        ]
    );
}

#[test]
fn unclosed_tag_renders_literally() {
    assert_eq!(strip_markup("[unclosedtext"), "[unclosedtext");
    assert!(runs("[unclosedtext").iter().all(|run| run.style.is_default()));
}

#[test]
fn empty_tag_renders_literally() {
    assert_eq!(strip_markup("a[]b"), "a[]b");
}

#[test]
fn malformed_literal_is_dropped() {
    assert_eq!(
        runs("[(10,20)]x[/][(1,2,3,4)]y[/][(256,0,0)]z[/]"),
        vec![StyledRun::plain("x"), StyledRun::plain("y"), StyledRun::plain("z")]
    );
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn rgb_literal_sets_foreground() {
    assert_eq!(
        runs("[(10,20,30)]x[/]"),
        vec![StyledRun::new("x", Style::new().with_fg(Color::new(10, 20, 30)))]
    );
}

#[test]
fn background_prefix_leaves_foreground_unset() {
    assert_eq!(
        runs("[b:red]x[/]"),
        vec![StyledRun::new("x", Style::new().with_bg(Color::RED))]
    );
}

#[test]
fn background_prefix_inherits_foreground() {
    let runs = runs("[green][B:(1,2,3)]x[/][/]");
    assert_eq!(runs[0].style.fg, Some(Color::GREEN));
    assert_eq!(runs[0].style.bg, Some(Color::new(1, 2, 3)));
}

#[test]
fn multi_attribute_tag() {
    assert_eq!(
        runs("[RED b:Silver AllCaps right]x[/]"),
        vec![StyledRun::new(
            "x",
            Style::new()
                .with_fg(Color::RED)
                .with_bg(Color::new(192, 192, 192))
                .with_effects(Effects::ALL_CAPS | Effects::RIGHT)
        )]
    );
}

// ============================================================================
// Sinks
// ============================================================================

#[test]
fn render_propagates_sink_errors() {
    struct Failing;

    impl tintmark::Sink for Failing {
        type Error = &'static str;

        fn emit(
            &mut self,
            _text: &str,
            _fg: Option<Color>,
            _bg: Option<Color>,
            _effects: Effects,
        ) -> Result<(), Self::Error> {
            Err("closed")
        }
    }

    assert_eq!(render("x", &mut Failing), Err("closed"));
    // No text, no emit.
    assert_eq!(render("[red][/]", &mut Failing), Ok(()));
}

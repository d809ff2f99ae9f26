//! Tests for the Color type and the named palette.

use tintmark::{Color, ColorParseError, palette};

// ============================================================================
// Named Colors
// ============================================================================

#[test]
fn parse_basic_colors() {
    let colors = [
        ("black", (0, 0, 0)),
        ("white", (255, 255, 255)),
        ("red", (255, 0, 0)),
        ("green", (0, 128, 0)),
        ("blue", (0, 0, 255)),
        ("yellow", (255, 255, 0)),
        ("cyan", (0, 255, 255)),
        ("magenta", (255, 0, 255)),
    ];

    for (name, rgb) in colors {
        assert_eq!(Color::parse(name).unwrap().to_rgb(), rgb, "color: {name}");
    }
}

#[test]
fn parse_case_insensitive() {
    assert_eq!(Color::parse("RED").unwrap(), Color::RED);
    assert_eq!(Color::parse("Red").unwrap(), Color::RED);
    assert_eq!(Color::parse("rEd").unwrap(), Color::RED);
}

#[test]
fn parse_with_whitespace() {
    assert_eq!(Color::parse("  red  ").unwrap(), Color::RED);
    assert_eq!(Color::parse("\tblue\t").unwrap(), Color::BLUE);
}

#[test]
fn every_palette_entry_parses_to_itself() {
    for (name, color) in palette::entries() {
        assert_eq!(Color::parse(name), Ok(color), "color: {name}");
        assert_eq!(Color::parse(&name.to_uppercase()), Ok(color), "color: {name}");
    }
}

#[test]
fn constants_match_palette() {
    assert_eq!(palette::lookup("gray"), Some(Color::GRAY));
    assert_eq!(palette::lookup("green"), Some(Color::GREEN));
    assert_eq!(palette::lookup("magenta"), Some(Color::MAGENTA));
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn parse_rgb_literal() {
    assert_eq!("(10,20,30)".parse::<Color>(), Ok(Color::new(10, 20, 30)));
    assert_eq!(Color::from((1, 2, 3)), Color::new(1, 2, 3));
}

#[test]
fn parse_rgb_literal_rejects_spaces() {
    assert!(matches!(
        Color::parse("(10, 20, 30)"),
        Err(ColorParseError::InvalidRgb(_))
    ));
}

#[test]
fn parse_unknown_name() {
    assert_eq!(
        Color::parse("octarine"),
        Err(ColorParseError::UnknownName("octarine".to_string()))
    );
}

// ============================================================================
// Scaling
// ============================================================================

#[test]
fn multiply_and_divide_agree() {
    let color = Color::new(200, 100, 50);
    assert_eq!(color * 0.5, Color::new(100, 50, 25));
    assert_eq!(color / 2.0, Color::new(100, 50, 25));
    assert_eq!(color * 0.5, color / 2.0);
}

#[test]
fn scaling_truncates_instead_of_rounding() {
    assert_eq!(Color::new(255, 255, 255) * 0.999, Color::new(254, 254, 254));
    assert_eq!(Color::new(9, 9, 9) / 2.0, Color::new(4, 4, 4));
}

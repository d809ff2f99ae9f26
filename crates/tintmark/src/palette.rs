//! Named color table.
//!
//! Keys are lowercase; [`lookup`] folds the query before probing, which makes
//! every name case-insensitive. The table is a compile-time perfect hash map
//! and needs no initialization or locking.

use phf::phf_map;

use crate::color::Color;

/// Map of lowercase color names to their RGB values.
pub static NAMED_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "black" => Color::new(0, 0, 0),
    "white" => Color::new(255, 255, 255),
    "red" => Color::new(255, 0, 0),
    "green" => Color::new(0, 128, 0),
    "blue" => Color::new(0, 0, 255),
    "yellow" => Color::new(255, 255, 0),
    "cyan" => Color::new(0, 255, 255),
    "aqua" => Color::new(0, 255, 255),
    "magenta" => Color::new(255, 0, 255),
    "fuchsia" => Color::new(255, 0, 255),
    "bright_black" => Color::new(128, 128, 128),
    "bright_white" => Color::new(255, 255, 255),
    "bright_red" => Color::new(255, 85, 85),
    "bright_green" => Color::new(85, 255, 85),
    "bright_blue" => Color::new(85, 85, 255),
    "bright_yellow" => Color::new(255, 255, 85),
    "bright_cyan" => Color::new(85, 255, 255),
    "bright_magenta" => Color::new(255, 85, 255),
    "grey" => Color::new(128, 128, 128),
    "gray" => Color::new(128, 128, 128),
    "silver" => Color::new(192, 192, 192),
    "maroon" => Color::new(128, 0, 0),
    "olive" => Color::new(128, 128, 0),
    "navy" => Color::new(0, 0, 128),
    "purple" => Color::new(128, 0, 128),
    "teal" => Color::new(0, 128, 128),
    "lime" => Color::new(0, 255, 0),
    "orange" => Color::new(255, 165, 0),
    "pink" => Color::new(255, 192, 203),
    "brown" => Color::new(165, 42, 42),
    "coral" => Color::new(255, 127, 80),
    "gold" => Color::new(255, 215, 0),
    "indigo" => Color::new(75, 0, 130),
    "violet" => Color::new(238, 130, 238),
    "aliceblue" => Color::new(240, 248, 255),
    "antiquewhite" => Color::new(250, 235, 215),
    "aquamarine" => Color::new(127, 255, 212),
    "azure" => Color::new(240, 255, 255),
    "beige" => Color::new(245, 245, 220),
    "bisque" => Color::new(255, 228, 196),
    "blanchedalmond" => Color::new(255, 235, 205),
    "blueviolet" => Color::new(138, 43, 226),
    "burlywood" => Color::new(222, 184, 135),
    "cadetblue" => Color::new(95, 158, 160),
    "chartreuse" => Color::new(127, 255, 0),
    "chocolate" => Color::new(210, 105, 30),
    "cornflowerblue" => Color::new(100, 149, 237),
    "cornsilk" => Color::new(255, 248, 220),
    "crimson" => Color::new(220, 20, 60),
    "darkblue" => Color::new(0, 0, 139),
    "darkcyan" => Color::new(0, 139, 139),
    "darkgoldenrod" => Color::new(184, 134, 11),
    "darkgray" => Color::new(169, 169, 169),
    "darkgrey" => Color::new(169, 169, 169),
    "darkgreen" => Color::new(0, 100, 0),
    "darkkhaki" => Color::new(189, 183, 107),
    "darkmagenta" => Color::new(139, 0, 139),
    "darkolivegreen" => Color::new(85, 107, 47),
    "darkorange" => Color::new(255, 140, 0),
    "darkorchid" => Color::new(153, 50, 204),
    "darkred" => Color::new(139, 0, 0),
    "darksalmon" => Color::new(233, 150, 122),
    "darkseagreen" => Color::new(143, 188, 143),
    "darkslateblue" => Color::new(72, 61, 139),
    "darkslategray" => Color::new(47, 79, 79),
    "darkslategrey" => Color::new(47, 79, 79),
    "darkturquoise" => Color::new(0, 206, 209),
    "darkviolet" => Color::new(148, 0, 211),
    "deeppink" => Color::new(255, 20, 147),
    "deepskyblue" => Color::new(0, 191, 255),
    "dimgray" => Color::new(105, 105, 105),
    "dimgrey" => Color::new(105, 105, 105),
    "dodgerblue" => Color::new(30, 144, 255),
    "firebrick" => Color::new(178, 34, 34),
    "floralwhite" => Color::new(255, 250, 240),
    "forestgreen" => Color::new(34, 139, 34),
    "gainsboro" => Color::new(220, 220, 220),
    "ghostwhite" => Color::new(248, 248, 255),
    "goldenrod" => Color::new(218, 165, 32),
    "greenyellow" => Color::new(173, 255, 47),
    "honeydew" => Color::new(240, 255, 240),
    "hotpink" => Color::new(255, 105, 180),
    "indianred" => Color::new(205, 92, 92),
    "ivory" => Color::new(255, 255, 240),
    "khaki" => Color::new(240, 230, 140),
    "lavender" => Color::new(230, 230, 250),
    "lavenderblush" => Color::new(255, 240, 245),
    "lawngreen" => Color::new(124, 252, 0),
    "lemonchiffon" => Color::new(255, 250, 205),
    "lightblue" => Color::new(173, 216, 230),
    "lightcoral" => Color::new(240, 128, 128),
    "lightcyan" => Color::new(224, 255, 255),
    "lightgoldenrodyellow" => Color::new(250, 250, 210),
    "lightgray" => Color::new(211, 211, 211),
    "lightgrey" => Color::new(211, 211, 211),
    "lightgreen" => Color::new(144, 238, 144),
    "lightpink" => Color::new(255, 182, 193),
    "lightsalmon" => Color::new(255, 160, 122),
    "lightseagreen" => Color::new(32, 178, 170),
    "lightskyblue" => Color::new(135, 206, 250),
    "lightslategray" => Color::new(119, 136, 153),
    "lightslategrey" => Color::new(119, 136, 153),
    "lightsteelblue" => Color::new(176, 196, 222),
    "lightyellow" => Color::new(255, 255, 224),
    "limegreen" => Color::new(50, 205, 50),
    "linen" => Color::new(250, 240, 230),
    "mediumaquamarine" => Color::new(102, 205, 170),
    "mediumblue" => Color::new(0, 0, 205),
    "mediumorchid" => Color::new(186, 85, 211),
    "mediumpurple" => Color::new(147, 112, 219),
    "mediumseagreen" => Color::new(60, 179, 113),
    "mediumslateblue" => Color::new(123, 104, 238),
    "mediumspringgreen" => Color::new(0, 250, 154),
    "mediumturquoise" => Color::new(72, 209, 204),
    "mediumvioletred" => Color::new(199, 21, 133),
    "midnightblue" => Color::new(25, 25, 112),
    "mintcream" => Color::new(245, 255, 250),
    "mistyrose" => Color::new(255, 228, 225),
    "moccasin" => Color::new(255, 228, 181),
    "navajowhite" => Color::new(255, 222, 173),
    "oldlace" => Color::new(253, 245, 230),
    "olivedrab" => Color::new(107, 142, 35),
    "orangered" => Color::new(255, 69, 0),
    "orchid" => Color::new(218, 112, 214),
    "palegoldenrod" => Color::new(238, 232, 170),
    "palegreen" => Color::new(152, 251, 152),
    "paleturquoise" => Color::new(175, 238, 238),
    "palevioletred" => Color::new(219, 112, 147),
    "papayawhip" => Color::new(255, 239, 213),
    "peachpuff" => Color::new(255, 218, 185),
    "peru" => Color::new(205, 133, 63),
    "plum" => Color::new(221, 160, 221),
    "powderblue" => Color::new(176, 224, 230),
    "rebeccapurple" => Color::new(102, 51, 153),
    "rosybrown" => Color::new(188, 143, 143),
    "royalblue" => Color::new(65, 105, 225),
    "saddlebrown" => Color::new(139, 69, 19),
    "salmon" => Color::new(250, 128, 114),
    "sandybrown" => Color::new(244, 164, 96),
    "seagreen" => Color::new(46, 139, 87),
    "seashell" => Color::new(255, 245, 238),
    "sienna" => Color::new(160, 82, 45),
    "skyblue" => Color::new(135, 206, 235),
    "slateblue" => Color::new(106, 90, 205),
    "slategray" => Color::new(112, 128, 144),
    "slategrey" => Color::new(112, 128, 144),
    "snow" => Color::new(255, 250, 250),
    "springgreen" => Color::new(0, 255, 127),
    "steelblue" => Color::new(70, 130, 180),
    "tan" => Color::new(210, 180, 140),
    "thistle" => Color::new(216, 191, 216),
    "tomato" => Color::new(255, 99, 71),
    "turquoise" => Color::new(64, 224, 208),
    "wheat" => Color::new(245, 222, 179),
    "whitesmoke" => Color::new(245, 245, 245),
    "yellowgreen" => Color::new(154, 205, 50),
};

/// Look up a named color, ignoring ASCII case.
///
/// ```
/// use tintmark::{palette, Color};
///
/// assert_eq!(palette::lookup("Red"), Some(Color::new(255, 0, 0)));
/// assert_eq!(palette::lookup("not-a-color"), None);
/// ```
pub fn lookup(name: &str) -> Option<Color> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
    } else {
        NAMED_COLORS.get(name).copied()
    }
}

/// Iterate over every `(name, color)` pair in the table.
pub fn entries() -> impl Iterator<Item = (&'static str, Color)> {
    NAMED_COLORS.entries().map(|(name, color)| (*name, *color))
}

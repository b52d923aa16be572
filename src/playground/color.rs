// src/playground/color.rs — Item colors: parsing, random generation, presets
//
// Items carry colors as strings (hex or CSS names) so they round-trip to
// the scoring service untouched. Parsing only happens for drawing.

/// A handful of CSS names users tend to type. Anything else must be hex.
const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("blue", (0, 0, 255)),
    ("navy", (0, 0, 128)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("teal", (0, 128, 128)),
    ("gold", (255, 215, 0)),
];

/// Colors offered by the picker before the user types their own.
pub const PRESETS: [&str; 12] = [
    "#D0021B", "#F5A623", "#F8E71C", "#8B572A", "#7ED321", "#417505", "#BD10E0", "#9013FE",
    "#4A90E2", "#50E3C2", "#B8E986", "#000000",
];

/// Parse `#rgb`, `#rrggbb` or a known color name into RGB.
pub fn parse_rgb(input: &str) -> Option<(u8, u8, u8)> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = s.to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut digits = hex.chars().filter_map(|c| c.to_digit(16));
            let r = digits.next()? as u8;
            let g = digits.next()? as u8;
            let b = digits.next()? as u8;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

pub fn is_valid(input: &str) -> bool {
    parse_rgb(input).is_some()
}

/// Format RGB as `#rrggbb`.
pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// A random `#rrggbb` color for freshly added items.
pub fn random_color() -> String {
    let mut buf = [0u8; 3];
    if getrandom::getrandom(&mut buf).is_err() {
        // uuid v4 bytes are random too
        let id = uuid::Uuid::new_v4();
        buf.copy_from_slice(&id.as_bytes()[..3]);
    }
    to_hex((buf[0], buf[1], buf[2]))
}

/// The preset following `current`, or the first one.
pub fn next_preset(current: &str) -> &'static str {
    let idx = PRESETS
        .iter()
        .position(|p| p.eq_ignore_ascii_case(current.trim()))
        .map(|i| (i + 1) % PRESETS.len())
        .unwrap_or(0);
    PRESETS[idx]
}

pub fn prev_preset(current: &str) -> &'static str {
    let idx = PRESETS
        .iter()
        .position(|p| p.eq_ignore_ascii_case(current.trim()))
        .map(|i| (i + PRESETS.len() - 1) % PRESETS.len())
        .unwrap_or(PRESETS.len() - 1);
    PRESETS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(parse_rgb("#DA291C"), Some((0xDA, 0x29, 0x1C)));
        assert_eq!(parse_rgb("#6cabdd"), Some((0x6C, 0xAB, 0xDD)));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_rgb("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_rgb("#a0c"), Some((0xAA, 0x00, 0xCC)));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_rgb("orange"), Some((255, 165, 0)));
        assert_eq!(parse_rgb("  Blue "), Some((0, 0, 255)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_rgb("#12345"), None);
        assert_eq!(parse_rgb("#gggggg"), None);
        assert_eq!(parse_rgb("chartreuse-ish"), None);
        assert_eq!(parse_rgb(""), None);
        assert_eq!(parse_rgb("#é12"), None);
    }

    #[test]
    fn test_random_color_is_valid_hex() {
        for _ in 0..32 {
            let c = random_color();
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
            assert!(is_valid(&c));
        }
    }

    #[test]
    fn test_to_hex_pads() {
        assert_eq!(to_hex((0, 1, 255)), "#0001ff");
    }

    #[test]
    fn test_preset_cycle() {
        assert_eq!(next_preset("not a preset"), PRESETS[0]);
        assert_eq!(next_preset(PRESETS[0]), PRESETS[1]);
        assert_eq!(next_preset(PRESETS[PRESETS.len() - 1]), PRESETS[0]);
        assert_eq!(prev_preset(PRESETS[0]), PRESETS[PRESETS.len() - 1]);
        assert_eq!(prev_preset("#d0021b"), PRESETS[PRESETS.len() - 1]);
    }
}

use super::Rgb16;

const NAMED: &[(&str, Rgb16)] = &[
    ("black", Rgb16::BLACK),
    ("white", Rgb16::WHITE),
    ("red", Rgb16::from_u8(255, 0, 0)),
    ("green", Rgb16::from_u8(0, 255, 0)),
    ("blue", Rgb16::from_u8(0, 0, 255)),
    ("yellow", Rgb16::from_u8(255, 255, 0)),
    ("cyan", Rgb16::from_u8(0, 255, 255)),
    ("magenta", Rgb16::from_u8(255, 0, 255)),
    ("gray", Rgb16::from_u8(190, 190, 190)),
    ("grey", Rgb16::from_u8(190, 190, 190)),
];

/// Parses a surface color string.
///
/// Accepted forms:
/// - `#RGB`, `#RRGGBB`, `#RRRGGGBBB`, `#RRRRGGGGBBBB` (case-insensitive hex)
/// - a small set of names (`black`, `white`, `red`, `green`, `blue`, ...)
///
/// Hex channels are widened to 16 bits by digit replication, so the maximum
/// value of every form is white. Returns `None` for the empty string
/// ("not painted") and for anything unrecognised.
pub fn parse_color_spec(spec: &str) -> Option<Rgb16> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }

    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex);
    }

    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(spec))
        .map(|&(_, rgb)| rgb)
}

fn parse_hex(hex: &str) -> Option<Rgb16> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let digits = match hex.len() {
        3 | 6 | 9 | 12 => hex.len() / 3,
        _ => return None,
    };

    let channel = |i: usize| -> Option<u16> {
        let raw = u16::from_str_radix(&hex[i * digits..(i + 1) * digits], 16).ok()?;
        Some(widen(raw, digits))
    };

    Some(Rgb16::new(channel(0)?, channel(1)?, channel(2)?))
}

/// Widens an `n`-digit hex value to 16 bits by repeating its bit pattern.
fn widen(raw: u16, digits: usize) -> u16 {
    match digits {
        1 => raw * 0x1111,
        2 => raw * 0x0101,
        3 => (raw << 4) | (raw >> 8),
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn six_digit_hex() {
        assert_eq!(parse_color_spec("#0000FF"), Some(Rgb16::new(0, 0, 0xFFFF)));
        assert_eq!(parse_color_spec("#ff8000"), Some(Rgb16::new(0xFFFF, 0x8080, 0)));
    }

    #[test]
    fn every_form_tops_out_at_white() {
        for s in ["#fff", "#ffffff", "#fffffffff", "#ffffffffffff"] {
            assert_eq!(parse_color_spec(s), Some(Rgb16::WHITE), "{s}");
        }
    }

    #[test]
    fn short_hex_replicates_digits() {
        assert_eq!(parse_color_spec("#1a0"), Some(Rgb16::new(0x1111, 0xAAAA, 0)));
    }

    #[test]
    fn malformed_hex_rejected() {
        assert_eq!(parse_color_spec("#12345"), None);
        assert_eq!(parse_color_spec("#gg0000"), None);
        assert_eq!(parse_color_spec("#"), None);
    }

    // ── names ─────────────────────────────────────────────────────────────

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(parse_color_spec("White"), Some(Rgb16::WHITE));
        assert_eq!(parse_color_spec("BLACK"), Some(Rgb16::BLACK));
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(parse_color_spec("chartreuse-ish"), None);
    }

    #[test]
    fn empty_is_unpainted() {
        assert_eq!(parse_color_spec(""), None);
    }
}

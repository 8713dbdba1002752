use palette::Srgb;
use std::str::FromStr;

pub fn parse_hex(value: &str) -> Option<Srgb<u8>> {
    Srgb::from_str(value).ok()
}

pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Per-channel midpoint of two colors, rounded half up.
pub fn blend(a: Srgb<u8>, b: Srgb<u8>) -> Srgb<u8> {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16 + 1) / 2) as u8;
    Srgb::new(
        mid(a.red, b.red),
        mid(a.green, b.green),
        mid(a.blue, b.blue),
    )
}

/// Three stops for a two-color blend: first, midpoint, second.
pub fn gradient(a: Srgb<u8>, b: Srgb<u8>) -> [Srgb<u8>; 3] {
    [a, blend(a, b), b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FFD700"), Some(Srgb::new(0xff, 0xd7, 0x00)));
        assert_eq!(parse_hex("#00c853"), Some(Srgb::new(0x00, 0xc8, 0x53)));
        assert_eq!(parse_hex("not a color"), None);
    }

    #[test]
    fn test_to_hex_is_lowercase_and_padded() {
        assert_eq!(to_hex(Srgb::new(0x0d, 0x47, 0xa1)), "#0d47a1");
        assert_eq!(to_hex(Srgb::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn test_blend_rounds_midpoint() {
        let joy = Srgb::new(0xff, 0xd7, 0x00);
        let trust = Srgb::new(0x00, 0xc8, 0x53);
        // (255 + 0) / 2 = 127.5 -> 128, (215 + 200) / 2 = 207.5 -> 208, 83 / 2 = 41.5 -> 42
        assert_eq!(blend(joy, trust), Srgb::new(128, 208, 42));
        assert_eq!(blend(joy, joy), joy);
    }

    #[test]
    fn test_gradient_keeps_endpoints() {
        let a = Srgb::new(10, 20, 30);
        let b = Srgb::new(30, 40, 50);
        assert_eq!(gradient(a, b), [a, Srgb::new(20, 30, 40), b]);
    }
}

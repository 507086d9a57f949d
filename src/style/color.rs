use crate::style::PropValueParse;
use cssparser::parse_color_keyword;
use skia_safe::Color;
use std::str::FromStr;

impl PropValueParse for Color {
    fn parse_prop_value(value: &str) -> Option<Self> {
        parse_color(value)
    }
    fn to_style_string(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

pub trait ColorHelper {
    fn is_transparent(&self) -> bool;
}

impl ColorHelper for Color {
    fn is_transparent(&self) -> bool {
        self.a() == 0
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_digit(hi)? * 16 + hex_digit(lo)?)
}

/// Parses `rgb`, `rgba`, `rrggbb` or `rrggbbaa` without the leading `#`.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let b = hex.as_bytes();
    match b.len() {
        3 | 4 => {
            let mut v = [255u8; 4];
            for (i, c) in b.iter().enumerate() {
                let d = hex_digit(*c)?;
                v[i] = d * 17;
            }
            Some(Color::from_argb(v[3], v[0], v[1], v[2]))
        }
        6 | 8 => {
            let mut v = [255u8; 4];
            for (i, pair) in b.chunks(2).enumerate() {
                v[i] = hex_pair(pair[0], pair[1])?;
            }
            Some(Color::from_argb(v[3], v[0], v[1], v[2]))
        }
        _ => None,
    }
}

/// Channels of `rgb()` and `rgba()` are integers 0-255, alpha included.
pub fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix("#") {
        parse_hex_color(hex)
    } else if let Ok(c) = parse_color_keyword(value) {
        match c {
            cssparser::Color::CurrentColor => None,
            cssparser::Color::RGBA(rgba) => Some(Color::from_argb(
                rgba.alpha, rgba.red, rgba.green, rgba.blue,
            )),
        }
    } else if let Some(rgb) = value.strip_prefix("rgb(") {
        let mut params = rgb.strip_suffix(")")?.split(',').map(|p| p.trim());
        let r = u8::from_str(params.next()?).ok()?;
        let g = u8::from_str(params.next()?).ok()?;
        let b = u8::from_str(params.next()?).ok()?;
        if params.next().is_none() {
            Some(Color::from_rgb(r, g, b))
        } else {
            None
        }
    } else if let Some(rgba) = value.strip_prefix("rgba(") {
        let mut params = rgba.strip_suffix(")")?.split(',').map(|p| p.trim());
        let r = u8::from_str(params.next()?).ok()?;
        let g = u8::from_str(params.next()?).ok()?;
        let b = u8::from_str(params.next()?).ok()?;
        let a = u8::from_str(params.next()?).ok()?;
        if params.next().is_none() {
            Some(Color::from_argb(a, r, g, b))
        } else {
            None
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::style::color::{parse_color, parse_hex_color, ColorHelper};
    use crate::style::PropValueParse;
    use skia_safe::Color;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Some(Color::from_rgb(255, 0, 0)), parse_hex_color("f00"));
        assert_eq!(Some(Color::from_argb(0x80, 0x11, 0x22, 0x33)), parse_hex_color("11223380"));
        assert_eq!(Some(Color::from_rgb(0x12, 0xab, 0xEF)), parse_hex_color("12abEF"));
        assert_eq!(None, parse_hex_color("12345"));
        assert_eq!(None, parse_hex_color("zzzzzz"));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(Some(Color::RED), parse_color("red"));
        assert_eq!(Some(Color::from_rgb(1, 2, 3)), parse_color("rgb(1, 2, 3)"));
        assert_eq!(Some(Color::from_argb(4, 1, 2, 3)), parse_color("rgba(1,2,3,4)"));
        assert_eq!(None, parse_color("rgb(1,2)"));
        assert_eq!(Some(Color::from_argb(128, 255, 0, 0)), parse_color("rgba(255, 0, 0, 128)"));
        assert_eq!(None, parse_color("rgba(255,0,0,0.5)"));
        assert_eq!(None, parse_color("currentcolor"));
        assert!(parse_color("transparent").unwrap().is_transparent());
    }

    #[test]
    fn test_style_string() {
        assert_eq!("#FF0000FF", Color::RED.to_style_string());
    }
}

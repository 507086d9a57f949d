use crate::style::PropValueParse;
use std::str::FromStr;

/// Pixel ratio of the display a border is drawn on.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Density {
    /// Device pixels per dp.
    pub density: f32,
}

impl Density {
    pub fn new(density: f32) -> Self {
        Self { density }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Device independent length.
#[derive(Clone, Debug, PartialEq, PartialOrd, Copy, Default)]
pub struct Dp(pub f32);

impl Dp {
    /// The thinnest line the display can show, always one device pixel.
    pub const HAIRLINE: Dp = Dp(0.0);

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_hairline(&self) -> bool {
        *self == Self::HAIRLINE
    }

    pub fn to_px(&self, density: &Density) -> f32 {
        self.0 * density.density
    }

    /// Stroke thickness in device pixels.
    pub fn to_stroke_px(&self, density: &Density) -> f32 {
        if self.is_hairline() {
            1.0
        } else {
            self.to_px(density)
        }
    }

    pub fn to_str(&self) -> String {
        if self.is_hairline() {
            "hairline".to_string()
        } else {
            format!("{}dp", self.0)
        }
    }

    fn parse_f32(value: &str) -> Option<f32> {
        let value = value.trim();
        let v = f32::from_str(value).ok()?;
        if v.is_finite() {
            Some(v)
        } else {
            None
        }
    }
}

impl PropValueParse for Dp {
    fn parse_prop_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("hairline") {
            Some(Dp::HAIRLINE)
        } else if let Some(v) = value.strip_suffix("dp") {
            Some(Dp(Self::parse_f32(v)?))
        } else {
            Some(Dp(Self::parse_f32(value)?))
        }
    }

    fn to_style_string(&self) -> String {
        self.to_str()
    }
}

pub fn parse_percent(value: &str) -> Option<f32> {
    if let Some(v) = value.strip_suffix("%") {
        let v = f32::from_str(v.trim()).ok()?;
        Some(v)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::style::length::{parse_percent, Density, Dp};
    use crate::style::PropValueParse;

    #[test]
    fn test_hairline_is_one_pixel() {
        for d in [1.0, 2.0, 3.0] {
            assert_eq!(1.0, Dp::HAIRLINE.to_stroke_px(&Density::new(d)));
        }
        assert_eq!(1.0, Dp(0.0).to_stroke_px(&Density::new(2.5)));
    }

    #[test]
    fn test_stroke_scales_with_density() {
        assert_eq!(10.0, Dp(10.0).to_stroke_px(&Density::new(1.0)));
        assert_eq!(30.0, Dp(10.0).to_stroke_px(&Density::new(3.0)));
        assert_eq!(0.5, Dp(0.25).to_stroke_px(&Density::new(2.0)));
    }

    #[test]
    fn test_density_is_pixel_ratio_only() {
        assert_eq!(Density { density: 1.0 }, Density::default());
        assert_eq!(Density { density: 2.0 }, Density::new(2.0));
        assert_eq!(6.0, Dp(3.0).to_px(&Density { density: 2.0 }));
    }

    #[test]
    fn test_parse_dp() {
        assert_eq!(Some(Dp(2.0)), Dp::parse_prop_value("2dp"));
        assert_eq!(Some(Dp(1.5)), Dp::parse_prop_value(" 1.5 "));
        assert_eq!(Some(Dp::HAIRLINE), Dp::parse_prop_value("Hairline"));
        assert_eq!(None, Dp::parse_prop_value("2px"));
        assert_eq!(None, Dp::parse_prop_value("NaNdp"));
        assert_eq!("hairline", Dp::HAIRLINE.to_style_string());
        assert_eq!("4dp", Dp(4.0).to_style_string());
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(Some(50.0), parse_percent("50%"));
        assert_eq!(None, parse_percent("50"));
    }
}

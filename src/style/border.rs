use crate::border::Border;
use crate::brush::Brush;
use crate::error::{BorderError, BorderResult};
use crate::shape::{CornerSize, Corners, Shape};
use crate::style::color::parse_color;
use crate::style::length::Dp;
use crate::style::PropValueParse;
use log::warn;
use skia_safe::Color;
use std::str::FromStr;

/// Border declaration such as `2dp #ff0000 rounded(8dp)`.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderStyle {
    pub shape: Shape,
    pub width: Dp,
    pub brush: Brush,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            shape: Shape::Rectangle,
            width: Dp(1.0),
            brush: Brush::Solid(Color::BLACK),
        }
    }
}

impl BorderStyle {
    pub fn into_border(self) -> Border {
        Border::new(self.shape, self.width, self.brush)
    }
}

fn parse_shape(value: &str) -> BorderResult<Option<Shape>> {
    let shape = if value.eq_ignore_ascii_case("rect") {
        Shape::Rectangle
    } else if value.eq_ignore_ascii_case("circle") {
        Shape::Circle
    } else if let Some(arg) = value.strip_prefix("rounded(") {
        Shape::RoundedCorner(parse_corners(arg)?)
    } else if let Some(arg) = value.strip_prefix("cut(") {
        Shape::CutCorner(parse_corners(arg)?)
    } else {
        return Ok(None);
    };
    Ok(Some(shape))
}

/// One size for all corners, or four comma separated sizes starting top-left.
fn parse_corners(arg: &str) -> BorderResult<Corners> {
    let invalid = || BorderError::InvalidLength(arg.to_string());
    let sizes = arg
        .strip_suffix(")")
        .ok_or_else(invalid)?
        .split(',')
        .map(CornerSize::parse_prop_value)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;
    match sizes.as_slice() {
        [all] => Ok(Corners::all(*all)),
        [tl, tr, br, bl] => Ok(Corners([*tl, *tr, *br, *bl])),
        _ => Err(invalid()),
    }
}

fn corners_to_string(corners: &Corners) -> String {
    let [first, ..] = corners.0;
    if corners.0.iter().all(|c| *c == first) {
        first.to_style_string()
    } else {
        corners
            .0
            .iter()
            .map(|c| c.to_style_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn looks_like_length(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '-')
}

impl FromStr for BorderStyle {
    type Err = BorderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut style = BorderStyle::default();
        for p in value.split_whitespace() {
            if let Some(w) = Dp::parse_prop_value(p) {
                if w.value() < 0.0 {
                    return Err(BorderError::InvalidLength(p.to_string()));
                }
                style.width = w;
            } else if let Some(shape) = parse_shape(p)? {
                style.shape = shape;
            } else if let Some(c) = parse_color(p) {
                style.brush = Brush::Solid(c);
            } else if looks_like_length(p) {
                warn!("unsupported border width: {}", p);
                return Err(BorderError::InvalidLength(p.to_string()));
            } else if p.starts_with('#') || p.starts_with("rgb") {
                warn!("unsupported border color: {}", p);
                return Err(BorderError::InvalidColor(p.to_string()));
            } else {
                warn!("unknown border token: {}", p);
                return Err(BorderError::InvalidParameter(p.to_string()));
            }
        }
        Ok(style)
    }
}

impl PropValueParse for BorderStyle {
    fn parse_prop_value(value: &str) -> Option<Self> {
        BorderStyle::from_str(value).ok()
    }

    /// Declaration text for this style. Lossy for values the declaration
    /// syntax cannot express: a generic shape is written as `rect` and a
    /// gradient brush as black.
    fn to_style_string(&self) -> String {
        let shape = match &self.shape {
            Shape::Rectangle => "rect".to_string(),
            Shape::Circle => "circle".to_string(),
            Shape::RoundedCorner(c) => format!("rounded({})", corners_to_string(c)),
            Shape::CutCorner(c) => format!("cut({})", corners_to_string(c)),
            Shape::Generic(_) => "rect".to_string(),
        };
        let color = match &self.brush {
            Brush::Solid(c) => c.to_style_string(),
            _ => Color::BLACK.to_style_string(),
        };
        format!("{} {} {}", self.width.to_style_string(), color, shape)
    }
}

#[cfg(test)]
mod tests {
    use crate::brush::Brush;
    use crate::error::BorderError;
    use crate::shape::{CornerSize, Corners, GenericShape, Shape};
    use crate::style::border::BorderStyle;
    use crate::style::length::Dp;
    use crate::style::PropValueParse;
    use skia_safe::Color;
    use std::str::FromStr;

    #[test]
    fn test_parse_border() {
        let style = BorderStyle::from_str("2dp #ff0000 rounded(8dp)").unwrap();
        assert_eq!(Dp(2.0), style.width);
        assert_eq!(Brush::Solid(Color::RED), style.brush);
        assert_eq!(Shape::rounded(CornerSize::Dp(Dp(8.0))), style.shape);

        let style = BorderStyle::from_str("circle hairline blue").unwrap();
        assert_eq!(Dp::HAIRLINE, style.width);
        assert_eq!(Shape::Circle, style.shape);
        assert_eq!(Brush::Solid(Color::BLUE), style.brush);

        let style = BorderStyle::from_str("cut(25%) 3").unwrap();
        assert_eq!(Dp(3.0), style.width);
        assert_eq!(Shape::cut(CornerSize::Percent(25.0)), style.shape);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(BorderStyle::default(), BorderStyle::from_str("").unwrap());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Err(BorderError::InvalidLength("2px".to_string())),
            BorderStyle::from_str("2px red")
        );
        assert_eq!(
            Err(BorderError::InvalidLength("-1dp".to_string())),
            BorderStyle::from_str("-1dp")
        );
        assert_eq!(
            Err(BorderError::InvalidColor("#12345".to_string())),
            BorderStyle::from_str("#12345")
        );
        assert_eq!(
            Err(BorderError::InvalidLength("huge)".to_string())),
            BorderStyle::from_str("rounded(huge)")
        );
        assert_eq!(
            Err(BorderError::InvalidParameter("dashed".to_string())),
            BorderStyle::from_str("1dp dashed")
        );
        assert_eq!(None, BorderStyle::parse_prop_value("dashed"));
    }

    #[test]
    fn test_style_string() {
        let style = BorderStyle::from_str("4dp red rounded(50%)").unwrap();
        assert_eq!("4dp #FF0000FF rounded(50%)", style.to_style_string());
        assert_eq!(Some(style.clone()), BorderStyle::parse_prop_value(&style.to_style_string()));
    }

    #[test]
    fn test_per_corner_round_trip() {
        let style = BorderStyle::from_str("1dp black cut(4dp,1dp,10%,2px)").unwrap();
        let corners = Corners([
            CornerSize::Dp(Dp(4.0)),
            CornerSize::Dp(Dp(1.0)),
            CornerSize::Percent(10.0),
            CornerSize::Px(2.0),
        ]);
        assert_eq!(Shape::CutCorner(corners), style.shape);
        assert_eq!("1dp #000000FF cut(4dp,1dp,10%,2px)", style.to_style_string());
        assert_eq!(Some(style.clone()), BorderStyle::parse_prop_value(&style.to_style_string()));

        assert_eq!(
            Err(BorderError::InvalidLength("1dp,2dp)".to_string())),
            BorderStyle::from_str("rounded(1dp,2dp)")
        );
    }

    #[test]
    fn test_lossy_style_string() {
        let style = BorderStyle {
            shape: Shape::Generic(GenericShape::new(|_, _| {})),
            width: Dp(2.0),
            brush: Brush::linear_gradient(vec![Color::RED, Color::BLUE], (0.0, 0.0), (1.0, 0.0)),
        };
        assert_eq!("2dp #000000FF rect", style.to_style_string());
        assert_ne!(Some(style.clone()), BorderStyle::parse_prop_value(&style.to_style_string()));
    }

    #[test]
    fn test_into_border() {
        let border = BorderStyle::from_str("2dp #00ff00").unwrap().into_border();
        assert_eq!(Dp(2.0), border.cache().width());
        assert_eq!(&Brush::Solid(Color::GREEN), border.cache().brush());
    }
}

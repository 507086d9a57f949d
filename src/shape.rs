use crate::style::length::{parse_percent, Density, Dp};
use crate::style::PropValueParse;
use skia_safe::path::AddPathMode;
use skia_safe::{Path, RRect, Rect, Size, Vector};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use std::str::FromStr;

/// Silhouette of a shape at one concrete size.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Rectangle(Rect),
    Rounded(RRect),
    Generic(Path),
}

impl Outline {
    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Rectangle(r) => *r,
            Outline::Rounded(rr) => *rr.rect(),
            Outline::Generic(p) => *p.bounds(),
        }
    }
}

pub trait PathHelper {
    fn add_outline(&mut self, outline: &Outline) -> &mut Self;
}

impl PathHelper for Path {
    fn add_outline(&mut self, outline: &Outline) -> &mut Self {
        match outline {
            Outline::Rectangle(rect) => self.add_rect(rect, None),
            Outline::Rounded(rrect) => self.add_rrect(rrect, None),
            Outline::Generic(path) => self.add_path(path, (0.0, 0.0), AddPathMode::Append),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Copy)]
pub enum CornerSize {
    Dp(Dp),
    Px(f32),
    /// Percent of the smaller side.
    Percent(f32),
}

impl CornerSize {
    pub const ZERO: CornerSize = CornerSize::Px(0.0);

    pub fn to_px(&self, shape_size: Size, density: &Density) -> f32 {
        let min_dimension = f32::min(shape_size.width, shape_size.height);
        let px = match self {
            CornerSize::Dp(dp) => dp.to_px(density),
            CornerSize::Px(px) => *px,
            CornerSize::Percent(p) => min_dimension * p / 100.0,
        };
        px.clamp(0.0, f32::max(0.0, min_dimension / 2.0))
    }
}

impl PropValueParse for CornerSize {
    fn parse_prop_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(p) = parse_percent(value) {
            Some(CornerSize::Percent(p))
        } else if let Some(v) = value.strip_suffix("px") {
            let v = f32::from_str(v.trim()).ok()?;
            Some(CornerSize::Px(v))
        } else {
            Some(CornerSize::Dp(Dp::parse_prop_value(value)?))
        }
    }

    fn to_style_string(&self) -> String {
        match self {
            CornerSize::Dp(dp) => dp.to_style_string(),
            CornerSize::Px(px) => format!("{}px", px),
            CornerSize::Percent(p) => format!("{}%", p),
        }
    }
}

/// Corner sizes in the order top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Corners(pub [CornerSize; 4]);

impl Corners {
    pub fn all(size: CornerSize) -> Self {
        Self([size; 4])
    }

    fn resolve(&self, size: Size, density: &Density) -> [f32; 4] {
        self.0.map(|c| c.to_px(size, density))
    }
}

#[derive(Clone)]
pub struct GenericShape {
    builder: Rc<dyn Fn(&mut Path, Size)>,
}

impl GenericShape {
    pub fn new<F: Fn(&mut Path, Size) + 'static>(builder: F) -> Self {
        Self {
            builder: Rc::new(builder),
        }
    }
}

impl PartialEq for GenericShape {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.builder, &other.builder)
    }
}

impl Debug for GenericShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("GenericShape")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rectangle,
    Circle,
    RoundedCorner(Corners),
    CutCorner(Corners),
    Generic(GenericShape),
}

impl Shape {
    pub fn rounded(radius: CornerSize) -> Self {
        Shape::RoundedCorner(Corners::all(radius))
    }

    pub fn cut(size: CornerSize) -> Self {
        Shape::CutCorner(Corners::all(size))
    }

    pub fn create_outline(&self, size: Size, density: &Density) -> Outline {
        let rect = Rect::from_wh(size.width, size.height);
        match self {
            Shape::Rectangle => Outline::Rectangle(rect),
            Shape::Circle => {
                Self::rounded_outline(rect, Corners::all(CornerSize::Percent(50.0)), size, density)
            }
            Shape::RoundedCorner(corners) => Self::rounded_outline(rect, *corners, size, density),
            Shape::CutCorner(corners) => {
                let [tl, tr, br, bl] = corners.resolve(size, density);
                if tl + tr + br + bl == 0.0 {
                    return Outline::Rectangle(rect);
                }
                let (w, h) = (size.width, size.height);
                let mut p = Path::new();
                p.move_to((0.0, tl));
                p.line_to((tl, 0.0));
                p.line_to((w - tr, 0.0));
                p.line_to((w, tr));
                p.line_to((w, h - br));
                p.line_to((w - br, h));
                p.line_to((bl, h));
                p.line_to((0.0, h - bl));
                p.close();
                Outline::Generic(p)
            }
            Shape::Generic(shape) => {
                let mut p = Path::new();
                (shape.builder)(&mut p, size);
                Outline::Generic(p)
            }
        }
    }

    fn rounded_outline(rect: Rect, corners: Corners, size: Size, density: &Density) -> Outline {
        let radius = corners.resolve(size, density);
        if radius.iter().all(|r| *r == 0.0) {
            return Outline::Rectangle(rect);
        }
        let radii = radius.map(|r| Vector::new(r, r));
        Outline::Rounded(RRect::new_rect_radii(rect, &radii))
    }
}

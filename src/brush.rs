use log::warn;
use skia_safe::{Color, Paint, Point, Shader, TileMode};

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient {
        colors: Vec<Color>,
        stops: Option<Vec<f32>>,
        start: Point,
        end: Point,
        tile_mode: TileMode,
    },
    RadialGradient {
        colors: Vec<Color>,
        stops: Option<Vec<f32>>,
        center: Point,
        radius: f32,
        tile_mode: TileMode,
    },
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl Brush {
    pub fn linear_gradient(colors: Vec<Color>, start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Brush::LinearGradient {
            colors,
            stops: None,
            start: start.into(),
            end: end.into(),
            tile_mode: TileMode::Clamp,
        }
    }

    pub fn radial_gradient(colors: Vec<Color>, center: impl Into<Point>, radius: f32) -> Self {
        Brush::RadialGradient {
            colors,
            stops: None,
            center: center.into(),
            radius,
            tile_mode: TileMode::Clamp,
        }
    }

    fn create_shader(&self) -> Option<Shader> {
        let (colors, stops) = match self {
            Brush::Solid(_) => return None,
            Brush::LinearGradient { colors, stops, .. } => (colors, stops),
            Brush::RadialGradient { colors, stops, .. } => (colors, stops),
        };
        if colors.len() < 2 || stops.as_ref().is_some_and(|s| s.len() != colors.len()) {
            return None;
        }
        match self {
            Brush::Solid(_) => None,
            Brush::LinearGradient {
                colors,
                stops,
                start,
                end,
                tile_mode,
            } => Shader::linear_gradient(
                (*start, *end),
                colors.as_slice(),
                stops.as_deref(),
                *tile_mode,
                None,
                None,
            ),
            Brush::RadialGradient {
                colors,
                stops,
                center,
                radius,
                tile_mode,
            } => Shader::radial_gradient(
                *center,
                *radius,
                colors.as_slice(),
                stops.as_deref(),
                *tile_mode,
                None,
                None,
            ),
        }
    }

    /// Binds this brush to the fill parameters of `paint`.
    pub fn apply_to(&self, paint: &mut Paint) {
        match self {
            Brush::Solid(color) => {
                paint.set_shader(None);
                paint.set_color(*color);
            }
            _ => match self.create_shader() {
                Some(shader) => {
                    paint.set_color(Color::BLACK);
                    paint.set_shader(shader);
                }
                None => {
                    warn!("unusable gradient brush {:?}", self);
                    paint.set_shader(None);
                    paint.set_color(Color::TRANSPARENT);
                }
            },
        }
    }
}

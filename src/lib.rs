pub mod border;
pub mod brush;
pub mod canvas_util;
pub mod error;
pub mod shape;
pub mod state;
pub mod style;

pub use border::{remember_border, Border, DrawModifier};
pub use brush::Brush;
pub use error::{BorderError, BorderResult};
pub use shape::{CornerSize, Corners, GenericShape, Outline, Shape};
pub use style::border::BorderStyle;
pub use style::length::{Density, Dp};

pub mod cache;

use crate::border::cache::BorderDrawingCache;
use crate::brush::Brush;
use crate::canvas_util::PathCanvas;
use crate::shape::Shape;
use crate::state::StateStore;
use crate::style::length::{Density, Dp};
use skia_safe::{Color, Size};

/// Decoration hooked into the draw pass of an element.
pub trait DrawModifier {
    fn draw(
        &mut self,
        density: &Density,
        draw_content: &mut dyn FnMut(),
        canvas: &dyn PathCanvas,
        size: Size,
    );
}

/// Border drawn as an inner stroke of `shape`.
///
/// Use [`Dp::HAIRLINE`] as width for a one pixel border.
pub struct Border {
    cache: BorderDrawingCache,
}

impl Border {
    pub fn new(shape: Shape, width: Dp, brush: Brush) -> Self {
        Self {
            cache: BorderDrawingCache::new(shape, width, brush),
        }
    }

    pub fn with_color(shape: Shape, width: Dp, color: Color) -> Self {
        Self::new(shape, width, Brush::Solid(color))
    }

    pub fn update(&mut self, shape: Shape, width: Dp, brush: Brush) {
        self.cache.set_brush(brush);
        self.cache.set_shape(shape);
        self.cache.set_width(width);
    }

    pub fn cache(&self) -> &BorderDrawingCache {
        &self.cache
    }
}

impl DrawModifier for Border {
    fn draw(
        &mut self,
        density: &Density,
        draw_content: &mut dyn FnMut(),
        canvas: &dyn PathCanvas,
        size: Size,
    ) {
        self.cache.prepare(density, size);
        draw_content();
        canvas.fill_path(self.cache.diff_path(), self.cache.paint());
    }
}

/// Returns the border retained for `element_id`, created on first use and
/// updated with the current inputs.
pub fn remember_border(
    store: &mut StateStore<Border>,
    element_id: u32,
    shape: Shape,
    width: Dp,
    brush: Brush,
) -> &mut Border {
    let border = store.remember(element_id, || {
        Border::new(shape.clone(), width, brush.clone())
    });
    border.update(shape, width, brush);
    border
}

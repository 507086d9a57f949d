use crate::brush::Brush;
use crate::shape::{PathHelper, Shape};
use crate::style::length::{Density, Dp};
use bitflags::bitflags;
use log::{debug, trace, warn};
use measure_time::trace_time;
use skia_safe::{Paint, PaintStyle, Path, PathOp, Size};

bitflags! {
    /// Outlines that must be rebuilt before the next draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Stale: u8 {
        const OUTER = 1 << 0;
        const DIFF = 1 << 1;
    }
}

/// Last used value of one input.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    value: T,
}

impl<T: PartialEq> Tracked<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Stores `value`, returns whether it differs from the previous one.
    pub fn update(&mut self, value: T) -> bool {
        if self.value == value {
            false
        } else {
            self.value = value;
            true
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RebuildStats {
    pub outer: u32,
    pub diff: u32,
}

pub struct BorderDrawingCache {
    outer_path: Path,
    inner_path: Path,
    diff_path: Path,
    paint: Paint,
    stale: Stale,
    shape: Tracked<Shape>,
    width: Tracked<Dp>,
    parent_size: Tracked<Option<Size>>,
    brush: Brush,
    stats: RebuildStats,
}

impl BorderDrawingCache {
    pub fn new(shape: Shape, width: Dp, brush: Brush) -> Self {
        let mut paint = Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(PaintStyle::Fill);
        Self {
            outer_path: Path::new(),
            inner_path: Path::new(),
            diff_path: Path::new(),
            paint,
            stale: Stale::all(),
            shape: Tracked::new(shape),
            width: Tracked::new(width),
            parent_size: Tracked::new(None),
            brush,
            stats: RebuildStats::default(),
        }
    }

    pub fn set_shape(&mut self, shape: Shape) {
        if self.shape.update(shape) {
            self.stale |= Stale::OUTER | Stale::DIFF;
        }
    }

    pub fn set_width(&mut self, width: Dp) {
        if self.width.update(width) {
            self.stale |= Stale::DIFF;
        }
    }

    pub fn set_parent_size(&mut self, size: Size) {
        if self.parent_size.update(Some(size)) {
            self.stale |= Stale::OUTER | Stale::DIFF;
        }
    }

    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    pub fn shape(&self) -> &Shape {
        self.shape.get()
    }

    pub fn width(&self) -> Dp {
        *self.width.get()
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn stale(&self) -> Stale {
        self.stale
    }

    pub fn stats(&self) -> RebuildStats {
        self.stats
    }

    pub fn outer_path(&self) -> &Path {
        &self.outer_path
    }

    pub fn inner_path(&self) -> &Path {
        &self.inner_path
    }

    pub fn diff_path(&self) -> &Path {
        &self.diff_path
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    /// Brings the outlines up to date for `size` and binds the brush.
    pub fn prepare(&mut self, density: &Density, size: Size) {
        self.set_parent_size(size);
        if self.stale.is_empty() {
            trace!("border outlines reused for {:?}", size);
        }
        if self.stale.contains(Stale::OUTER) {
            self.rebuild_outer(density, size);
        }
        if self.stale.contains(Stale::DIFF) {
            self.rebuild_diff(density, size);
        }
        self.brush.apply_to(&mut self.paint);
    }

    fn rebuild_outer(&mut self, density: &Density, size: Size) {
        trace_time!("rebuild outer border outline");
        self.outer_path.reset();
        let outline = self.shape.get().create_outline(size, density);
        self.outer_path.add_outline(&outline);
        self.stale.remove(Stale::OUTER);
        self.stats.outer += 1;
        debug!("outer border outline rebuilt for {:?}", size);
    }

    fn rebuild_diff(&mut self, density: &Density, size: Size) {
        trace_time!("rebuild border stroke outline");
        let thickness = self.width.get().to_stroke_px(density);
        let inset = Size::new(size.width - thickness * 2.0, size.height - thickness * 2.0);

        self.inner_path.reset();
        if inset.width > 0.0 && inset.height > 0.0 {
            let outline = self.shape.get().create_outline(inset, density);
            self.inner_path.add_outline(&outline);
            self.inner_path.offset((thickness, thickness));
        }

        match self.outer_path.op(&self.inner_path, PathOp::Difference) {
            // Skia path ops only return a new path, there is no in-place variant
            Some(path) => self.diff_path = path,
            None => {
                warn!("failed to subtract inner border outline, border skipped");
                self.diff_path.reset();
            }
        }
        self.stale.remove(Stale::DIFF);
        self.stats.diff += 1;
        debug!(
            "border stroke outline rebuilt: size={:?} thickness={} inset={:?}",
            size, thickness, inset
        );
    }
}

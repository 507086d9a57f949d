use skia_safe::{Canvas, Paint, Path};

/// Drawing surface a border paints onto.
pub trait PathCanvas {
    fn fill_path(&self, path: &Path, paint: &Paint);
}

impl PathCanvas for Canvas {
    fn fill_path(&self, path: &Path, paint: &Paint) {
        self.draw_path(path, paint);
    }
}

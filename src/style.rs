pub mod border;
pub mod color;
pub mod length;

pub use color::ColorHelper;

pub trait PropValueParse: Sized {
    fn parse_prop_value(value: &str) -> Option<Self>;
    fn to_style_string(&self) -> String;
}

mod display;
mod load;
mod meta;

pub use display::{DisplayImage, RenderedImage};
pub use load::{SUPPORTED_EXTENSIONS, decode_image_from_bytes, decode_image_from_path};
pub use meta::{
    ImageMeta, describe_aspect_ratio, describe_color, format_system_time, human_readable_bytes,
};

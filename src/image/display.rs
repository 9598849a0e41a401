use egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions};
use image::{ColorType, DynamicImage};
use rayon::prelude::*;

/// Minimum pixel count before parallelizing per-pixel conversion.
const PARALLEL_PIXEL_THRESHOLD: usize = 262_144; // 512x512

fn map_pixels(total_pixels: usize, f: impl Fn(usize) -> Color32 + Sync + Send) -> Vec<Color32> {
    if total_pixels >= PARALLEL_PIXEL_THRESHOLD {
        (0..total_pixels).into_par_iter().map(f).collect()
    } else {
        (0..total_pixels).map(f).collect()
    }
}

/// Convert a filter result into egui pixels, expanding gray buffers to RGB.
pub fn to_color_image(image: &DynamicImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    let total = size[0] * size[1];
    match image {
        DynamicImage::ImageLuma8(buf) => {
            let raw = buf.as_raw();
            ColorImage::new(size, map_pixels(total, |idx| Color32::from_gray(raw[idx])))
        }
        DynamicImage::ImageLumaA8(buf) => {
            let raw = buf.as_raw();
            let pixels = map_pixels(total, |idx| {
                let v = raw[idx * 2];
                Color32::from_rgba_unmultiplied(v, v, v, raw[idx * 2 + 1])
            });
            ColorImage::new(size, pixels)
        }
        DynamicImage::ImageRgba8(buf) => ColorImage::from_rgba_unmultiplied(size, buf.as_raw()),
        other => ColorImage::from_rgba_unmultiplied(size, other.to_rgba8().as_raw()),
    }
}

/// Pixels ready for upload plus the layout of the buffer they came from.
pub struct RenderedImage {
    pub pixels: ColorImage,
    pub color: ColorType,
}

impl RenderedImage {
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        Self {
            pixels: to_color_image(image),
            color: image.color(),
        }
    }
}

/// The texture currently shown in the central panel.
pub struct DisplayImage {
    pub size: [usize; 2],
    pub color: ColorType,
    pub texture: TextureHandle,
}

impl DisplayImage {
    pub fn upload(ctx: &Context, rendered: RenderedImage) -> Self {
        let size = rendered.pixels.size;
        let texture = ctx.load_texture("filter_result", rendered.pixels, TextureOptions::LINEAR);
        Self {
            size,
            color: rendered.color,
            texture,
        }
    }

    /// Swap in a new result, reusing the texture slot.
    pub fn replace(&mut self, rendered: RenderedImage) {
        self.size = rendered.pixels.size;
        self.color = rendered.color;
        self.texture.set(rendered.pixels, TextureOptions::LINEAR);
    }

    pub fn channel_count(&self) -> u8 {
        self.color.channel_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn gray_pixels_expand_to_rgb() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_raw(2, 1, vec![10, 250]).expect("raw"));
        let color = to_color_image(&gray);
        assert_eq!(color.size, [2, 1]);
        assert_eq!(color.pixels[0].to_srgba_unmultiplied(), [10, 10, 10, 255]);
        assert_eq!(color.pixels[1].to_srgba_unmultiplied(), [250, 250, 250, 255]);
    }

    #[test]
    fn opaque_rgba_is_preserved() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255])));
        let color = to_color_image(&rgba);
        assert_eq!(color.size, [3, 2]);
        assert!(
            color
                .pixels
                .iter()
                .all(|p| p.to_srgba_unmultiplied() == [1, 2, 3, 255])
        );
    }

    #[test]
    fn large_gray_images_convert_in_parallel_path() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(600, 500, Luma([77])));
        let color = to_color_image(&gray);
        assert_eq!(color.pixels.len(), 600 * 500);
        assert!(color.pixels.iter().all(|p| *p == Color32::from_gray(77)));
    }

    #[test]
    fn replace_updates_size_and_channels() {
        let ctx = Context::default();
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        let mut shown = DisplayImage::upload(&ctx, RenderedImage::from_dynamic(&rgba));
        assert_eq!(shown.size, [4, 4]);
        assert_eq!(shown.channel_count(), 4);

        let gray = DynamicImage::ImageLuma8(GrayImage::new(8, 2));
        shown.replace(RenderedImage::from_dynamic(&gray));
        assert_eq!(shown.size, [8, 2]);
        assert_eq!(shown.channel_count(), 1);
    }
}

use super::{FilterError, FilterKind, FilterParameters, FilterResult, FlipCode};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Luma, LumaA, Rgb, Rgba};
use imageproc::edges::canny;
use imageproc::filter::separable_filter_equal;
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};

/// Fixed 7-tap Gaussian kernel (sigma 1.4), applied along both axes.
pub const BLUR_KERNEL: [f32; 7] = [
    0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
];
pub const CANNY_LOW_THRESHOLD: f32 = 100.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 200.0;

/// Run one filter over `image`, returning a new buffer.
///
/// `Original` always succeeds and returns a pixel-exact copy. Every other
/// filter rejects zero-sized input before touching the imaging libraries, and
/// the geometry filters require the parameter record matching their kind.
pub fn apply_filter(
    image: &DynamicImage,
    kind: FilterKind,
    params: Option<&FilterParameters>,
) -> FilterResult<DynamicImage> {
    if kind == FilterKind::Original {
        return Ok(image.clone());
    }
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyImage(kind));
    }

    match (kind, params) {
        (FilterKind::Original, _) => Ok(image.clone()),
        (FilterKind::Grayscale, _) => Ok(DynamicImage::ImageLuma8(image.to_luma8())),
        (FilterKind::Blur, _) => Ok(gaussian_blur(image)),
        (FilterKind::EdgeDetection, _) => Ok(DynamicImage::ImageLuma8(canny(
            &image.to_luma8(),
            CANNY_LOW_THRESHOLD,
            CANNY_HIGH_THRESHOLD,
        ))),
        (FilterKind::Resize, Some(&FilterParameters::Resize { width, height })) => {
            resize_exact(image, width, height)
        }
        (FilterKind::Rotate, Some(&FilterParameters::Rotate { angle })) => {
            rotate_in_place(image, angle)
        }
        (FilterKind::Flip, Some(&FilterParameters::Flip { code })) => Ok(flip(image, code)),
        (FilterKind::Resize | FilterKind::Rotate | FilterKind::Flip, _) => {
            Err(FilterError::MissingParameters(kind))
        }
    }
}

fn gaussian_blur(image: &DynamicImage) -> DynamicImage {
    let kernel: &[f32] = &BLUR_KERNEL;
    match image {
        DynamicImage::ImageLuma8(buf) => {
            DynamicImage::ImageLuma8(separable_filter_equal(buf, kernel))
        }
        DynamicImage::ImageLumaA8(buf) => {
            DynamicImage::ImageLumaA8(separable_filter_equal(buf, kernel))
        }
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(separable_filter_equal(buf, kernel)),
        DynamicImage::ImageRgba8(buf) => {
            DynamicImage::ImageRgba8(separable_filter_equal(buf, kernel))
        }
        other => DynamicImage::ImageRgba8(separable_filter_equal(&other.to_rgba8(), kernel)),
    }
}

fn resize_exact(image: &DynamicImage, width: u32, height: u32) -> FilterResult<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidParameter(format!(
            "resize target {width}x{height} must be at least 1x1"
        )));
    }
    Ok(image.resize_exact(width, height, FilterType::Triangle))
}

fn rotate_in_place(image: &DynamicImage, angle: f32) -> FilterResult<DynamicImage> {
    if !angle.is_finite() {
        return Err(FilterError::InvalidParameter(format!(
            "rotation angle {angle} is not a finite number"
        )));
    }
    // imageproc turns clockwise for positive theta.
    let theta = -angle.to_radians();
    let interp = Interpolation::Bilinear;
    let rotated = match image {
        DynamicImage::ImageLuma8(buf) => {
            DynamicImage::ImageLuma8(rotate_about_center(buf, theta, interp, Luma([0])))
        }
        DynamicImage::ImageLumaA8(buf) => {
            DynamicImage::ImageLumaA8(rotate_about_center(buf, theta, interp, LumaA([0, 0])))
        }
        DynamicImage::ImageRgb8(buf) => {
            DynamicImage::ImageRgb8(rotate_about_center(buf, theta, interp, Rgb([0, 0, 0])))
        }
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(rotate_about_center(
            buf,
            theta,
            interp,
            Rgba([0, 0, 0, 0]),
        )),
        other => DynamicImage::ImageRgba8(rotate_about_center(
            &other.to_rgba8(),
            theta,
            interp,
            Rgba([0, 0, 0, 0]),
        )),
    };
    Ok(rotated)
}

fn flip(image: &DynamicImage, code: FlipCode) -> DynamicImage {
    match code {
        FlipCode::Horizontal => image.fliph(),
        FlipCode::Vertical => image.flipv(),
        FlipCode::Both => image.rotate180(),
    }
}

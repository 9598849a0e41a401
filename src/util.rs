use egui::Vec2;

pub fn safe_usize_to_f32(value: usize) -> f32 {
    let as_u32 = u32::try_from(value).unwrap_or(u32::MAX);
    #[allow(clippy::cast_precision_loss)]
    {
        as_u32 as f32
    }
}

pub fn rounded_u8(value: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.round().clamp(0.0, f32::from(u8::MAX)) as u8
    }
}

/// Pixel dimensions as an egui size in points.
pub fn size_to_vec2(size: [usize; 2]) -> Vec2 {
    Vec2::new(safe_usize_to_f32(size[0]), safe_usize_to_f32(size[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_u8_clamps() {
        assert_eq!(rounded_u8(-3.0), 0);
        assert_eq!(rounded_u8(12.6), 13);
        assert_eq!(rounded_u8(1e9), 255);
    }

    #[test]
    fn size_to_vec2_converts_both_axes() {
        assert_eq!(size_to_vec2([640, 480]), Vec2::new(640.0, 480.0));
    }
}

use super::FilterKind;

/// Upper bound of the rotation slider, in degrees.
pub const MAX_ANGLE: f32 = 360.0;

/// Mirror axis for the flip filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipCode {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl FlipCode {
    pub const ALL: [Self; 3] = [Self::Horizontal, Self::Vertical, Self::Both];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::Both => "Both",
        }
    }
}

/// Filter-specific inputs beyond the image itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterParameters {
    Resize { width: u32, height: u32 },
    /// Counter-clockwise rotation in degrees.
    Rotate { angle: f32 },
    Flip { code: FlipCode },
}

/// Current values of the parameter widgets, kept across filter switches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterInputs {
    pub width: u32,
    pub height: u32,
    pub angle: f32,
    pub flip_code: FlipCode,
}

impl Default for ParameterInputs {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            angle: 0.0,
            flip_code: FlipCode::Horizontal,
        }
    }
}

impl ParameterInputs {
    /// Clamp every value into the range its widget allows.
    pub const fn sanitized(self) -> Self {
        let angle = if self.angle.is_finite() {
            self.angle.clamp(0.0, MAX_ANGLE)
        } else {
            0.0
        };
        Self {
            width: if self.width == 0 { 1 } else { self.width },
            height: if self.height == 0 { 1 } else { self.height },
            angle,
            flip_code: self.flip_code,
        }
    }

    /// Start the resize fields from the dimensions of a freshly loaded image.
    pub fn seed_size(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }
}

/// Build the parameter record the given filter needs, if any.
pub const fn collect_parameters(
    kind: FilterKind,
    inputs: &ParameterInputs,
) -> Option<FilterParameters> {
    let inputs = inputs.sanitized();
    match kind {
        FilterKind::Resize => Some(FilterParameters::Resize {
            width: inputs.width,
            height: inputs.height,
        }),
        FilterKind::Rotate => Some(FilterParameters::Rotate {
            angle: inputs.angle,
        }),
        FilterKind::Flip => Some(FilterParameters::Flip {
            code: inputs.flip_code,
        }),
        FilterKind::Original
        | FilterKind::Grayscale
        | FilterKind::Blur
        | FilterKind::EdgeDetection => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterless_filters_collect_nothing() {
        let inputs = ParameterInputs::default();
        for kind in [
            FilterKind::Original,
            FilterKind::Grayscale,
            FilterKind::Blur,
            FilterKind::EdgeDetection,
        ] {
            assert_eq!(collect_parameters(kind, &inputs), None);
        }
    }

    #[test]
    fn collects_record_matching_filter() {
        let inputs = ParameterInputs {
            width: 50,
            height: 20,
            angle: 45.0,
            flip_code: FlipCode::Both,
        };
        assert_eq!(
            collect_parameters(FilterKind::Resize, &inputs),
            Some(FilterParameters::Resize {
                width: 50,
                height: 20
            })
        );
        assert_eq!(
            collect_parameters(FilterKind::Rotate, &inputs),
            Some(FilterParameters::Rotate { angle: 45.0 })
        );
        assert_eq!(
            collect_parameters(FilterKind::Flip, &inputs),
            Some(FilterParameters::Flip {
                code: FlipCode::Both
            })
        );
    }

    #[test]
    fn sanitized_respects_widget_bounds() {
        let inputs = ParameterInputs {
            width: 0,
            height: 0,
            angle: 500.0,
            flip_code: FlipCode::Vertical,
        }
        .sanitized();
        assert_eq!(inputs.width, 1);
        assert_eq!(inputs.height, 1);
        assert!((inputs.angle - MAX_ANGLE).abs() <= f32::EPSILON);

        let nan = ParameterInputs {
            angle: f32::NAN,
            ..ParameterInputs::default()
        }
        .sanitized();
        assert!(nan.angle.abs() <= f32::EPSILON);
    }

    #[test]
    fn seed_size_never_goes_below_one() {
        let mut inputs = ParameterInputs::default();
        inputs.seed_size(640, 0);
        assert_eq!((inputs.width, inputs.height), (640, 1));
    }
}

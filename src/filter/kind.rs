use super::FilterError;
use std::fmt;
use std::str::FromStr;

/// One of the fixed filter operations offered in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKind {
    #[default]
    Original,
    Grayscale,
    Blur,
    EdgeDetection,
    Resize,
    Rotate,
    Flip,
}

impl FilterKind {
    /// Every filter in side panel order.
    pub const ALL: [Self; 7] = [
        Self::Original,
        Self::Grayscale,
        Self::Blur,
        Self::EdgeDetection,
        Self::Resize,
        Self::Rotate,
        Self::Flip,
    ];

    /// Label shown in the selector and used as the result caption.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Original => "Original Image",
            Self::Grayscale => "Grayscale",
            Self::Blur => "Blur",
            Self::EdgeDetection => "Edge Detection",
            Self::Resize => "Resize",
            Self::Rotate => "Rotate",
            Self::Flip => "Flip",
        }
    }

    /// Whether the filter reads a parameter record.
    pub const fn takes_parameters(self) -> bool {
        matches!(self, Self::Resize | Self::Rotate | Self::Flip)
    }

    /// Whether the filter always produces a single-channel image.
    pub const fn single_channel_output(self) -> bool {
        matches!(self, Self::Grayscale | Self::EdgeDetection)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FilterError::UnknownFilter(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.label().parse::<FilterKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(
            "  edge detection ".parse::<FilterKind>(),
            Ok(FilterKind::EdgeDetection)
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert_eq!(
            "Sepia".parse::<FilterKind>(),
            Err(FilterError::UnknownFilter("Sepia".to_string()))
        );
    }

    #[test]
    fn only_geometry_filters_take_parameters() {
        let with_params: Vec<_> = FilterKind::ALL
            .into_iter()
            .filter(|kind| kind.takes_parameters())
            .collect();
        assert_eq!(
            with_params,
            vec![FilterKind::Resize, FilterKind::Rotate, FilterKind::Flip]
        );
    }
}

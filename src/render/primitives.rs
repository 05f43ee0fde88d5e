use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSLUCENT_WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 0.7);
    pub const PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);
    pub const LIGHT_BLUE: Self = Self::rgb(0.529, 0.808, 0.922);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const DARK_BLUE: Self = Self::rgb(0.0, 0.0, 0.54);
    pub const GREEN: Self = Self::rgb(0.0, 0.5, 0.0);
    pub const DARK_GREEN: Self = Self::rgb(0.0, 0.39, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const GOLD: Self = Self::rgb(1.0, 0.84, 0.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.647, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const DARK_RED: Self = Self::rgb(0.54, 0.0, 0.0);
    pub const BROWN: Self = Self::rgb(0.54, 0.27, 0.1);
    pub const PINK: Self = Self::rgb(1.0, 0.75, 0.79);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const DARK_GRAY: Self = Self::rgb(0.66, 0.66, 0.66);

    /// Fixed palette cycled through when series do not pick a color.
    pub const PALETTE: [Self; 8] = [
        Self::LIGHT_BLUE,
        Self::ORANGE,
        Self::GREEN,
        Self::RED,
        Self::PURPLE,
        Self::BROWN,
        Self::PINK,
        Self::GRAY,
    ];

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn palette(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Per-channel linear interpolation; `offset` 0 yields `self`, 1 yields `other`.
    #[must_use]
    pub fn linear_blend(self, other: Self, offset: f64) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let lerp = |from: f64, to: f64| from + (to - from) * offset;
        Self::rgba(
            lerp(self.red, other.red),
            lerp(self.green, other.green),
            lerp(self.blue, other.blue),
            lerp(self.alpha, other.alpha),
        )
    }

    /// Channels scaled to 0..=255 bytes (alpha excluded).
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        let byte = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.red), byte(self.green), byte(self.blue)]
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Two-stop gradient used to color the points of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorGradient {
    pub start: Color,
    pub end: Color,
}

impl ColorGradient {
    #[must_use]
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Color of element `index` out of `count`, linear in index.
    #[must_use]
    pub fn at_index(self, index: usize, count: usize) -> Color {
        if count <= 1 {
            return self.start;
        }
        self.start
            .linear_blend(self.end, index as f64 / (count - 1) as f64)
    }

    /// Color of `value` positioned linearly within `[min, max]`.
    #[must_use]
    pub fn at_value(self, value: f64, min: f64, max: f64) -> Color {
        let span = max - min;
        if !span.is_finite() || span == 0.0 || !value.is_finite() {
            return self.start;
        }
        self.start.linear_blend(self.end, (value - min) / span)
    }
}

/// Fill texture applied over a solid rectangle fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HatchPattern {
    #[default]
    None,
    ForwardSlash,
    BackwardSlash,
    HollowCircle,
    FilledCircle,
    Vertical,
    Horizontal,
    Grid,
    Cross,
}

impl HatchPattern {
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::ForwardSlash,
        Self::BackwardSlash,
        Self::HollowCircle,
        Self::FilledCircle,
        Self::Vertical,
        Self::Horizontal,
        Self::Grid,
        Self::Cross,
    ];

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Stable identifier used by vector backends for pattern definitions.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ForwardSlash => "forwardSlashHatch",
            Self::BackwardSlash => "backwardSlashHatch",
            Self::HollowCircle => "hollowCircleHatch",
            Self::FilledCircle => "filledCircleHatch",
            Self::Vertical => "verticalHatch",
            Self::Horizontal => "horizontalHatch",
            Self::Grid => "gridHatch",
            Self::Cross => "crossHatch",
        }
    }
}

/// Stroke settings for outlines and line segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
    pub dashed: bool,
}

impl Stroke {
    #[must_use]
    pub const fn solid(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            dashed: false,
        }
    }

    #[must_use]
    pub const fn dashed(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            dashed: true,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(PlotError::InvalidData(
                "stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Text appearance for one draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub stroke_width: f64,
}

impl TextStyle {
    #[must_use]
    pub const fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            color,
            stroke_width: 1.2,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

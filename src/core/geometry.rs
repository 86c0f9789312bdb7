//! Window sizing.
//!
//! GTK has no "shrink the window to its content" switch, but it does expose
//! the natural height of a widget for a given width. Content-driven sizing
//! therefore needs a single measurement of the composed layout, taken before
//! the window is first shown.

use crate::config;
use gtk4::pango;

/// Final window size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Width of the centered inner column for a window `width` pixels wide.
pub fn inner_width(width: i32) -> i32 {
    (f64::from(width) * config::layout::INNER_WIDTH_FRACTION).round() as i32
}

/// Point size of the desktop text font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub point_size: f64,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            point_size: config::layout::DEFAULT_FONT_PT,
        }
    }
}

impl FontMetrics {
    /// Parse a Pango font name such as `"Cantarell 11"`. Names without a
    /// size fall back to the default point size.
    pub fn from_font_name(name: &str) -> Self {
        let description = pango::FontDescription::from_string(name);
        let size = description.size();
        if size <= 0 {
            return Self::default();
        }

        let mut point_size = f64::from(size) / f64::from(pango::SCALE);
        if description.is_size_absolute() {
            // Absolute sizes are device units at 96 dpi.
            point_size *= 72.0 / 96.0;
        }

        Self { point_size }
    }

    /// `em` multiples of the point size, rounded to whole pixels.
    pub fn scale(&self, em: f64) -> i32 {
        (self.point_size * em).round() as i32
    }
}

/// How a window derives its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sizing {
    /// Exact size, independent of font and content.
    Fixed(WindowGeometry),
    /// Width scales with the font; height is the measured content height
    /// plus [`config::layout::CONTENT_PADDING`].
    FitContent { width_em: f64 },
    /// Both dimensions scale with the font.
    FontScaled { width_em: f64, height_em: f64 },
}

impl Sizing {
    /// Window width, known before any content is measured.
    pub fn width(&self, font: FontMetrics) -> i32 {
        match *self {
            Self::Fixed(geometry) => geometry.width,
            Self::FitContent { width_em } | Self::FontScaled { width_em, .. } => {
                font.scale(width_em)
            }
        }
    }

    /// Resolve the final geometry. `measure` returns the natural content
    /// height for the given width and is only called for `FitContent`.
    pub fn resolve<F>(&self, font: FontMetrics, measure: F) -> WindowGeometry
    where
        F: FnOnce(i32) -> i32,
    {
        let width = self.width(font);
        match *self {
            Self::Fixed(geometry) => geometry,
            Self::FitContent { .. } => {
                let content = measure(width).max(0);
                WindowGeometry::new(width, content + config::layout::CONTENT_PADDING)
            }
            Self::FontScaled { height_em, .. } => WindowGeometry::new(width, font.scale(height_em)),
        }
    }
}

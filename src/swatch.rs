//! Swatch rendering
//!
//! A swatch is the small sample that stands for one color, both in the
//! preference row and in every grid cell. Rendering mutates the target view
//! in place so cached views can be redrawn without reallocating.

use crate::color::Color;

/// Stroke width of a circular swatch in density-independent pixels
const STROKE_WIDTH_DIP: f32 = 1.0;

/// Display density used to convert dips into device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl DisplayMetrics {
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    /// Convert dips to whole device pixels (truncating)
    pub fn dip_to_px(&self, dip: f32) -> u32 {
        (dip * self.density) as u32
    }
}

/// Filled oval with a darker outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleSwatch {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: u32,
}

/// The visual target a swatch is rendered into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwatchView {
    /// Image target holding an optional drawable
    Image { drawable: Option<CircleSwatch> },
    /// Text target tinted with the color
    Text {
        label: String,
        text_color: Option<Color>,
    },
}

impl SwatchView {
    pub fn image() -> Self {
        SwatchView::Image { drawable: None }
    }

    pub fn text(label: impl Into<String>) -> Self {
        SwatchView::Text {
            label: label.into(),
            text_color: None,
        }
    }

    /// Drop whatever color is currently shown
    pub fn clear(&mut self) {
        match self {
            SwatchView::Image { drawable } => *drawable = None,
            SwatchView::Text { text_color, .. } => *text_color = None,
        }
    }

    /// The color currently shown, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            SwatchView::Image { drawable } => drawable.map(|d| d.fill),
            SwatchView::Text { text_color, .. } => *text_color,
        }
    }
}

/// Render `color` into `view`
///
/// An image target reuses its existing circle when it has one. A text target
/// only gets its text color changed.
pub fn render_swatch(view: &mut SwatchView, color: Color, metrics: &DisplayMetrics) {
    match view {
        SwatchView::Image { drawable } => {
            let circle = drawable.get_or_insert(CircleSwatch {
                fill: color,
                stroke: color,
                stroke_width: 0,
            });
            circle.fill = color;
            circle.stroke = color.darken();
            circle.stroke_width = metrics.dip_to_px(STROKE_WIDTH_DIP);
        }
        SwatchView::Text { text_color, .. } => {
            *text_color = Some(color);
        }
    }
}

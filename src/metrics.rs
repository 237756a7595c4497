//! Simulated phone activity figures for the Dashboard's progress bars.
//!
//! Figures are drawn once per Dashboard activation from an injectable
//! [`UnitSource`]. Bar widths are derived from the stored figures for display
//! and never written back.

use rand::Rng;
use serde::Serialize;

/// Largest sample accepted from a source; keeps every figure below its bound.
const MAX_UNIT: f64 = 0.999_999_999;

/// Source of uniform samples in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator into a [`UnitSource`].
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

impl<R: Rng> UnitSource for RandSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

impl RandSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        RandSource(rand::thread_rng())
    }
}

/// The five activity rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricField {
    Calls,
    Messages,
    Locations,
    Photos,
    Videos,
}

impl MetricField {
    pub const ALL: [MetricField; 5] = [
        MetricField::Calls,
        MetricField::Messages,
        MetricField::Locations,
        MetricField::Photos,
        MetricField::Videos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricField::Calls => "Calls",
            MetricField::Messages => "Messages",
            MetricField::Locations => "Locations",
            MetricField::Photos => "Photos",
            MetricField::Videos => "Videos",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MetricField::Calls => "📞",
            MetricField::Messages => "💬",
            MetricField::Locations => "📍",
            MetricField::Photos => "🖼️",
            MetricField::Videos => "🎥",
        }
    }

    /// `(offset, scale_base)`: a sample `s` maps to `floor(s * scale_base + offset)`.
    pub fn distribution(&self) -> (u32, u32) {
        match self {
            MetricField::Calls => (100, 100),
            MetricField::Messages => (20, 30),
            MetricField::Locations => (5, 5),
            MetricField::Photos => (5, 10),
            MetricField::Videos => (5, 20),
        }
    }

    /// Percent of bar width per unit of the figure.
    pub fn bar_scale(&self) -> f64 {
        match self {
            MetricField::Calls => 0.5,
            MetricField::Messages => 2.0,
            MetricField::Locations => 10.0,
            MetricField::Photos => 10.0,
            MetricField::Videos => 5.0,
        }
    }

    /// Turn one sample into a figure. Samples outside `[0, 1)` are clamped.
    pub fn sample(&self, unit: f64) -> u32 {
        let (offset, scale_base) = self.distribution();
        let unit = if unit.is_nan() {
            0.0
        } else {
            unit.clamp(0.0, MAX_UNIT)
        };
        (unit * f64::from(scale_base) + f64::from(offset)).floor() as u32
    }
}

/// Figures shown in the "Phone Activities" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActivityMetrics {
    pub calls: u32,
    pub messages: u32,
    pub locations: u32,
    pub photos: u32,
    pub videos: u32,
}

impl ActivityMetrics {
    /// Draw one sample per field, in display order.
    pub fn generate(source: &mut dyn UnitSource) -> Self {
        let mut draw = |field: MetricField| field.sample(source.next_unit());
        Self {
            calls: draw(MetricField::Calls),
            messages: draw(MetricField::Messages),
            locations: draw(MetricField::Locations),
            photos: draw(MetricField::Photos),
            videos: draw(MetricField::Videos),
        }
    }

    pub fn get(&self, field: MetricField) -> u32 {
        match field {
            MetricField::Calls => self.calls,
            MetricField::Messages => self.messages,
            MetricField::Locations => self.locations,
            MetricField::Photos => self.photos,
            MetricField::Videos => self.videos,
        }
    }

    /// Bar width in percent. Not capped; the renderer clips at 100.
    pub fn bar_width(&self, field: MetricField) -> f64 {
        f64::from(self.get(field)) * field.bar_scale()
    }
}

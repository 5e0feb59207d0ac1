use std::f64::consts::PI;

/// Radius of the SVG progress ring, in user units.
pub const RING_RADIUS: f64 = 45.0;

/// Stroke-dash values for an SVG progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    pub circumference: f64,
    /// Dash offset at the requested percentage. Animation starts from
    /// `circumference` (empty ring) and eases to this value.
    pub offset: f64,
}

impl ProgressRing {
    pub fn new(percentage: f64) -> Self {
        Self::with_radius(RING_RADIUS, percentage)
    }

    pub fn with_radius(radius: f64, percentage: f64) -> Self {
        let circumference = 2.0 * PI * radius;
        Self {
            circumference,
            offset: circumference - (percentage / 100.0) * circumference,
        }
    }
}

/// Value for the `--score` custom property of a match-score circle.
/// A missing `data-score` renders as `0%`.
pub fn match_score_css(score: Option<&str>) -> String {
    match score {
        Some(s) if !s.is_empty() => format!("{s}%"),
        _ => "0%".to_string(),
    }
}

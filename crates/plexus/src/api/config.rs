use serde::{Deserialize, Serialize};

/// Tuning for a particle background, provided by the host page.
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides: `{"max_particles": 40}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Population cap regardless of viewport area (default: 80).
    pub max_particles: usize,
    /// Viewport area, in square units, that earns one particle (default: 15000).
    pub area_per_particle: f32,
    /// Per-axis velocity bound in units per tick (default: 0.2).
    pub max_speed: f32,
    /// Disc radius range, inclusive (default: [0.5, 2.0]).
    pub radius_range: [f32; 2],
    /// Disc opacity range, inclusive (default: [0.1, 0.5]).
    pub opacity_range: [f32; 2],
    /// Pairs closer than this are connected (default: 120).
    pub link_distance: f32,
    /// Stroke alpha of a connection between coincident particles (default: 0.12).
    pub link_max_alpha: f32,
    /// Stroke width of connections (default: 0.5).
    pub link_width: f32,
    /// Hue shared by discs and connections, as 8-bit RGB (default: 37, 99, 235).
    pub color: [u8; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 80,
            area_per_particle: 15000.0,
            max_speed: 0.2,
            radius_range: [0.5, 2.0],
            opacity_range: [0.1, 0.5],
            link_distance: 120.0,
            link_max_alpha: 0.12,
            link_width: 0.5,
            color: [37, 99, 235],
        }
    }
}

impl FieldConfig {
    /// Parse a config from a JSON string. Missing keys keep their defaults,
    /// and the result is `normalized`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::normalized)
    }

    /// Make the random ranges well-formed: `max_speed` becomes its magnitude
    /// (0 if not finite) and reversed `[hi, lo]` ranges are swapped.
    pub fn normalized(mut self) -> Self {
        self.max_speed = if self.max_speed.is_finite() { self.max_speed.abs() } else { 0.0 };
        self.radius_range = ordered(self.radius_range);
        self.opacity_range = ordered(self.opacity_range);
        self
    }
}

fn ordered([a, b]: [f32; 2]) -> [f32; 2] {
    [a.min(b), a.max(b)]
}

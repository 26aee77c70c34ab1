//! # Configuration
//!
//! The read-only parameters of the hole scanner and its render adaptor.
//!
//! A host usually keeps these in its own settings store and hands a fresh copy to
//! `HoleEsp::set_config` whenever the user changes something. For standalone use a
//! JSON document can be loaded; missing fields fall back to their defaults.
//!
//! ```
//! use hole_esp::config::{HoleConfig, HoleShowMode};
//!
//! let config = HoleConfig::from_json_str(r#"{ "radius": 8, "show": "Custom" }"#).unwrap();
//! assert_eq!(config.radius, 8);
//! assert_eq!(config.show, HoleShowMode::Custom);
//! assert_eq!(config.line_width, 1);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{
    engine_state::{holes::geometry::ColorTag, rendering::Rgba},
    error::{HoleError, HoleResult},
};

/// Permitted sampling radii, in blocks.
pub const RADIUS_RANGE: RangeInclusive<u32> = 1..=20;
/// Permitted outline widths.
pub const LINE_WIDTH_RANGE: RangeInclusive<u32> = 1..=10;
/// Permitted slab heights, as a fraction of a block.
pub const SLAB_HEIGHT_RANGE: RangeInclusive<f64> = 0.1..=1.5;

/// Which hole shapes are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoleShowMode {
    /// One-cell holes only.
    #[default]
    Single,
    /// One-cell holes and two-wide holes.
    Double,
    /// Like `Double`, additionally accepting a second cell without a dependable floor.
    Custom,
}

impl HoleShowMode {
    /// Whether wide candidates are paired with their neighbor.
    pub fn pairs_wide_holes(self) -> bool {
        self != HoleShowMode::Single
    }

    /// Whether the second cell of a pair may lack a blast-proof floor.
    pub fn allows_floor_gap(self) -> bool {
        self == HoleShowMode::Custom
    }
}

/// Which draw styles are issued per hole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Line boxes only.
    Outline,
    /// Translucent filled boxes only.
    Fill,
    /// Outline, then fill.
    #[default]
    Both,
}

impl DisplayMode {
    /// Whether outlines are drawn.
    pub fn draws_outline(self) -> bool {
        matches!(self, DisplayMode::Outline | DisplayMode::Both)
    }

    /// Whether fills are drawn.
    pub fn draws_fill(self) -> bool {
        matches!(self, DisplayMode::Fill | DisplayMode::Both)
    }
}

/// How a hole volume is turned into the shape that gets drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryMode {
    /// The air volume itself.
    #[default]
    Air,
    /// The floor blocks under the hole, with the gradient reversed.
    Ground,
    /// Only the bottom face of the volume.
    Flat,
    /// The bottom `slab_height` of the volume.
    Slab,
    /// The volume extended one block upwards, covering a player's full height.
    Double,
}

/// Every tunable parameter of the scanner and renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleConfig {
    /// Sampling radius around the reference point, in blocks.
    pub radius: u32,
    /// Which hole shapes are reported.
    pub show: HoleShowMode,
    /// Outline, fill or both.
    pub display: DisplayMode,
    /// Shape derived from each hole volume.
    pub geometry: GeometryMode,
    /// Skip holes that intersect the viewer.
    pub hide_own: bool,
    /// Draw holes that intersect the viewer as their bottom face only.
    pub flat_own: bool,
    /// Height of the `Slab` shape as a fraction of a block.
    pub slab_height: f64,
    /// Outline width.
    pub line_width: u32,
    /// Color of holes guarded only by blast-proof blocks.
    pub resistant_color: Rgba,
    /// Color of holes with at least one breakable wall.
    pub weak_color: Rgba,
    /// Color of two-wide holes with a floor gap.
    pub custom_color: Rgba,
    /// Opacity of filled boxes at their base.
    pub fill_alpha: u8,
    /// Opacity at the far end of the vertical gradient.
    pub ufo_alpha: u8,
}

impl Default for HoleConfig {
    fn default() -> Self {
        Self {
            radius: 5,
            show: HoleShowMode::Single,
            display: DisplayMode::Both,
            geometry: GeometryMode::Air,
            hide_own: false,
            flat_own: false,
            slab_height: 0.5,
            line_width: 1,
            resistant_color: Rgba::rgb(0, 255, 0),
            weak_color: Rgba::rgb(255, 0, 0),
            custom_color: Rgba::rgb(0, 0, 255),
            fill_alpha: 50,
            ufo_alpha: 255,
        }
    }
}

impl HoleConfig {
    /// Parses a JSON document and validates it.
    ///
    /// # Errors
    /// `HoleError::ConfigParse` for malformed JSON, `HoleError::InvalidConfig` for
    /// out-of-range values.
    pub fn from_json_str(json: &str) -> HoleResult<Self> {
        let config: HoleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> HoleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every ranged value.
    ///
    /// # Errors
    /// `HoleError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> HoleResult<()> {
        if !RADIUS_RANGE.contains(&self.radius) {
            return Err(HoleError::invalid_config(format!(
                "radius {} is outside {:?}",
                self.radius, RADIUS_RANGE
            )));
        }
        if !LINE_WIDTH_RANGE.contains(&self.line_width) {
            return Err(HoleError::invalid_config(format!(
                "line width {} is outside {:?}",
                self.line_width, LINE_WIDTH_RANGE
            )));
        }
        if !SLAB_HEIGHT_RANGE.contains(&self.slab_height) {
            return Err(HoleError::invalid_config(format!(
                "slab height {} is outside {:?}",
                self.slab_height, SLAB_HEIGHT_RANGE
            )));
        }
        Ok(())
    }

    /// The opaque color configured for a tag.
    pub fn color_for(&self, tag: ColorTag) -> Rgba {
        let color = match tag {
            ColorTag::Resistant => self.resistant_color,
            ColorTag::Weak => self.weak_color,
            ColorTag::Custom => self.custom_color,
        };
        color.with_alpha(255)
    }

    /// Set the sampling radius.
    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the hole show mode.
    #[must_use]
    pub fn with_show(mut self, show: HoleShowMode) -> Self {
        self.show = show;
        self
    }

    /// Set the display mode.
    #[must_use]
    pub fn with_display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Set the geometry mode.
    #[must_use]
    pub fn with_geometry(mut self, geometry: GeometryMode) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set how holes around the viewer are treated.
    #[must_use]
    pub fn with_own_hole(mut self, hide_own: bool, flat_own: bool) -> Self {
        self.hide_own = hide_own;
        self.flat_own = flat_own;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = HoleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.show, HoleShowMode::Single);
        assert_eq!(config.display, DisplayMode::Both);
        assert_eq!(config.geometry, GeometryMode::Air);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = HoleConfig::default().with_radius(0).validate().unwrap_err();
        assert!(err.to_string().contains("radius"));

        let err = HoleConfig::default().with_radius(21).validate().unwrap_err();
        assert!(matches!(err, HoleError::InvalidConfig(_)));

        let config = HoleConfig {
            slab_height: f64::NAN,
            ..HoleConfig::default()
        };
        assert!(config.validate().is_err());

        let config = HoleConfig {
            line_width: 0,
            ..HoleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let config = HoleConfig::default()
            .with_show(HoleShowMode::Double)
            .with_geometry(GeometryMode::Slab);
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"resistant_color\": ["));
        assert_eq!(HoleConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            HoleConfig::from_json_str("{ radius: }"),
            Err(HoleError::ConfigParse(_))
        ));
        assert!(matches!(
            HoleConfig::from_json_str(r#"{ "radius": 99 }"#),
            Err(HoleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn tag_colors_are_opaque() {
        let config = HoleConfig {
            weak_color: Rgba::new(10, 20, 30, 40),
            ..HoleConfig::default()
        };
        assert_eq!(config.color_for(ColorTag::Weak), Rgba::new(10, 20, 30, 255));
        assert_eq!(config.color_for(ColorTag::Resistant), Rgba::rgb(0, 255, 0));
    }

    #[test]
    fn modes() {
        assert!(!HoleShowMode::Single.pairs_wide_holes());
        assert!(HoleShowMode::Double.pairs_wide_holes());
        assert!(!HoleShowMode::Double.allows_floor_gap());
        assert!(HoleShowMode::Custom.allows_floor_gap());
        assert!(DisplayMode::Both.draws_fill() && DisplayMode::Both.draws_outline());
        assert!(!DisplayMode::Fill.draws_outline());
    }
}

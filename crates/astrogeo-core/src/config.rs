//! Declarative configuration records for the two visualizations.
//!
//! Records are deserialized once, validated with `validate()`, and then
//! treated as read-only input by the scene builders.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::SolidKind;

/// sRGB color as 8-bit channels.
pub type Rgb = [u8; 3];

/// Planetary ring (saturno).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingConfig {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Rgb,
}

/// The central star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub size: f32,
    pub color: Rgb,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            id: "sol".to_string(),
            name: "Sol".to_string(),
            size: 5.0,
            color: [255, 196, 64],
        }
    }
}

/// A planet orbiting the sun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub size: f32,
    pub color: Rgb,
    /// Orbit radius in scene units.
    pub distance: f32,
    /// Relative revolution speed (tierra = 1).
    #[serde(default)]
    pub orbital_speed: f32,
    /// Spin speed in radians per frame at speed multiplier 1.
    #[serde(default)]
    pub spin_speed: f32,
    /// Axial tilt in degrees.
    #[serde(default)]
    pub tilt: f32,
    #[serde(default)]
    pub ring: Option<RingConfig>,
}

/// One entry of the body list; unrecognized kinds are kept as `Unknown`
/// and skipped when the scene is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyConfig {
    Planet(PlanetConfig),
    #[serde(other)]
    Unknown,
}

/// Full solar system description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystemConfig {
    #[serde(default)]
    pub sun: SunConfig,
    #[serde(default)]
    pub planets: Vec<BodyConfig>,
}

impl SolarSystemConfig {
    /// Parses and validates a JSON record.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Recognized planets in declaration order.
    pub fn planets(&self) -> impl Iterator<Item = &PlanetConfig> {
        self.planets.iter().filter_map(|body| match body {
            BodyConfig::Planet(planet) => Some(planet),
            BodyConfig::Unknown => None,
        })
    }

    pub fn planet(&self, id: &str) -> Option<&PlanetConfig> {
        self.planets().find(|p| p.id == id)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        check_size(&self.sun.id, self.sun.size)?;
        seen.insert(self.sun.id.as_str());

        for planet in self.planets() {
            if !seen.insert(planet.id.as_str()) {
                return Err(ConfigError::DuplicateId(planet.id.clone()));
            }
            check_size(&planet.id, planet.size)?;
            if !planet.distance.is_finite() || planet.distance < 0.0 {
                return Err(ConfigError::InvalidDistance {
                    id: planet.id.clone(),
                    distance: planet.distance,
                });
            }
            for (field, value) in [
                ("orbital_speed", planet.orbital_speed),
                ("spin_speed", planet.spin_speed),
                ("tilt", planet.tilt),
            ] {
                if !value.is_finite() {
                    return Err(ConfigError::NonFinite {
                        id: planet.id.clone(),
                        field,
                    });
                }
            }
            if let Some(ring) = &planet.ring {
                let valid = ring.inner_radius > 0.0 && ring.inner_radius < ring.outer_radius;
                if !valid || !ring.outer_radius.is_finite() {
                    return Err(ConfigError::InvalidRing {
                        id: planet.id.clone(),
                        inner: ring.inner_radius,
                        outer: ring.outer_radius,
                    });
                }
            }
        }
        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
fn planet(
    id: &str,
    name: &str,
    size: f32,
    color: Rgb,
    distance: f32,
    orbital_speed: f32,
    spin_speed: f32,
    tilt: f32,
) -> BodyConfig {
    BodyConfig::Planet(PlanetConfig {
        id: id.to_string(),
        name: name.to_string(),
        size,
        color,
        distance,
        orbital_speed,
        spin_speed,
        tilt,
        ring: None,
    })
}

impl Default for SolarSystemConfig {
    fn default() -> Self {
        let mut saturno = planet(
            "saturno",
            "Saturno",
            2.1,
            [226, 205, 150],
            42.0,
            0.034,
            0.038,
            26.7,
        );
        if let BodyConfig::Planet(p) = &mut saturno {
            p.ring = Some(RingConfig {
                inner_radius: 2.6,
                outer_radius: 4.2,
                color: [200, 180, 140],
            });
        }

        Self {
            sun: SunConfig::default(),
            planets: vec![
                planet("mercurio", "Mercurio", 0.4, [169, 169, 169], 10.0, 4.15, 0.01, 0.03),
                planet("venus", "Venus", 0.9, [230, 190, 120], 14.0, 1.62, 0.005, 177.4),
                planet("tierra", "Tierra", 1.0, [70, 130, 220], 18.0, 1.0, 0.02, 23.4),
                planet("marte", "Marte", 0.55, [200, 80, 50], 23.0, 0.53, 0.018, 25.2),
                planet("jupiter", "Júpiter", 2.5, [210, 170, 120], 32.0, 0.084, 0.04, 3.1),
                saturno,
                planet("urano", "Urano", 1.6, [150, 220, 230], 52.0, 0.012, 0.03, 97.8),
                planet("neptuno", "Neptuno", 1.5, [70, 100, 220], 60.0, 0.006, 0.032, 28.3),
            ],
        }
    }
}

/// Which parts of a solid are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFlags {
    #[serde(default = "default_true")]
    pub faces: bool,
    #[serde(default)]
    pub edges: bool,
    #[serde(default)]
    pub vertices: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LayerFlags {
    fn default() -> Self {
        Self {
            faces: true,
            edges: false,
            vertices: false,
        }
    }
}

/// Geometric solids view description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidsConfig {
    /// Solid id (`cubo`, `tetraedro`, ...). Unknown ids render as a cube.
    #[serde(default = "default_solid")]
    pub solid: String,
    #[serde(default = "default_solid_size")]
    pub size: f32,
    #[serde(default = "default_solid_color")]
    pub color: Rgb,
    #[serde(default)]
    pub layers: LayerFlags,
}

fn default_solid() -> String {
    SolidKind::Cube.id().to_string()
}

fn default_solid_size() -> f32 {
    1.5
}

fn default_solid_color() -> Rgb {
    [80, 160, 255]
}

impl Default for SolidsConfig {
    fn default() -> Self {
        Self {
            solid: default_solid(),
            size: default_solid_size(),
            color: default_solid_color(),
            layers: LayerFlags::default(),
        }
    }
}

impl SolidsConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn kind(&self) -> SolidKind {
        SolidKind::from_id(&self.solid)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size(&self.solid, self.size)
    }
}

fn check_size(id: &str, size: f32) -> Result<(), ConfigError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize {
            id: id.to_string(),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_solar_system_is_valid() {
        let config = SolarSystemConfig::default();
        config.validate().unwrap();
        assert_eq!(config.planets().count(), 8);
        assert!(config.planet("saturno").unwrap().ring.is_some());
    }

    #[test]
    fn unknown_body_kind_is_skipped() {
        let json = r#"{
            "planets": [
                { "kind": "planet", "id": "tierra", "size": 1.0, "color": [0, 0, 255], "distance": 18.0 },
                { "kind": "comet", "id": "halley", "size": 0.1 }
            ]
        }"#;
        let config = SolarSystemConfig::from_json(json).unwrap();
        assert_eq!(config.planets.len(), 2);
        assert_eq!(config.planets().count(), 1);
        assert_eq!(config.sun.id, "sol");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut config = SolarSystemConfig::default();
        config.planets.push(planet("tierra", "Tierra", 1.0, [0, 0, 0], 70.0, 0.1, 0.1, 0.0));
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateId(id)) if id == "tierra"));
    }

    #[test]
    fn rejects_degenerate_numbers() {
        let mut config = SolarSystemConfig::default();
        config.sun.size = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSize { .. })));

        let mut config = SolarSystemConfig::default();
        if let BodyConfig::Planet(p) = &mut config.planets[0] {
            p.distance = -1.0;
        }
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDistance { .. })));

        let mut config = SolarSystemConfig::default();
        if let BodyConfig::Planet(p) = &mut config.planets[1] {
            p.spin_speed = f32::NAN;
        }
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "spin_speed", .. })
        ));
    }

    #[test]
    fn solids_config_defaults_fill_missing_fields() {
        let config = SolidsConfig::from_json(r#"{ "solid": "octaedro" }"#).unwrap();
        assert_eq!(config.kind(), SolidKind::Octahedron);
        assert!(config.layers.faces);
        assert!(!config.layers.edges);

        let fallback = SolidsConfig::from_json(r#"{ "solid": "hipercubo" }"#).unwrap();
        assert_eq!(fallback.kind(), SolidKind::Cube);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            SolidsConfig::from_json("{ solid: "),
            Err(ConfigError::Json(_))
        ));
    }
}

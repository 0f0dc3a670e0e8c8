use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Display fields shown in the detail panel.
/// Opaque to the simulation; passed straight through to the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub diameter: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub distance: String,
}

/// Texture file names for a body, relative to the configured texture path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyTextures {
    #[serde(default, rename = "texture")]
    pub surface: Option<String>,
    #[serde(default)]
    pub night_texture: Option<String>,
    #[serde(default)]
    pub bump_texture: Option<String>,
    #[serde(default)]
    pub bump_scale: Option<f32>,
    #[serde(default)]
    pub specular_texture: Option<String>,
    #[serde(default)]
    pub cloud_texture: Option<String>,
    #[serde(default)]
    pub ring_texture: Option<String>,
}

/// Static configuration for one celestial body.
///
/// Angles are in degrees, per-tick rates in radians (spin) or
/// progress fractions (orbit). `orbital_period` is the amount of orbit
/// progress gained per tick, not a duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBodyDefinition {
    #[serde(flatten)]
    pub details: BodyDetails,
    /// World-space radius.
    pub radius: f32,
    /// Semi-major axis for planets; radial offset from the parent for satellites.
    #[serde(default)]
    pub orbital_radius: Option<f32>,
    #[serde(default)]
    pub eccentricity: f32,
    #[serde(default)]
    pub orbital_period: Option<f32>,
    #[serde(default)]
    pub rotation_speed: Option<f32>,
    #[serde(default)]
    pub axial_tilt: Option<f32>,
    #[serde(default)]
    pub orbital_inclination: Option<f32>,
    #[serde(default, alias = "parent")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub is_light: bool,
    /// Glow sprite tint as 0xRRGGBB.
    #[serde(default)]
    pub atmosphere_color: Option<u32>,
    /// Glow sprite size as a multiple of the radius. Only the star honours it;
    /// planet glows are always 2.5 radii.
    #[serde(default)]
    pub atmosphere_scale: Option<f32>,
    #[serde(default)]
    pub has_rings: bool,
    #[serde(flatten)]
    pub textures: BodyTextures,
}

/// How a body moves, resolved from its definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyRole<'a> {
    /// The light source. Never moves.
    Star,
    /// Orbits the star directly on an inclined ellipse.
    Planet {
        orbital_radius: f32,
        eccentricity: f32,
        orbital_period: f32,
        inclination_deg: f32,
    },
    /// Orbits another body on a flat circle in the parent's equatorial plane.
    Satellite {
        parent: &'a str,
        orbital_radius: f32,
        orbital_period: f32,
    },
}

impl CelestialBodyDefinition {
    fn base(title: &str, radius: f32) -> Self {
        Self {
            details: BodyDetails {
                title: title.to_string(),
                ..Default::default()
            },
            radius,
            orbital_radius: None,
            eccentricity: 0.0,
            orbital_period: None,
            rotation_speed: None,
            axial_tilt: None,
            orbital_inclination: None,
            parent_id: None,
            is_light: false,
            atmosphere_color: None,
            atmosphere_scale: None,
            has_rings: false,
            textures: BodyTextures::default(),
        }
    }

    /// The light source at the center of the system.
    pub fn star(title: &str, radius: f32) -> Self {
        Self {
            is_light: true,
            ..Self::base(title, radius)
        }
    }

    /// A body orbiting the star directly.
    pub fn planet(title: &str, radius: f32, orbital_radius: f32, orbital_period: f32) -> Self {
        Self {
            orbital_radius: Some(orbital_radius),
            orbital_period: Some(orbital_period),
            ..Self::base(title, radius)
        }
    }

    /// A body orbiting `parent` at a fixed distance.
    pub fn satellite(
        title: &str,
        radius: f32,
        parent: &str,
        orbital_radius: f32,
        orbital_period: f32,
    ) -> Self {
        Self {
            parent_id: Some(parent.to_string()),
            orbital_radius: Some(orbital_radius),
            orbital_period: Some(orbital_period),
            ..Self::base(title, radius)
        }
    }

    // -- Builder methods --

    pub fn with_details(mut self, description: &str, diameter: &str, mass: &str, period: &str, distance: &str) -> Self {
        self.details.description = description.to_string();
        self.details.diameter = diameter.to_string();
        self.details.mass = mass.to_string();
        self.details.period = period.to_string();
        self.details.distance = distance.to_string();
        self
    }

    pub fn with_eccentricity(mut self, eccentricity: f32) -> Self {
        self.eccentricity = eccentricity;
        self
    }

    pub fn with_rotation(mut self, rotation_speed: f32, axial_tilt: f32) -> Self {
        self.rotation_speed = Some(rotation_speed);
        self.axial_tilt = Some(axial_tilt);
        self
    }

    pub fn with_inclination(mut self, degrees: f32) -> Self {
        self.orbital_inclination = Some(degrees);
        self
    }

    pub fn with_atmosphere(mut self, color: u32, scale: Option<f32>) -> Self {
        self.atmosphere_color = Some(color);
        self.atmosphere_scale = scale;
        self
    }

    pub fn with_rings(mut self, ring_texture: &str) -> Self {
        self.has_rings = true;
        self.textures.ring_texture = Some(ring_texture.to_string());
        self
    }

    pub fn with_textures(mut self, textures: BodyTextures) -> Self {
        self.textures = textures;
        self
    }

    /// Axial tilt in radians (0 when unset).
    pub fn axial_tilt_rad(&self) -> f32 {
        self.axial_tilt.unwrap_or(0.0).to_radians()
    }

    /// Check this body's own fields and classify how it moves.
    /// Cross-body checks (star count, parent resolution) happen in the scene builder.
    pub fn role(&self, id: &str) -> ConfigResult<BodyRole<'_>> {
        let invalid = |field: &'static str, value: f32| ConfigError::InvalidValue {
            body: id.to_string(),
            field,
            value,
        };
        let missing = |field: &'static str| ConfigError::MissingField {
            body: id.to_string(),
            field,
        };

        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(invalid("radius", self.radius));
        }
        if let Some(speed) = self.rotation_speed {
            if !speed.is_finite() {
                return Err(invalid("rotationSpeed", speed));
            }
        }

        if self.is_light {
            if self.parent_id.is_some() {
                return Err(ConfigError::StarWithParent { body: id.to_string() });
            }
            return Ok(BodyRole::Star);
        }

        let orbital_radius = self.orbital_radius.ok_or_else(|| missing("orbitalRadius"))?;
        if !(orbital_radius.is_finite() && orbital_radius >= 0.0) {
            return Err(invalid("orbitalRadius", orbital_radius));
        }
        let orbital_period = self.orbital_period.ok_or_else(|| missing("orbitalPeriod"))?;
        if !(orbital_period.is_finite() && orbital_period >= 0.0) {
            return Err(invalid("orbitalPeriod", orbital_period));
        }

        match &self.parent_id {
            Some(parent) => {
                if self.orbital_inclination.is_some() {
                    return Err(ConfigError::SatelliteInclination { body: id.to_string() });
                }
                Ok(BodyRole::Satellite {
                    parent,
                    orbital_radius,
                    orbital_period,
                })
            }
            None => {
                if !(0.0..1.0).contains(&self.eccentricity) {
                    return Err(invalid("eccentricity", self.eccentricity));
                }
                let inclination_deg = self.orbital_inclination.unwrap_or(0.0);
                if !inclination_deg.is_finite() {
                    return Err(invalid("orbitalInclination", inclination_deg));
                }
                Ok(BodyRole::Planet {
                    orbital_radius,
                    eccentricity: self.eccentricity,
                    orbital_period,
                    inclination_deg,
                })
            }
        }
    }
}

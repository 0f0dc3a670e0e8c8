/// Built-in solar system catalog: the Sun, eight planets and the Moon.
///
/// Sizes and distances are exaggerated for readability, not to scale.
/// Periods are per-tick progress increments tuned for a 60 Hz loop.

use super::{Catalog, CatalogEntry};
use super::definition::{BodyTextures, CelestialBodyDefinition};

/// Scene-level textures requested alongside the per-body ones.
pub const STARFIELD_TEXTURE: &str = "starfield.jpg";
pub const GLOW_TEXTURE: &str = "glow.png";

fn textures(surface: &str) -> BodyTextures {
    BodyTextures {
        surface: Some(surface.to_string()),
        ..Default::default()
    }
}

fn bumped(surface: &str, bump: &str, bump_scale: f32) -> BodyTextures {
    BodyTextures {
        bump_texture: Some(bump.to_string()),
        bump_scale: Some(bump_scale),
        ..textures(surface)
    }
}

fn entry(id: &str, definition: CelestialBodyDefinition) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        definition,
    }
}

/// The default catalog.
pub fn solar_system() -> Catalog {
    let entries = vec![
        entry(
            "sun",
            CelestialBodyDefinition::star("The Sun", 10.0)
                .with_details(
                    "The star at the center of our Solar System. Its energy is the source of all life on Earth.",
                    "1,392,684 km", "1.989 × 10^30 kg", "27 Earth days (equator)", "0 AU",
                )
                .with_atmosphere(0xffffee, Some(50.5))
                .with_textures(textures("sun.jpg")),
        ),
        entry(
            "mercury",
            CelestialBodyDefinition::planet("Mercury", 0.38, 20.0, 0.01)
                .with_details(
                    "The smallest planet in our solar system and nearest to the Sun.",
                    "4,879 km", "3.285 × 10^23 kg", "88 Earth days", "0.39 AU",
                )
                .with_eccentricity(0.205)
                .with_rotation(0.01, 0.03)
                .with_inclination(7.00)
                .with_textures(bumped("mercury.jpg", "mercury_bump.jpg", 0.01)),
        ),
        entry(
            "venus",
            CelestialBodyDefinition::planet("Venus", 0.95, 30.0, 0.005)
                .with_details(
                    "The second planet from the Sun, known for its thick, toxic atmosphere.",
                    "12,104 km", "4.867 × 10^24 kg", "225 Earth days", "0.72 AU",
                )
                .with_eccentricity(0.007)
                .with_rotation(0.008, 177.4)
                .with_inclination(3.39)
                .with_atmosphere(0xffa500, None)
                .with_textures(BodyTextures {
                    cloud_texture: Some("venus_clouds.jpg".to_string()),
                    ..bumped("venus.jpg", "venus_bump.jpg", 0.01)
                }),
        ),
        entry(
            "earth",
            CelestialBodyDefinition::planet("Earth", 1.0, 45.0, 0.003)
                .with_details(
                    "Our home planet, the only place known to harbor life.",
                    "12,742 km", "5.972 × 10^24 kg", "365 Earth days", "1 AU",
                )
                .with_eccentricity(0.017)
                .with_rotation(0.01, 23.44)
                .with_inclination(0.0)
                .with_atmosphere(0x4d96ff, None)
                .with_textures(BodyTextures {
                    night_texture: Some("earth_night.jpg".to_string()),
                    specular_texture: Some("earth_specular.png".to_string()),
                    cloud_texture: Some("earth_clouds.png".to_string()),
                    ..bumped("earth.jpg", "earth_bump.jpg", 0.05)
                }),
        ),
        entry(
            "moon",
            CelestialBodyDefinition::satellite("The Moon", 0.27, "earth", 3.0, 0.05)
                .with_details(
                    "Earth's only natural satellite.",
                    "3,474 km", "7.342 × 10^22 kg", "27 Earth days", "0.00257 AU (from Earth)",
                )
                .with_rotation(0.01, 1.54)
                .with_textures(bumped("moon.jpg", "moon_bump.jpg", 0.01)),
        ),
        entry(
            "mars",
            CelestialBodyDefinition::planet("Mars", 0.53, 60.0, 0.0016)
                .with_details(
                    "The 'Red Planet', known for its distinctive reddish hue and potential for past life.",
                    "6,779 km", "6.39 × 10^23 kg", "687 Earth days", "1.52 AU",
                )
                .with_eccentricity(0.093)
                .with_rotation(0.01, 25.19)
                .with_inclination(1.85)
                .with_atmosphere(0xff8c00, None)
                .with_textures(bumped("mars.jpg", "mars_bump.jpg", 0.05)),
        ),
        entry(
            "jupiter",
            CelestialBodyDefinition::planet("Jupiter", 4.0, 120.0, 0.00025)
                .with_details(
                    "The largest planet in our solar system, a gas giant with a distinctive Great Red Spot.",
                    "139,820 km", "1.898 × 10^27 kg", "11.86 Earth years", "5.2 AU",
                )
                .with_eccentricity(0.048)
                .with_rotation(0.01, 3.13)
                .with_inclination(1.30)
                .with_textures(textures("jupiter.jpg")),
        ),
        entry(
            "saturn",
            CelestialBodyDefinition::planet("Saturn", 3.5, 180.0, 0.0001)
                .with_details(
                    "Famous for its magnificent ring system, Saturn is the sixth planet from the Sun.",
                    "116,460 km", "5.683 × 10^26 kg", "29.4 Earth days", "9.58 AU",
                )
                .with_eccentricity(0.056)
                .with_rotation(0.01, 26.73)
                .with_inclination(2.49)
                .with_textures(BodyTextures {
                    bump_texture: Some("saturn_bump.jpg".to_string()),
                    ..textures("saturn.jpg")
                })
                .with_rings("saturn_ring.png"),
        ),
        entry(
            "uranus",
            CelestialBodyDefinition::planet("Uranus", 2.0, 240.0, 0.00003)
                .with_details(
                    "An ice giant, Uranus rotates on its side, making it unique among the planets.",
                    "50,724 km", "8.681 × 10^25 kg", "84 Earth years", "19.2 AU",
                )
                .with_eccentricity(0.046)
                .with_rotation(0.008, 97.77)
                .with_inclination(0.77)
                .with_textures(textures("uranus.jpg")),
        ),
        entry(
            "neptune",
            CelestialBodyDefinition::planet("Neptune", 1.9, 300.0, 0.000018)
                .with_details(
                    "The farthest known planet in our solar system, another ice giant with powerful storms.",
                    "49,244 km", "1.024 × 10^26 kg", "165 Earth years", "30.1 AU",
                )
                .with_eccentricity(0.010)
                .with_rotation(0.008, 28.32)
                .with_inclination(1.77)
                .with_textures(textures("neptune.jpg")),
        ),
    ];
    Catalog { entries }
}

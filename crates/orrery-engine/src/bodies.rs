//! Planet table: sizes, orbit radii, angular speeds and texture sources.
//!
//! Values are chosen for the show, not for astronomy: radii and distances
//! are in scene units and compressed so all eight planets fit one scroll.

use std::f32::consts::{FRAC_PI_2, PI};

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

pub const SUN_TEXTURE: &str = "https://upload.wikimedia.org/wikipedia/commons/9/99/Map_of_the_full_sun.jpg";

/// Cloud texture for shells that do not name their own.
pub const DEFAULT_CLOUD_TEXTURE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/2/23/Blue_Marble_Clouds.png";

pub const DEFAULT_BUMP_SCALE: f32 = 0.05;

/// Overlay element shown while the camera frames the whole system.
pub const INTRO_OVERLAY_ID: &str = "info-intro";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumpMap {
    pub url: &'static str,
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudLayer {
    /// `None` falls back to [`DEFAULT_CLOUD_TEXTURE`].
    pub texture: Option<&'static str>,
    /// Shell radius as a multiple of the planet radius.
    pub scale: f32,
    pub opacity: f32,
}

impl CloudLayer {
    pub const THIN: CloudLayer = CloudLayer { texture: None, scale: 1.02, opacity: 0.4 };

    pub fn texture_url(&self) -> &'static str {
        self.texture.unwrap_or(DEFAULT_CLOUD_TEXTURE)
    }
}

/// Static description of one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetDescriptor {
    pub name: &'static str,
    pub radius: f32,
    /// Orbit radius around the sun.
    pub distance: f32,
    /// Angular speed factor (radians per second before the orbit scale).
    pub speed: f32,
    pub texture: &'static str,
    pub bump: Option<BumpMap>,
    /// Specular map, used as the roughness map.
    pub specular: Option<&'static str>,
    pub clouds: Option<CloudLayer>,
    /// Ring texture.
    pub ring: Option<&'static str>,
    pub satellite: bool,
    /// Axial tilt as Euler (x, z) radians.
    pub tilt: (f32, f32),
}

impl PlanetDescriptor {
    const fn plain(name: &'static str, radius: f32, distance: f32, speed: f32, texture: &'static str) -> Self {
        Self {
            name,
            radius,
            distance,
            speed,
            texture,
            bump: None,
            specular: None,
            clouds: None,
            ring: None,
            satellite: false,
            tilt: (0.0, 0.0),
        }
    }

    /// DOM id of the overlay panel describing this planet.
    pub fn overlay_id(&self) -> String {
        format!("info-{}", self.name.to_lowercase())
    }
}

const MERCURY_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/3/30/Mercury_in_color_-_Prockter07_centered.jpg";
const VENUS_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/a/ac/Venus_in_Real_Color_-_Processed.jpg";
const EARTH_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/c/c3/Solarsystemscope_texture_2k_earth_daymap.jpg";
const EARTH_SPECULAR: &str =
    "https://upload.wikimedia.org/wikipedia/commons/1/1a/Solarsystemscope_texture_2k_earth_specular_map.jpg";
const MARS_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/0/02/OSIRIS_Mars_true_color.jpg";
const JUPITER_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/e/e2/Jupiter.jpg";
const SATURN_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/b/b4/Saturn_%28planet%29_large.jpg";
const SATURN_RING_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/c/c7/Saturn_ring_texture.jpg";
const URANUS_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/3/3d/Uranus2.jpg";
const NEPTUNE_TEX: &str = "https://upload.wikimedia.org/wikipedia/commons/5/56/Neptune_Full.jpg";

/// The eight planets, innermost first.
pub const PLANETS: [PlanetDescriptor; PLANET_COUNT] = [
    PlanetDescriptor {
        bump: Some(BumpMap { url: MERCURY_TEX, scale: DEFAULT_BUMP_SCALE }),
        ..PlanetDescriptor::plain("Mercury", 2.2, 40.0, 0.4, MERCURY_TEX)
    },
    PlanetDescriptor {
        clouds: Some(CloudLayer { texture: Some(VENUS_TEX), scale: 1.01, opacity: 0.6 }),
        ..PlanetDescriptor::plain("Venus", 3.8, 65.0, 0.3, VENUS_TEX)
    },
    PlanetDescriptor {
        clouds: Some(CloudLayer::THIN),
        specular: Some(EARTH_SPECULAR),
        satellite: true,
        ..PlanetDescriptor::plain("Earth", 4.2, 95.0, 0.2, EARTH_TEX)
    },
    PlanetDescriptor {
        bump: Some(BumpMap { url: MARS_TEX, scale: 0.08 }),
        ..PlanetDescriptor::plain("Mars", 2.8, 125.0, 0.15, MARS_TEX)
    },
    PlanetDescriptor::plain("Jupiter", 14.0, 180.0, 0.08, JUPITER_TEX),
    PlanetDescriptor {
        ring: Some(SATURN_RING_TEX),
        tilt: (26.7 * (PI / 180.0), 0.1),
        ..PlanetDescriptor::plain("Saturn", 11.0, 250.0, 0.05, SATURN_TEX)
    },
    PlanetDescriptor {
        tilt: (0.0, FRAC_PI_2),
        ..PlanetDescriptor::plain("Uranus", 7.0, 320.0, 0.03, URANUS_TEX)
    },
    PlanetDescriptor {
        bump: Some(BumpMap { url: NEPTUNE_TEX, scale: 0.02 }),
        ..PlanetDescriptor::plain("Neptune", 7.0, 380.0, 0.02, NEPTUNE_TEX)
    },
];

/// Overlay ids in segment order: the overview panel, then one per planet.
pub fn overlay_ids(planets: &[PlanetDescriptor]) -> Vec<String> {
    std::iter::once(INTRO_OVERLAY_ID.to_owned())
        .chain(planets.iter().map(PlanetDescriptor::overlay_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_and_names() {
        let names: Vec<_> = PLANETS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(PLANETS[SATURN].name, "Saturn");
        assert_eq!(PLANETS[NEPTUNE].distance, 380.0);
    }

    #[test]
    fn orbits_increase_outward() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].distance < pair[1].distance);
        }
    }

    #[test]
    fn only_earth_has_a_satellite_and_only_saturn_a_ring() {
        let satellites: Vec<_> = PLANETS.iter().filter(|p| p.satellite).map(|p| p.name).collect();
        let rings: Vec<_> = PLANETS.iter().filter(|p| p.ring.is_some()).map(|p| p.name).collect();
        assert_eq!(satellites, ["Earth"]);
        assert_eq!(rings, ["Saturn"]);
    }

    #[test]
    fn cloud_defaults() {
        let venus = PLANETS[VENUS].clouds.unwrap();
        assert_eq!((venus.scale, venus.opacity), (1.01, 0.6));
        assert_eq!(venus.texture_url(), VENUS_TEX);
        let earth = PLANETS[EARTH].clouds.unwrap();
        assert_eq!((earth.scale, earth.opacity), (1.02, 0.4));
        assert_eq!(earth.texture_url(), DEFAULT_CLOUD_TEXTURE);
    }

    #[test]
    fn bump_scales() {
        assert_eq!(PLANETS[MERCURY].bump.map(|b| b.scale), Some(0.05));
        assert_eq!(PLANETS[MARS].bump.map(|b| b.scale), Some(0.08));
        assert_eq!(PLANETS[NEPTUNE].bump.map(|b| b.scale), Some(0.02));
        assert!(PLANETS[JUPITER].bump.is_none());
    }

    #[test]
    fn tilts() {
        assert!((PLANETS[SATURN].tilt.0 - 0.466).abs() < 1e-3);
        assert_eq!(PLANETS[SATURN].tilt.1, 0.1);
        assert_eq!(PLANETS[URANUS].tilt, (0.0, FRAC_PI_2));
        assert_eq!(PLANETS[EARTH].tilt, (0.0, 0.0));
    }

    #[test]
    fn overlay_ids_follow_segments() {
        let ids = overlay_ids(&PLANETS);
        assert_eq!(ids.len(), PLANET_COUNT + 1);
        assert_eq!(ids[0], "info-intro");
        assert_eq!(ids[1], "info-mercury");
        assert_eq!(ids[8], "info-neptune");
    }
}

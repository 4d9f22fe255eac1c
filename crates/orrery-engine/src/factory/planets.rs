use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::api::types::{Color, NodeId};
use crate::assets::textures::TextureLoader;
use crate::bodies::PlanetDescriptor;
use crate::components::geometry::{Geometry, RingGeometry};
use crate::components::material::{Material, Side};
use crate::components::node::Node;
use crate::core::rng::Rng;
use crate::core::scene::SceneGraph;
use crate::systems::motion::{orbit_position, OrbitState};

/// Half-width of the orbit guide annulus.
pub const ORBIT_LINE_HALF_WIDTH: f32 = 0.15;
pub const RING_SEGMENTS: u32 = 128;
/// Saturn-style ring bounds as multiples of the planet radius.
pub const RING_INNER_FACTOR: f32 = 1.4;
pub const RING_OUTER_FACTOR: f32 = 2.5;
/// Satellite orbit radius as a multiple of the planet radius.
pub const SATELLITE_OFFSET_FACTOR: f32 = 2.5;

/// Nodes created for one planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetNodes {
    /// Flat guide ring on the root; does not move with the planet.
    pub orbit_ring: NodeId,
    /// Orbit group, positioned on the orbit each frame.
    pub group: NodeId,
    /// Lit sphere, child of `group`.
    pub mesh: NodeId,
    pub clouds: Option<NodeId>,
    pub ring: Option<NodeId>,
    /// Pivot rotating the satellite, child of `group`.
    pub satellite: Option<NodeId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetSystem {
    pub planets: Vec<PlanetNodes>,
    /// One per planet, same order.
    pub orbits: Vec<OrbitState>,
}

impl PlanetSystem {
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Satellite pivots of every planet that carries one.
    pub fn satellite_pivots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.planets.iter().filter_map(|p| p.satellite)
    }
}

/// Orbit guides and planet groups attach to `parent`; everything else
/// hangs off the planet it belongs to.
pub fn create_planets(
    graph: &mut SceneGraph,
    parent: NodeId,
    loader: &mut dyn TextureLoader,
    rng: &mut Rng,
    descriptors: &[PlanetDescriptor],
) -> PlanetSystem {
    let mut system = PlanetSystem {
        planets: Vec::with_capacity(descriptors.len()),
        orbits: Vec::with_capacity(descriptors.len()),
    };

    for data in descriptors {
        let orbit = OrbitState::new(rng.angle());
        let key = data.name.to_lowercase();

        let orbit_ring = graph.add(
            parent,
            Node::mesh(
                format!("{key}-orbit"),
                Geometry::Ring(RingGeometry::new(
                    data.distance - ORBIT_LINE_HALF_WIDTH,
                    data.distance + ORBIT_LINE_HALF_WIDTH,
                    RING_SEGMENTS,
                )),
                Material::unlit(Color::WHITE).with_opacity(0.12).with_side(Side::Double),
            )
            .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
        );

        let group = graph.add(
            parent,
            Node::group(key.clone()).with_position(orbit_position(orbit.angle, data.distance)),
        );

        let mesh = graph.add(group, planet_mesh(&key, data, loader));

        let clouds = data.clouds.map(|layer| {
            let map = loader.load(layer.texture_url());
            graph.add(
                mesh,
                Node::mesh(
                    format!("{key}-clouds"),
                    Geometry::sphere(data.radius * layer.scale, 64, 64),
                    Material::standard(Color::WHITE)
                        .with_map(map)
                        .with_opacity(layer.opacity)
                        .additive()
                        .with_side(Side::Double),
                ),
            )
        });

        let ring = data.ring.map(|url| {
            let map = loader.load(url);
            let geometry = RingGeometry::new(
                data.radius * RING_INNER_FACTOR,
                data.radius * RING_OUTER_FACTOR,
                RING_SEGMENTS,
            )
            .with_radial_uv();
            graph.add(
                mesh,
                Node::mesh(
                    format!("{key}-ring"),
                    Geometry::Ring(geometry),
                    Material::standard(Color(0xdddddd))
                        .with_map(map)
                        .with_opacity(0.9)
                        .with_side(Side::Double),
                )
                .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0)),
            )
        });

        let satellite = data.satellite.then(|| create_satellite(graph, group, &key, data.radius));

        log::debug!("planet {} at orbit {} phase {:.3}", data.name, data.distance, orbit.phase);
        system.planets.push(PlanetNodes { orbit_ring, group, mesh, clouds, ring, satellite });
        system.orbits.push(orbit);
    }

    system
}

fn planet_mesh(key: &str, data: &PlanetDescriptor, loader: &mut dyn TextureLoader) -> Node {
    let mut material = Material::standard(Color::WHITE)
        .with_map(loader.load(data.texture))
        .with_roughness(0.8)
        .with_metalness(0.1);
    if let Some(bump) = data.bump {
        material = material.with_bump(loader.load(bump.url), bump.scale);
    }
    if let Some(specular) = data.specular {
        material = material.with_roughness_map(loader.load(specular)).with_roughness(1.0);
    }

    Node::mesh(format!("{key}-body"), Geometry::sphere(data.radius, 64, 64), material)
        .with_rotation(Vec3::new(data.tilt.0, 0.0, data.tilt.1))
}

/// Pivot → cylinder body → solar panel. Returns the pivot.
fn create_satellite(graph: &mut SceneGraph, group: NodeId, key: &str, radius: f32) -> NodeId {
    let pivot = graph.add(group, Node::group(format!("{key}-satellite-pivot")));
    let body = graph.add(
        pivot,
        Node::mesh(
            format!("{key}-satellite"),
            Geometry::Cylinder { radius_top: 0.2, radius_bottom: 0.2, height: 0.6, radial_segments: 8 },
            Material::standard(Color(0x888888)).with_roughness(0.4),
        )
        .with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2))
        .with_position(Vec3::new(radius * SATELLITE_OFFSET_FACTOR, 0.0, 0.0)),
    );
    graph.add(
        body,
        Node::mesh(
            format!("{key}-solar-panel"),
            Geometry::Cuboid { width: 1.2, height: 0.05, depth: 0.4 },
            Material::standard(Color(0x3333aa)).with_roughness(0.2),
        ),
    );
    pivot
}

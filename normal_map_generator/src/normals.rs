use glam::DVec3;

use crate::error::{GeneratorError, Result};
use crate::geometry::PanelPoints;

const MIN_CROSS_LENGTH: f64 = 1e-9;

/// One of the four sloped faces around the flat top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Down,
    Right,
    Up,
    Left,
}

impl Face {
    pub const ALL: [Face; 4] = [Face::Down, Face::Right, Face::Up, Face::Left];

    /// The pair of edge vectors spanning this face. The operand order fixes
    /// which way the normal points.
    fn edges(self, p: &PanelPoints) -> (DVec3, DVec3) {
        match self {
            Face::Down => (p.b - p.f, p.b - p.e),
            Face::Right => (p.e - p.g, p.e - p.k),
            Face::Up => (p.j - p.k, p.j - p.i),
            Face::Left => (p.c - p.d, p.c - p.j),
        }
    }
}

/// Unit normals of the four bevel faces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceNormals([DVec3; 4]);

impl FaceNormals {
    pub fn new(points: &PanelPoints) -> Result<Self> {
        let mut normals = [DVec3::ZERO; 4];

        for (slot, &face) in normals.iter_mut().zip(Face::ALL.iter()) {
            let (u, v) = face.edges(points);
            let cross = u.cross(v);
            let length = cross.length();

            if length.is_nan() || length < MIN_CROSS_LENGTH {
                return Err(GeneratorError::DegenerateGeometry(format!(
                    "edges of the {:?} face are parallel",
                    face
                )));
            }

            *slot = cross / length;
        }

        Ok(Self(normals))
    }

    pub fn get(&self, face: Face) -> DVec3 {
        self.0[face as usize]
    }
}

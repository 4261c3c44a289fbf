use crate::{
    error::{Error, Result},
    primitives::vertex::TexturedVertex,
    render::generic_mesh::{Mesh, Triangle},
};
use itertools::iproduct;

/// Unit UV sphere tessellated on a grid of parallels (latitude lines, south to north) and
/// meridians (longitude lines).
///
/// The first and last meridian are distinct vertices sharing a position so that texture
/// coordinates can run the full `[0, 1]` range. Every vertex of the first parallel sits on the
/// south pole and every vertex of the last one on the north pole, so the quads touching a pole
/// only get the one triangle that is not degenerate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UvSphere {
    parallels: u32,
    meridians: u32,
}

impl UvSphere {
    pub const MIN_SEGMENTS: u32 = 3;

    pub fn new(parallels: u32, meridians: u32) -> Result<Self> {
        if parallels < Self::MIN_SEGMENTS || meridians < Self::MIN_SEGMENTS {
            return Err(Error::InvalidTessellation {
                parallels,
                meridians,
            });
        }

        Ok(Self {
            parallels,
            meridians,
        })
    }

    pub fn parallels(&self) -> u32 {
        self.parallels
    }

    pub fn meridians(&self) -> u32 {
        self.meridians
    }

    pub fn vertex_count(&self) -> usize {
        (self.parallels * self.meridians) as usize
    }

    pub fn triangle_count(&self) -> usize {
        (2 * (self.parallels - 2) * (self.meridians - 1)) as usize
    }

    pub fn index_count(&self) -> usize {
        3 * self.triangle_count()
    }

    pub fn mesh(&self) -> Mesh<TexturedVertex> {
        Mesh {
            vertices: self.vertices(),
            triangles: self.triangles(),
        }
    }

    fn vertices(&self) -> Vec<TexturedVertex> {
        let last_parallel = (self.parallels - 1) as f32;
        let last_meridian = (self.meridians - 1) as f32;

        iproduct!(0..self.parallels, 0..self.meridians)
            .map(|(parallel, meridian)| {
                let u = meridian as f32 / last_meridian;
                let v = parallel as f32 / last_parallel;

                let latitude = -std::f32::consts::FRAC_PI_2 + std::f32::consts::PI * v;
                let longitude = 2.0 * std::f32::consts::PI * u;

                TexturedVertex::new(
                    latitude.cos() * longitude.sin(),
                    latitude.sin(),
                    latitude.cos() * longitude.cos(),
                    u,
                    v,
                )
            })
            .collect()
    }

    fn triangles(&self) -> Vec<Triangle> {
        let index = |parallel: u32, meridian: u32| parallel * self.meridians + meridian;
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for (parallel, meridian) in iproduct!(0..self.parallels - 1, 0..self.meridians - 1) {
            let v00 = index(parallel, meridian);
            let v01 = index(parallel, meridian + 1);
            let v10 = index(parallel + 1, meridian);
            let v11 = index(parallel + 1, meridian + 1);

            if parallel > 0 {
                triangles.push(Triangle([v00, v01, v11]));
            }

            if parallel < self.parallels - 2 {
                triangles.push(Triangle([v00, v10, v11]));
            }
        }

        triangles
    }
}

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path, sync::Arc};

pub type Vec3 = [f32; 3];
pub type Colour = [f32; 4];

/// A vertex position. Its index is the order in which it was declared.
pub type Vertex = Vec3;

/// Materials keyed by their name, as declared in a material library.
pub type MaterialLibrary = HashMap<String, Arc<Material>>;

/// Which index channels a face carries besides the vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceKind {
    V,
    VT,
    VN,
    VTN,
}

/// A triangle referencing vertices, texture coordinates and normals by zero-based index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub vertices: [u32; 3],
    pub tex_coords: Option<[u32; 3]>,
    pub normals: Option<[u32; 3]>,
}

impl Face {
    pub fn new(vertices: [u32; 3]) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    pub fn with_tex_coords(mut self, tex_coords: [u32; 3]) -> Self {
        self.tex_coords = Some(tex_coords);
        self
    }

    pub fn with_normals(mut self, normals: [u32; 3]) -> Self {
        self.normals = Some(normals);
        self
    }

    pub fn kind(&self) -> FaceKind {
        match (self.tex_coords.is_some(), self.normals.is_some()) {
            (false, false) => FaceKind::V,
            (true, false) => FaceKind::VT,
            (false, true) => FaceKind::VN,
            (true, true) => FaceKind::VTN,
        }
    }

    /// Texture coordinate indices, zero-filled when the face has none.
    pub fn tex_coords_or_zero(&self) -> [u32; 3] {
        self.tex_coords.unwrap_or_default()
    }

    /// Normal indices, zero-filled when the face has none.
    pub fn normals_or_zero(&self) -> [u32; 3] {
        self.normals.unwrap_or_default()
    }
}

/// Only the diffuse colour (`Kd`) is kept. The alpha channel stays zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub diffuse: Colour,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubMesh {
    pub material_name: String,
    /// `None` when the material library does not declare `material_name`.
    pub material: Option<Arc<Material>>,
    pub faces: Vec<Face>,
}

impl SubMesh {
    pub fn new(material_name: impl Into<String>, material: Option<Arc<Material>>) -> Self {
        Self {
            material_name: material_name.into(),
            material,
            faces: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub normals: Vec<Vec3>,
    pub sub_meshes: Vec<SubMesh>,
}

impl Mesh {
    pub fn face_count(&self) -> usize {
        self.sub_meshes.iter().map(|s| s.faces.len()).sum()
    }

    /// Negates the selected axis of every vertex and normal.
    pub fn flip_axis(&mut self, axis: [bool; 3]) {
        for v in self.vertices.iter_mut().chain(self.normals.iter_mut()) {
            for n in 0..3 {
                if axis[n] {
                    v[n] = -v[n];
                }
            }
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(bincode::deserialize::<Mesh>(&bytes)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Mesh::from_bytes(data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn triangle() -> Mesh {
        let material = Arc::new(Material {
            name: "Red".into(),
            diffuse: [1.0, 0.0, 0.0, 0.0],
        });

        Mesh {
            name: "Triangle".into(),
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]],
            sub_meshes: vec![SubMesh {
                material_name: "Red".into(),
                material: Some(material),
                faces: vec![Face::new([0, 1, 2]).with_normals([0, 0, 0])],
            }],
        }
    }

    #[test]
    fn test_face_kind() {
        assert_eq!(Face::new([0, 1, 2]).kind(), FaceKind::V);
        assert_eq!(Face::new([0, 1, 2]).with_tex_coords([1, 1, 1]).kind(), FaceKind::VT);
        assert_eq!(Face::new([0, 1, 2]).with_normals([1, 1, 1]).kind(), FaceKind::VN);
        assert_eq!(
            Face::new([0, 1, 2])
                .with_tex_coords([1, 1, 1])
                .with_normals([2, 2, 2])
                .kind(),
            FaceKind::VTN
        );

        let face = Face::new([3, 4, 5]).with_normals([6, 7, 8]);
        assert_eq!(face.tex_coords_or_zero(), [0, 0, 0]);
        assert_eq!(face.normals_or_zero(), [6, 7, 8]);
    }

    #[test]
    fn test_flip_axis() {
        let mut mesh = triangle();
        mesh.flip_axis([false, true, true]);

        assert_eq!(mesh.vertices[1], [1.0, -0.0, -0.0]);
        assert_eq!(mesh.vertices[2], [0.0, -1.0, -0.0]);
        assert_eq!(mesh.normals[0], [0.0, -0.0, -1.0]);
    }

    #[test]
    fn test_serialization() -> Result<()> {
        let mesh = triangle();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(Mesh::from_bytes(mesh.to_bytes()?)?, mesh);
        Ok(())
    }
}

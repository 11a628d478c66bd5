use log::warn;
use ve_format::mesh::{Face, MaterialLibrary, Mesh, SubMesh, Vec3, Vertex};

use crate::error::ParserError;

/// Parse state threaded through the lines of one obj file.
///
/// The active sub-mesh is always the last one in `mesh.sub_meshes`.
#[derive(Debug)]
pub(crate) struct ObjMeshBuilder<'a> {
    materials: &'a MaterialLibrary,
    mesh: Mesh,
}

impl<'a> ObjMeshBuilder<'a> {
    pub(crate) fn new(materials: &'a MaterialLibrary) -> Self {
        Self {
            materials,
            mesh: Mesh::default(),
        }
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.mesh.name = name.into();
    }

    pub(crate) fn use_material(&mut self, name: &str) {
        let material = self.materials.get(name).cloned();
        if material.is_none() {
            warn!("Material `{}` is not declared in the material library", name);
        }

        self.mesh.sub_meshes.push(SubMesh::new(name, material));
    }

    pub(crate) fn push_vertex(&mut self, vertex: Vertex) {
        self.mesh.vertices.push(vertex);
    }

    pub(crate) fn push_normal(&mut self, normal: Vec3) {
        self.mesh.normals.push(normal);
    }

    pub(crate) fn push_face(&mut self, face: Face, line: usize) -> Result<(), ParserError> {
        self.mesh
            .sub_meshes
            .last_mut()
            .ok_or(ParserError::NoActiveSubMesh { line })?
            .faces
            .push(face);
        Ok(())
    }

    pub(crate) fn build_mesh(self) -> Mesh {
        self.mesh
    }
}

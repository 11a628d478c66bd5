//! Loads wavefront `.obj` meshes and their `.mtl` material libraries into [`ve_format::mesh::Mesh`].

pub mod error;
pub mod mesh;
pub mod meta;
pub mod utils;

pub use error::{LoadError, ParserError};
pub use mesh::{
    mtl::parse_materials,
    obj::{load, parse_obj},
};

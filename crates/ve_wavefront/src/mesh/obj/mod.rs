mod builder;
mod parser;

pub use parser::parse_obj;

use log::info;
use std::{io, path::Path};
use ve_format::mesh::Mesh;

use super::mtl::parse_materials;
use crate::error::LoadError;

/// Loads an obj mesh together with its material library.
///
/// Files are only ever read through `read_file`. The `mtllib` directive of the
/// obj is ignored, `mtl_path` is always used instead.
pub fn load<F>(obj_path: &Path, mtl_path: &Path, mut read_file: F) -> Result<Mesh, LoadError>
where
    F: FnMut(&Path) -> io::Result<Vec<u8>>,
{
    info!("Loading mesh: {}", obj_path.display());

    let obj = read_text(obj_path, &mut read_file)?;
    let mtl = read_text(mtl_path, &mut read_file)?;

    let materials = parse_materials(&mtl).map_err(|source| LoadError::Parse {
        path: mtl_path.to_owned(),
        source,
    })?;
    let mesh = parse_obj(&obj, &materials).map_err(|source| LoadError::Parse {
        path: obj_path.to_owned(),
        source,
    })?;

    info!(
        "Loaded mesh {:?}: {} vertices, {} normals, {} faces in {} submeshes, {} materials",
        mesh.name,
        mesh.vertices.len(),
        mesh.normals.len(),
        mesh.face_count(),
        mesh.sub_meshes.len(),
        materials.len()
    );

    Ok(mesh)
}

fn read_text<F>(path: &Path, read_file: &mut F) -> Result<String, LoadError>
where
    F: FnMut(&Path) -> io::Result<Vec<u8>>,
{
    let bytes = read_file(path).map_err(|source| LoadError::ReadFailure {
        path: path.to_owned(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| LoadError::InvalidEncoding {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ParserError;
    use std::{collections::HashMap, path::PathBuf};

    fn reader(
        files: HashMap<PathBuf, Vec<u8>>,
    ) -> impl FnMut(&Path) -> io::Result<Vec<u8>> {
        move |path| {
            files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn files(obj: &str, mtl: &str) -> HashMap<PathBuf, Vec<u8>> {
        let mut files = HashMap::new();
        files.insert(PathBuf::from("mesh.obj"), obj.as_bytes().to_vec());
        files.insert(PathBuf::from("mesh.mtl"), mtl.as_bytes().to_vec());
        files
    }

    #[test]
    fn test_load() -> Result<(), LoadError> {
        let files = files(
            "o Tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl Red\nf 1 2 3",
            "newmtl Red\nKd 1 0 0",
        );

        let mesh = load(Path::new("mesh.obj"), Path::new("mesh.mtl"), reader(files))?;
        assert_eq!(mesh.name, "Tri");
        assert_eq!(mesh.vertices.len(), 3);

        let material = mesh.sub_meshes[0].material.as_ref().map(|m| m.diffuse);
        assert_eq!(material, Some([1.0, 0.0, 0.0, 0.0]));

        Ok(())
    }

    #[test]
    fn test_read_failure() {
        let mut files = files("", "");
        files.remove(Path::new("mesh.mtl"));

        match load(Path::new("mesh.obj"), Path::new("mesh.mtl"), reader(files)) {
            Err(LoadError::ReadFailure { path, source }) => {
                assert_eq!(path, PathBuf::from("mesh.mtl"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected read failure, found {:?}", other),
        }
    }

    #[test]
    fn test_invalid_encoding() {
        let mut files = files("", "");
        files.insert(PathBuf::from("mesh.obj"), vec![0x76, 0x20, 0xff, 0xfe]);

        assert!(matches!(
            load(Path::new("mesh.obj"), Path::new("mesh.mtl"), reader(files)),
            Err(LoadError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_parse_errors_name_their_file() {
        let result = load(
            Path::new("mesh.obj"),
            Path::new("mesh.mtl"),
            reader(files("", "Kd 1 1 1")),
        );
        match result {
            Err(LoadError::Parse { path, source }) => {
                assert_eq!(path, PathBuf::from("mesh.mtl"));
                assert_eq!(source, ParserError::NoActiveMaterial { line: 1 });
            }
            other => panic!("Expected parse error, found {:?}", other),
        }

        let result = load(
            Path::new("mesh.obj"),
            Path::new("mesh.mtl"),
            reader(files("g group", "")),
        );
        assert!(matches!(
            result,
            Err(LoadError::Parse { path, .. }) if path == Path::new("mesh.obj")
        ));
    }
}

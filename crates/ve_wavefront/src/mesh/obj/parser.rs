use log::{debug, trace};
use ve_format::mesh::{MaterialLibrary, Mesh};

use super::builder::ObjMeshBuilder;
use crate::error::{owned, ParserError};
use crate::mesh::{face::parse_face, numbers::parse_vec3, tokenize};

// parses wavefront obj (https://en.wikipedia.org/wiki/Wavefront_.obj_file)
// unlike material libraries, unsupported directives are an error here
pub fn parse_obj(text: &str, materials: &MaterialLibrary) -> Result<Mesh, ParserError> {
    let mut builder = ObjMeshBuilder::new(materials);

    for (line, token, args) in tokenize(text) {
        trace!("Parsing line {}: {:?} {:?}", line, token, args);
        parse_token(token, &args, line, &mut builder)?;
    }

    Ok(builder.build_mesh())
}

fn parse_token(
    token: &str,
    args: &[&str],
    line: usize,
    builder: &mut ObjMeshBuilder,
) -> Result<(), ParserError> {
    match token {
        // materials are passed in by the caller
        "mtllib" => debug!("Ignoring material library {:?}", args),
        // material (starts a submesh)
        "usemtl" => builder.use_material(parse_single(token, args, line)?),
        // name
        "o" => builder.set_name(parse_single(token, args, line)?),
        // smoothing groups
        "s" => debug!("Smoothing groups not supported. Ignoring."),
        // vertex
        "v" => builder.push_vertex(parse_vec3(args, line)?),
        // vertex normals
        "vn" => builder.push_normal(parse_vec3(args, line)?),
        "f" => builder.push_face(parse_face(args, line)?, line)?,
        _ => {
            return Err(ParserError::UnknownDirective {
                line,
                directive: token.into(),
                tokens: owned(args),
            })
        }
    };

    Ok(())
}

fn parse_single<'a>(token: &str, args: &[&'a str], line: usize) -> Result<&'a str, ParserError> {
    match args {
        [value] => Ok(*value),
        _ => Err(ParserError::MalformedDirective {
            line,
            directive: token.into(),
            tokens: owned(args),
        }),
    }
}

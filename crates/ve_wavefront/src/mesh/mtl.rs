use std::{collections::HashMap, sync::Arc};

use log::{debug, trace};
use ve_format::mesh::{Material, MaterialLibrary};

use super::{numbers::parse_floats, tokenize};
use crate::error::{owned, ParserError};

/// Parses a wavefront material library (https://en.wikipedia.org/wiki/Wavefront_.obj_file#Material_template_library).
///
/// Only `newmtl` and the diffuse colour `Kd` are materialized, every other
/// channel is skipped so newer or exporter specific keywords never fail.
///
/// `newmtl` is the exception: it must carry exactly one name. A missing name or
/// a name containing spaces (`newmtl two names`) fails with
/// [`ParserError::MalformedDirective`] instead of keeping only the first word.
pub fn parse_materials(text: &str) -> Result<MaterialLibrary, ParserError> {
    let mut materials: HashMap<String, Material> = HashMap::new();
    let mut active: Option<String> = None;

    for (line, token, args) in tokenize(text) {
        let args = args.as_slice();
        match token {
            "newmtl" => {
                let name = match args {
                    [name] => *name,
                    _ => {
                        return Err(ParserError::MalformedDirective {
                            line,
                            directive: token.into(),
                            tokens: owned(args),
                        })
                    }
                };

                trace!("Declaring material {:?}", name);
                // redeclaring a name replaces the earlier material
                materials.insert(name.into(), Material::new(name));
                active = Some(name.into());
            }
            "Kd" => {
                let material = active
                    .as_ref()
                    .and_then(|name| materials.get_mut(name))
                    .ok_or(ParserError::NoActiveMaterial { line })?;

                let values = parse_floats(args, line)?;
                if values.len() < 3 {
                    return Err(ParserError::MalformedNumber {
                        line,
                        position: values.len(),
                        token: String::new(),
                    });
                }

                material.diffuse[..3].copy_from_slice(&values[..3]);
            }
            _ => debug!("Ignoring material directive `{}` on line {}", token, line),
        }
    }

    Ok(materials
        .into_iter()
        .map(|(name, material)| (name, Arc::new(material)))
        .collect())
}

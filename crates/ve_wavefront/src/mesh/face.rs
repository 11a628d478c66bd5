use log::warn;
use ve_format::mesh::Face;

use crate::error::{owned, ParserError};

/// The slots of a single face vertex (`v`, `v/t`, `v//n` or `v/t/n`), still as text.
#[derive(Debug, Default, PartialEq)]
struct FaceVertex<'a> {
    vertex: &'a str,
    tex_coord: &'a str,
    normal: &'a str,
}

// splits a face vertex at its slashes; anything past the second slash stays in the normal slot
fn split_face_vertex(value: &str) -> FaceVertex<'_> {
    let mut slots = value.splitn(3, '/');

    FaceVertex {
        vertex: slots.next().unwrap_or_default(),
        tex_coord: slots.next().unwrap_or_default(),
        normal: slots.next().unwrap_or_default(),
    }
}

// obj indices are 1-based, we'd rather them be 0-based
fn parse_index(value: &str) -> Option<u32> {
    let index: i32 = value.parse().ok()?;
    u32::try_from(index).ok()?.checked_sub(1)
}

/// Parses the three face vertices of an `f` directive.
///
/// Whether the face has texture coordinate or normal indices is decided by the
/// last face vertex alone, so a face mixing shapes (`1 2/2 3/3`) keeps only the
/// channels of its last vertex. Indices of other vertices in a channel the last
/// one lacks are dropped; channels missing on earlier vertices are zero.
pub(crate) fn parse_face(tokens: &[&str], line: usize) -> Result<Face, ParserError> {
    let malformed = || ParserError::MalformedFace {
        line,
        tokens: owned(tokens),
    };

    if tokens.len() != 3 {
        return Err(malformed());
    }

    let mut v = [0; 3];
    let mut t = [0; 3];
    let mut n = [0; 3];
    let (mut has_t, mut has_n) = (false, false);
    let mut shapes = Vec::with_capacity(3);

    for (i, token) in tokens.iter().enumerate() {
        let slots = split_face_vertex(token);

        has_t = !slots.tex_coord.is_empty();
        has_n = !slots.normal.is_empty();
        shapes.push((has_t, has_n));

        v[i] = parse_index(slots.vertex).ok_or_else(malformed)?;
        if has_t {
            t[i] = parse_index(slots.tex_coord).ok_or_else(malformed)?;
        }
        if has_n {
            n[i] = parse_index(slots.normal).ok_or_else(malformed)?;
        }
    }

    if shapes.windows(2).any(|w| w[0] != w[1]) {
        warn!(
            "Line {}: face {:?} mixes vertex formats, only the last one is used",
            line, tokens
        );
    }

    let mut face = Face::new(v);
    if has_t {
        face = face.with_tex_coords(t);
    }
    if has_n {
        face = face.with_normals(n);
    }

    Ok(face)
}

use ve_format::mesh::Vec3;

use crate::error::{owned, ParserError};

// parses exactly three coordinates, as used by `v` and `vn`
pub(crate) fn parse_vec3(tokens: &[&str], line: usize) -> Result<Vec3, ParserError> {
    let malformed = || ParserError::MalformedVertex {
        line,
        tokens: owned(tokens),
    };

    if tokens.len() != 3 {
        return Err(malformed());
    }

    let mut v: Vec3 = [0.0; 3];
    for (a, b) in v.iter_mut().zip(tokens) {
        *a = b.parse().map_err(|_| malformed())?;
    }

    Ok(v)
}

// parses any number of floats, reporting the first token which isn't one
pub(crate) fn parse_floats(tokens: &[&str], line: usize) -> Result<Vec<f32>, ParserError> {
    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<f32>().map_err(|_| ParserError::MalformedNumber {
                line,
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

use std::{io, path::PathBuf, string::FromUtf8Error};

/// Line numbers are 1-based. `tokens` holds the arguments after the directive keyword.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParserError {
    #[error("Line {line}: failed to parse number {token:?} at position {position}.")]
    MalformedNumber {
        line: usize,
        position: usize,
        token: String,
    },
    #[error("Line {line}: expected three coordinates but found {tokens:?}.")]
    MalformedVertex { line: usize, tokens: Vec<String> },
    #[error("Line {line}: failed to parse face {tokens:?}.")]
    MalformedFace { line: usize, tokens: Vec<String> },
    #[error("Line {line}: expected exactly one argument for `{directive}` but found {tokens:?}.")]
    MalformedDirective {
        line: usize,
        directive: String,
        tokens: Vec<String>,
    },
    #[error("Line {line}: material channel defined before any `newmtl`.")]
    NoActiveMaterial { line: usize },
    #[error("Line {line}: face defined before any `usemtl`.")]
    NoActiveSubMesh { line: usize },
    #[error("Line {line}: unknown obj definition `{directive}` {tokens:?}.")]
    UnknownDirective {
        line: usize,
        directive: String,
        tokens: Vec<String>,
    },
}

impl ParserError {
    pub fn line(&self) -> usize {
        match self {
            ParserError::MalformedNumber { line, .. }
            | ParserError::MalformedVertex { line, .. }
            | ParserError::MalformedFace { line, .. }
            | ParserError::MalformedDirective { line, .. }
            | ParserError::NoActiveMaterial { line }
            | ParserError::NoActiveSubMesh { line }
            | ParserError::UnknownDirective { line, .. } => *line,
        }
    }
}

pub(crate) fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Happens while loading a mesh and its material library; always fatal.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Couldn't load file {}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File {} is not valid UTF-8", path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("Couldn't parse file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParserError,
    },
}

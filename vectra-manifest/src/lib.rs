//! Manifest types and parsing for vectra.toml files.
//!
//! The manifest fixes every input of a generation run up front: the
//! dimension range, the scalar element type, naming overrides, output file
//! names and indentation, and the feature switches. Validation happens
//! immediately after parsing; the emitters downstream have no fallible
//! paths, so every configuration error must be caught here.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod validate;

use std::{path::Path, str::FromStr};

pub use error::{Error, Result, SourceContext};
use serde::Deserialize;

/// The default axis alphabet: x, y, z, w, then the tail of the alphabet
/// backwards, skipping letters already used.
pub const DEFAULT_AXES: &str = "xyzwvutsrqabcdefghijk";

/// Root manifest for vectra.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Generated type family: dimension range and element type
    pub types: TypesConfig,

    /// Naming overrides (prefixes and axis alphabet)
    #[serde(default)]
    pub naming: NamingConfig,

    /// Output file names and formatting
    #[serde(default)]
    pub output: OutputConfig,

    /// Feature switches
    #[serde(default)]
    pub features: Features,
}

/// The `[types]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TypesConfig {
    /// Widest generated type; vectors are generated for 2..=max_dimension
    pub max_dimension: usize,

    /// Scalar element type, emitted verbatim (e.g. "float", "double")
    pub scalar: String,
}

/// The `[naming]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Vector type name prefix; the dimension is appended ("Vec" -> Vec3)
    pub vector_prefix: String,

    /// Matrix type name prefix ("Matrix" -> Matrix2x3)
    pub matrix_prefix: String,

    /// Axis label characters, one per axis of the widest type
    pub axes: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            vector_prefix: "Vec".to_string(),
            matrix_prefix: "Matrix".to_string(),
            axes: DEFAULT_AXES.to_string(),
        }
    }
}

/// The `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Declaration surface file name
    pub header: String,

    /// Definition surface file name
    pub source: String,

    /// Indentation width in spaces
    pub indent: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header: "vectors.h".to_string(),
            source: "vectors.cpp".to_string(),
            indent: 4,
        }
    }
}

/// The `[features]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Emit swizzle accessors. Off by default: the accessor count grows as
    /// d^r per type and dominates output volume as soon as it is enabled.
    pub swizzle: bool,

    /// Emit matrix types alongside vectors
    pub matrices: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            swizzle: false,
            matrices: true,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "vectra.toml")
    }
}

impl Manifest {
    /// Parse a vectra.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a vectra.toml from a string with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }

    /// Dimensions of the generated vector types, in emission order.
    pub fn dimensions(&self) -> std::ops::RangeInclusive<usize> {
        2..=self.types.max_dimension
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate::validate(&manifest, content, filename)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_manifest_defaults() {
        let m = Manifest::from_str(
            r#"
            [types]
            max_dimension = 4
            scalar = "float"
            "#,
        )
        .unwrap();

        assert_eq!(m.types.max_dimension, 4);
        assert_eq!(m.types.scalar, "float");
        assert_eq!(m.naming.vector_prefix, "Vec");
        assert_eq!(m.naming.matrix_prefix, "Matrix");
        assert_eq!(m.naming.axes, DEFAULT_AXES);
        assert_eq!(m.output.header, "vectors.h");
        assert_eq!(m.output.source, "vectors.cpp");
        assert_eq!(m.output.indent, 4);
        assert!(!m.features.swizzle);
        assert!(m.features.matrices);
        assert_eq!(m.dimensions().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_full_manifest() {
        let m = Manifest::from_str(
            r#"
            [types]
            max_dimension = 3
            scalar = "double"

            [naming]
            vector_prefix = "vec"
            matrix_prefix = "mat"
            axes = "abc"

            [output]
            header = "linalg.hpp"
            source = "linalg.cpp"
            indent = 2

            [features]
            swizzle = true
            matrices = false
            "#,
        )
        .unwrap();

        assert_eq!(m.naming.vector_prefix, "vec");
        assert_eq!(m.naming.axes, "abc");
        assert_eq!(m.output.indent, 2);
        assert!(m.features.swizzle);
        assert!(!m.features.matrices);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Manifest::from_str("this is not toml [").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_types_section_is_a_parse_error() {
        let err = Manifest::from_str("[naming]\naxes = \"xyzw\"").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}

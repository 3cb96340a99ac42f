//! Post-parse validation of the manifest.
//!
//! Everything here runs before any emission begins; the emitters themselves
//! have no fallible paths, so a manifest that survives this pass cannot fail
//! mid-traversal.

use std::collections::HashSet;

use miette::SourceSpan;

use crate::{Manifest, Result, error::SourceContext};

/// Validate a parsed manifest against its source text.
pub fn validate(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = SourceContext::new(src, filename);

    if manifest.types.max_dimension < 2 {
        return Err(ctx.dimension_error(
            manifest.types.max_dimension,
            find_key_span(src, "max_dimension"),
        ));
    }

    validate_type_token(&ctx, &manifest.types.scalar, "scalar type")?;
    validate_prefix(&ctx, &manifest.naming.vector_prefix, "vector type prefix")?;
    validate_prefix(&ctx, &manifest.naming.matrix_prefix, "matrix type prefix")?;
    validate_axes(&ctx, manifest)?;
    validate_file_name(&ctx, &manifest.output.header, "header file name")?;
    validate_file_name(&ctx, &manifest.output.source, "source file name")?;

    Ok(())
}

/// The scalar token is emitted verbatim, so it may contain spaces
/// ("long double") but must otherwise look like a C++ type name.
fn validate_type_token(ctx: &SourceContext, token: &str, context: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(ctx.invalid_token_error(
            token,
            context,
            "the token is empty",
            find_value_span(ctx.src(), token),
        ));
    }
    let valid = token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ' || c == ':');
    let starts_ok = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid || !starts_ok {
        return Err(ctx.invalid_token_error(
            token,
            context,
            "use letters, digits, underscores and spaces, starting with a letter",
            find_value_span(ctx.src(), token),
        ));
    }
    Ok(())
}

fn validate_prefix(ctx: &SourceContext, prefix: &str, context: &str) -> Result<()> {
    let valid = !prefix.is_empty()
        && prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(ctx.invalid_token_error(
            prefix,
            context,
            "the prefix must be a valid identifier; the dimension is appended to it",
            find_value_span(ctx.src(), prefix),
        ));
    }
    Ok(())
}

fn validate_axes(ctx: &SourceContext, manifest: &Manifest) -> Result<()> {
    let axes = &manifest.naming.axes;
    let span = find_value_span(ctx.src(), axes);

    let count = axes.chars().count();
    if count < manifest.types.max_dimension {
        return Err(ctx.axes_too_short_error(manifest.types.max_dimension, count, span));
    }

    let mut seen = HashSet::new();
    for c in axes.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(ctx.invalid_token_error(
                c.to_string(),
                "axis label",
                "axis labels become field names, so each must be an ASCII letter",
                span,
            ));
        }
        if !seen.insert(c) {
            return Err(ctx.duplicate_axis_error(c, span));
        }
    }
    Ok(())
}

fn validate_file_name(ctx: &SourceContext, name: &str, context: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ctx.invalid_token_error(
            name,
            context,
            "the output file name is empty",
            None,
        ));
    }
    Ok(())
}

/// Find the span of a key in the source, for pointing diagnostics at it.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.find(key).map(|start| (start, key.len()).into())
}

/// Find the span of a quoted value in the source.
fn find_value_span(src: &str, value: impl ToString) -> Option<SourceSpan> {
    let needle = format!("\"{}\"", value.to_string());
    src.find(&needle).map(|start| (start, needle.len()).into())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{Error, Manifest};

    fn manifest(toml: &str) -> crate::Result<Manifest> {
        Manifest::from_str(toml)
    }

    #[test]
    fn test_minimal_manifest_is_valid() {
        let m = manifest(
            r#"
            [types]
            max_dimension = 4
            scalar = "float"
            "#,
        );
        assert!(m.is_ok());
    }

    #[test]
    fn test_dimension_below_two_is_rejected() {
        let err = manifest(
            r#"
            [types]
            max_dimension = 1
            scalar = "float"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::DimensionOutOfRange { value: 1, .. }));
    }

    #[test]
    fn test_short_axes_rejected() {
        let err = manifest(
            r#"
            [types]
            max_dimension = 4
            scalar = "float"

            [naming]
            axes = "xyz"
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            *err,
            Error::AxesTooShort {
                needed: 4,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_axes_rejected() {
        let err = manifest(
            r#"
            [types]
            max_dimension = 3
            scalar = "float"

            [naming]
            axes = "xyx"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateAxis { axis: 'x', .. }));
    }

    #[test]
    fn test_non_letter_axis_rejected() {
        let err = manifest(
            r#"
            [types]
            max_dimension = 2
            scalar = "float"

            [naming]
            axes = "x1"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidToken { .. }));
    }

    #[test]
    fn test_empty_scalar_rejected() {
        let err = manifest(
            r#"
            [types]
            max_dimension = 2
            scalar = ""
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidToken { .. }));
    }

    #[test]
    fn test_scalar_with_space_is_accepted() {
        let m = manifest(
            r#"
            [types]
            max_dimension = 2
            scalar = "long double"
            "#,
        );
        assert!(m.is_ok());
    }

    #[test]
    fn test_bad_prefix_rejected() {
        let err = manifest(
            r#"
            [types]
            max_dimension = 2
            scalar = "float"

            [naming]
            vector_prefix = "2Vec"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidToken { .. }));
    }
}

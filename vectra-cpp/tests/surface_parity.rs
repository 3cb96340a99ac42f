//! Cross-surface properties: parity, determinism, and the unit counts the
//! constructor and swizzle enumerations imply.

use std::str::FromStr;

use vectra_cpp::{Generator, Signature, Surface};
use vectra_manifest::Manifest;

fn surfaces(manifest_toml: &str) -> (Surface, Surface) {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let generator = Generator::new(&manifest);
    generator.surfaces().expect("surfaces diverged")
}

fn constructors<'a>(signatures: &'a [Signature], owner: &str) -> Vec<&'a Signature> {
    signatures
        .iter()
        .filter(|s| s.owner == owner && s.name == owner)
        .collect()
}

/// Zero-argument accessors whose name spells axis labels only.
fn swizzles<'a>(
    signatures: &'a [Signature],
    owner: &str,
    arity: usize,
    axes: &str,
) -> Vec<&'a Signature> {
    signatures
        .iter()
        .filter(|s| {
            s.owner == owner
                && s.params.is_empty()
                && s.name.len() == arity
                && s.name.chars().all(|c| axes.contains(c))
        })
        .collect()
}

#[test]
fn test_definitions_match_declarations_in_order() {
    let (declarations, definitions) = surfaces(
        r#"
        [types]
        max_dimension = 4
        scalar = "float"

        [features]
        swizzle = true
        matrices = true
        "#,
    );
    assert_eq!(declarations.signatures, definitions.signatures);
    assert!(!declarations.signatures.is_empty());
}

#[test]
fn test_generation_is_idempotent() {
    let manifest = Manifest::from_str(
        r#"
        [types]
        max_dimension = 3
        scalar = "double"

        [features]
        swizzle = true
        "#,
    )
    .unwrap();

    let (header_a, source_a) = {
        let (h, s) = Generator::new(&manifest).surfaces().unwrap();
        (h.text, s.text)
    };
    let (header_b, source_b) = {
        let (h, s) = Generator::new(&manifest).surfaces().unwrap();
        (h.text, s.text)
    };

    assert_eq!(header_a, header_b);
    assert_eq!(source_a, source_b);
}

#[test]
fn test_two_dimensional_type_has_exactly_two_constructors() {
    let (declarations, _) = surfaces(
        r#"
        [types]
        max_dimension = 2
        scalar = "float"

        [features]
        matrices = false
        "#,
    );

    let ctors = constructors(&declarations.signatures, "Vec2");
    assert_eq!(ctors.len(), 2);
    assert_eq!(ctors[0].params, vec!["float", "float"]);
    assert_eq!(ctors[1].params, vec!["const Vec2&"]);
}

#[test]
fn test_constructor_count_is_composition_count() {
    let (declarations, _) = surfaces(
        r#"
        [types]
        max_dimension = 5
        scalar = "float"

        [features]
        matrices = false
        "#,
    );

    // 2^(d-1) compositions of d.
    assert_eq!(constructors(&declarations.signatures, "Vec2").len(), 2);
    assert_eq!(constructors(&declarations.signatures, "Vec3").len(), 4);
    assert_eq!(constructors(&declarations.signatures, "Vec4").len(), 8);
    assert_eq!(constructors(&declarations.signatures, "Vec5").len(), 16);
}

#[test]
fn test_swizzle_counts_on_three_dimensional_source() {
    let (declarations, definitions) = surfaces(
        r#"
        [types]
        max_dimension = 3
        scalar = "float"

        [features]
        swizzle = true
        matrices = false
        "#,
    );

    // d^r tuples per source type: 9 two-letter and 27 three-letter
    // accessors on the 3-dimensional type.
    assert_eq!(swizzles(&declarations.signatures, "Vec3", 2, "xyz").len(), 9);
    assert_eq!(swizzles(&declarations.signatures, "Vec3", 3, "xyz").len(), 27);
    assert_eq!(swizzles(&definitions.signatures, "Vec3", 2, "xyz").len(), 9);
    assert_eq!(swizzles(&definitions.signatures, "Vec3", 3, "xyz").len(), 27);
}

#[test]
fn test_swizzle_disabled_emits_no_accessors() {
    let (declarations, _) = surfaces(
        r#"
        [types]
        max_dimension = 3
        scalar = "float"

        [features]
        matrices = false
        "#,
    );

    assert_eq!(swizzles(&declarations.signatures, "Vec3", 2, "xyz").len(), 0);
    assert_eq!(swizzles(&declarations.signatures, "Vec2", 2, "xy").len(), 0);
}

#[test]
fn test_free_operators_per_type() {
    let (declarations, _) = surfaces(
        r#"
        [types]
        max_dimension = 3
        scalar = "float"

        [features]
        matrices = true
        "#,
    );

    let free: Vec<_> = declarations
        .signatures
        .iter()
        .filter(|s| s.owner.is_empty())
        .collect();
    // One per vector type, two per matrix type.
    assert_eq!(free.len(), 2 + 2 * 4);
    assert!(free.iter().all(|s| s.name == "operator*" && s.arity() == 2));
}

#[test]
fn test_generate_writes_both_files() {
    let temp = tempfile::TempDir::new().unwrap();
    let manifest = Manifest::from_str(
        r#"
        [types]
        max_dimension = 2
        scalar = "float"
        "#,
    )
    .unwrap();

    let result = Generator::new(&manifest).generate(temp.path()).unwrap();
    assert_eq!(result.files, vec!["vectors.h".to_string(), "vectors.cpp".to_string()]);
    assert!(result.units > 0);

    let header = std::fs::read_to_string(temp.path().join("vectors.h")).unwrap();
    assert!(header.starts_with("#pragma once"));
    let source = std::fs::read_to_string(temp.path().join("vectors.cpp")).unwrap();
    assert!(source.starts_with("#include \"vectors.h\""));
}

#[test]
fn test_matrix_product_overloads_cover_every_result_shape() {
    let (declarations, _) = surfaces(
        r#"
        [types]
        max_dimension = 4
        scalar = "float"

        [features]
        matrices = true
        "#,
    );

    let products: Vec<_> = declarations
        .signatures
        .iter()
        .filter(|s| s.owner == "Matrix2x3" && s.name == "operator*")
        .collect();
    // scalar (value + compound), one per k in 2..=4, and matrix * vector.
    let params: Vec<_> = products.iter().map(|s| s.params[0].as_str()).collect();
    assert!(params.contains(&"const Matrix3x2&"));
    assert!(params.contains(&"const Matrix3x3&"));
    assert!(params.contains(&"const Matrix3x4&"));
    assert!(params.contains(&"const Vec3&"));
}

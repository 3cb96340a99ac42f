//! Snapshot tests for the emitted C++ surfaces.
//!
//! These tests pin the generated header and implementation text for small
//! configurations. Run `cargo insta review` to update snapshots when making
//! intentional changes.

use std::str::FromStr;

use vectra_cpp::Generator;
use vectra_manifest::Manifest;

/// Generate both surfaces from an inline manifest.
fn generate_files(manifest_toml: &str) -> Vec<(String, String)> {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let generator = Generator::new(&manifest);
    let files = generator.preview().expect("surfaces diverged");
    files.into_iter().map(|f| (f.path, f.content)).collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

const MINIMAL: &str = r#"
[types]
max_dimension = 2
scalar = "float"

[features]
matrices = false
"#;

const FULL: &str = r#"
[types]
max_dimension = 2
scalar = "float"

[features]
swizzle = true
matrices = true
"#;

#[test]
fn test_minimal_header() {
    let files = generate_files(MINIMAL);
    let header = get_file(&files, "vectors.h").expect("vectors.h not found");
    insta::assert_snapshot!("vec2_header", header);
}

#[test]
fn test_minimal_source() {
    let files = generate_files(MINIMAL);
    let source = get_file(&files, "vectors.cpp").expect("vectors.cpp not found");
    insta::assert_snapshot!("vec2_source", source);
}

#[test]
fn test_full_header() {
    let files = generate_files(FULL);
    let header = get_file(&files, "vectors.h").expect("vectors.h not found");
    insta::assert_snapshot!("full2_header", header);
}

#[test]
fn test_full_source() {
    let files = generate_files(FULL);
    let source = get_file(&files, "vectors.cpp").expect("vectors.cpp not found");
    insta::assert_snapshot!("full2_source", source);
}

#[test]
fn test_three_dimensional_constructors() {
    let files = generate_files(
        r#"
        [types]
        max_dimension = 3
        scalar = "float"

        [features]
        matrices = false
        "#,
    );

    let header = get_file(&files, "vectors.h").unwrap();
    assert!(header.contains("Vec3(float x, float y, float z);"));
    assert!(header.contains("Vec3(float x, const Vec2& yz);"));
    assert!(header.contains("Vec3(const Vec2& xy, float z);"));
    assert!(header.contains("Vec3(const Vec3& xyz);"));

    // The initializer list projects block-local axes onto global fields.
    let source = get_file(&files, "vectors.cpp").unwrap();
    assert!(source.contains("Vec3::Vec3(float x, float y, float z) : x(x), y(y), z(z) {}"));
    assert!(source.contains("Vec3::Vec3(float x, const Vec2& yz) : x(x), y(yz.x), z(yz.y) {}"));
    assert!(source.contains("Vec3::Vec3(const Vec2& xy, float z) : x(xy.x), y(xy.y), z(z) {}"));
    assert!(source.contains("Vec3::Vec3(const Vec3& xyz) : x(xyz.x), y(xyz.y), z(xyz.z) {}"));
}

#[test]
fn test_swizzle_definitions_are_qualified_by_the_source_type() {
    let files = generate_files(
        r#"
        [types]
        max_dimension = 3
        scalar = "float"

        [features]
        swizzle = true
        matrices = false
        "#,
    );

    let source = get_file(&files, "vectors.cpp").unwrap();
    assert!(source.contains("Vec2 Vec3::xy() const { return Vec2(x, y); }"));
    assert!(source.contains("Vec2 Vec3::zz() const { return Vec2(z, z); }"));
    // A narrow source swizzles up to a wider result.
    assert!(source.contains("Vec3 Vec2::xxy() const { return Vec3(x, x, y); }"));
}

#[test]
fn test_derived_methods() {
    let files = generate_files(MINIMAL);
    let source = get_file(&files, "vectors.cpp").unwrap();

    assert!(source.contains("float Vec2::mag() const {"));
    assert!(source.contains("return sqrt(x*x + y*y);"));
    assert!(source.contains("return *this / this->mag();"));
    assert!(source.contains("return this->x*other.x + this->y*other.y;"));
    assert!(source.contains("Vec2 operator * (float scalar, const Vec2& vec) {"));
    assert!(source.contains("return vec * scalar;"));
}

#[test]
fn test_custom_naming() {
    let files = generate_files(
        r#"
        [types]
        max_dimension = 2
        scalar = "double"

        [naming]
        vector_prefix = "vec"
        matrix_prefix = "mat"
        axes = "uv"

        [output]
        header = "linalg.hpp"
        source = "linalg.cpp"

        [features]
        matrices = true
        "#,
    );

    let header = get_file(&files, "linalg.hpp").expect("renamed header not found");
    assert!(header.contains("struct vec2 {"));
    assert!(header.contains("double u, v;"));
    assert!(header.contains("vec2(double u, double v);"));
    assert!(header.contains("struct mat2x2 {"));

    let source = get_file(&files, "linalg.cpp").expect("renamed source not found");
    assert!(source.contains("#include \"linalg.hpp\""));
    assert!(source.contains("vec2::vec2(const vec2& uv) : u(uv.u), v(uv.v) {}"));
}

#[test]
fn test_matrix_surfaces() {
    let files = generate_files(FULL);

    let header = get_file(&files, "vectors.h").unwrap();
    assert!(header.contains("Matrix2x2(const Matrix2x2& other);"));
    assert!(header.contains("float det() const;"));
    assert!(header.contains("Matrix2x2 transposed () const;"));
    assert!(header.contains("Vec2 operator * (const Vec2& vec, const Matrix2x2& m);"));

    let source = get_file(&files, "vectors.cpp").unwrap();
    assert!(source.contains("return m0x0 * m1x1 - m0x1 * m1x0;"));
    assert!(source.contains("this->m0x0 * other.m0x0 + this->m0x1 * other.m1x0,"));
    assert!(source.contains("vec.x * m.m0x0 + vec.y * m.m1x0,"));
}

#[test]
fn test_cofactor_expansion_above_two() {
    let files = generate_files(
        r#"
        [types]
        max_dimension = 3
        scalar = "float"

        [features]
        matrices = true
        "#,
    );

    let source = get_file(&files, "vectors.cpp").unwrap();
    assert!(source.contains("float Matrix3x3::det() const {"));
    assert!(source.contains("return m0x0 * Matrix2x2(m1x1, m1x2, m2x1, m2x2).det()"));
    assert!(source.contains("- m0x1 * Matrix2x2(m1x0, m1x2, m2x0, m2x2).det()"));
    assert!(source.contains("+ m0x2 * Matrix2x2(m1x0, m1x1, m2x0, m2x1).det();"));
}

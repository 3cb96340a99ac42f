use std::path::Path;

use eyre::{Result, WrapErr};
use vectra_codegen::{File, PreviewFile};
use vectra_manifest::Manifest;

use crate::{
    emit::{EmitContext, HeaderEmitter, SourceEmitter, Surface},
    signature::cross_check,
};

/// C++ generator producing the header and implementation surfaces.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    ctx: EmitContext,
}

/// Summary of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Paths of the written files, relative to the output directory.
    pub files: Vec<String>,
    /// Number of emission units (declaration/definition pairs).
    pub units: usize,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            ctx: EmitContext::new(manifest),
        }
    }

    /// Run both emitters against fresh buffers and cross-check the results.
    ///
    /// The emitters have no data dependency on each other; the cross-check
    /// is a structural diff of what each one actually emitted. A failure
    /// here is a bug in an emitter, not a configuration problem.
    pub fn surfaces(&self) -> Result<(Surface, Surface)> {
        let declarations = HeaderEmitter::new(&self.ctx).emit();
        let definitions = SourceEmitter::new(&self.ctx).emit();

        cross_check(&declarations.signatures, &definitions.signatures)
            .wrap_err("declaration and definition surfaces diverged")?;

        Ok((declarations, definitions))
    }

    /// Preview the generated files without writing to disk.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let (declarations, definitions) = self.surfaces()?;
        Ok(vec![
            PreviewFile {
                path: self.manifest.output.header.clone(),
                content: declarations.text,
            },
            PreviewFile {
                path: self.manifest.output.source.clone(),
                content: definitions.text,
            },
        ])
    }

    /// Generate both files into the specified output directory.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let (declarations, definitions) = self.surfaces()?;
        let units = declarations.signatures.len();

        File::new(output_dir.join(&self.manifest.output.header), declarations.text)
            .write()
            .wrap_err("failed to write the header")?;
        File::new(output_dir.join(&self.manifest.output.source), definitions.text)
            .write()
            .wrap_err("failed to write the implementation file")?;

        Ok(GenerateResult {
            files: vec![
                self.manifest.output.header.clone(),
                self.manifest.output.source.clone(),
            ],
            units,
        })
    }
}

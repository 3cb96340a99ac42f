use std::{path::PathBuf, time::Instant};

use clap::Args;
use eyre::{Result, WrapErr};
use vectra_cpp::Generator;
use vectra_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to vectra.toml (defaults to ./vectra.toml)
    #[arg(short, long, default_value = "vectra.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let generator = Generator::new(&manifest);

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator, &manifest)
        }
    }

    fn run_generation(&self, generator: &Generator, manifest: &Manifest) -> Result<()> {
        let started = Instant::now();
        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate code")?;
        let elapsed = started.elapsed();

        let vectors = manifest.dimensions().count();
        let matrices = if manifest.features.matrices {
            vectors * vectors
        } else {
            0
        };

        println!(
            "{} vector types, {} matrix types ({})",
            vectors, matrices, manifest.types.scalar
        );
        for file in &result.files {
            println!("  + {}", self.output.join(file).display());
        }
        println!();
        println!(
            "{} definitions generated in {:.4} seconds",
            result.units,
            elapsed.as_secs_f64()
        );

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use vectra_codegen::{File, Overwrite, WriteResult};

const STARTER_MANIFEST: &str = r#"[types]
max_dimension = 4
scalar = "float"

# [naming]
# vector_prefix = "Vec"
# matrix_prefix = "Matrix"
# axes = "xyzwvutsrqabcdefghijk"

[output]
header = "vectors.h"
source = "vectors.cpp"

[features]
# Swizzle accessors grow as d^r per type; leave off unless you need them.
swizzle = false
matrices = true
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create vectra.toml in (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let manifest_path = self.path.join("vectra.toml");

        let result = File::new(&manifest_path, STARTER_MANIFEST)
            .overwrite(Overwrite::IfMissing)
            .write()?;

        match result {
            WriteResult::Written => {
                println!("Created {}", manifest_path.display());
                println!();
                println!("Next steps:");
                println!("  1. Edit {} to taste", manifest_path.display());
                println!("  2. Run 'vectra generate'");
                Ok(())
            }
            WriteResult::Skipped => Err(eyre::eyre!(
                "{} already exists, not overwriting it",
                manifest_path.display()
            )),
        }
    }
}

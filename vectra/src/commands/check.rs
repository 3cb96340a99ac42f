use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use vectra_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to vectra.toml (defaults to ./vectra.toml)
    #[arg(short, long, default_value = "vectra.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());

        let max = manifest.types.max_dimension;
        let vectors = manifest.dimensions().count();
        println!(
            "  {} vector types ({}2..{}{}), scalar {}",
            vectors,
            manifest.naming.vector_prefix,
            manifest.naming.vector_prefix,
            max,
            manifest.types.scalar
        );
        if manifest.features.matrices {
            println!("  {} matrix types", vectors * vectors);
        }
        println!(
            "  {} constructor overloads on the widest type",
            1u128.checked_shl((max - 1) as u32).unwrap_or(u128::MAX)
        );

        if manifest.features.swizzle {
            println!("  {} swizzle accessors", Self::swizzle_volume(max));
        } else {
            println!("  swizzle accessors: off");
        }

        Ok(())
    }

    /// Total accessor count across all types: sum over d and r of d^r.
    ///
    /// This term dominates output size; surfacing it here lets the cost be
    /// judged before a generation run, not after.
    fn swizzle_volume(max_dimension: usize) -> u128 {
        let mut total: u128 = 0;
        for d in 2..=max_dimension {
            for r in 2..=max_dimension {
                total = total.saturating_add((d as u128).saturating_pow(r as u32));
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swizzle_volume_counts_the_full_product_space() {
        // d in {2,3}, r in {2,3}: 4 + 8 + 9 + 27
        assert_eq!(CheckCommand::swizzle_volume(3), 48);
    }

    #[test]
    fn test_swizzle_volume_smallest_configuration() {
        assert_eq!(CheckCommand::swizzle_volume(2), 4);
    }
}

use std::path::PathBuf;

use clap::Parser;
use eyre::{WrapErr as _, ensure};
use fraxtal_addresses::{Drift, FRAXTAL_TESTNET, Manifest};
use tracing::info;

/// Validate the address book and compare it against a manifest
#[derive(Parser, Debug)]
pub(crate) struct CheckArgs {
    /// Manifest to compare the built-in address book against
    #[arg(long, env = "FRAXTAL_ADDRESSES_MANIFEST")]
    pub(crate) manifest: Option<PathBuf>,
}

impl CheckArgs {
    pub(crate) fn run(self) -> eyre::Result<()> {
        let drift = self.drift()?;
        for item in &drift {
            println!("{item}");
        }
        ensure!(
            drift.is_empty(),
            "manifest drifted from the built-in address book in {} place(s)",
            drift.len()
        );
        Ok(())
    }

    fn drift(&self) -> eyre::Result<Vec<Drift>> {
        FRAXTAL_TESTNET.validate().wrap_err("built-in address book is invalid")?;
        info!(
            network = FRAXTAL_TESTNET.network(),
            entries = FRAXTAL_TESTNET.len(),
            "address book is valid"
        );

        let Some(path) = &self.manifest else {
            return Ok(Vec::new());
        };
        let manifest = Manifest::read_from_file(path)
            .wrap_err_with(|| format!("failed reading manifest `{}`", path.display()))?;
        let drift = manifest.diff(&FRAXTAL_TESTNET);
        if drift.is_empty() {
            info!(path = %path.display(), "manifest matches the address book");
        }
        Ok(drift)
    }
}

use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::WrapErr as _;
use fraxtal_addresses::{FRAXTAL_TESTNET, Format, Manifest};
use tracing::info;

use super::ManifestFormat;

/// Write the address book as a manifest
#[derive(Parser, Debug)]
pub(crate) struct ExportArgs {
    /// Manifest encoding. Ignored when `--output` has a `.json` or `.toml` extension.
    #[arg(long, value_enum, default_value_t = ManifestFormat::default())]
    pub(crate) format: ManifestFormat,

    /// File to write the manifest to. Prints to stdout if omitted.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

impl ExportArgs {
    pub(crate) fn run(self) -> eyre::Result<()> {
        let manifest = Manifest::from_table(&FRAXTAL_TESTNET);

        let Some(output) = self.output else {
            println!("{}", manifest.encode(self.format.into())?);
            return Ok(());
        };

        write_manifest(&manifest, &output, self.format)
            .wrap_err_with(|| format!("failed writing manifest to `{}`", output.display()))?;

        info!(
            path = %output.display(),
            network = FRAXTAL_TESTNET.network(),
            entries = manifest.addresses.len(),
            "exported address manifest"
        );
        Ok(())
    }
}

fn write_manifest(manifest: &Manifest, path: &Path, fallback: ManifestFormat) -> eyre::Result<()> {
    if Format::from_path(path).is_some() {
        manifest.write_to_file(path)?;
    } else {
        std::fs::write(path, manifest.encode(fallback.into())?)?;
    }
    Ok(())
}

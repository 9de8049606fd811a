mod check;
mod export;
mod get;
mod list;

use clap::{Parser, Subcommand, ValueEnum};
use fraxtal_addresses::Format;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use get::GetArgs;
pub(crate) use list::ListArgs;

#[derive(Parser, Debug)]
#[command(name = "fraxtal-addresses", version, about, long_about = None)]
pub(crate) struct FraxtalAddresses {
    #[command(subcommand)]
    pub(crate) cmd: FraxtalAddressesSubcommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum FraxtalAddressesSubcommand {
    /// Print the address registered under a name
    Get(GetArgs),
    /// List the address book
    List(ListArgs),
    /// Write the address book as a manifest
    Export(ExportArgs),
    /// Validate the address book and compare it against a manifest
    Check(CheckArgs),
}

impl FraxtalAddressesSubcommand {
    pub(crate) fn run(self) -> eyre::Result<()> {
        match self {
            Self::Get(args) => args.run(),
            Self::List(args) => args.run(),
            Self::Export(args) => args.run(),
            Self::Check(args) => args.run(),
        }
    }
}

/// Manifest encodings selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ManifestFormat {
    #[default]
    Json,
    Toml,
}

impl From<ManifestFormat> for Format {
    fn from(value: ManifestFormat) -> Self {
        match value {
            ManifestFormat::Json => Self::Json,
            ManifestFormat::Toml => Self::Toml,
        }
    }
}

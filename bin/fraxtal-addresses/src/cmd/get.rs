use clap::Parser;
use eyre::eyre;
use fraxtal_addresses::FRAXTAL_TESTNET;

/// Print the address registered under a name
#[derive(Parser, Debug)]
pub(crate) struct GetArgs {
    /// Name of the address, e.g. `PROXY_ADMIN`
    pub(crate) name: String,

    /// Print the address in lowercase hex instead of as authored
    #[arg(long)]
    pub(crate) lowercase: bool,
}

impl GetArgs {
    pub(crate) fn run(self) -> eyre::Result<()> {
        println!("{}", self.resolve()?);
        Ok(())
    }

    fn resolve(&self) -> eyre::Result<String> {
        let Some(entry) = FRAXTAL_TESTNET.get(&self.name) else {
            let hint = FRAXTAL_TESTNET
                .find_ignore_case(&self.name)
                .map(|entry| format!(", did you mean `{}`?", entry.name()))
                .unwrap_or_default();
            return Err(eyre!(
                "no address named `{}` on {}{hint}",
                self.name,
                FRAXTAL_TESTNET.network()
            ));
        };

        if entry.is_unset() {
            tracing::warn!(name = entry.name(), "address is the zero placeholder");
        }

        Ok(if self.lowercase {
            entry.value().to_ascii_lowercase()
        } else {
            entry.value().to_string()
        })
    }
}

use clap::{Parser, ValueEnum};
use eyre::WrapErr as _;
use fraxtal_addresses::{Category, FRAXTAL_TESTNET, NamedAddress};

/// List the address book
#[derive(Parser, Debug)]
pub(crate) struct ListArgs {
    /// Only list addresses of this category
    #[arg(long)]
    pub(crate) category: Option<Category>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub(crate) format: ListFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListFormat {
    Text,
    Json,
}

impl ListArgs {
    pub(crate) fn run(self) -> eyre::Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn entries(&self) -> Vec<&'static NamedAddress> {
        FRAXTAL_TESTNET
            .iter()
            .filter(|entry| self.category.is_none_or(|category| entry.category() == category))
            .collect()
    }

    fn render(&self) -> eyre::Result<String> {
        let entries = self.entries();
        match self.format {
            ListFormat::Json => {
                serde_json::to_string_pretty(&entries).wrap_err("failed encoding address list")
            }
            ListFormat::Text => {
                let width = entries.iter().map(|entry| entry.name().len()).max().unwrap_or(0);
                let lines: Vec<_> = entries
                    .iter()
                    .map(|entry| {
                        let mut line = format!(
                            "{:width$}  {}  {}",
                            entry.name(),
                            entry.value(),
                            entry.category()
                        );
                        if entry.is_unset() {
                            line.push_str("  unset");
                        }
                        line
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }
}

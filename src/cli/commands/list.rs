use crate::catalog::{Catalog, CategoryIndex};
use crate::Result;

use super::{CommandHandler, OutputFormat};

/// Handler for the `list` command
pub struct ListCommand {
    pub format: String,
}

impl ListCommand {
    pub fn new(format: String) -> Self {
        Self { format }
    }
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        let catalog = Catalog::builtin();

        match OutputFormat::parse(&self.format)? {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(catalog.all())?);
            }
            OutputFormat::Text => {
                let index = CategoryIndex::build(&catalog);
                for section in index.sections() {
                    println!("{}", section.label);
                    for entry in &section.entries {
                        println!("  {:<12} {}", entry.id, entry.name);
                    }
                    println!();
                }
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

use crate::catalog::{Catalog, Os};
use crate::{LangdevError, Result};

use super::{CommandHandler, OutputFormat};

/// Handler for the `show` command
pub struct ShowCommand {
    pub id: String,
    pub os: String,
    pub format: String,
}

impl ShowCommand {
    pub fn new(id: String, os: String, format: String) -> Self {
        Self { id, os, format }
    }
}

impl CommandHandler for ShowCommand {
    fn execute(&self) -> Result<()> {
        let catalog = Catalog::builtin();
        let os: Os = self.os.parse()?;
        let entry = catalog
            .by_id(&self.id)
            .ok_or_else(|| LangdevError::EntryNotFound(self.id.clone()))?;

        match OutputFormat::parse(&self.format)? {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(entry)?);
            }
            OutputFormat::Text => {
                println!("{} {} — {}", entry.icon, entry.name, entry.description);
                println!("category: {}", entry.category);
                if !entry.prerequisites.is_empty() {
                    println!("\nprerequisites:");
                    for prereq in &entry.prerequisites {
                        println!("  - {prereq}");
                    }
                }
                println!("\ninstall ({}):", os.shell_label());
                println!("  {}", entry.install_command.for_os(os));
                println!("\nverify:");
                println!("  {}", entry.verify_command);
                if !entry.additional_steps.is_empty() {
                    println!("\nnotes:");
                    for step in &entry.additional_steps {
                        println!("  - {step}");
                    }
                }
                println!("\ndocs: {}", entry.official_docs);
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

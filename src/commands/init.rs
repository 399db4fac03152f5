//! `criteria init`: write a default config file

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::{Config, CONFIG_FILE};
use crate::view::Variant;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Where to write the config
    pub path: PathBuf,
    /// Overwrite an existing config
    pub force: bool,
    /// Starting layout to record
    pub variant: Option<Variant>,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE),
            force: false,
            variant: None,
        }
    }
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    let mut config = Config::default();
    if let Some(variant) = options.variant {
        config.variant = variant;
    }
    config.save(&options.path)?;

    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );
    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to see the categories",
        style("criteria catalog").cyan()
    );
    println!(
        "  2. Run {} to replay a session script",
        style("criteria replay <SCRIPT>").cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let options = InitOptions {
            path: path.clone(),
            force: false,
            variant: Some(Variant::V4),
        };

        execute_init(options.clone()).unwrap();
        assert_eq!(Config::load(&path).unwrap().variant, Variant::V4);

        assert!(execute_init(options.clone()).is_err());
        execute_init(InitOptions {
            force: true,
            variant: None,
            ..options
        })
        .unwrap();
        assert_eq!(Config::load(&path).unwrap().variant, Variant::V2);
    }
}

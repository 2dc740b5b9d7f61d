//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use linealign_core::{AlignConfig, MAX_WINDOW};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating alignment configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for alignment:");
        println!(
            "   linealign align -a english.txt -b russian.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        let defaults = AlignConfig::default();
        format!(
            r#"# linealign configuration
# Command-line flags override the values below.

[alignment]
# Number of lines of each corpus taken into account
limit = {limit}

# Lines per alignment window (1 to {max_window})
# Every round skips one window past the cursors before aligning.
window = {window}

[output]
# One of "text", "json", "markdown"
format = "text"

# Labels written in front of each side in text and markdown output
label_a = "ENG"
label_b = "RUS"

# Pretty print JSON output
pretty_json = true
"#,
            limit = defaults.limit,
            window = defaults.window,
            max_window = MAX_WINDOW,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let template = GenerateConfigArgs::generate_template();
        let config = CliConfig::parse(&template).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_writes_template() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("linealign.toml");

        let args = GenerateConfigArgs {
            output: output.clone(),
        };
        args.execute().unwrap();

        let config = CliConfig::from_file(&output).unwrap();
        assert_eq!(config.alignment.window, 8);
    }

    #[test]
    fn test_execute_fails_on_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/linealign.toml"),
        };
        assert!(args.execute().is_err());
    }
}

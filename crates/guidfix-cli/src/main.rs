//! guidfix CLI - Command-line host for lighting GUID reconciliation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{fix, list};
use guidfix_reconcile::FixOperation;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guidfix")]
#[command(about = "Find and repair missing or duplicate lighting GUIDs", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (overrides .guidfix/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fix missing and duplicate material GUIDs
    Materials {
        /// Directory holding .asset.toml sidecars
        #[arg(long, default_value = "assets")]
        assets: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Fix duplicate texture GUIDs
    Textures {
        /// Directory holding .asset.toml sidecars
        #[arg(long, default_value = "assets")]
        assets: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Fix empty texture GUIDs
    EmptyTextures {
        /// Directory holding .asset.toml sidecars
        #[arg(long, default_value = "assets")]
        assets: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List assets with their GUID and location class
    List {
        /// Directory holding .asset.toml sidecars
        #[arg(long, default_value = "assets")]
        assets: String,

        /// Filter by asset type (material, texture)
        #[arg(long, value_parser = parse_asset_type)]
        r#type: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn parse_asset_type(s: &str) -> Result<String, String> {
    match s {
        "material" | "texture" => Ok(s.to_string()),
        _ => Err(format!(
            "unknown asset type '{}'; valid values: material, texture",
            s
        )),
    }
}

fn init_logging(quiet: bool) {
    use env_logger::{Builder, Env};

    let default_filter = if quiet { "warn" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Materials { assets, format } => fix::run(fix::FixArgs {
            operation: FixOperation::MaterialGuids,
            assets,
            config,
            format,
        }),
        Commands::Textures { assets, format } => fix::run(fix::FixArgs {
            operation: FixOperation::TextureGuids,
            assets,
            config,
            format,
        }),
        Commands::EmptyTextures { assets, format } => fix::run(fix::FixArgs {
            operation: FixOperation::EmptyTextureGuids,
            assets,
            config,
            format,
        }),
        Commands::List {
            assets,
            r#type,
            format,
        } => list::run(&assets, r#type.as_deref(), config, &format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fix_subcommand() {
        let cli = Cli::try_parse_from(["guidfix", "empty-textures", "--assets", "content", "-q"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::EmptyTextures { ref assets, .. } if assets == "content"));
    }

    #[test]
    fn test_list_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["guidfix", "list", "--type", "mesh"]).is_err());
        assert!(parse_asset_type("texture").is_ok());
    }
}

//! Command-line arguments.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use platscan_steam_api::Platform;

/// Sorts a Steam library by platform support.
///
/// Credentials fall back to the `API_KEY` and `STEAM_ID_64` environment
/// variables, which may also come from a `.env` file.
#[derive(Debug, Default, Parser)]
#[command(name = "platscan")]
#[command(about = "Sort a Steam library into games that do and do not support a platform")]
#[command(version)]
pub struct Cli {
    /// Steam Web API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// SteamID64 of the account whose library is scanned
    #[arg(long, env = "STEAM_ID_64")]
    pub steam_id: Option<String>,

    /// Platform to check: windows, mac or linux
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// Maximum number of store lookups in flight (unbounded if unset)
    #[arg(long)]
    pub max_in_flight: Option<NonZeroUsize>,

    /// Directory the two output lists are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (none if unset)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "platscan",
            "--api-key",
            "k",
            "--steam-id",
            "7656",
            "--platform",
            "linux",
            "--max-in-flight",
            "8",
            "-o",
            "out",
            "--timeout-secs",
            "30",
        ])
        .unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.steam_id.as_deref(), Some("7656"));
        assert_eq!(cli.platform, Some(Platform::Linux));
        assert_eq!(cli.max_in_flight, NonZeroUsize::new(8));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.timeout_secs, Some(30));
        assert!(cli.config.is_none());
    }

    #[test]
    fn rejects_unknown_platform() {
        let result = Cli::try_parse_from(["platscan", "--platform", "amiga"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_max_in_flight() {
        let result = Cli::try_parse_from(["platscan", "--max-in-flight", "0"]);
        assert!(result.is_err());
    }
}

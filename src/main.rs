use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuidx_codec::{decode, encode, generate, Octets};

mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "uuidx")]
#[command(about = "Generate, format and parse canonical UUID strings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Generate random identifiers
    Gen {
        /// Number of identifiers to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Print 32 hex digits without hyphens
        #[arg(long)]
        simple: bool,
    },
    /// Format 16 raw bytes, given as 32 hex digits, as a canonical UUID
    Format {
        /// Raw identifier bytes in hex
        hex: String,
    },
    /// Parse a canonical UUID and print its bytes
    Parse {
        /// Canonical UUID (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)
        text: String,
        /// Print space-separated octets
        #[arg(long)]
        bytes: bool,
    },
}

/// Entry point for the `uuidx` command line tool
///
/// # Environment Variables
/// - `UUIDX_MAX_COUNT`: upper bound for `gen --count` (default: 10000)
/// - `UUIDX_LOG`: log filter directives (default: "uuidx=info")
///
/// Logs go to stderr; stdout carries only command output.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_env(config::LOG_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CliConfig::from_env().context("invalid configuration")?;
    let cli = Cli::parse();

    for line in run(cli.command, &config)? {
        println!("{line}");
    }

    Ok(())
}

/// Executes one command and returns the lines to print.
fn run(command: Commands, config: &CliConfig) -> anyhow::Result<Vec<String>> {
    match command {
        Commands::Gen { count, simple } => {
            if count == 0 || count > config.max_count() {
                bail!(
                    "count must be between 1 and {}, got {count}",
                    config.max_count()
                );
            }
            tracing::debug!(count, simple, "generating identifiers");

            (0..count)
                .map(|_| -> anyhow::Result<String> {
                    let octets = generate()?;
                    Ok(if simple {
                        hex::encode(octets.as_bytes())
                    } else {
                        encode(&octets)
                    })
                })
                .collect()
        }
        Commands::Format { hex } => {
            let raw = hex::decode(hex.trim())
                .with_context(|| format!("'{hex}' is not a hex string"))?;
            let octets = Octets::try_from(raw.as_slice())
                .with_context(|| format!("'{hex}' must encode exactly 16 bytes"))?;
            Ok(vec![encode(&octets)])
        }
        Commands::Parse { text, bytes } => {
            let octets = decode(text.trim())
                .with_context(|| format!("'{text}' is not a canonical UUID"))?;
            tracing::debug!(%octets, "parsed identifier");

            let line = if bytes {
                octets
                    .as_bytes()
                    .iter()
                    .map(|b| format!("{b:02x}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            } else {
                hex::encode(octets.as_bytes())
            };
            Ok(vec![line])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn test_cli_parses_gen_defaults() {
        assert_eq!(
            parse_args(&["uuidx", "gen"]),
            Commands::Gen {
                count: 1,
                simple: false
            }
        );
    }

    #[test]
    fn test_cli_parses_gen_options() {
        assert_eq!(
            parse_args(&["uuidx", "gen", "-n", "3", "--simple"]),
            Commands::Gen {
                count: 3,
                simple: true
            }
        );
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["uuidx"]).is_err());
    }

    #[test]
    fn test_gen_prints_requested_count() {
        let lines = run(
            Commands::Gen {
                count: 5,
                simple: false,
            },
            &CliConfig::default(),
        )
        .unwrap();

        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(line.len(), 36);
            assert!(decode(line).is_ok());
        }
    }

    #[test]
    fn test_gen_simple_form() {
        let lines = run(
            Commands::Gen {
                count: 1,
                simple: true,
            },
            &CliConfig::default(),
        )
        .unwrap();

        assert_eq!(lines[0].len(), 32);
        assert!(lines[0].bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn test_gen_rejects_count_out_of_range() {
        let config = CliConfig::default();

        assert!(run(
            Commands::Gen {
                count: 0,
                simple: false
            },
            &config
        )
        .is_err());

        let err = run(
            Commands::Gen {
                count: config.max_count() + 1,
                simple: false,
            },
            &config,
        )
        .unwrap_err();
        assert!(err.to_string().contains("count must be between 1 and 10000"));
    }

    #[test]
    fn test_format_command() {
        let lines = run(
            Commands::Format {
                hex: "550E8400E29B41D4A716446655440000".into(),
            },
            &CliConfig::default(),
        )
        .unwrap();

        assert_eq!(lines, vec!["550e8400-e29b-41d4-a716-446655440000"]);
    }

    #[test]
    fn test_format_rejects_wrong_length_and_non_hex() {
        let config = CliConfig::default();

        assert!(run(
            Commands::Format {
                hex: "550e8400".into()
            },
            &config
        )
        .is_err());
        assert!(run(
            Commands::Format {
                hex: "zz0e8400e29b41d4a716446655440000".into()
            },
            &config
        )
        .is_err());
    }

    #[test]
    fn test_parse_command() {
        let config = CliConfig::default();

        let plain = run(
            Commands::Parse {
                text: "550e8400-e29b-41d4-a716-446655440000".into(),
                bytes: false,
            },
            &config,
        )
        .unwrap();
        assert_eq!(plain, vec!["550e8400e29b41d4a716446655440000"]);

        let spaced = run(
            Commands::Parse {
                text: "550E8400-E29B-41D4-A716-446655440000".into(),
                bytes: true,
            },
            &config,
        )
        .unwrap();
        assert_eq!(
            spaced,
            vec!["55 0e 84 00 e2 9b 41 d4 a7 16 44 66 55 44 00 00"]
        );
    }

    #[test]
    fn test_parse_command_reports_cause() {
        let err = run(
            Commands::Parse {
                text: "g0000000-0000-0000-0000-000000000000".into(),
                bytes: false,
            },
            &CliConfig::default(),
        )
        .unwrap_err();

        let chain = format!("{err:#}");
        assert!(chain.contains("is not a canonical UUID"));
        assert!(chain.contains("invalid hex digit 'g' at offset 0"));
    }
}

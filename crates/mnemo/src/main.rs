use mnemo::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "mnemo=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(e) = cli::run().await {
        mnemo_cli_helpers::messages::fail(e.to_string());
    }

    Ok(())
}

mod cli {
    use clap::{CommandFactory, Parser, Subcommand};
    use mnemo::Result;
    use mnemo_cli_helpers::CommandTree;
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[clap(name = "mnemo", author, version, about, long_about = None)]
    pub struct Mnemo {
        /// Configuration file to load.
        #[clap(short, long, global = true, env = "MNEMO_CONFIG")]
        config: Option<PathBuf>,

        #[clap(subcommand)]
        cmd: Command,
    }

    #[derive(Debug, clap::Args)]
    pub struct BoardArgs {
        /// Show every format rather than the main formats.
        #[clap(short, long)]
        all: bool,

        /// Attacker guesses per second.
        #[clap(short, long)]
        rate: Option<f64>,

        /// Copy the row with the given key to the clipboard.
        #[clap(long, value_name = "KEY")]
        copy: Option<String>,

        /// Print rows as JSON.
        #[clap(long)]
        json: bool,
    }

    #[derive(Debug, Subcommand)]
    pub enum Command {
        /// Generate passphrases.
        Passphrase {
            #[clap(flatten)]
            board: BoardArgs,
        },
        /// Generate usernames.
        Username {
            #[clap(flatten)]
            board: BoardArgs,

            /// Generate usernames near this many bits of entropy.
            #[clap(
                short,
                long,
                conflicts_with_all = ["all", "rate", "copy", "json"]
            )]
            bits: Option<f64>,

            /// Number of usernames to generate with --bits.
            #[clap(short = 'n', long, default_value = "5")]
            count: usize,

            /// Omit the trailing number.
            #[clap(long)]
            no_number: bool,

            /// Capitalize each word.
            #[clap(long)]
            capitalize: bool,
        },
        /// Generate phone passcodes.
        Passcode {
            #[clap(flatten)]
            board: BoardArgs,
        },
        /// List attacker hardware profiles.
        Rates {
            /// Hardware mode.
            #[clap(short, long, default_value = "passphrase")]
            mode: mnemo_strength::HardwareMode,
        },
        /// Estimate the time and cost to crack a secret.
        Estimate {
            /// Bits of entropy.
            bits: f64,

            /// Attacker guesses per second.
            #[clap(short, long)]
            rate: Option<f64>,

            /// Hardware mode for the default rate.
            #[clap(short, long, default_value = "passphrase")]
            mode: mnemo_strength::HardwareMode,
        },
        /// Check every registry entry achieves its bits of entropy.
        Check,
    }

    pub async fn run() -> Result<()> {
        // Support JSON output of command tree
        if std::env::var("MNEMO_CLI_JSON").ok().is_some() {
            let cmd = Mnemo::command();
            let tree: CommandTree = (&cmd).into();
            serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
            std::process::exit(0);
        }

        let args = Mnemo::parse();
        let config = service::config(args.config)?;

        match args.cmd {
            Command::Passphrase { board } => {
                service::board(
                    &config,
                    mnemo_password::SecretKind::Passphrase,
                    board,
                    Default::default(),
                )
                .await?;
            }
            Command::Username {
                board,
                bits,
                count,
                no_number,
                capitalize,
            } => {
                let style = mnemo_password::UsernameStyle {
                    include_number: !no_number,
                    capitalize,
                };
                if let Some(bits) = bits {
                    service::usernames(&config, bits, count, style)?;
                } else {
                    service::board(
                        &config,
                        mnemo_password::SecretKind::Username,
                        board,
                        style,
                    )
                    .await?;
                }
            }
            Command::Passcode { board } => {
                service::board(
                    &config,
                    mnemo_password::SecretKind::Passcode,
                    board,
                    Default::default(),
                )
                .await?;
            }
            Command::Rates { mode } => {
                service::rates(&config, mode);
            }
            Command::Estimate { bits, rate, mode } => {
                service::estimate(&config, bits, rate, mode)?;
            }
            Command::Check => {
                service::check(&config)?;
            }
        }

        Ok(())
    }

    mod service {
        use super::BoardArgs;
        use mnemo::{Error, MnemoConfig, Result};
        use mnemo_cli_helpers::messages::{heading, info, success};
        use mnemo_password::{csprng, Scope, SecretKind, UsernameStyle};
        use mnemo_session::{RowState, SecretBoard};
        use mnemo_strength::{estimate_with, format_guess_rate, HardwareMode};
        use std::path::PathBuf;

        /// Load the configuration file or use the defaults.
        pub fn config(path: Option<PathBuf>) -> Result<MnemoConfig> {
            match path {
                Some(path) => MnemoConfig::load(path),
                None => Ok(Default::default()),
            }
        }

        /// Print a board of generated secrets.
        pub async fn board(
            config: &MnemoConfig,
            kind: SecretKind,
            args: BoardArgs,
            style: UsernameStyle,
        ) -> Result<()> {
            let generator = config.generator()?;
            let mut board = SecretBoard::new(generator, kind)
                .with_hash_rates(config.rates.clone())
                .with_cost_model(config.cost);
            if args.all {
                board.set_scope(Scope::All);
            }
            if let Some(rate) = args.rate {
                board.set_hash_rate(rate);
            }
            board.set_username_style(style);
            board.regenerate(&mut csprng())?;

            if let Some(key) = &args.copy {
                let (secret, indicator) = board
                    .copy(key)
                    .ok_or_else(|| Error::NoRow(key.clone()))?;
                copy_secret(&secret)?;
                indicator.await?;
            }

            let rows = board.view();
            if args.json {
                serde_json::to_writer_pretty(std::io::stdout(), &rows)?;
                println!();
                return Ok(());
            }

            info(format!(
                "Attacker: {}",
                format_guess_rate(board.hash_rate())
            ));
            for row in rows {
                if row.state == RowState::Hidden {
                    continue;
                }
                println!(
                    "{} [{}] {:.1} bits, avg time to crack {}, avg cost {}",
                    heading(&row.label),
                    row.key,
                    row.bits,
                    row.time_text,
                    row.cost_text,
                );
                println!("  {}", row.text);
                if row.state == RowState::Copied {
                    success(format!("Copied {}", row.label));
                }
            }
            Ok(())
        }

        #[cfg(feature = "clipboard")]
        fn copy_secret(secret: &secrecy::SecretString) -> Result<()> {
            let mut clipboard = mnemo::NativeClipboard::new()?;
            clipboard.set_secret(secret)
        }

        #[cfg(not(feature = "clipboard"))]
        fn copy_secret(_secret: &secrecy::SecretString) -> Result<()> {
            mnemo_cli_helpers::messages::warn(
                "clipboard support is not enabled",
            );
            Ok(())
        }

        /// Print usernames near a bit count.
        pub fn usernames(
            config: &MnemoConfig,
            bits: f64,
            count: usize,
            style: UsernameStyle,
        ) -> Result<()> {
            let generator = config.generator()?;
            let mut rng = csprng();
            for _ in 0..count {
                let username = generator.username(bits, &mut rng)?;
                println!(
                    "{} ({:.1} bits)",
                    username.render(&style),
                    username.display_bits(&style)
                );
            }
            Ok(())
        }

        /// Print the hardware profiles for a mode.
        pub fn rates(config: &MnemoConfig, mode: HardwareMode) {
            let default_rate = config.rates.default_rate(mode);
            for profile in config.rates.options(mode) {
                let marker = if Some(profile.guesses_per_second) == default_rate
                {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {} [{}]",
                    marker,
                    profile.label,
                    format_guess_rate(profile.guesses_per_second)
                );
            }
        }

        /// Print an estimate for a bit count.
        pub fn estimate(
            config: &MnemoConfig,
            bits: f64,
            rate: Option<f64>,
            mode: HardwareMode,
        ) -> Result<()> {
            let rate = match rate {
                Some(rate) => rate,
                None => config
                    .rates
                    .default_rate(mode)
                    .ok_or(Error::NoHashRate(mode))?,
            };
            let estimate = estimate_with(bits, rate, &config.cost);
            println!("{} bits at {}", bits, format_guess_rate(rate));
            println!("  avg time to crack: {}", estimate.time_text);
            println!("  avg cost to crack: {}", estimate.cost_text);
            Ok(())
        }

        /// Check the configured registries.
        pub fn check(config: &MnemoConfig) -> Result<()> {
            let corpus = config.corpus()?;
            let registries = config.registries(&corpus)?;
            let reports = registries.verify(&corpus)?;
            for report in &reports {
                println!(
                    "{:<10} {:>3} {:<10} {} declared {:.2} achieved {:.2}",
                    report.kind.to_string(),
                    report.bits,
                    report.label,
                    if report.primary { "*" } else { " " },
                    report.declared,
                    report.achieved,
                );
            }
            success(format!(
                "{} registry entries are consistent",
                reports.len()
            ));
            Ok(())
        }
    }

}

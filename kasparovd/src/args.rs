use clap::{Arg, ArgAction, Command, arg};
use kasparov_consensus_core::{config::params::Params, network::NetworkType};
use serde::Deserialize;
use std::{ffi::OsString, fs};
use thiserror::Error;
use toml::from_str;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Only a single network can be activated, got {0}")]
    MultipleNetworks(String),

    #[error("Missing required argument --{0}")]
    MissingArgument(&'static str),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Args {
    // NOTE: it is best if property names match config file fields
    pub logdir: Option<String>,
    #[serde(rename = "nologfiles")]
    pub no_log_files: bool,
    #[serde(rename = "loglevel")]
    pub log_level: String,
    pub testnet: bool,
    pub devnet: bool,
    pub simnet: bool,
    pub snapshot: Option<String>,
    pub address: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            logdir: None,
            no_log_files: false,
            log_level: "info".into(),
            testnet: false,
            devnet: false,
            simnet: false,
            snapshot: None,
            address: None,
        }
    }
}

impl Args {
    pub fn network(&self) -> Result<NetworkType, ArgsError> {
        match (self.testnet, self.devnet, self.simnet) {
            (false, false, false) => Ok(NetworkType::Mainnet),
            (true, false, false) => Ok(NetworkType::Testnet),
            (false, true, false) => Ok(NetworkType::Devnet),
            (false, false, true) => Ok(NetworkType::Simnet),
            _ => {
                let active = [(self.testnet, NetworkType::Testnet), (self.devnet, NetworkType::Devnet), (self.simnet, NetworkType::Simnet)]
                    .into_iter()
                    .filter_map(|(active, net)| active.then(|| net.to_string()))
                    .collect::<Vec<_>>();
                Err(ArgsError::MultipleNetworks(active.join(", ")))
            }
        }
    }

    pub fn params(&self) -> Result<Params, ArgsError> {
        Ok(self.network()?.into())
    }

    /// Directory of the log files, unless logging to files is disabled.
    pub fn log_dir(&self) -> Option<&str> {
        if self.no_log_files { None } else { self.logdir.as_deref() }
    }

    pub fn snapshot(&self) -> Result<&str, ArgsError> {
        self.snapshot.as_deref().ok_or(ArgsError::MissingArgument("snapshot"))
    }

    pub fn address(&self) -> Result<&str, ArgsError> {
        self.address.as_deref().ok_or(ArgsError::MissingArgument("address"))
    }
}

pub fn cli() -> Command {
    Command::new("kasparovd")
        .about(format!("{} v{}", env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_VERSION")))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(arg!(-C --configfile <CONFIG_FILE> "Path of config file."))
        .arg(arg!(--logdir <LOG_DIR> "Directory to log output."))
        .arg(arg!(--nologfiles "Disable logging to files."))
        .arg(
            Arg::new("log_level")
                .short('d')
                .long("loglevel")
                .env("KASPAROVD_LOG_LEVEL")
                .value_name("LEVEL")
                .default_value("info")
                .require_equals(true)
                .help("Logging level for all subsystems {off, error, warn, info, debug, trace}\n-- You may also specify <subsystem>=<level>,<subsystem2>=<level>,... to set the log level for individual subsystems.".to_string()),
        )
        .arg(arg!(--testnet "Use the test network"))
        .arg(arg!(--devnet "Use the development test network"))
        .arg(arg!(--simnet "Use the simulation test network"))
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .env("KASPAROVD_SNAPSHOT")
                .value_name("SNAPSHOT_FILE")
                .require_equals(true)
                .action(ArgAction::Set)
                .help("Path of the JSON ledger snapshot to serve."),
        )
        .arg(
            Arg::new("address")
                .long("address")
                .env("KASPAROVD_ADDRESS")
                .value_name("ADDRESS")
                .require_equals(true)
                .action(ArgAction::Set)
                .help("Address whose unspent outputs are listed."),
        )
}

pub fn parse_args() -> Args {
    match Args::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}

impl Args {
    pub fn parse<I, T>(itr: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m: clap::ArgMatches = cli().try_get_matches_from(itr)?;
        let mut defaults: Args = Default::default();

        if let Some(config_file) = m.get_one::<String>("configfile") {
            let config_str = fs::read_to_string(config_file)?;
            defaults = from_str(&config_str).map_err(|toml_error| {
                clap::Error::raw(
                    clap::error::ErrorKind::ValueValidation,
                    format!("failed parsing config file, reason: {}", toml_error.message()),
                )
            })?;
        }

        let args = Args {
            logdir: m.get_one::<String>("logdir").cloned().or(defaults.logdir),
            no_log_files: arg_match_unwrap_or::<bool>(&m, "nologfiles", defaults.no_log_files),
            log_level: arg_match_unwrap_or::<String>(&m, "log_level", defaults.log_level),
            testnet: arg_match_unwrap_or::<bool>(&m, "testnet", defaults.testnet),
            devnet: arg_match_unwrap_or::<bool>(&m, "devnet", defaults.devnet),
            simnet: arg_match_unwrap_or::<bool>(&m, "simnet", defaults.simnet),
            snapshot: m.get_one::<String>("snapshot").cloned().or(defaults.snapshot),
            address: m.get_one::<String>("address").cloned().or(defaults.address),
        };

        Ok(args)
    }
}

use clap::parser::ValueSource::DefaultValue;
use std::marker::{Send, Sync};
fn arg_match_unwrap_or<T: Clone + Send + Sync + 'static>(m: &clap::ArgMatches, arg_id: &str, default: T) -> T {
    m.get_one::<T>(arg_id).cloned().filter(|_| m.value_source(arg_id) != Some(DefaultValue)).unwrap_or(default)
}

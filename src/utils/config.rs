use serde::Deserialize;
use argh::FromArgs;
use tracing::Level;

use super::error::Error;
use crate::{MAX_K, MAX_ROUTES};

/// Ranks the cheapest loopless routes between named locations
#[derive(FromArgs)]
pub struct Arguments {
    /// command file to read, standard input when omitted
    #[argh(positional)]
    pub input: Option<String>,
    /// path to configuration file
    #[argh(option, short='c')]
    pub config: Option<String>,
    /// override maximum number of routes listed per query
    #[argh(option, short='k')]
    pub max_routes: Option<usize>,
    /// override log level (error, warn, info, debug, trace)
    #[argh(option, short='l')]
    pub log_level: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub max_routes: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_routes: MAX_ROUTES,
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(max_routes) = args.max_routes {
            self.max_routes = max_routes;
        }
        if let Some(log_level) = &args.log_level {
            self.log_level = log_level.clone();
        }
        self.max_routes = num::clamp(self.max_routes, 0, MAX_K);
    }
    pub fn level(&self) -> Result<Level, Error> {
        self.log_level.parse()
            .map_err(|_| Error::LogLevel(self.log_level.clone()))
    }
}

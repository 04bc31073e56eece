use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::algorithm::Yens;
use crate::command::{Command, Execute};
use crate::network::Network;
use crate::utils::config::Config;
use crate::utils::error::Error;


/// Owns the route network for the lifetime of one command stream.
pub struct Router {
    network: Network,
    yens: Yens,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
}


impl Router {
    pub fn new(config: Config) -> Self {
        let yens = Yens::new(config.max_routes);
        Router { network: Network::new(), yens }
    }
    pub fn network(&self) -> &Network {
        &self.network
    }
    /// Runs one command line; the returned lines belong on the output channel.
    pub fn execute(&mut self, line: &str) -> Result<Vec<String>, Error> {
        let command = Command::parse(line)?;
        command.execute(&mut self.network, &self.yens)
    }
    /// Processes `input` line by line until it ends. Rejected commands are
    /// reported on `err` and never stop the stream; I/O failures do.
    pub fn run<R, W, E>(&mut self, input: R, mut out: W, mut err: E) -> Result<Summary, Error>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut summary = Summary::default();
        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(lines) => {
                    summary.accepted += 1;
                    for msg in lines {
                        writeln!(out, "{}", msg)?;
                    }
                }
                Err(e) if e.is_recoverable() => {
                    summary.rejected += 1;
                    debug!(line = %line, "rejected command");
                    writeln!(err, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
        out.flush()?;
        err.flush()?;
        info!(accepted = summary.accepted, rejected = summary.rejected,
              nodes = self.network.node_count(), edges = self.network.edge_count(),
              "end of input");
        Ok(summary)
    }
}

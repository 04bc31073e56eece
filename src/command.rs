use std::iter;
use enum_dispatch::enum_dispatch;
use itertools::Itertools;
use tracing::debug;

use crate::algorithm::{is_reachable, Yens};
use crate::network::{Cost, Network};
use crate::utils::error::Error;


/// `ADD <origin>,<destination>,<distance>,<duration>`
#[derive(Clone, Debug, PartialEq)]
pub struct AddRoute {
    argument: String,
    origin: String,
    destination: String,
    distance: f64,
    duration: f64,
}

/// `QUERY <origin>,<destination>`
#[derive(Clone, Debug, PartialEq)]
pub struct QueryRoute {
    argument: String,
    origin: String,
    destination: String,
}

#[enum_dispatch]
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    AddRoute,
    QueryRoute,
}

#[enum_dispatch(Command)]
pub trait Execute {
    /// Applies the command and returns the lines meant for the output channel.
    fn execute(&self, network: &mut Network, yens: &Yens) -> Result<Vec<String>, Error>;
}


impl Command {
    pub fn parse(line: &str) -> Result<Command, Error> {
        let (keyword, rest) = match line.split_once(' ') {
            Some(parts) => parts,
            None => return Err(Error::MalformedCommand(vec![line.trim().to_owned()])),
        };
        let argument = rest.trim_end();
        match keyword {
            "ADD"   => AddRoute::parse(argument).map(Command::from),
            "QUERY" => QueryRoute::parse(argument).map(Command::from),
            _       => Err(Error::MalformedCommand(vec![
                keyword.trim_start().to_owned(),
                argument.to_owned(),
            ])),
        }
    }
}

impl AddRoute {
    pub fn parse(argument: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = argument.split(',').collect();
        if fields.len() != 4 {
            return Err(Error::MalformedCommand(tokens("ADD", &fields)));
        }
        let origin = fields[0].trim();
        let destination = fields[1].trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(Error::MalformedCommand(tokens("ADD", &fields)));
        }
        // both legs must also combine into a representable edge cost
        let (distance, duration) = match (parse_leg(fields[2]), parse_leg(fields[3])) {
            (Some(distance), Some(duration))
                if Cost::from_legs(distance, duration).is_some() => (distance, duration),
            _ => return Err(Error::InvalidNumeric(tokens("ADD", &fields))),
        };
        Ok(AddRoute {
            argument: argument.to_owned(),
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            distance,
            duration,
        })
    }
}

impl QueryRoute {
    pub fn parse(argument: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = argument.split(',').collect();
        if fields.len() != 2 {
            return Err(Error::MalformedCommand(tokens("QUERY", &fields)));
        }
        Ok(QueryRoute {
            argument: argument.to_owned(),
            origin: fields[0].trim().to_owned(),
            destination: fields[1].trim().to_owned(),
        })
    }
    fn unreachable(&self) -> Error {
        let fields: Vec<&str> = self.argument.split(',').collect();
        Error::UnreachableQuery(tokens("QUERY", &fields))
    }
}

impl Execute for AddRoute {
    fn execute(&self, network: &mut Network, _yens: &Yens) -> Result<Vec<String>, Error> {
        match network.upsert_edge(&self.origin, &self.destination, self.distance, self.duration) {
            Some(_) => Ok(vec![format!("EDGE {}", self.argument)]),
            None => {
                let fields: Vec<&str> = self.argument.split(',').collect();
                Err(Error::InvalidNumeric(tokens("ADD", &fields)))
            }
        }
    }
}

impl Execute for QueryRoute {
    fn execute(&self, network: &mut Network, yens: &Yens) -> Result<Vec<String>, Error> {
        let network = &*network;
        if !is_reachable(network, &self.origin, &self.destination) {
            return Err(self.unreachable());
        }
        let (src, dst) = match (network.node(&self.origin), network.node(&self.destination)) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return Err(self.unreachable()),
        };
        let paths = yens.k_shortest_paths(network, src, dst);
        debug!(origin = %self.origin, destination = %self.destination,
               paths = paths.len(), "answered query");

        let header = format!("QUERY {},{}", self.origin, self.destination);
        let lines = paths.iter().map(|path| {
            let nodes = path.nodes.iter().map(|&n| network.name(n)).join(",");
            format!("PATH {},{}", path.cost, nodes)
        });
        Ok(iter::once(header).chain(lines).collect())
    }
}

fn tokens(keyword: &str, fields: &[&str]) -> Vec<String> {
    iter::once(keyword)
        .chain(fields.iter().copied())
        .map(String::from)
        .collect()
}

/// Distances and durations must be finite and non-negative.
fn parse_leg(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

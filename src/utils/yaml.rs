use std::fs;

use super::config::Config;
use super::error::Error;

pub fn load_config(path: &str) -> Result<Config, Error> {
    let text = fs::read_to_string(path).map_err(Error::ConfigRead)?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<Config, Error> {
    Ok(serde_yaml::from_str(text)?)
}

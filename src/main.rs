use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use route_ranker::utils::config::{Arguments, Config};
use route_ranker::utils::yaml;
use route_ranker::Router;

fn main() -> anyhow::Result<()> {
    let args: Arguments = argh::from_env();
    let mut config = match &args.config {
        Some(path) => yaml::load_config(path)
            .with_context(|| format!("loading {}", path))?,
        None => Config::default(),
    };
    config.override_from_args(&args);

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(io::stderr)
        .init();

    let mut router = Router::new(config);
    let stdout = io::stdout();
    let stderr = io::stderr();
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening {}", path))?;
            router.run(BufReader::new(file), stdout.lock(), stderr.lock())?;
        }
        None => {
            let stdin = io::stdin();
            router.run(stdin.lock(), stdout.lock(), stderr.lock())?;
        }
    }
    Ok(())
}

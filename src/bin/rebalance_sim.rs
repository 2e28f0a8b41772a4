use std::path::PathBuf;

use clap::Parser;
use rebalance_sim::{
    config::Config,
    simulation::run_all,
    telemetry::{initialize_fmt_subscriber, initialize_json_subscriber},
};

#[derive(Debug, Parser)]
#[command(name = "rebalance-sim")]
#[command(about = "compares data movement of modulo, node-ring and vnode-ring placement when a node joins", long_about = None)]
struct Cli {
    /// json file overriding the default scale (10 nodes, 100 vnodes, 10000 ids)
    #[arg(long)]
    config_path: Option<PathBuf>,
    #[arg(long, default_value = "false")]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if args.json_logs {
        initialize_json_subscriber();
    } else {
        initialize_fmt_subscriber();
    }

    let config = match args.config_path {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    for report in run_all(&config)? {
        println!("{}", report);
    }

    Ok(())
}

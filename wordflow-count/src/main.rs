use std::process;

use clap::Parser;
use log::error;

use wordflow_count::app;
use wordflow_count::options::Options;

fn main() {
    env_logger::init();

    let opts = Options::parse();
    if let Err(e) = app::run(&opts) {
        error!("{}", e);
        eprintln!("wordcount: {}", e);
        process::exit(1);
    }
}

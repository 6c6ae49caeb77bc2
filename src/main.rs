use base58_codec::{cli, Configuration, Logger};
use std::{env, process};

fn main() {
    let logger = Logger::new("base58-codec");

    let configuration = Configuration::new().unwrap_or_else(|error| {
        logger.scoped("configuration").log(error);
        process::exit(1);
    });

    let arguments: Vec<String> = env::args().skip(1).collect();
    let result = cli::parse(&arguments, &configuration).and_then(|invocation| cli::run(&invocation));

    match result {
        Ok(output) => println!("{}", output),
        Err(error) => {
            logger.log(error);
            process::exit(1);
        }
    }
}

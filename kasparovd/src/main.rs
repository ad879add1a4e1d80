use kasparov_core::{error, log::init_logger};
use kasparovd_lib::{args::parse_args, daemon::run};

pub fn main() {
    let args = parse_args();

    if let Err(err) = init_logger(args.log_dir(), &args.log_level) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    match run(&args).map(|outputs| serde_json::to_string_pretty(&outputs)) {
        Ok(Ok(json)) => println!("{json}"),
        Ok(Err(err)) => {
            error!("Failed serializing the response: {}", err);
            println!("{}", kasparov_rpc_core::INTERNAL_ERROR_MESSAGE);
            std::process::exit(1);
        }
        Err(err) => {
            println!("{}", err.user_message());
            std::process::exit(1);
        }
    }
}

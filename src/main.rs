use clap::Parser;
use crawl_seed::cli::{self, Cli};
use crawl_seed::utils::logger::init_logger;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit here, before any work starts
    let args = Cli::parse();

    if let Err(err) = init_logger(args.log_dir.as_deref()) {
        eprintln!("warning: failed to initialize logger: {:#}", err);
    }

    match cli::run(&args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if args.log_dir.is_some() {
                tracing::error!("{:#}", err);
            }
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

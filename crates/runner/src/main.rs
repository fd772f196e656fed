use log::error;
use tradedeck_clock::SystemClock;
use tradedeck_runner::{Command, USAGE, parse_args, run_files};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    match command {
        Command::Help => {
            eprintln!("{}", USAGE);
            Ok(())
        }
        Command::Run {
            scenario_path,
            config_path,
        } => {
            let output = run_files(&scenario_path, config_path.as_deref(), SystemClock::new())
                .inspect_err(|e| error!("{}", e))?;
            println!("{}", output);
            Ok(())
        }
    }
}

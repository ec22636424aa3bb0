use colored::Colorize;
use std::error::Error;
use std::io::IsTerminal;
use subnet_report::config::{Config, USAGE};
use subnet_report::logging::init_logging;
use subnet_report::output::render;
use subnet_report::{analyze_all, select_inputs};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env(std::env::args().skip(1))?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");
    for warning in &config.warnings {
        log::warn!("{warning}");
    }

    if config.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    let stdin = std::io::stdin();
    let inputs = select_inputs(&config, stdin.is_terminal(), stdin.lock())?;

    let analyses = analyze_all(&inputs);
    print!("{}", render(&analyses, &config)?);

    let failed = analyses.iter().filter(|a| !a.is_ok()).count();
    if failed > 0 {
        log::warn!("{} {failed} of {} input(s)", "failed".on_red(), analyses.len());
        std::process::exit(1);
    }
    Ok(())
}

use clap::Parser;
use pizza_factory::utils::logger;
use pizza_factory::{demo_lines, CliConfig, Pizza};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pizza-factory CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match (&config.category, &config.size) {
        // clap guarantees the two flags come paired
        (Some(category), Some(size)) => {
            let pizza = Pizza::new(category.clone(), size.clone());
            tracing::debug!("Built custom pizza: {:?}", pizza);
            pizza.describe();
        }
        _ => run_demo(),
    }

    tracing::info!("Done");
    Ok(())
}

// Default demo: one fixed-value pizza, two parameterized ones.
fn run_demo() {
    tracing::debug!("No custom pizza requested, running the built-in demo");

    for line in demo_lines() {
        println!("{}", line);
    }
}

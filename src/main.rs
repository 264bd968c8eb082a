use clap::Parser;
use log::LevelFilter;

use normal_map_generator::{generate_to_dir, Generator};

mod config;

use config::Cli;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = config::resolve(cli)?;
    let params = settings.params;
    log::info!(
        "generating {0}x{0} map, d1={1} d2={2} zDir={3}",
        params.size,
        params.d1,
        params.d2,
        params.z_dir
    );

    let generator = Generator::new(params)?;
    let written = generate_to_dir(&generator, &settings.output)?;
    log::info!("done, {} files in {}", written.len(), settings.output.dir.display());

    Ok(())
}

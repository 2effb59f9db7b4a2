use bioplot::cli::{Args, Commands};
use bioplot::commands::{main_bli, main_ion_series, main_mass_spectrum, main_sec};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Some(Commands::Bli(args)) => main_bli(args)?,
        Some(Commands::MassSpectrum(args)) => main_mass_spectrum(args)?,
        Some(Commands::IonSeries(args)) => main_ion_series(args)?,
        Some(Commands::Sec(args)) => main_sec(args)?,
        None => {
            println!("No command provided");
        }
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use cosmodex::cli::{Cli, Commands};
use cosmodex::io::{create_writer, load_catalog, load_owned, load_pins, OutputFormat, OutputWriter};
use cosmodex::pipeline::{shape_catalog, shape_owned, shape_progress};
use std::collections::HashSet;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cosmodex::config::get_config();

    match cli.command {
        Commands::Index {
            catalog,
            filters,
            format,
            output,
        } => {
            let catalog = load_catalog(&catalog, config)?;
            let options = filters.into_options();
            let view = shape_catalog(catalog, &options, config)?;
            open_writer(format, output)?.write_catalog(&view)?;
        }
        Commands::Profile {
            catalog,
            owned,
            pins,
            filters,
            format,
            output,
        } => {
            let catalog = load_catalog(&catalog, config)?;
            let owned = load_owned(&owned, config)?;
            let pins = match pins {
                Some(path) => load_pins(&path)?,
                None => HashSet::new(),
            };
            let options = filters.into_options();
            let view = shape_owned(owned, &catalog, &pins, &options, config)?;
            open_writer(format, output)?.write_owned(&view)?;
        }
        Commands::Progress {
            catalog,
            owned,
            filters,
            format,
            output,
        } => {
            let catalog = load_catalog(&catalog, config)?;
            let owned = load_owned(&owned, config)?;
            let options = filters.into_options();
            let scopes = shape_progress(catalog, &owned, &options, config)?;
            open_writer(format, output)?.write_progress(&scopes)?;
        }
    }

    Ok(())
}

fn open_writer(format: OutputFormat, output: Option<PathBuf>) -> Result<Box<dyn OutputWriter>> {
    Ok(match output {
        Some(path) => create_writer(format, std::fs::File::create(path)?),
        None => create_writer(format, std::io::stdout()),
    })
}

//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, ArgMatches};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::{self, Write};
use std::process;
use time;
use uemep_tiler_core::core::config::DEFAULT_CONFIG_PATH;
use uemep_tiler_core::core::countries::DEFAULT_COUNTRY_TABLE;
use uemep_tiler_core::core::{load_config, write_config_template, Config};
use uemep_tiler_core::Error;
use uemep_tiler_service::TileService;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(env_level)) => env_level.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn generate(args: &ArgMatches<'_>, config_path: &str) -> Result<(), Error> {
    let country_table = args
        .value_of("country-table")
        .unwrap_or(DEFAULT_COUNTRY_TABLE);
    let progress = match args.value_of("progress") {
        None => true,
        Some(s) => s.parse::<bool>().map_err(|_| {
            Error::Config(format!("Error parsing 'progress' as boolean value: '{}'", s))
        })?,
    };
    let cfg = load_config(config_path, country_table)?;
    let service = TileService::from_config(&cfg)?;
    let summary = service.generate(progress)?;
    println!("{}", summary);

    if args.is_present("make-tile-map") {
        match service.render_map() {
            Ok(path) => println!("Tile map written to {}", path.display()),
            Err(e) => warn!("Could not render tile map: {}", e),
        }
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("uemep_tiler")
        .version(crate_version!())
        .about("Generates the tile grid of a uEMEP model domain")
        .args_from_usage(
            "-c, --config=[FILE] 'Generate tiles from config file'
             --generate-config 'Write config.json template into the current directory'
             --make-tile-map 'Render a PNG map of the generated tiles'
             --country-table=[FILE] 'Country bounding box table (Default: data/europe_bounding_boxes.json)'
             --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
             --progress=[true|false] 'Show progress bar'",
        );

    let matches = match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.write_help()
        Err(e) => e.exit(),
        Ok(matches) => matches,
    };
    init_logger(&matches);

    let result = if matches.is_present("generate-config") {
        write_config_template(DEFAULT_CONFIG_PATH).map(|_| {
            println!("Configuration template written to {}", DEFAULT_CONFIG_PATH);
        })
    } else if let Some(config_path) = matches.value_of("config") {
        generate(&matches, config_path)
    } else {
        let mut stderr = io::stderr();
        let _ = app.write_help(&mut stderr);
        let _ = writeln!(stderr);
        process::exit(1);
    };

    if let Err(e) = result {
        eprintln!("Error - {}", e);
        process::exit(1);
    }
}

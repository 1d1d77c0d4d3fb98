extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate speedpunk;

mod comb;
mod commands;

use clap::*;
use commands::*;
use speedpunk::comb::{ColorMap, CombOptions, LayerPosition, LayerSettings};

use std::fs::File;
use std::io::prelude::*;
use std::io::stdout;
use std::process;
use std::str::FromStr;
use std::result::Result;

fn main() {
    let matches = App::new("Speedpunk command-line interface")
        .version("0.1")
        .about("Draws curvature combs along cubic bézier outlines")
        .arg(Arg::with_name("PATH")
            .value_name("PATH")
            .help("An SVG path")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("STEP")
            .long("step")
            .help("Sets the parametric sampling step of curves (0.05 by default)")
            .value_name("STEP")
            .takes_value(true)
        )
        .arg(Arg::with_name("MAGNITUDE")
            .long("magnitude")
            .help("Sets the factor converting curvature into comb length (200 by default)")
            .value_name("MAGNITUDE")
            .takes_value(true)
        )
        .arg(Arg::with_name("OPACITY")
            .long("opacity")
            .help("Sets the opacity of the combs in percent (70 by default)")
            .value_name("OPACITY")
            .takes_value(true)
        )
        .arg(Arg::with_name("DIRECTION")
            .long("direction")
            .help("Draws the combs inside, outside or on both sides of the outline")
            .value_name("DIRECTION")
            .possible_values(&["inner", "outer", "both"])
            .takes_value(true)
        )
        .arg(Arg::with_name("GAMMA")
            .long("gamma")
            .help("Sets the gamma applied before color lookup (1.4 by default)")
            .value_name("GAMMA")
            .takes_value(true)
        )
        .arg(Arg::with_name("STROKE")
            .long("stroke")
            .help("Sets the base stroke width of the combs (1 by default)")
            .value_name("WIDTH")
            .takes_value(true)
        )
        .arg(Arg::with_name("TICK_SPACING")
            .long("tick-spacing")
            .help("Sets the distance between ticks along straight segments (12 by default)")
            .value_name("SPACING")
            .takes_value(true)
        )
        .arg(Arg::with_name("COLORMAP")
            .long("colormap")
            .help("Sets the color map of the combs (rainbow by default)")
            .value_name("NAME")
            .takes_value(true)
        )
        .arg(Arg::with_name("LAYER")
            .long("layer")
            .help("Places the comb layer above or below the outline (svg output)")
            .value_name("POSITION")
            .possible_values(&["top", "bottom"])
            .takes_value(true)
        )
        .arg(Arg::with_name("LOCK")
            .long("lock")
            .help("Marks the comb layer as locked (svg output)")
        )
        .arg(Arg::with_name("FORMAT")
            .long("format")
            .help("Sets the output format (records by default)")
            .value_name("FORMAT")
            .possible_values(&["records", "svg"])
            .takes_value(true)
        )
        .arg(Arg::with_name("COUNT")
            .short("c")
            .long("count")
            .help("Prints the number of paths, samples and combs")
        )
        .arg(Arg::with_name("VERBOSE")
            .short("v")
            .long("verbose")
            .multiple(true)
            .help("Logs more (-v for debug, -vv for trace)")
        )
        .arg(Arg::with_name("LIST_COLORMAPS")
            .long("list-colormaps")
            .help("Prints the available color maps")
        )
        .get_matches();

    init_logger(matches.occurrences_of("VERBOSE"));

    if matches.is_present("LIST_COLORMAPS") {
        for map in ColorMap::ALL {
            println!("{}", map.name());
        }
        return;
    }

    let mut input_buffer = matches.value_of("PATH").unwrap_or("").to_string();

    if let Some(input_file) = matches.value_of("INPUT") {
        if let Ok(mut file) = File::open(input_file) {
            if let Err(err) = file.read_to_string(&mut input_buffer) {
                fail(&format!("Cannot read file {input_file}: {err}"));
            }
        } else {
            fail(&format!("Cannot open file {input_file}"));
        }
    }

    let mut output: Box<dyn Write> = Box::new(stdout());

    if let Some(output_file) = matches.value_of("OUTPUT") {
        match File::create(output_file) {
            Ok(file) => output = Box::new(file),
            Err(err) => fail(&format!("Cannot create file {output_file}: {err}")),
        }
    }

    let options = match get_options(&matches) {
        Ok(options) => options,
        Err(msg) => fail(&msg),
    };

    let layer = LayerSettings {
        position: get_enum(&matches, "LAYER", LayerPosition::Top).unwrap_or_else(|msg| fail(&msg)),
        lock: matches.is_present("LOCK"),
    };

    let cmd = CombCmd {
        input: input_buffer,
        output,
        options,
        layer,
        format: get_enum(&matches, "FORMAT", OutputFormat::Records).unwrap_or_else(|msg| fail(&msg)),
        count: matches.is_present("COUNT"),
    };

    match comb::comb(cmd) {
        Ok(summary) => info!("{summary}"),
        Err(err) => fail(&err.to_string()),
    }
}

fn init_logger(verbosity: u64) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn fail(msg: &str) -> ! {
    error!("{msg}");
    process::exit(1);
}

fn get_options(matches: &ArgMatches) -> Result<CombOptions, String> {
    let color_map = match matches.value_of("COLORMAP") {
        Some(name) => ColorMap::lookup(name).unwrap_or_else(|| {
            warn!("Unknown color map {name:?}, using {}.", ColorMap::Rainbow);
            ColorMap::Rainbow
        }),
        None => CombOptions::DEFAULT_COLOR_MAP,
    };

    Ok(CombOptions::DEFAULT
        .with_step(get_number(matches, "STEP", CombOptions::DEFAULT_STEP)?)
        .with_magnitude_scale(get_number(matches, "MAGNITUDE", CombOptions::DEFAULT_MAGNITUDE_SCALE)?)
        .with_opacity(get_number(matches, "OPACITY", CombOptions::DEFAULT_OPACITY)?)
        .with_direction(get_enum(matches, "DIRECTION", CombOptions::DEFAULT_DIRECTION)?)
        .with_gamma(get_number(matches, "GAMMA", CombOptions::DEFAULT_GAMMA)?)
        .with_stroke_width(get_number(matches, "STROKE", CombOptions::DEFAULT_STROKE_WIDTH)?)
        .with_tick_spacing(get_number(matches, "TICK_SPACING", CombOptions::DEFAULT_TICK_SPACING)?)
        .with_color_map(color_map))
}

fn get_number(matches: &ArgMatches, name: &str, default: f64) -> Result<f64, String> {
    match matches.value_of(name) {
        Some(src) => src
            .parse()
            .map_err(|_| format!("Invalid value {src:?} for --{}", name.to_lowercase().replace('_', "-"))),
        None => Ok(default),
    }
}

fn get_enum<T: FromStr>(matches: &ArgMatches, name: &str, default: T) -> Result<T, String> {
    match matches.value_of(name) {
        Some(src) => T::from_str(src)
            .map_err(|_| format!("Invalid value {src:?} for --{}", name.to_lowercase())),
        None => Ok(default),
    }
}


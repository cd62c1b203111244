mod logger;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use vastu_base::{
    AayadiResult, Measurement, Unit, all_zones, evaluate, find_by_name, sector_boundary_angles,
    zone_from_bearing,
};
use vastu_report::{CompassSvg, DEFAULT_COMPASS_SIZE, Report};

#[derive(Parser)]
#[command(name = "vastu", about = "Vastu Aayadi evaluation CLI")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FootprintArgs {
    /// Length of the footprint
    #[arg(default_value_t = 40.0, allow_negative_numbers = true)]
    length: f64,
    /// Breadth of the footprint
    #[arg(default_value_t = 30.0, allow_negative_numbers = true)]
    breadth: f64,
    /// Height of the structure
    #[arg(default_value_t = 11.0, allow_negative_numbers = true)]
    height: f64,
    /// Unit of all three dimensions: ft or m
    #[arg(long, default_value = "ft")]
    unit: Unit,
    /// Main entrance direction (N, NNE, NE, ... NNW)
    #[arg(long, default_value = "NE")]
    entrance: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute Aayadi indices, score and recommendations
    Evaluate {
        #[command(flatten)]
        footprint: FootprintArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a formatted text report
    Report {
        #[command(flatten)]
        footprint: FootprintArgs,
        /// Line width of the report
        #[arg(long, default_value = "72")]
        width: usize,
    },
    /// List all 16 zones with their sector bounds
    Zones,
    /// Show details for one zone
    Zone {
        /// Canonical direction label, e.g. NE
        name: String,
    },
    /// Find the zone containing a compass bearing
    Bearing {
        /// Bearing in degrees, 0 = North, clockwise
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Render the compass as SVG on stdout
    Compass {
        /// Entrance direction to highlight
        #[arg(long, default_value = "NE")]
        entrance: String,
        /// Canvas size in pixels
        #[arg(long, default_value_t = DEFAULT_COMPASS_SIZE)]
        size: f64,
    },
}

#[derive(Serialize)]
struct EvaluationOutput<'a> {
    measurement: &'a Measurement,
    entrance: &'a str,
    result: &'a AayadiResult,
}

/// Validate dimensions, exiting with an error message when any is not positive.
fn measurement_or_exit(args: &FootprintArgs) -> Measurement {
    Measurement::new(args.length, args.breadth, args.height, args.unit).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn evaluate_footprint(m: &Measurement, entrance: &str) -> AayadiResult {
    log::debug!("footprint: perimeter={:.2} ft unit={}", m.perimeter_ft(), m.unit());
    evaluate(m.length(), m.breadth(), m.height(), m.unit(), entrance)
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Commands::Evaluate { footprint, json } => {
            let m = measurement_or_exit(&footprint);
            let result = evaluate_footprint(&m, &footprint.entrance);
            if json {
                let out = EvaluationOutput {
                    measurement: &m,
                    entrance: &footprint.entrance,
                    result: &result,
                };
                match serde_json::to_string_pretty(&out) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("Aaya: {:.4}  Vyaya: {:.4}", result.aaya, result.vyaya);
                println!(
                    "Yoni: {}  Vara: {}  Tithi: {}  Nakshatra: {}",
                    result.yoni, result.vara, result.tithi, result.nakshatra
                );
                println!(
                    "Score: {}/100 ({})",
                    result.score,
                    if result.is_favorable() {
                        "favorable"
                    } else {
                        "needs attention"
                    }
                );
                println!("Recommendations:");
                for rec in &result.recommendations {
                    println!("  - {rec}");
                }
            }
        }

        Commands::Report { footprint, width } => {
            let m = measurement_or_exit(&footprint);
            let result = evaluate_footprint(&m, &footprint.entrance);
            print!("{}", Report::new(&m, &footprint.entrance, &result).with_width(width));
        }

        Commands::Zones => {
            for zone in all_zones() {
                let (start, end) = sector_boundary_angles(zone);
                println!(
                    "{:<4} {:>6.2} deg  [{:>7.2}, {:>7.2})  {:<11} {}",
                    zone.name(),
                    zone.center_deg,
                    start,
                    end,
                    zone.element,
                    zone.ideal
                );
            }
        }

        Commands::Zone { name } => match find_by_name(&name) {
            Some(zone) => {
                let (start, end) = sector_boundary_angles(zone);
                println!("{} ({} deg) - {}", zone.name(), zone.center_deg, zone.ideal);
                println!("  Sector: {start:.2} .. {end:.2} deg");
                println!("  Element: {}", zone.element);
                println!("  Color: {}", zone.color);
                println!("  {}", zone.description);
                println!("  Do's:");
                for item in zone.dos {
                    println!("    + {item}");
                }
                println!("  Don'ts:");
                for item in zone.donts {
                    println!("    - {item}");
                }
            }
            None => {
                eprintln!("Unknown zone: {name}. Use one of N, NNE, NE, ... NNW.");
                std::process::exit(1);
            }
        },

        Commands::Bearing { deg } => {
            let zone = zone_from_bearing(deg);
            println!("{} ({} deg) - {}", zone.name(), zone.center_deg, zone.ideal);
        }

        Commands::Compass { entrance, size } => {
            if !(size.is_finite() && size > 0.0) {
                eprintln!("Error: size must be greater than zero");
                std::process::exit(1);
            }
            if find_by_name(&entrance).is_none() {
                log::warn!("entrance {entrance:?} is not a canonical direction; no marker drawn");
            }
            print!("{}", CompassSvg::new(&entrance).with_size(size));
        }
    }
}

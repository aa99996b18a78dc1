use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};

use twd97::dms::Presentation;
use twd97::{from_str, LatLon, Twd97};

#[derive(Parser, Debug)]
#[command(author, version, about = "The TWD97 and WGS84 converter", long_about = None)]
struct Args {
    /// TWD97 to WGS84, format: EAST,NORTH (meters)
    #[arg(short = 'w', value_name = "EAST,NORTH")]
    to_wgs84: Option<String>,

    /// WGS84 to TWD97, format: lat,lng (DDD.ddddd, DDD°MM'SS.SSS" or DDD°MM.MMM')
    #[arg(short = 't', value_name = "LAT,LNG")]
    to_twd97: Option<String>,

    /// Presentation for the WGS84 output of -w
    #[arg(short = 'p', value_enum, value_name = "PRESENTATION", requires = "to_wgs84")]
    presentation: Option<PresentationArg>,

    /// Penghu, Kinmen or Matsu coordinates (119°E central meridian)
    #[arg(long)]
    pkm: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PresentationArg {
    Mindec,
    Mindecstr,
    Dms,
    Dmsstr,
}

impl From<PresentationArg> for Presentation {
    fn from(value: PresentationArg) -> Presentation {
        match value {
            PresentationArg::Mindec => Presentation::MinDec,
            PresentationArg::Mindecstr => Presentation::MinDecStr,
            PresentationArg::Dms => Presentation::Dms,
            PresentationArg::Dmsstr => Presentation::DmsStr,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(value) = args.to_wgs84.as_deref() {
        let coord: Twd97 = from_str(value)?;
        let latlon = coord.to_latlon(args.pkm)?;

        match args.presentation {
            Some(arg) => {
                let presentation = Presentation::from(arg);
                println!(
                    "{},{}",
                    presentation.format(latlon.latitude()),
                    presentation.format(latlon.longitude())
                );
            }
            None => println!("{:.6},{:.6}", latlon.latitude(), latlon.longitude()),
        }
    } else if let Some(value) = args.to_twd97.as_deref() {
        let coord: LatLon = from_str(value)?;
        let projected = coord.to_twd97(args.pkm)?;

        println!("{:.6},{:.6}", projected.easting(), projected.northing());
    } else {
        Args::command().print_help()?;
    }

    Ok(())
}

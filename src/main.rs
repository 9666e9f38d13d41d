use std::io::{self, Read};

use structopt::StructOpt;

use promfam::cliopt::CliOpt;
use promfam::format;
use promfam::parse;
use promfam::source;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let opt = CliOpt::from_args();

    let text = match &opt.target {
        Some(target) if target.starts_with("http://") || target.starts_with("https://") => {
            source::fetch_url(target)?
        }
        Some(path) => source::fetch_file(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let families = parse::parse_with(&text, &opt.prefix, &opt.label_names, &opt.label_values)?;

    match opt.encode.as_str() {
        "t" => {
            for family in &families {
                print!("{}", family);
            }
        }
        "j" => println!("{}", format::to_json(&families)?),
        unknown => return Err(format!("unsupported encoding '{}'", unknown).into()),
    }

    Ok(())
}

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use log::debug;

use console_canvas::config::Config;
use console_canvas::{CanvasError, DEFAULT_CHAR, Layer, Location, render};

/// Compose text into a character layer and print it.
///
/// Lines are written first, top to bottom; overlays are merged afterwards
/// in the order given.
#[derive(Debug, Parser)]
#[command(name = "canvas", version)]
struct Cli {
    /// Lines of text, each written on the row below the previous one.
    text: Vec<String>,

    /// Column and row of the first line.
    #[arg(long, value_name = "X,Y", default_value = "0,0")]
    at: Location,

    /// Merge TEXT with its first character at X,Y. Spaces in TEXT are
    /// transparent. May be repeated.
    #[arg(long, value_name = "X,Y=TEXT")]
    overlay: Vec<Overlay>,

    /// Maximum width the canvas may grow to [default: configured or
    /// terminal width].
    #[arg(long, value_name = "N")]
    width: Option<usize>,

    /// Load configuration from PATH instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the default configuration to stdout.
    #[arg(long)]
    print_config: bool,
}

/// One `--overlay` value.
#[derive(Debug, Clone)]
struct Overlay {
    at: Location,
    text: String,
}

impl FromStr for Overlay {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, CanvasError> {
        let (at, text) = s.split_once('=').ok_or_else(|| CanvasError::InvalidArgument {
            name: "overlay",
            reason: format!("`{s}` is not of the form X,Y=TEXT"),
        })?;
        Ok(Self {
            at: at.parse()?,
            text: text.to_owned(),
        })
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_config {
        match toml::to_string_pretty(&Config::default()) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Build the canvas from the parsed command line and render it.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => Config::try_load_from(path)?,
        None => Config::load(),
    };
    let mut canvas = config.new_layer()?;
    if let Some(width) = cli.width {
        canvas.set_max_width(width);
    }
    debug!("canvas: max width {}", canvas.max_width());

    let mut at = cli.at;
    for (i, line) in cli.text.iter().enumerate() {
        if i > 0 {
            at.translate(0, 1)?;
        }
        canvas.insert_str(line, at)?;
    }

    for overlay in &cli.overlay {
        let mut layer = Layer::new(0, 0, DEFAULT_CHAR).with_max_width(canvas.max_width());
        layer.insert_str(&overlay.text, Location::ORIGIN)?;
        canvas.merge(&layer, overlay.at)?;
    }

    render::render_stdout(&canvas)?;
    Ok(())
}

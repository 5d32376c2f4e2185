use anyhow::Result;
use clap::Parser;
use sanketa_icons::icon_gen::{self, Options};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "sanketa-icons",
    about = "Generate the placeholder icons for the Sanketa browser extension"
)]
struct Args {
    /// Output directory.
    #[clap(
        short,
        long,
        value_name = "DIR",
        default_value = "chrome-extension/icons"
    )]
    output: PathBuf,

    /// Icon sizes to generate, in pixels.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_value = "16,48,128",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    png: Vec<u32>,

    /// Scalable font (TTF/OTF/TTC) to try before the system fonts.
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&Options {
        output: args.output,
        sizes: args.png,
        font: args.font,
    })
}

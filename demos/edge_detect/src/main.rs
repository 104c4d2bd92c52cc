use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;

use edgekit::{imgproc::filter::EdgeDirection, io::functional as F};

#[derive(FromArgs)]
/// Detect edges in an image with a 3x3 convolution filter
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to write the filtered image to
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// edge orientation to detect: vertical or horizontal
    #[argh(option, short = 'd', default = "EdgeDirection::Vertical")]
    direction: EdgeDirection,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = F::read_image_rgba8(&args.input)?;
    log::info!("loaded {} with size {}", args.input.display(), image.size());

    let start = Instant::now();
    let edges = edgekit::imgproc::filter::detect_edges(&image, args.direction)?;
    log::info!(
        "detected {} edges in {:?}",
        args.direction,
        start.elapsed()
    );

    F::write_image_rgba8(&args.output, &edges)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}

// std
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
// others
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
// mcqmc
use rs_mcqmc::core::lowdiscrepancy::{sobol, van_der_corput};
use rs_mcqmc::core::mcqmc::{fnv1a_hash32, Float};
use rs_mcqmc::core::sampler::{Sequence, SequenceKind};
use rs_mcqmc::splitter::{ImageSplitter, Region, TileOrder};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sample sequences and image tiles of an offline renderer.
#[derive(Parser)]
#[command(name = "rs_mcqmc", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tiles an image is split into
    Tiles(TilesArgs),
    /// Print values of a sample sequence
    Sequence(SequenceArgs),
    /// Estimate the coverage of a disk per pixel, tile by tile, and write a PNG
    Render(RenderArgs),
}

#[derive(Args)]
struct TileArgs {
    /// image width in pixels
    #[arg(long)]
    width: i32,
    /// image height in pixels
    #[arg(long)]
    height: i32,
    /// tile edge length in pixels
    #[arg(short = 'b', long = "blocksize", default_value = "32")]
    block_size: i32,
    /// linear or random
    #[arg(long, default_value = "linear")]
    order: TileOrder,
    /// seed for the random tile order
    #[arg(long, default_value = "0")]
    seed: u32,
}

#[derive(Args)]
struct TilesArgs {
    #[command(flatten)]
    tiles: TileArgs,
    /// x coordinate of the image origin
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    x0: i32,
    /// y coordinate of the image origin
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    y0: i32,
}

#[derive(Args)]
struct SequenceArgs {
    /// halton, random, vdc, sobol or lp
    #[arg(short = 'k', long, default_value = "halton")]
    kind: SequenceKind,
    /// number of values to print
    #[arg(short = 'n', long, default_value = "16")]
    count: u32,
    /// Halton base
    #[arg(long, default_value = "2")]
    base: u32,
    /// sample index to start from
    #[arg(long, default_value = "0")]
    start: u32,
    /// scramble value for the base-2 sequences
    #[arg(long, default_value = "0")]
    scramble: u32,
    /// seed of the random generator
    #[arg(long, default_value = "0")]
    seed: u32,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    tiles: TileArgs,
    /// samples per pixel
    #[arg(long, default_value = "16")]
    spp: u32,
    /// use specified number of threads for rendering (0 = all cores)
    #[arg(short = 't', long = "nthreads", default_value = "0")]
    nthreads: u8,
    /// the PNG file to write
    #[arg(short = 'o', long, default_value = "coverage.png")]
    output: PathBuf,
}

/// Pixels of one finished tile, row by row.
struct FilmTile {
    region: Region,
    pixels: Vec<u8>,
}

fn make_splitter(args: &TileArgs, x0: i32, y0: i32) -> ImageSplitter {
    match ImageSplitter::with_seed(
        args.width,
        args.height,
        x0,
        y0,
        args.block_size,
        args.order,
        args.seed,
    ) {
        Ok(splitter) => splitter,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn print_tiles(args: &TilesArgs) {
    let splitter = make_splitter(&args.tiles, args.x0, args.y0);
    for (n, region) in splitter.iter().enumerate() {
        println!("{}: {}", n, region);
    }
    println!(
        "{} tiles ({} x {})",
        splitter.len(),
        splitter.tiles_x(),
        splitter.tiles_y()
    );
}

fn print_sequence(args: &SequenceArgs) {
    if args.kind == SequenceKind::Halton && args.base < 2 {
        error!("Halton base has to be >= 2, got {}", args.base);
        std::process::exit(1);
    }
    let mut sequence = Sequence::create(args.kind, args.base, args.start, args.scramble, args.seed);
    for _ in 0..args.count {
        println!("{}", sequence.get_1d());
    }
}

/// Fraction of the pixel at `(px, py)` covered by the disk, estimated
/// with a scrambled (0,2)-sequence.
fn pixel_coverage(px: i32, py: i32, width: i32, height: i32, spp: u32) -> Float {
    let cx: Float = width as Float * 0.5;
    let cy: Float = height as Float * 0.5;
    let radius: Float = width.min(height) as Float * 0.4;
    // decorrelate neighbouring pixels
    let pixel_index: u32 = (py as u32).wrapping_mul(width as u32).wrapping_add(px as u32);
    let scramble_x: u32 = fnv1a_hash32(pixel_index);
    let scramble_y: u32 = fnv1a_hash32(scramble_x);
    let mut hits: u32 = 0;
    for s in 0..spp {
        let x: Float = px as Float + van_der_corput(s, scramble_x) - cx;
        let y: Float = py as Float + sobol(s, scramble_y) - cy;
        if x * x + y * y <= radius * radius {
            hits += 1;
        }
    }
    hits as Float / spp.max(1) as Float
}

fn render_tile(region: &Region, width: i32, height: i32, spp: u32) -> FilmTile {
    let mut pixels: Vec<u8> = Vec::with_capacity(region.area() as usize);
    for py in region.y..region.y1() {
        for px in region.x..region.x1() {
            let coverage = pixel_coverage(px, py, width, height, spp);
            pixels.push((coverage * 255.0 as Float).round() as u8);
        }
    }
    FilmTile {
        region: *region,
        pixels,
    }
}

fn render(args: &RenderArgs) {
    let splitter = make_splitter(&args.tiles, 0, 0);
    let (width, height) = (args.tiles.width, args.tiles.height);
    let num_cores: usize = if args.nthreads == 0_u8 {
        num_cpus::get()
    } else {
        args.nthreads as usize
    };
    info!(
        threads = num_cores,
        tiles = splitter.len(),
        spp = args.spp,
        "Rendering {}x{} ...",
        width,
        height
    );
    let mut film = image::GrayImage::new(width as u32, height as u32);
    {
        let splitter = &splitter;
        let next_tile = &AtomicUsize::new(0);
        let film = &mut film;
        let spp = args.spp;
        let result = crossbeam::scope(|scope| {
            let (pixel_tx, pixel_rx) = crossbeam_channel::bounded::<FilmTile>(num_cores);
            // spawn worker threads
            for _ in 0..num_cores {
                let pixel_tx = pixel_tx.clone();
                scope.spawn(move |_| {
                    loop {
                        let n = next_tile.fetch_add(1, Ordering::AcqRel) as i32;
                        // no more tiles
                        let region = match splitter.get_area(n) {
                            Some(region) => region,
                            None => break,
                        };
                        let film_tile = render_tile(&region, width, height, spp);
                        if pixel_tx.send(film_tile).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(pixel_tx);
            // collect tiles and merge them into the film
            scope.spawn(move |_| {
                for _ in pbr::PbIter::new(0..splitter.len()) {
                    let film_tile = match pixel_rx.recv() {
                        Ok(film_tile) => film_tile,
                        Err(_) => break,
                    };
                    let r = film_tile.region;
                    for (i, value) in film_tile.pixels.iter().enumerate() {
                        let x = r.x + i as i32 % r.w;
                        let y = r.y + i as i32 / r.w;
                        film.put_pixel(x as u32, y as u32, image::Luma([*value]));
                    }
                }
            });
        });
        if result.is_err() {
            error!("a render thread panicked");
            std::process::exit(1);
        }
    }
    match film.save(&args.output) {
        Ok(()) => info!("Writing image {:?} with bounds {}x{}", args.output, width, height),
        Err(e) => {
            error!("Failed to write {:?}: {}", args.output, e);
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    // handle command line options
    let args = Cli::parse();
    info!("rs_mcqmc version {} [Detected {} cores]", VERSION, num_cpus::get());
    match args.command {
        Command::Tiles(ref tiles) => print_tiles(tiles),
        Command::Sequence(ref sequence) => print_sequence(sequence),
        Command::Render(ref render_args) => render(render_args),
    }
}

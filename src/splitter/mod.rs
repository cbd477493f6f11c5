//! Splits the image into rectangular tiles (regions) the render
//! scheduler hands out to the worker threads. The list of tiles is
//! computed once and not changed after creation, so any number of
//! workers can look up tiles concurrently without locking.

// std
use std::fmt;
// others
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use tracing::{debug, trace};
// mcqmc
use crate::core::rng::MwcRandom;
use crate::core::sampling::shuffle;

/// Axis-aligned rectangle in image pixel space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Region {
    /// Exclusive upper bound in x.
    pub fn x1(&self) -> i32 {
        self.x + self.w
    }
    /// Exclusive upper bound in y.
    pub fn y1(&self) -> i32 {
        self.y + self.h
    }
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x1() && y >= self.y && y < self.y1()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.w, self.h)
    }
}

/// Order in which the tiles are handed out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TileOrder {
    /// Row by row, left to right.
    Linear,
    /// Row-major order shuffled once at construction.
    Random,
}

impl Default for TileOrder {
    fn default() -> Self {
        TileOrder::Linear
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitterError {
    /// Width or height below one pixel.
    #[error("image with dimension {width}x{height} has no pixels to split")]
    EmptyImage { width: i32, height: i32 },
    /// Tile edge below one pixel.
    #[error("tile size has to be at least 1, got {0}")]
    InvalidBlockSize(i32),
    /// The far edge `x0 + width` or `y0 + height` does not fit in an `i32`.
    #[error("image {width}x{height} at ({x0}, {y0}) reaches past the i32 pixel range")]
    OutOfRange {
        x0: i32,
        y0: i32,
        width: i32,
        height: i32,
    },
    /// More tiles than [get_area](ImageSplitter::get_area) can address.
    #[error("{0} tiles exceed the addressable tile count")]
    TooManyTiles(u64),
}

/// The tiles of an image, shared immutably between worker threads.
#[derive(Debug, Clone)]
pub struct ImageSplitter {
    regions: Vec<Region>,
    block_size: i32,
    tiles: (i32, i32),
    order: TileOrder,
}

impl ImageSplitter {
    /// Split the `w` x `h` image anchored at `(x0, y0)` into tiles of
    /// at most `block_size` x `block_size` pixels. Random ordering
    /// uses the default seeded generator, see
    /// [with_seed](ImageSplitter::with_seed).
    pub fn new(
        w: i32,
        h: i32,
        x0: i32,
        y0: i32,
        block_size: i32,
        order: TileOrder,
    ) -> Result<ImageSplitter, SplitterError> {
        // the default generator state is the one for seed 0
        ImageSplitter::split(w, h, x0, y0, block_size, order, 0)
    }
    /// Same as [new](ImageSplitter::new), but the random order is
    /// driven by a generator seeded with *seed*.
    pub fn with_seed(
        w: i32,
        h: i32,
        x0: i32,
        y0: i32,
        block_size: i32,
        order: TileOrder,
        seed: u32,
    ) -> Result<ImageSplitter, SplitterError> {
        ImageSplitter::split(w, h, x0, y0, block_size, order, seed)
    }
    fn split(
        w: i32,
        h: i32,
        x0: i32,
        y0: i32,
        block_size: i32,
        order: TileOrder,
        seed: u32,
    ) -> Result<ImageSplitter, SplitterError> {
        if block_size < 1 {
            return Err(SplitterError::InvalidBlockSize(block_size));
        }
        if w < 1 || h < 1 {
            return Err(SplitterError::EmptyImage {
                width: w,
                height: h,
            });
        }
        let (x_end, y_end) = match (x0.checked_add(w), y0.checked_add(h)) {
            (Some(x_end), Some(y_end)) => (x_end, y_end),
            _ => {
                return Err(SplitterError::OutOfRange {
                    x0,
                    y0,
                    width: w,
                    height: h,
                })
            }
        };
        // ceil(w / block_size) without forming w + block_size - 1
        let nx: i32 = (w - 1) / block_size + 1;
        let ny: i32 = (h - 1) / block_size + 1;
        let count: u64 = nx as u64 * ny as u64;
        if count > i32::MAX as u64 {
            return Err(SplitterError::TooManyTiles(count));
        }
        let mut regions: Vec<Region> = Vec::with_capacity(count as usize);
        for j in 0..ny {
            // j * block_size <= h - 1, so y < y_end fits
            let y: i32 = y0 + j * block_size;
            for i in 0..nx {
                let x: i32 = x0 + i * block_size;
                // the last tile in each row/column is clipped to the image
                regions.push(Region {
                    x,
                    y,
                    w: std::cmp::min(block_size, x_end - x),
                    h: std::cmp::min(block_size, y_end - y),
                });
            }
        }
        debug!(
            nx,
            ny,
            tiles = regions.len(),
            %order,
            "split {}x{} image at ({}, {})",
            w,
            h,
            x0,
            y0
        );
        match order {
            TileOrder::Random => {
                let count: usize = regions.len();
                let mut rng = MwcRandom::with_seed(seed);
                shuffle(&mut regions[..], count, 1, &mut rng);
                trace!(count, seed, "shuffled tiles");
            }
            TileOrder::Linear => {}
        }
        Ok(ImageSplitter {
            regions,
            block_size,
            tiles: (nx, ny),
            order,
        })
    }
    /// Get the `n`-th tile in hand-out order or `None` if there are no
    /// more tiles (which includes negative indices).
    pub fn get_area(&self, n: i32) -> Option<Region> {
        if n < 0 {
            return None;
        }
        self.regions.get(n as usize).copied()
    }
    /// Number of tiles, `ceil(w / block_size) * ceil(h / block_size)`.
    pub fn len(&self) -> usize {
        self.regions.len()
    }
    /// Never true for a successfully constructed splitter.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
    pub fn iter(&self) -> ImageSplitterIterator {
        ImageSplitterIterator {
            splitter: self,
            next: 0,
        }
    }
    pub fn tiles_x(&self) -> i32 {
        self.tiles.0
    }
    pub fn tiles_y(&self) -> i32 {
        self.tiles.1
    }
    pub fn block_size(&self) -> i32 {
        self.block_size
    }
    pub fn order(&self) -> TileOrder {
        self.order
    }
}

/// Iterator over the tiles in hand-out order.
pub struct ImageSplitterIterator<'a> {
    splitter: &'a ImageSplitter,
    next: usize,
}

impl<'a> Iterator for ImageSplitterIterator<'a> {
    type Item = Region;
    fn next(&mut self) -> Option<Region> {
        let region = self.splitter.regions.get(self.next).copied();
        if region.is_some() {
            self.next += 1;
        }
        region
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.splitter.regions.len() - self.next;
        (left, Some(left))
    }
}

impl<'a> IntoIterator for &'a ImageSplitter {
    type Item = Region;
    type IntoIter = ImageSplitterIterator<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

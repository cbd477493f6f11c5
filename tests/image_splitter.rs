use std::collections::HashSet;

use proptest::prelude::*;
use rayon::prelude::*;

use rs_mcqmc::splitter::{ImageSplitter, Region, TileOrder};

fn pixel_cover(splitter: &ImageSplitter) -> Vec<(i32, i32)> {
    let mut pixels: Vec<(i32, i32)> = Vec::new();
    for r in splitter.iter() {
        for y in r.y..r.y1() {
            for x in r.x..r.x1() {
                pixels.push((x, y));
            }
        }
    }
    pixels
}

fn order_strategy() -> impl Strategy<Value = TileOrder> {
    prop_oneof![Just(TileOrder::Linear), Just(TileOrder::Random)]
}

proptest! {
    #[test]
    fn tiles_cover_image_exactly_once(
        w in 1..70_i32,
        h in 1..70_i32,
        x0 in -20..20_i32,
        y0 in -20..20_i32,
        block_size in 1..40_i32,
        order in order_strategy(),
        seed in any::<u32>(),
    ) {
        let splitter = ImageSplitter::with_seed(w, h, x0, y0, block_size, order, seed).unwrap();
        let nx = (w + block_size - 1) / block_size;
        let ny = (h + block_size - 1) / block_size;
        prop_assert_eq!(splitter.len(), (nx * ny) as usize);
        for r in splitter.iter() {
            prop_assert!(r.w >= 1 && r.w <= block_size);
            prop_assert!(r.h >= 1 && r.h <= block_size);
        }
        let pixels = pixel_cover(&splitter);
        prop_assert_eq!(pixels.len(), (w * h) as usize);
        let unique: HashSet<(i32, i32)> = pixels.iter().cloned().collect();
        prop_assert_eq!(unique.len(), pixels.len());
        for (x, y) in unique {
            prop_assert!(x >= x0 && x < x0 + w && y >= y0 && y < y0 + h);
        }
    }

    #[test]
    fn random_is_reordered_linear(
        w in 1..100_i32,
        h in 1..100_i32,
        block_size in 1..32_i32,
        seed in any::<u32>(),
    ) {
        let linear = ImageSplitter::new(w, h, 0, 0, block_size, TileOrder::Linear).unwrap();
        let random =
            ImageSplitter::with_seed(w, h, 0, 0, block_size, TileOrder::Random, seed).unwrap();
        let mut a: Vec<Region> = linear.regions().to_vec();
        let mut b: Vec<Region> = random.regions().to_vec();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_lookups_fail(
        w in 1..50_i32,
        h in 1..50_i32,
        block_size in 1..16_i32,
        beyond in 0..1000_i32,
        negative in 1..1000_i32,
    ) {
        let splitter = ImageSplitter::new(w, h, 0, 0, block_size, TileOrder::Random).unwrap();
        prop_assert_eq!(splitter.get_area(splitter.len() as i32 + beyond), None);
        prop_assert_eq!(splitter.get_area(-negative), None);
    }
}

#[test]
fn scenario_ten_by_ten() {
    let splitter = ImageSplitter::new(10, 10, 0, 0, 4, TileOrder::Linear).unwrap();
    let expected = vec![
        Region { x: 0, y: 0, w: 4, h: 4 },
        Region { x: 4, y: 0, w: 4, h: 4 },
        Region { x: 8, y: 0, w: 2, h: 4 },
        Region { x: 0, y: 4, w: 4, h: 4 },
        Region { x: 4, y: 4, w: 4, h: 4 },
        Region { x: 8, y: 4, w: 2, h: 4 },
        Region { x: 0, y: 8, w: 4, h: 2 },
        Region { x: 4, y: 8, w: 4, h: 2 },
        Region { x: 8, y: 8, w: 2, h: 2 },
    ];
    assert_eq!(splitter.regions(), &expected[..]);
    assert_eq!(splitter.get_area(9), None);
}

#[test]
fn concurrent_lookups_see_the_same_tiles() {
    let splitter =
        ImageSplitter::with_seed(1920, 1080, 0, 0, 32, TileOrder::Random, 2024).unwrap();
    let n = splitter.len() as i32;
    // more indices than tiles, the tail has to report "no more work"
    let looked_up: Vec<Option<Region>> = (0..n + 64)
        .into_par_iter()
        .map(|i| splitter.get_area(i))
        .collect();
    for (i, region) in looked_up.iter().enumerate() {
        assert_eq!(*region, splitter.get_area(i as i32));
    }
    assert_eq!(looked_up.iter().filter(|r| r.is_none()).count(), 64);
}

use rs_mcqmc::splitter::{ImageSplitter, TileOrder};

fn main() {
    match ImageSplitter::new(10, 10, 0, 0, 4, TileOrder::Linear) {
        Ok(splitter) => {
            let mut n: i32 = 0;
            while let Some(region) = splitter.get_area(n) {
                println!("get_area({:?}) = {:?}", n, region);
                n += 1;
            }
        }
        Err(e) => println!("{}", e),
    }
}

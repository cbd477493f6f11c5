use rs_mcqmc::core::mcqmc::next_prime;
use rs_mcqmc::samplers::halton::HaltonSequence;

fn main() {
    // one stream per dimension, bases 2, 3, 5, 7
    let mut base: i32 = 2;
    for _ in 0..4 {
        let mut halton = HaltonSequence::new(base as u32);
        let values: Vec<f32> = (0..8).map(|_| halton.get_next()).collect();
        println!("base {:?}: {:?}", base, values);
        base = next_prime(base);
    }
}

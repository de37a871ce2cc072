use data_loader::AwardIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/movielist.csv");

    println!("Loading award list...\n");

    let start = Instant::now();
    let index = AwardIndex::load_from_file(path)
        .expect("Failed to load award list");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", index.count());
    println!("Winners: {}", index.count_winners());
    println!("\nPerformance: {:.0} rows/second",
             index.count() as f64 / elapsed.as_secs_f64());
}

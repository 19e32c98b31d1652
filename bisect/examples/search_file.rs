//! Write a large sorted sequence file, map it and search it in a batch

use bisect::{search_batch, write_sequence, MmapSequence, SearchConfig, SortedSequence};
use std::time::Instant;

fn main() -> bisect::Result<()> {
    println!("Sequence file search - memory-mapped batch");

    let len = 50_000_000usize;
    let nqueries = 1_000_000usize;
    let filename = "example_sequence.seq";

    // Multiples of 3, so two thirds of the queries miss
    let data_start = Instant::now();
    let values: Vec<u64> = (0..len as u64).map(|i| i * 3).collect();
    println!(
        "Data generation: {:.3}s",
        data_start.elapsed().as_secs_f64()
    );

    let start = Instant::now();
    write_sequence(filename, &values)?;
    println!("Write completed in {:.3}s", start.elapsed().as_secs_f64());
    drop(values);

    let config = SearchConfig::default().with_verify_sorted(true);
    let start = Instant::now();
    let seq = MmapSequence::<u64>::open(filename, &config)?;
    println!(
        "Mapped and verified {} elements in {:.3}s",
        seq.len(),
        start.elapsed().as_secs_f64()
    );

    let targets: Vec<u64> = (0..nqueries as u64).map(|i| i * 149).collect();
    let start = Instant::now();
    let results = search_batch(&seq, &targets, &config);
    let duration = start.elapsed();

    let hits = results.iter().filter(|r| r.is_some()).count();
    println!("Searched {nqueries} targets in {:.3}s", duration.as_secs_f64());
    println!("Hits: {hits} / {nqueries}");
    println!(
        "Queries/s: {:.0}",
        nqueries as f64 / duration.as_secs_f64()
    );

    std::fs::remove_file(filename)?;
    println!("Cleaned up {filename}");

    Ok(())
}

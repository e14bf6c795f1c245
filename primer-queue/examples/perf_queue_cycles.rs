//! Cycle-accurate enqueue latency comparison using rdtscp.
//!
//! Streams values through a queue held at a fixed depth and records the
//! per-enqueue cycle count. The linear queue's p999/max show the cost of its
//! occasional compaction; the circular queue should stay flat.
//!
//! Run with:
//!   cargo build --release --example perf_queue_cycles
//!   taskset -c 0 ./target/release/examples/perf_queue_cycles
//!
//! Set `RUST_LOG=primer_queue=trace` to see each compaction (slow).

use std::hint::black_box;

use hdrhistogram::Histogram;
use primer_queue::{BoundedQueue, CircularQueue, LinearQueue};

const CAPACITY: usize = 4096;
const DEPTH: usize = 2048;
const OPS: usize = 1_000_000;

#[inline(always)]
fn rdtscp() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        let mut aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut aux)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        panic!("rdtscp only supported on x86_64");
    }
}

fn print_stats(name: &str, hist: &Histogram<u64>) {
    println!("{}", name);
    println!("  min:  {:>6} cycles", hist.min());
    println!("  p50:  {:>6} cycles", hist.value_at_quantile(0.50));
    println!("  p99:  {:>6} cycles", hist.value_at_quantile(0.99));
    println!("  p999: {:>6} cycles", hist.value_at_quantile(0.999));
    println!("  max:  {:>6} cycles", hist.max());
    println!("  avg:  {:>6.0} cycles", hist.mean());
}

fn bench_queue<Q: BoundedQueue<u64>>(mut queue: Q) -> Histogram<u64> {
    let mut hist = Histogram::<u64>::new(3).unwrap();

    for i in 0..DEPTH as u64 {
        queue.enqueue(i).unwrap();
    }

    // Warmup
    for i in 0..10_000u64 {
        queue.enqueue(i).unwrap();
        black_box(queue.dequeue());
    }

    for i in 0..OPS as u64 {
        let start = rdtscp();
        let result = queue.enqueue(black_box(i));
        let end = rdtscp();
        result.unwrap();
        black_box(queue.dequeue());
        let _ = hist.record(end.wrapping_sub(start));
    }

    hist
}

fn main() {
    env_logger::init();

    println!(
        "ENQUEUE latency ({} ops, capacity {}, depth {})",
        OPS, CAPACITY, DEPTH
    );
    println!("========================================");
    println!();

    let linear = LinearQueue::new(CAPACITY).unwrap();
    let linear_hist = bench_queue(linear);
    let circular_hist = bench_queue(CircularQueue::new(CAPACITY).unwrap());

    print_stats("linear:", &linear_hist);
    println!();
    print_stats("circular:", &circular_hist);
    println!();

    let linear_p999 = linear_hist.value_at_quantile(0.999);
    let circular_p999 = circular_hist.value_at_quantile(0.999);

    println!("----------------------------------------");
    if linear_p999 > circular_p999 {
        println!(
            "linear p999 is {:.1}% SLOWER (compaction)",
            (linear_p999 as f64 / circular_p999 as f64 - 1.0) * 100.0
        );
    } else {
        println!("linear p999 is within circular p999");
    }
}

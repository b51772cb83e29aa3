mod error;
mod heap;

pub use error::HeapError;
pub use heap::{HeapConfig, MinPowerHeap, PowerHeap};

#[cfg(test)]
mod bench {
    use super::*;
    use rand::prelude::*;
    use std::collections::BinaryHeap;

    fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
        use std::time::{Duration, Instant};
        let start = Instant::now();
        f();
        let elapsed = start.elapsed();

        print!("BENCH `{}` :", name);
        for _ in 0..num_tabs {
            print!("\t");
        }

        if elapsed < Duration::from_millis(1) {
            println!(
                "{} {:03} nanos",
                elapsed.as_micros(),
                elapsed.as_nanos() % 1000,
            );
        } else if elapsed < Duration::from_secs(1) {
            println!(
                "{} {:03} micros",
                elapsed.as_millis(),
                elapsed.as_micros() % 1000,
            );
        } else {
            println!(
                "{} {:03} millis",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
            );
        }
    }

    #[test]
    fn validate_power_heap() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        const N: usize = 4 * 1024;

        for exponent in 0..=5 {
            let mut heap = PowerHeap::new(exponent).unwrap();
            let mut reference = BinaryHeap::new();

            for _ in 0..N {
                if rng.gen_bool(0.6) {
                    let x = rng.gen_range(0..512);
                    heap.push(x);
                    reference.push(x);
                } else {
                    assert_eq!(heap.pop(), reference.pop());
                }
                assert_eq!(heap.len(), reference.len());
                assert_eq!(heap.peek(), reference.peek());
            }

            while let Some(x) = reference.pop() {
                assert_eq!(heap.pop(), Some(x));
            }
            assert_eq!(heap.pop(), None);
        }
    }

    #[test]
    pub fn main() {
        let mut rng = SmallRng::from_entropy();

        const N: usize = 64 * 1024;

        let values: Vec<u32> = (0..N).map(|_| rng.gen_range(0..1000_000)).collect();

        let mut std_heap = BinaryHeap::with_capacity(N);
        bench("std::collections::BinaryHeap::push", 1, || {
            for &x in values.iter() {
                std_heap.push(x);
            }
        });
        bench("std::collections::BinaryHeap::pop", 1, || {
            while std_heap.pop().is_some() {}
        });
        println!();

        for exponent in 1..=4 {
            let mut heap = PowerHeap::with_capacity(exponent, N).unwrap();
            bench(&format!("PowerHeap<2^{}>::push", exponent), 4, || {
                for (len, &x) in values.iter().enumerate() {
                    assert_eq!(heap.len(), len);
                    heap.push(x);
                }
            });
            bench(&format!("PowerHeap<2^{}>::pop", exponent), 4, || {
                let mut prev = u32::MAX;
                while let Some(x) = heap.pop() {
                    assert!(x <= prev);
                    prev = x;
                }
            });
            println!();
        }
    }
}

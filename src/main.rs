use anyhow::{Context, Result};
use clap::Parser;
use powerheap::{HeapConfig, PowerHeap};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "powerheap", about = "Max-heap with 2^exponent children per node")]
struct Cli {
    /// Each node gets 2^exponent children.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    exponent: i32,
    /// Values pushed in order before the maximum is removed.
    #[arg(long, value_delimiter = ',', default_values_t = [10, 15, 20, 7, 5], allow_negative_numbers = true)]
    values: Vec<i64>,
}

fn print_heap(heap: &PowerHeap<i64>) {
    print!("Complete Heap:");
    for x in heap.as_slice() {
        print!(" {}", x);
    }
    println!();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = HeapConfig {
        exponent: cli.exponent,
        capacity: cli.values.len(),
    };
    let mut heap = config
        .build()
        .with_context(|| format!("failed to build heap from {:?}", config))?;

    heap.extend(cli.values);
    print_heap(&heap);

    match heap.pop() {
        Some(max) => {
            println!("Max value removed: {}", max);
            print_heap(&heap);
        }
        None => println!("Heap is empty"),
    }

    Ok(())
}

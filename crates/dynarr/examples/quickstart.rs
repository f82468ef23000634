//! dynarr quickstart: the ownership rules of a growable array.
//!
//! Demonstrates:
//!   1. Building from a literal list
//!   2. Duplication (independent storage)
//!   3. Transfer (buffer handed over, source left empty)
//!   4. Read-only and read-write indexed access
//!   5. Append growth and zero-filling resize
//!
//! Run with:
//!   RUST_LOG=trace cargo run --example quickstart

use dynarr::{dynarr, DynamicArray};
use tracing_subscriber::EnvFilter;

fn fill(x: f64) -> DynamicArray {
    dynarr![x, x]
}

fn report(label: &str, arr: &DynamicArray) {
    println!(
        "{label:>4}: [{}]  len={} capacity={}",
        arr.dump(),
        arr.len(),
        arr.capacity()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== dynarr Quickstart ===\n");

    // 1. Duplication: v2 gets its own copy of v1.
    let mut v1 = dynarr![1, 5, 3];
    let mut v2 = dynarr![1, 2, 3, 4];
    v2.assign_from(&v1)?;
    report("v1", &v1);
    report("v2", &v2);
    println!(
        "distinct buffers: {}\n",
        v1.as_slice().as_ptr() != v2.as_slice().as_ptr()
    );

    // 2. Transfer: a returned array is moved, never copied.
    let v3 = fill(3.5);
    report("v3", &v3);

    let mut v4 = dynarr![1, 2, 3];
    let mut temp = fill(3.5);
    v4.transfer_from(&mut temp);
    report("v4", &v4);
    report("temp", &temp);
    println!();

    // 3. Access: writes need `&mut`, a shared borrow can only read.
    let item = *v1.get(1)?;
    println!("v1[1] = {item}");
    *v1.get_mut(1)? = 2.0;
    report("v1", &v1);

    let v5 = v1.clone();
    let frozen: &DynamicArray = &v5;
    println!("v5[1] = {}", frozen[1]);
    if let Err(e) = frozen.get(10) {
        println!("v5.get(10): {e}");
    }
    println!();

    // 4. Growth: doubling on append, exact size on resize.
    report("v1", &v1);
    v1.push_back(400.0)?;
    report("v1", &v1);
    v1.resize(5)?;
    report("v1", &v1);
    println!("reallocations: {}", v1.metrics().reallocations);

    Ok(())
}

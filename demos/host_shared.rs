//! IDs coordinated across independent processes on one host.
//!
//! Run this binary a few times concurrently; every process serializes its
//! sequence through the same state file in the OS temp directory.

use snowgen::{Coordination, Snowgen, SnowgenConfig};

fn main() {
    let config = SnowgenConfig::builder()
        .node_id(1)
        .coordination(Coordination::file_lock())
        .build();
    let generator = Snowgen::with_config(config).unwrap();

    for _ in 0..5 {
        let id = generator.generate().unwrap();
        let (tick, _, sequence) = generator.decompose(id);
        println!("pid {} issued {id} (tick {tick}, sequence {sequence})", std::process::id());
    }
}

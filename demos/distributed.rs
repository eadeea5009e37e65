//! Cluster-wide IDs coordinated through a Redis counter.
//!
//! Needs a reachable Redis instance, for example `redis://127.0.0.1:6379/`.

use snowgen::{Coordination, Snowgen, SnowgenConfig};

fn main() {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/".to_string());

    let config = SnowgenConfig::builder()
        .node_id(7)
        .coordination(Coordination::cluster(url))
        .build();

    let generator = match Snowgen::with_config(config) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("cannot start generator: {err}");
            return;
        }
    };

    for _ in 0..5 {
        match generator.generate_string() {
            Ok(id) => println!("issued {id}"),
            Err(err) => {
                // unavailable coordination is surfaced, never degraded to a
                // weaker backend
                eprintln!("generation failed: {err}");
                return;
            }
        }
    }
}

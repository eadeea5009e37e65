use snowgen::Snowgen;

fn main() {
    // Create a generator with node ID 1
    let generator = Snowgen::new(1).unwrap();

    // Generate some IDs
    for _ in 0..3 {
        let id = generator.generate_string().unwrap();
        let parsed = generator.parse(&id).unwrap();
        println!(
            "ID: {id}, Timestamp: {} ({}), Node ID: {}, Sequence: {}",
            parsed.timestamp, parsed.datetime, parsed.node_id, parsed.sequence
        );
    }
}

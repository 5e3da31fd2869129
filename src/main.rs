// Checksum demo: random buffers per worker, one shared table

use std::process::exit;
use std::time::Instant;

use crc64slice::{checksum, Config, WellKnownTables};
use log::*;
use rand::RngCore;

fn setup_logger() {
    let filters = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| concat!(env!("CARGO_PKG_NAME"), "=info").to_string());

    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&filters)
        .init();
}

fn main() {
    setup_logger();

    let config = Config::from_env();
    info!(
        "checksumming {} bytes on {} worker(s) with polynomial {:#018x}",
        config.buffer_len, config.workers, config.polynomial
    );

    let table = WellKnownTables::global().acquire(config.polynomial);
    debug!("acquired {:?}", table);

    let result = crossbeam_utils::thread::scope(|s| {
        for worker in 0..config.workers {
            let table = &table;
            let len = config.buffer_len;

            s.spawn(move |_| {
                let mut buffer = vec![0u8; len];
                rand::rng().fill_bytes(&mut buffer);

                let start = Instant::now();
                let crc = checksum(&buffer, table);
                let elapsed = start.elapsed();

                let mib_per_sec = len as f64 / (1024.0 * 1024.0) / elapsed.as_secs_f64().max(f64::EPSILON);
                info!("worker {worker}: crc64 {crc:#018x} in {elapsed:?} ({mib_per_sec:.1} MiB/s)");
            });
        }
    });

    if result.is_err() {
        error!("a checksum worker panicked");
        exit(1);
    }
}

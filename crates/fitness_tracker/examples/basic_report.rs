//! Print reports for a few hand-written sensor packages.
//!
//! Run with `cargo run -p fitness_tracker --example basic_report`.

use fitness_tracker::{SensorPackage, process_batch};

fn main() {
    let packages = vec![
        SensorPackage::new("RUN", [12000.0, 1.25, 68.0]),
        SensorPackage::new("WLK", [7000.0, 1.0, 82.0, 176.0]),
        SensorPackage::new("SWM", [900.0, 0.75, 70.0, 50.0, 30.0]),
        SensorPackage::new("BIKE", [1.0, 1.0, 1.0]),
    ];

    for result in process_batch(&packages) {
        match result {
            Ok(report) => println!("{report}"),
            Err(e) => eprintln!("skipped package: {e}"),
        }
    }
}

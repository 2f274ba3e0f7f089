//! JSON and CSV renderers for firing solutions.
//!
//! Writers take any `io::Write` sink; callers decide where output goes.

pub mod report {
    use mortar_fire_control::{Point3, TrajectoryResult};
    use serde::Serialize;
    use serde_json::{to_writer, to_writer_pretty};
    use std::io::{self, Write};

    /// JSON envelope pairing the inputs with their firing solution.
    #[derive(Debug, Serialize)]
    pub struct Report<'a> {
        pub launch: [f64; 3],
        pub target: [f64; 3],
        #[serde(flatten)]
        pub result: &'a TrajectoryResult,
    }

    impl<'a> Report<'a> {
        pub fn new(launch: Point3, target: Point3, result: &'a TrajectoryResult) -> Self {
            Self {
                launch: launch.into(),
                target: target.into(),
                result,
            }
        }
    }

    /// Serialize the report as JSON followed by a newline.
    pub fn write_json(
        writer: &mut dyn Write,
        report: &Report<'_>,
        pretty: bool,
    ) -> io::Result<()> {
        if pretty {
            to_writer_pretty(&mut *writer, report)?;
        } else {
            to_writer(&mut *writer, report)?;
        }
        writeln!(writer)
    }
}

pub mod table {
    use mortar_fire_control::TrajectoryResult;
    use serde::Serialize;
    use std::io::{self, Write};

    /// One CSV row per charge. Absent values are written as empty fields.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record {
        pub charge: String,
        pub horizontal_range: f64,
        pub bearing_primary_deg: f64,
        pub bearing_secondary_deg: Option<f64>,
        pub elevation_deg: Option<f64>,
        pub time_of_flight_s: Option<f64>,
        pub feasible: bool,
    }

    /// Flatten a result into per-charge records.
    pub fn records(result: &TrajectoryResult) -> Vec<Record> {
        result
            .solutions
            .iter()
            .map(|s| Record {
                charge: format!("C{}", s.charge_index),
                horizontal_range: result.horizontal_range,
                bearing_primary_deg: result.bearing_primary_degrees,
                bearing_secondary_deg: result.bearing_secondary_degrees,
                elevation_deg: s.elevation_degrees,
                time_of_flight_s: s.time_of_flight_seconds,
                feasible: s.is_feasible(),
            })
            .collect()
    }

    /// Write a header line and one row per charge.
    pub fn write_csv(writer: &mut dyn Write, result: &TrajectoryResult) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records(result) {
            csv.serialize(record)?;
        }
        csv.flush()
    }
}

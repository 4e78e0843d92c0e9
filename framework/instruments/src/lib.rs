//! Report benchmark results to InfluxDB using the line protocol.
//!
//! Results are buffered by an [InfluxLineReporter] for the duration of a run and sent in one
//! request when the run finishes.

mod environment;
mod line_protocol;
mod report;

pub use environment::RunEnvironment;
pub use line_protocol::{field_value, tag_value, FieldValue, LineBuilder};
pub use report::{
    BenchResult, HttpTransport, InfluxLineReporter, MetricsTransport, ReporterConfig,
    TransportError, MEASUREMENT,
};

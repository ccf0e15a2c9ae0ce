mod report;
mod runner;
mod session;

pub use report::{AppReport, CycleReport, format_cycle, separator};
pub use runner::{
    FINISHED_MESSAGE, MonitorOptions, MonitorOutcome, STOPPED_MESSAGE, run_monitor,
};
pub use session::MonitorSession;

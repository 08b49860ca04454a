use crate::runway::RunwayCode;
use crate::time::Time;
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;
use tabled::Tabled;

/// Queue sizes and runway status at the end of one minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Tabled)]
pub struct Snapshot {
    #[tabled(rename = "minute")]
    pub minute: u64,
    #[tabled(rename = "clock")]
    #[serde(skip)]
    pub clock: Time,
    #[tabled(rename = "landing queue")]
    pub landing_queue: usize,
    #[tabled(rename = "takeoff queue")]
    pub takeoff_queue: usize,
    #[tabled(rename = "runway")]
    pub runway: RunwayCode,
}

/// Running totals over planes that started service or crashed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accumulators {
    pub landed: u64,
    pub took_off: u64,
    pub crashed: u64,
    pub total_landing_wait: u64,
    pub total_takeoff_wait: u64,
    pub landing_arrivals: u64,
    pub takeoff_arrivals: u64,
}

impl Accumulators {
    pub fn record_landing(&mut self, wait: u64) {
        self.landed += 1;
        self.total_landing_wait += wait;
    }

    pub fn record_takeoff(&mut self, wait: u64) {
        self.took_off += 1;
        self.total_takeoff_wait += wait;
    }

    pub fn record_crash(&mut self) {
        self.crashed += 1;
    }
}

fn mean(total: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Final figures of a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub total_minutes: u64,
    pub took_off: u64,
    pub landed: u64,
    pub crashed: u64,
    pub avg_takeoff_wait: f64,
    pub avg_landing_wait: f64,
    pub landing_arrivals: u64,
    pub takeoff_arrivals: u64,
    /// Planes still airborne at the horizon that had not yet run out of fuel.
    pub unresolved: u64,
}

impl Report {
    pub fn new(total_minutes: u64, acc: &Accumulators, unresolved: u64) -> Self {
        Report {
            total_minutes,
            took_off: acc.took_off,
            landed: acc.landed,
            crashed: acc.crashed,
            avg_takeoff_wait: mean(acc.total_takeoff_wait, acc.took_off),
            avg_landing_wait: mean(acc.total_landing_wait, acc.landed),
            landing_arrivals: acc.landing_arrivals,
            takeoff_arrivals: acc.takeoff_arrivals,
            unresolved,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let crashed = if self.crashed > 0 {
            self.crashed.to_string().red().bold().to_string()
        } else {
            self.crashed.to_string()
        };
        writeln!(f, "--- Simulation results ---")?;
        writeln!(f, "Total simulated minutes: {}", self.total_minutes)?;
        writeln!(
            f,
            "1) Number of planes that took off (started takeoff): {}",
            self.took_off
        )?;
        writeln!(
            f,
            "2) Number of planes that landed (started landing): {}",
            self.landed
        )?;
        writeln!(
            f,
            "3) Number of planes that crashed due to fuel shortage: {}",
            crashed
        )?;
        writeln!(
            f,
            "4) Average time a plane spent in takeoff queue: {:.3} minutes",
            self.avg_takeoff_wait
        )?;
        writeln!(
            f,
            "5) Average time a plane spent in landing queue: {:.3} minutes",
            self.avg_landing_wait
        )?;
        write!(f, "---------------------------")
    }
}

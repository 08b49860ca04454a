use crate::plane::Operation;
use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;

/// State of the single runway. `remaining` is always positive while busy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunwayState {
    #[default]
    Idle,
    Busy { operation: Operation, remaining: u64 },
}

/// Per-minute runway status as recorded in snapshots: 0 idle, 1 landing, 2 takeoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunwayCode {
    Idle = 0,
    Landing = 1,
    Takeoff = 2,
}

impl fmt::Display for RunwayCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RunwayCode::Idle => write!(f, "idle"),
            RunwayCode::Landing => write!(f, "landing"),
            RunwayCode::Takeoff => write!(f, "takeoff"),
        }
    }
}

impl RunwayState {
    /// Counts one minute of service down, freeing the runway when it runs out.
    pub fn tick(&mut self) {
        if let RunwayState::Busy { remaining, .. } = self {
            *remaining -= 1;
            if *remaining == 0 {
                *self = RunwayState::Idle;
            }
        }
    }

    pub fn start(&mut self, operation: Operation, duration: u64) {
        debug_assert!(self.is_idle(), "runway already in use");
        debug_assert!(duration > 0, "service must occupy the runway");
        *self = RunwayState::Busy {
            operation,
            remaining: duration,
        };
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, RunwayState::Idle)
    }

    pub fn remaining(&self) -> u64 {
        match self {
            RunwayState::Idle => 0,
            RunwayState::Busy { remaining, .. } => *remaining,
        }
    }

    pub fn code(&self) -> RunwayCode {
        match self {
            RunwayState::Idle => RunwayCode::Idle,
            RunwayState::Busy {
                operation: Operation::Landing,
                ..
            } => RunwayCode::Landing,
            RunwayState::Busy {
                operation: Operation::Takeoff,
                ..
            } => RunwayCode::Takeoff,
        }
    }
}

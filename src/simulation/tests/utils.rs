use crate::arrivals::{ArrivalSource, Arrivals};
use crate::config::SimConfig;
use crate::simulation::Simulation;
use crate::time::Time;
use proptest::prelude::Strategy;
use std::collections::HashSet;

/// Arrivals at fixed minutes, for exact scenarios.
#[derive(Default)]
pub struct ScriptedArrivals {
    pub landings: HashSet<u64>,
    pub takeoffs: HashSet<u64>,
}

impl ArrivalSource for ScriptedArrivals {
    fn draw(&mut self, minute: Time) -> Arrivals {
        Arrivals {
            landing: self.landings.contains(&minute.0),
            takeoff: self.takeoffs.contains(&minute.0),
        }
    }
}

pub fn scripted(landings: &[u64], takeoffs: &[u64]) -> ScriptedArrivals {
    ScriptedArrivals {
        landings: landings.iter().copied().collect(),
        takeoffs: takeoffs.iter().copied().collect(),
    }
}

pub fn config(
    landing_service_time: u64,
    takeoff_service_time: u64,
    max_landing_wait: u64,
    total_sim_time: u64,
) -> SimConfig {
    SimConfig {
        landing_service_time,
        takeoff_service_time,
        avg_between_landings: 1_000_000.0,
        avg_between_takeoffs: 1_000_000.0,
        max_landing_wait,
        total_sim_time,
    }
}

pub fn scripted_sim(
    config: SimConfig,
    landings: &[u64],
    takeoffs: &[u64],
) -> Simulation<ScriptedArrivals> {
    Simulation::new(config, scripted(landings, takeoffs))
}

pub fn arb_config() -> impl Strategy<Value = SimConfig> {
    (
        1..8u64,
        1..8u64,
        0.5..12.0f64,
        0.5..12.0f64,
        0..15u64,
        1..300u64,
    )
        .prop_map(
            |(landing, takeoff, avg_landings, avg_takeoffs, max_wait, total)| SimConfig {
                landing_service_time: landing,
                takeoff_service_time: takeoff,
                avg_between_landings: avg_landings,
                avg_between_takeoffs: avg_takeoffs,
                max_landing_wait: max_wait,
                total_sim_time: total,
            },
        )
}

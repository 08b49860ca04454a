use crate::arrivals::ArrivalSource;
use crate::config::SimConfig;
use crate::plane::{Operation, Plane};
use crate::simulation::state::SimulationState;
use crate::stats::{Report, Snapshot};
use crate::time::Time;
use tracing::{debug, info, trace};

/// Result of a full run.
pub struct Outcome {
    pub report: Report,
    pub snapshots: Vec<Snapshot>,
}

pub struct Simulation<A: ArrivalSource> {
    config: SimConfig,
    arrivals: A,
    pub state: SimulationState,
}

/// A landing-queue plane is out of fuel once its wait strictly exceeds `max_wait`.
pub fn is_out_of_fuel(plane: &Plane, examined_at: Time, max_wait: u64) -> bool {
    plane.wait_at(examined_at) > max_wait
}

impl<A: ArrivalSource> Simulation<A> {
    pub fn new(config: SimConfig, arrivals: A) -> Self {
        Simulation {
            config,
            arrivals,
            state: SimulationState::default(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.clock >= Time(self.config.total_sim_time)
    }

    /// Advances the simulation by one minute and returns that minute's snapshot.
    pub fn step(&mut self) -> Snapshot {
        debug_assert!(!self.is_finished(), "stepped past the horizon");
        let now = self.state.clock;

        self.state.runway.tick();

        let arrivals = self.arrivals.draw(now);
        if arrivals.landing {
            self.state.landing_queue.enqueue(Plane::arrived_at(now));
            self.state.acc.landing_arrivals += 1;
        }
        if arrivals.takeoff {
            self.state.takeoff_queue.enqueue(Plane::arrived_at(now));
            self.state.acc.takeoff_arrivals += 1;
        }

        if self.state.runway.is_idle() {
            self.schedule();
        }

        let snapshot = self.state.snapshot();
        trace!(
            minute = now.0,
            landing_queue = snapshot.landing_queue,
            takeoff_queue = snapshot.takeoff_queue,
            runway = %snapshot.runway,
            remaining = self.state.runway.remaining(),
            "minute done"
        );
        self.state.snapshots.push(snapshot);
        self.state.clock += 1;

        self.assert_invariants();
        snapshot
    }

    /// Starts at most one service on an idle runway. Landings go first; planes at the
    /// head of the landing queue that ran out of fuel are dropped as crashes on the way.
    fn schedule(&mut self) {
        let now = self.state.clock;
        self.prune_out_of_fuel(now);

        if let Some(plane) = self.state.landing_queue.dequeue() {
            let wait = plane.wait_at(now);
            self.state.acc.record_landing(wait);
            self.state
                .runway
                .start(Operation::Landing, self.config.landing_service_time);
            debug!(minute = now.0, arrival = plane.arrival.0, wait, "landing started");
        } else if let Some(plane) = self.state.takeoff_queue.dequeue() {
            let wait = plane.wait_at(now);
            self.state.acc.record_takeoff(wait);
            self.state
                .runway
                .start(Operation::Takeoff, self.config.takeoff_service_time);
            debug!(minute = now.0, arrival = plane.arrival.0, wait, "takeoff started");
        }
    }

    fn prune_out_of_fuel(&mut self, now: Time) {
        while let Some(&plane) = self.state.landing_queue.peek() {
            if !is_out_of_fuel(&plane, now, self.config.max_landing_wait) {
                break;
            }
            self.state.landing_queue.dequeue();
            self.state.acc.record_crash();
            debug!(
                minute = now.0,
                arrival = plane.arrival.0,
                wait = plane.wait_at(now),
                "plane crashed waiting to land"
            );
        }
    }

    /// Empties the landing queue after the horizon, judging each plane as of the first
    /// minute past it. Returns the number of planes that had not run out of fuel yet;
    /// those are neither landed nor crashed.
    fn final_sweep(&mut self) -> u64 {
        let end = Time(self.config.total_sim_time);
        let mut unresolved = 0;
        while let Some(plane) = self.state.landing_queue.dequeue() {
            if is_out_of_fuel(&plane, end, self.config.max_landing_wait) {
                self.state.acc.record_crash();
                debug!(arrival = plane.arrival.0, "plane crashed after the horizon");
            } else {
                unresolved += 1;
            }
        }
        unresolved
    }

    /// Runs the remaining minutes, then the end-of-horizon crash sweep.
    pub fn run(mut self) -> Outcome {
        info!(
            landing_service_time = self.config.landing_service_time,
            takeoff_service_time = self.config.takeoff_service_time,
            avg_between_landings = self.config.avg_between_landings,
            avg_between_takeoffs = self.config.avg_between_takeoffs,
            max_landing_wait = self.config.max_landing_wait,
            total_sim_time = self.config.total_sim_time,
            "simulation starting"
        );

        while !self.is_finished() {
            self.step();
        }
        let unresolved = self.final_sweep();
        debug_assert!(self.state.landing_queue.is_empty());

        let report = Report::new(self.config.total_sim_time, &self.state.acc, unresolved);
        info!(
            landed = report.landed,
            took_off = report.took_off,
            crashed = report.crashed,
            unresolved,
            "simulation finished"
        );

        Outcome {
            report,
            snapshots: self.state.snapshots,
        }
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        let acc = &self.state.acc;
        debug_assert_eq!(
            acc.landing_arrivals,
            acc.landed + acc.crashed + self.state.landing_queue.len() as u64,
            "Landing arrivals <-> landed + crashed + queued invariant violated"
        );
        debug_assert_eq!(
            acc.takeoff_arrivals,
            acc.took_off + self.state.takeoff_queue.len() as u64,
            "Takeoff arrivals <-> took off + queued invariant violated"
        );
        debug_assert_eq!(
            self.state.clock.0,
            self.state.snapshots.len() as u64,
            "One snapshot per minute invariant violated"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&self) {}
}

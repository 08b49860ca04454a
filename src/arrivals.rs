use crate::config::SimConfig;
use crate::time::Time;
use turborand::rng::Rng;
use turborand::{SeededCore, TurboRand};

/// Which queues gained a plane in a given minute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Arrivals {
    pub landing: bool,
    pub takeoff: bool,
}

pub trait ArrivalSource {
    fn draw(&mut self, minute: Time) -> Arrivals;
}

/// Per-minute chance of an arrival given the average gap between arrivals.
///
/// One Bernoulli trial per minute only approximates a Poisson stream: averages below one
/// minute saturate at one arrival per minute.
pub fn arrival_probability(avg_between: f64) -> f64 {
    (1.0 / avg_between).min(1.0)
}

/// Independent per-minute trials for each queue, landing drawn first.
pub struct BernoulliArrivals {
    rng: Rng,
    landing_probability: f64,
    takeoff_probability: f64,
}

impl BernoulliArrivals {
    pub fn new(config: &SimConfig, rng: Rng) -> Self {
        BernoulliArrivals {
            rng,
            landing_probability: arrival_probability(config.avg_between_landings),
            takeoff_probability: arrival_probability(config.avg_between_takeoffs),
        }
    }

    pub fn seeded(config: &SimConfig, seed: u64) -> Self {
        Self::new(config, Rng::with_seed(seed))
    }
}

impl ArrivalSource for BernoulliArrivals {
    fn draw(&mut self, _minute: Time) -> Arrivals {
        let landing = self.rng.f64() < self.landing_probability;
        let takeoff = self.rng.f64() < self.takeoff_probability;
        Arrivals { landing, takeoff }
    }
}

use crate::plane::Plane;
use crate::runway::RunwayCode;
use crate::simulation::engine::is_out_of_fuel;
use crate::simulation::tests::utils::{config, scripted_sim};
use crate::time::Time;

#[test]
fn test_out_of_fuel_is_strict() {
    let plane = Plane::arrived_at(Time(10));
    assert!(!is_out_of_fuel(&plane, Time(10), 0));
    assert!(is_out_of_fuel(&plane, Time(11), 0));
    assert!(!is_out_of_fuel(&plane, Time(15), 5));
    assert!(is_out_of_fuel(&plane, Time(16), 5));
}

#[test]
fn test_crash_detected_when_runway_frees_past_limit() {
    let max_wait = 3;
    // takeoff taken at minute 0 holds the runway until minute max_wait + 2, the landing
    // queues behind it from minute 1 and has waited max_wait + 1 when it is examined
    let mut sim = scripted_sim(config(2, max_wait + 2, max_wait, 10), &[1], &[0]);

    let first = sim.step();
    assert_eq!(RunwayCode::Takeoff, first.runway);
    assert_eq!(0, first.landing_queue);
    assert_eq!(1, sim.state.acc.took_off);

    for _ in 1..=(max_wait + 1) {
        let snap = sim.step();
        assert_eq!(RunwayCode::Takeoff, snap.runway);
        assert_eq!(1, snap.landing_queue);
    }
    assert_eq!(0, sim.state.acc.crashed);

    let snap = sim.step();
    assert_eq!(Time(max_wait + 2), snap.clock);
    assert_eq!(RunwayCode::Idle, snap.runway);
    assert_eq!(0, snap.landing_queue);
    assert_eq!(1, sim.state.acc.crashed);
    assert_eq!(0, sim.state.acc.landed);

    let outcome = sim.run();
    assert_eq!(1, outcome.report.crashed);
    assert_eq!(0, outcome.report.landed);
    assert_eq!(1, outcome.report.took_off);
    assert_eq!(0, outcome.report.unresolved);
}

#[test]
fn test_wait_equal_to_limit_still_lands() {
    let max_wait = 4;
    // takeoff starting at minute 0 holds the runway through minute max_wait,
    // the landing arrives right behind it
    let mut sim = scripted_sim(config(2, max_wait + 1, max_wait, 12), &[1], &[0]);

    for _ in 0..=max_wait {
        sim.step();
    }
    assert_eq!(0, sim.state.acc.landed);
    assert_eq!(1, sim.state.acc.took_off);

    let snap = sim.step();
    assert_eq!(RunwayCode::Landing, snap.runway);
    assert_eq!(1, sim.state.acc.landed);
    assert_eq!(0, sim.state.acc.crashed);
    assert_eq!(max_wait, sim.state.acc.total_landing_wait);
}

#[test]
fn test_prunes_several_heads_then_lands() {
    let mut sim = scripted_sim(config(1, 4, 1, 10), &[1, 2, 3], &[0]);

    for _ in 0..4 {
        sim.step();
    }
    assert_eq!(3, sim.state.landing_queue.len());

    let snap = sim.step();
    assert_eq!(RunwayCode::Landing, snap.runway);
    assert_eq!(0, snap.landing_queue);
    assert_eq!(2, sim.state.acc.crashed);
    assert_eq!(1, sim.state.acc.landed);
    assert_eq!(1, sim.state.acc.total_landing_wait);
}

#[test]
fn test_takeoff_starts_after_all_landings_crash() {
    let mut sim = scripted_sim(config(5, 3, 0, 6), &[1], &[0, 1]);

    assert_eq!(RunwayCode::Takeoff, sim.step().runway);
    sim.step();
    sim.step();

    let snap = sim.step();
    assert_eq!(RunwayCode::Takeoff, snap.runway);
    assert_eq!(0, snap.landing_queue);
    assert_eq!(0, snap.takeoff_queue);
    assert_eq!(1, sim.state.acc.crashed);
    assert_eq!(2, sim.state.acc.took_off);
    assert_eq!(2, sim.state.acc.total_takeoff_wait);

    let outcome = sim.run();
    assert_eq!(1.0, outcome.report.avg_takeoff_wait);
}

#[test]
fn test_final_sweep_leaves_fresh_planes_unresolved() {
    let outcome = scripted_sim(config(10, 1, 2, 5), &[0, 1, 2, 3, 4], &[]).run();

    assert_eq!(5, outcome.report.landing_arrivals);
    assert_eq!(1, outcome.report.landed);
    // arrivals at 1 and 2 have waited 4 and 3 minutes by minute 5
    assert_eq!(2, outcome.report.crashed);
    assert_eq!(2, outcome.report.unresolved);
}

#[test]
fn test_final_sweep_boundary() {
    // arrival at minute 3 waits exactly max_wait at the sweep
    let outcome = scripted_sim(config(10, 1, 2, 5), &[0, 3], &[]).run();

    assert_eq!(1, outcome.report.landed);
    assert_eq!(0, outcome.report.crashed);
    assert_eq!(1, outcome.report.unresolved);
}

use mimosa_energy::config::{SimulationConfig, BASELINE_ENERGY, ENERGY_PER_PLANT, SPIKE_ENERGY};
use mimosa_energy::{EnergySource, ScriptedSensor, UniformSensor};

#[test]
fn uniform_readings_stay_in_band() {
    let mut s = UniformSensor::seeded(BASELINE_ENERGY, SPIKE_ENERGY, 7);
    for _ in 0..10_000 {
        let v = s.sample();
        assert!((0.5..=1.5).contains(&v), "reading {v} out of band");
    }
}

#[test]
fn same_seed_gives_same_readings() {
    let mut a = UniformSensor::seeded(0.5, 1.5, 42);
    let mut b = UniformSensor::seeded(0.5, 1.5, 42);
    for _ in 0..100 {
        assert_eq!(a.sample(), b.sample());
    }
}

#[test]
fn inverted_band_degenerates_to_baseline() {
    let mut s = UniformSensor::seeded(1.0, 0.2, 1);
    assert_eq!(s.sample(), 1.0);
}

#[test]
fn scripted_sensor_replays_then_falls_back() {
    let mut s = ScriptedSensor::new([1.0, 1.2], 0.5);
    assert_eq!(s.sample(), 1.0);
    assert_eq!(s.sample(), 1.2);
    assert_eq!(s.sample(), 0.5);
    assert_eq!(s.sample(), 0.5);
}

#[test]
fn touch_energy_is_energy_per_plant_over_window() {
    let sim = SimulationConfig::default();
    assert_eq!(sim.touch_energy(), ENERGY_PER_PLANT / 600.0);
    assert_eq!(sim.touch_energy(), 2.0 / 600.0);
}

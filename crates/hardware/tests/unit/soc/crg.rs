//! # Clock and Reset Generator Tests
//!
//! Verifies the power-on counter, the reset window of the system domain, and
//! that the reset never reasserts without a power cycle.

use gateware_target::soc::Resource;
use gateware_target::soc::crg::{Crg, ResetCounter};
use proptest::prelude::*;

fn clk() -> Resource {
    Resource::new("clk_if", 0, 1)
}

#[test]
fn test_counter_starts_at_initial_value() {
    let counter = ResetCounter::new(2047);
    assert_eq!(counter.value(), 2047);
    assert_eq!(counter.initial(), 2047);
    assert!(counter.is_active());
}

#[test]
fn test_counter_decrements_once_per_tick() {
    let mut counter = ResetCounter::new(3);
    counter.tick();
    assert_eq!(counter.value(), 2);
    counter.tick();
    counter.tick();
    assert_eq!(counter.value(), 0);
    assert!(!counter.is_active());
}

#[test]
fn test_counter_saturates_at_zero() {
    let mut counter = ResetCounter::new(1);
    for _ in 0..10 {
        counter.tick();
    }
    assert_eq!(counter.value(), 0);
}

#[test]
fn test_counter_width() {
    assert_eq!(ResetCounter::new(1).width(), 1);
    assert_eq!(ResetCounter::new(2).width(), 2);
    assert_eq!(ResetCounter::new(2047).width(), 11);
    assert_eq!(ResetCounter::new(2048).width(), 12);
}

#[test]
fn test_crg_domains() {
    let crg = Crg::new(clk(), 2047);
    assert_eq!(crg.por().name, "por");
    assert!(crg.por().reset_less);
    assert_eq!(crg.sys().name, "sys");
    assert!(!crg.sys().reset_less);
    assert_eq!(crg.clk_if(), &clk());
}

#[test]
fn test_crg_reference_window_is_2047_cycles() {
    let mut crg = Crg::new(clk(), 2047);
    let held = (0..3000).filter(|_| crg.tick()).count();
    assert_eq!(held, 2047);
    assert!(!crg.sys_reset());
}

#[test]
fn test_crg_power_cycle_rearms_reset() {
    let mut crg = Crg::new(clk(), 4);
    for _ in 0..10 {
        let _ = crg.tick();
    }
    assert!(!crg.sys_reset());

    crg.power_cycle();
    assert!(crg.sys_reset());
    assert_eq!(crg.counter().value(), 4);
}

proptest! {
    #[test]
    fn prop_sys_reset_held_for_exactly_initial_ticks(initial in 1u32..4096, extra in 1usize..512) {
        let mut crg = Crg::new(clk(), initial);
        let total = initial as usize + extra;
        let trace: Vec<bool> = (0..total).map(|_| crg.tick()).collect();

        prop_assert!(trace[..initial as usize].iter().all(|held| *held));
        prop_assert!(trace[initial as usize..].iter().all(|held| !*held));
    }

    #[test]
    fn prop_counter_stays_in_range(initial in 0u32..1024, ticks in 0usize..2048) {
        let mut counter = ResetCounter::new(initial);
        for _ in 0..ticks {
            counter.tick();
            prop_assert!(counter.value() <= initial);
        }
    }
}

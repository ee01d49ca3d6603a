//! Tests for the scheduler module.

use jiff::{
    SignedDuration,
    civil::{date, time},
};

use super::*;
use crate::TripError;

fn activities(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn truncating() -> Scheduler {
    Scheduler::new(SchedulerConfig::default().with_rotation(RotationPolicy::Truncate))
}

fn day_activities(itinerary: &Itinerary, day: usize) -> Vec<&str> {
    itinerary.day_plans[day]
        .slots
        .iter()
        .map(|slot| slot.activity.as_str())
        .collect()
}

#[test]
fn test_default_config_matches_explicit_construction() {
    let explicit = SchedulerConfig::new(
        time(9, 0, 0, 0),
        time(17, 0, 0, 0),
        SignedDuration::from_hours(2),
        RotationPolicy::Cycle,
    )
    .expect("default layout should be valid");

    assert_eq!(SchedulerConfig::default(), explicit);
    assert_eq!(explicit.slots_per_day(), 4);
}

#[test]
fn test_day_count_and_consecutive_dates() {
    let itinerary = Scheduler::default()
        .generate(
            date(2023, 10, 1),
            date(2023, 10, 7),
            activities(&["A"]),
            None,
        )
        .unwrap();

    assert_eq!(itinerary.day_plans.len(), 7);
    for (offset, day) in itinerary.day_plans.iter().enumerate() {
        assert_eq!(day.date, date(2023, 10, 1 + offset as i8));
        assert!(day.slots.iter().all(|slot| slot.date == day.date));
    }
}

#[test]
fn test_single_day_trip_yields_one_day_plan() {
    let itinerary = Scheduler::default()
        .generate(
            date(2023, 10, 1),
            date(2023, 10, 1),
            activities(&["A", "B"]),
            Some("Oslo"),
        )
        .unwrap();

    assert_eq!(itinerary.day_plans.len(), 1);
    assert_eq!(itinerary.destination.as_deref(), Some("Oslo"));
}

#[test]
fn test_cycle_scenario_two_days_three_activities() {
    let itinerary = Scheduler::default()
        .generate(
            date(2023, 10, 1),
            date(2023, 10, 2),
            activities(&["A", "B", "C"]),
            None,
        )
        .unwrap();

    assert_eq!(day_activities(&itinerary, 0), ["A", "B", "C", "A"]);
    assert_eq!(day_activities(&itinerary, 1), ["B", "C", "A", "B"]);

    let times: Vec<_> = itinerary.day_plans[0]
        .slots
        .iter()
        .map(|slot| (slot.start_time, slot.end_time))
        .collect();
    assert_eq!(
        times,
        [
            (time(9, 0, 0, 0), time(11, 0, 0, 0)),
            (time(11, 0, 0, 0), time(13, 0, 0, 0)),
            (time(13, 0, 0, 0), time(15, 0, 0, 0)),
            (time(15, 0, 0, 0), time(17, 0, 0, 0)),
        ]
    );
}

#[test]
fn test_cycle_rotation_follows_trip_wide_modulo() {
    let names = activities(&["A", "B", "C", "D", "E"]);
    let itinerary = Scheduler::default()
        .generate(date(2023, 10, 1), date(2023, 10, 3), names.clone(), None)
        .unwrap();

    for (k, slot) in itinerary.slots().enumerate() {
        assert_eq!(slot.activity, names[k % names.len()]);
    }
    assert_eq!(itinerary.slot_count(), 12);
}

#[test]
fn test_single_activity_fills_every_slot() {
    let itinerary = Scheduler::default()
        .generate(
            date(2023, 10, 1),
            date(2023, 10, 3),
            activities(&["Walk"]),
            None,
        )
        .unwrap();

    assert_eq!(itinerary.slot_count(), 12);
    assert!(itinerary.slots().all(|slot| slot.activity == "Walk"));
}

#[test]
fn test_truncate_scenario_leaves_second_day_empty() {
    let itinerary = truncating()
        .generate(
            date(2023, 10, 1),
            date(2023, 10, 2),
            activities(&["A", "B", "C"]),
            None,
        )
        .unwrap();

    assert_eq!(itinerary.day_plans.len(), 2);
    assert_eq!(day_activities(&itinerary, 0), ["A", "B", "C"]);
    assert!(itinerary.day_plans[1].slots.is_empty());
}

#[test]
fn test_truncate_spills_into_following_days() {
    let itinerary = truncating()
        .generate(
            date(2023, 10, 1),
            date(2023, 10, 3),
            activities(&["A", "B", "C", "D", "E", "F"]),
            None,
        )
        .unwrap();

    assert_eq!(day_activities(&itinerary, 0), ["A", "B", "C", "D"]);
    assert_eq!(day_activities(&itinerary, 1), ["E", "F"]);
    assert!(day_activities(&itinerary, 2).is_empty());
}

#[test]
fn test_truncate_drops_activities_beyond_capacity() {
    let names: Vec<String> = (0..10).map(|i| format!("act-{i}")).collect();
    let itinerary = truncating()
        .generate(date(2023, 10, 1), date(2023, 10, 2), names, None)
        .unwrap();

    assert_eq!(itinerary.slot_count(), 8);
    assert_eq!(itinerary.slots().last().unwrap().activity, "act-7");
}

#[test]
fn test_uneven_window_emits_slot_ending_after_day_end() {
    let config = SchedulerConfig::new(
        time(9, 0, 0, 0),
        time(16, 0, 0, 0),
        SignedDuration::from_hours(3),
        RotationPolicy::Cycle,
    )
    .unwrap();
    let windows = config.slot_windows();

    assert_eq!(windows.len(), 3);
    assert_eq!(windows[2].start, time(15, 0, 0, 0));
    assert_eq!(windows[2].end, time(18, 0, 0, 0));
}

#[test]
fn test_generation_is_deterministic() {
    let scheduler = Scheduler::default();
    let run = || {
        scheduler
            .generate(
                date(2023, 10, 1),
                date(2023, 10, 4),
                activities(&["A", "B", "C"]),
                Some("Rome"),
            )
            .unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_empty_activities_rejected() {
    let err = Scheduler::default()
        .generate(date(2023, 10, 1), date(2023, 10, 2), vec![], None)
        .unwrap_err();

    assert!(matches!(
        err,
        TripError::InvalidInput { ref field, .. } if field == "activities"
    ));
}

#[test]
fn test_inverted_range_rejected() {
    let err = Scheduler::default()
        .generate(date(2023, 10, 2), date(2023, 10, 1), activities(&["A"]), None)
        .unwrap_err();

    assert!(err.is_invalid_input());
}

#[test]
fn test_config_validation() {
    let zero = SchedulerConfig::new(
        time(9, 0, 0, 0),
        time(17, 0, 0, 0),
        SignedDuration::ZERO,
        RotationPolicy::Cycle,
    );
    assert!(zero.is_err());

    let inverted = SchedulerConfig::new(
        time(17, 0, 0, 0),
        time(9, 0, 0, 0),
        SignedDuration::from_hours(1),
        RotationPolicy::Cycle,
    );
    assert!(inverted.is_err());

    let past_midnight = SchedulerConfig::new(
        time(20, 0, 0, 0),
        time(23, 0, 0, 0),
        SignedDuration::from_hours(4),
        RotationPolicy::Cycle,
    );
    assert!(past_midnight.is_err());
}

#[test]
fn test_rotation_policy_parsing() {
    assert_eq!("cycle".parse::<RotationPolicy>(), Ok(RotationPolicy::Cycle));
    assert_eq!("Truncate".parse::<RotationPolicy>(), Ok(RotationPolicy::Truncate));
    assert!("random".parse::<RotationPolicy>().is_err());
    assert_eq!(RotationPolicy::Truncate.to_string(), "truncate");
}

#[test]
fn test_trip_longer_than_limit_rejected() {
    let scheduler = Scheduler::new(SchedulerConfig::default().with_max_trip_days(3).unwrap());

    let three_days = scheduler
        .generate(date(2023, 10, 1), date(2023, 10, 3), activities(&["A"]), None)
        .unwrap();
    assert_eq!(three_days.day_plans.len(), 3);

    let err = scheduler
        .generate(date(2023, 10, 1), date(2023, 10, 4), activities(&["A"]), None)
        .unwrap_err();
    assert!(matches!(err, TripError::InvalidInput { ref field, .. } if field == "end_date"));
}

#[test]
fn test_default_limit_and_zero_limit() {
    assert_eq!(SchedulerConfig::default().max_trip_days(), DEFAULT_MAX_TRIP_DAYS);
    assert!(SchedulerConfig::default().with_max_trip_days(0).is_err());
}

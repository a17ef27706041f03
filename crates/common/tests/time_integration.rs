//! Integration tests for the `time` module.
//!
//! These tests exercise the public API the way the display layer uses it:
//! a clock reading feeds the calculators, instants round-trip through the
//! company zone, and a ticker drives repeated recomputation.

#![cfg(feature = "runtime")]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use shiftclock_common::testing::{Clock, MockClock};
use shiftclock_common::time::timer::Ticker;
use shiftclock_common::time::{
    elapsed_seconds, format_calendar_date, format_hms, format_instant, legacy_wall_clock_to_utc,
    local_wall_clock_to_utc, net_work_seconds, parse_instant, parse_wall_clock, to_local_display,
    total_break_seconds, CompanyTimezone, DateLocale, Span,
};

fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, hour, minute, second).unwrap()
}

fn zone(name: &str) -> CompanyTimezone {
    CompanyTimezone::parse(name).unwrap()
}

/// Clock-in 09:00, one 15 minute break, queried at 10:00 while active.
#[test]
fn test_reference_work_session() {
    let clock = MockClock::at(at(10, 0, 0));
    let breaks: [Span; 1] = [(at(9, 30, 0), Some(at(9, 45, 0)))];

    let worked = net_work_seconds(at(9, 0, 0), None, breaks, clock.now());
    assert_eq!(worked, 3_300);
    assert_eq!(format_hms(worked), "00:55:00");
}

#[test]
fn test_elapsed_is_whole_seconds_rounded_down() {
    let start = at(9, 0, 0);
    for millis in [0_i64, 1, 999, 1_000, 1_001, 59_999, 3_600_500] {
        let end = start + chrono::Duration::milliseconds(millis);
        assert_eq!(elapsed_seconds(start, Some(end), end), millis / 1_000, "{millis}ms");
    }
}

#[test]
fn test_break_total_ignores_order() {
    let now = at(12, 0, 0);
    let mut breaks = vec![
        (at(9, 0, 0), Some(at(9, 10, 0))),
        (at(10, 0, 0), Some(at(10, 5, 30))),
        (at(11, 50, 0), None),
    ];
    let forward = total_break_seconds(breaks.iter().copied(), now);
    breaks.reverse();
    assert_eq!(total_break_seconds(breaks.iter().copied(), now), forward);
    assert_eq!(forward, 600 + 330 + 600);
    assert_eq!(total_break_seconds(Vec::<Span>::new(), now), 0);
}

#[test]
fn test_net_work_clamps_when_breaks_exceed_session() {
    let breaks = [(at(8, 0, 0), Some(at(12, 0, 0))), (at(13, 0, 0), Some(at(14, 0, 0)))];
    assert_eq!(net_work_seconds(at(9, 0, 0), Some(at(10, 0, 0)), breaks, at(15, 0, 0)), 0);
}

#[test]
fn test_hours_never_wrap() {
    assert_eq!(format_hms(0), "00:00:00");
    assert_eq!(format_hms(3_661), "01:01:01");
    assert_eq!(format_hms(359_999), "99:59:59");
    assert_eq!(format_hms(360_000), "100:00:00");
}

/// Display then convert back recovers the instant in zones without a
/// transition in the window.
#[test]
fn test_display_round_trip() {
    let instants = [at(0, 0, 0), at(9, 30, 15), at(14, 59, 59), at(23, 59, 59)];
    for name in ["America/New_York", "Asia/Kolkata", "Australia/Sydney", "UTC", "Asia/Kathmandu"] {
        let tz = zone(name);
        for instant in instants {
            let shown = to_local_display(instant, &tz).to_string();
            let back = local_wall_clock_to_utc(&shown, &tz).unwrap();
            assert_eq!(back, instant, "{name}: {shown}");
        }
    }
}

#[test]
fn test_legacy_and_direct_conversions_agree_across_hosts() {
    let hosts = ["UTC", "Asia/Tokyo", "America/Los_Angeles", "Europe/Berlin"];
    let targets = ["America/New_York", "Europe/London", "Asia/Kolkata"];
    let readings = ["2025-01-15T09:30", "2025-06-20T18:45", "2025-11-30T00:15"];

    for host in hosts {
        let host_tz: chrono_tz::Tz = host.parse().unwrap();
        for target in targets {
            let tz = zone(target);
            for reading in readings {
                let naive = parse_wall_clock(reading).unwrap();
                assert_eq!(
                    legacy_wall_clock_to_utc(&naive, &tz, &host_tz),
                    local_wall_clock_to_utc(reading, &tz).unwrap(),
                    "host {host}, target {target}, reading {reading}"
                );
            }
        }
    }
}

#[test]
fn test_plain_session_date_never_shifts() {
    for name in ["Pacific/Kiritimati", "Pacific/Pago_Pago", "America/Los_Angeles", "Asia/Tokyo"] {
        let tz = zone(name);
        let label = format_calendar_date(Some("2025-01-15"), &tz, None, DateLocale::UnitedStates);
        assert_eq!(label, "Jan 15, 2025", "{name}");
    }
}

#[test]
fn test_fallback_date_applies_company_zone() {
    let label = format_calendar_date(
        None,
        &zone("America/Los_Angeles"),
        Some("2025-01-15T02:00:00Z"),
        DateLocale::UnitedStates,
    );
    assert_eq!(label, "Jan 14, 2025");

    let label = format_calendar_date(
        None,
        &zone("America/Los_Angeles"),
        Some("2025-01-15T23:30:00Z"),
        DateLocale::International,
    );
    assert_eq!(label, "15 Jan 2025");
}

#[test]
fn test_instants_round_trip_through_wire_form() {
    let instant = at(14, 30, 0);
    let wire = format_instant(instant);
    assert_eq!(wire, "2025-01-15T14:30:00Z");
    assert_eq!(parse_instant(&wire).unwrap(), instant);
    assert!(parse_instant("2025-01-15 14:30").is_err());
}

/// A ticker recomputing from a mock clock shows +1s, +2s, +3s.
#[tokio::test(start_paused = true)]
async fn test_ticker_drives_recomputation() {
    let start = at(9, 0, 0);
    let clock = MockClock::at(start);
    let shown = Arc::new(AtomicI64::new(-1));

    let mut ticker = Ticker::new(Duration::from_secs(1));
    let tick_clock = clock.clone();
    let tick_shown = Arc::clone(&shown);
    ticker
        .start(move || {
            tick_shown.store(elapsed_seconds(start, None, tick_clock.now()), Ordering::SeqCst);
        })
        .unwrap();

    for expected in 1..=3 {
        clock.advance(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(1_010)).await;
        assert_eq!(shown.load(Ordering::SeqCst), expected);
    }

    ticker.stop();
    clock.advance(Duration::from_secs(30));
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(shown.load(Ordering::SeqCst), 3);
}

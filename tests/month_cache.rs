use chrono::{DateTime, Datelike, TimeZone, Utc};
use timegrain::{MonthCalendar, MonthStartCache, TimegrainError, ZonedCalendar};

fn ms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
        .timestamp_millis()
}

#[test]
fn containment_holds_across_expansions_in_both_directions() {
    let cal = ZonedCalendar::utc();
    let mut cache = MonthStartCache::new(cal).unwrap();

    // Far past (backward expansion), mid-history, near-present, and far
    // future (forward expansion).
    let queries = [
        ms(1970, 1, 15, 12, 0, 0),
        ms(1990, 7, 4, 6, 30, 0),
        ms(2005, 2, 28, 23, 59, 59),
        ms(2024, 12, 31, 23, 59, 59),
        ms(2033, 6, 1, 0, 0, 0),
    ];

    for q in queries {
        let rec = cache.month_start(q).unwrap();
        assert!(rec.epoch_ms <= q, "month start must not be after the query");
        let next = cal.add_months(&rec, 1).unwrap();
        assert!(q < next.epoch_ms, "query must fall before the next month");

        let dt = DateTime::from_timestamp_millis(q).unwrap();
        assert_eq!((rec.year, rec.month), (dt.year(), dt.month()));
    }
}

#[test]
fn exact_month_boundary_belongs_to_that_month() {
    let mut cache = MonthStartCache::new(ZonedCalendar::utc()).unwrap();
    let q = ms(2024, 3, 1, 0, 0, 0);
    let rec = cache.month_start(q).unwrap();
    assert_eq!((rec.year, rec.month), (2024, 3));
    assert_eq!(rec.epoch_ms, q);
}

#[test]
fn cache_stays_sorted_and_month_contiguous() {
    let cal = ZonedCalendar::utc();
    let mut cache = MonthStartCache::new(cal).unwrap();
    cache.month_start(ms(1998, 11, 3, 0, 0, 0)).unwrap();
    cache.month_start(ms(2031, 4, 20, 0, 0, 0)).unwrap();

    let records: Vec<_> = cache.iter().copied().collect();
    for pair in records.windows(2) {
        assert!(pair[0].epoch_ms < pair[1].epoch_ms);
        let next = cal.add_months(&pair[0], 1).unwrap();
        assert_eq!(pair[1], next, "materialized months must not have gaps");
    }
}

#[test]
fn repeat_queries_reuse_prior_growth() {
    let mut cache = MonthStartCache::new(ZonedCalendar::utc()).unwrap();
    let q = ms(1985, 5, 17, 9, 0, 0);
    cache.month_start(q).unwrap();
    let len_after_first = cache.len();
    cache.month_start(q).unwrap();
    cache.month_start(q + 1_000).unwrap();
    assert_eq!(cache.len(), len_after_first);
}

#[test]
fn tehran_month_starts_at_zone_local_midnight() {
    let mut cache = MonthStartCache::new(ZonedCalendar::new(chrono_tz::Asia::Tehran)).unwrap();
    let q = ms(2024, 6, 15, 12, 0, 0);
    let rec = cache.month_start(q).unwrap();
    assert_eq!((rec.year, rec.month), (2024, 6));

    // Tehran is UTC+03:30; local midnight June 1 is 20:30 UTC on May 31.
    let expected = chrono_tz::Asia::Tehran
        .with_ymd_and_hms(2024, 6, 1, 0, 0, 0)
        .unwrap()
        .timestamp_millis();
    assert_eq!(rec.epoch_ms, expected);
}

#[test]
fn absurdly_distant_instant_hits_the_expansion_cap() {
    let mut cache = MonthStartCache::new(ZonedCalendar::utc()).unwrap();
    // Roughly the year 27000; far beyond what any chart feeds this core.
    let err = cache.month_start(800_000_000_000_000).unwrap_err();
    assert!(matches!(err, TimegrainError::ExpansionLimit { .. }));
}

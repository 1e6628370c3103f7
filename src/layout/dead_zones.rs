//! Dead-zone computation.
//!
//! A dead zone is an interval inside the horizon during which the launch
//! window is closed. Zones are rendered as "non-operating" bands behind
//! the job bars. They merge naturally across day boundaries: the evening
//! close and the following night form one contiguous zone ending at the
//! next morning's open.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::LaunchWindow;

/// A non-operating interval, positioned relative to the horizon origin.
///
/// Half-open: covers `[start_offset, start_offset + width)` in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadZone {
    /// Minutes from the horizon origin to the zone start.
    pub start_offset_minutes: i64,
    /// Zone width in minutes (always > 0).
    pub width_minutes: i64,
}

impl DeadZone {
    /// Minute offset of the zone end.
    #[inline]
    pub fn end_offset_minutes(&self) -> i64 {
        self.start_offset_minutes + self.width_minutes
    }
}

/// Walks `[origin, origin + horizon_minutes)` and emits every closed span.
///
/// The cursor alternates between the two window states: in a closed span it
/// jumps to `min(next_open, horizon_end)` and emits the zone; in an open
/// span it jumps to the same day's `daily_end`. Both branches strictly
/// advance the cursor, so the walk terminates in O(horizon / window span)
/// steps. An always-open window short-circuits to an empty list.
pub fn compute_dead_zones(
    origin: NaiveDateTime,
    horizon_minutes: i64,
    window: &LaunchWindow,
) -> Vec<DeadZone> {
    if window.is_always_open() || horizon_minutes <= 0 {
        return Vec::new();
    }

    let horizon_end = origin + Duration::minutes(horizon_minutes);
    let mut zones = Vec::new();
    let mut cursor = origin;

    while cursor < horizon_end {
        if window.contains(cursor) {
            cursor = window.close_on_day(cursor);
        } else {
            let zone_end = window.next_open(cursor).min(horizon_end);
            if zone_end > cursor {
                zones.push(DeadZone {
                    start_offset_minutes: (cursor - origin).num_minutes(),
                    width_minutes: (zone_end - cursor).num_minutes(),
                });
            }
            cursor = zone_end;
        }
    }

    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn window(start: &str, end: &str) -> LaunchWindow {
        LaunchWindow::parse(start, end).unwrap()
    }

    fn assert_sorted_disjoint(zones: &[DeadZone]) {
        for pair in zones.windows(2) {
            assert!(pair[0].end_offset_minutes() <= pair[1].start_offset_minutes);
        }
        for z in zones {
            assert!(z.width_minutes > 0);
        }
    }

    #[test]
    fn test_origin_inside_window() {
        // Origin 08:00, window 08:00-20:00, horizon 48h.
        let w = window("08:00", "20:00");
        let zones = compute_dead_zones(at(1, 8, 0), 48 * 60, &w);

        assert_sorted_disjoint(&zones);
        // First zone: day1 20:00 → day2 08:00, i.e. offsets [720, 1440).
        assert_eq!(
            zones[0],
            DeadZone {
                start_offset_minutes: 720,
                width_minutes: 720
            }
        );
        // Second: day2 20:00 → day3 08:00 (clipped exactly at horizon end).
        assert_eq!(
            zones[1],
            DeadZone {
                start_offset_minutes: 2160,
                width_minutes: 720
            }
        );
        assert_eq!(zones.len(), 2);
    }

    #[test]
    fn test_origin_inside_dead_zone() {
        // Origin 22:00: the walk starts mid-zone and emits from the origin.
        let w = window("08:00", "20:00");
        let zones = compute_dead_zones(at(1, 22, 0), 24 * 60, &w);

        assert_sorted_disjoint(&zones);
        assert_eq!(zones[0].start_offset_minutes, 0);
        // 22:00 → next day 08:00 = 10h.
        assert_eq!(zones[0].width_minutes, 600);
    }

    #[test]
    fn test_zone_clipped_at_horizon_end() {
        // Horizon ends at 23:00, mid-zone.
        let w = window("08:00", "20:00");
        let zones = compute_dead_zones(at(1, 8, 0), 15 * 60, &w);

        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].start_offset_minutes, 720);
        assert_eq!(zones[0].width_minutes, 180); // 20:00 → 23:00
    }

    #[test]
    fn test_union_partitions_horizon() {
        // Closed + open minutes must account for the horizon exactly.
        let w = window("09:30", "19:30");
        let origin = at(1, 6, 17);
        let horizon = 50 * 60 + 13;
        let zones = compute_dead_zones(origin, horizon, &w);

        assert_sorted_disjoint(&zones);
        let closed: i64 = zones.iter().map(|z| z.width_minutes).sum();
        let open: i64 = (0..horizon)
            .filter(|&m| w.contains(origin + Duration::minutes(m)))
            .count() as i64;
        assert_eq!(closed + open, horizon);

        // And every zone is genuinely closed at both edges.
        for z in zones {
            assert!(!w.contains(origin + Duration::minutes(z.start_offset_minutes)));
            assert!(!w.contains(origin + Duration::minutes(z.end_offset_minutes() - 1)));
        }
    }

    #[test]
    fn test_always_open_returns_empty() {
        let w = window("00:00", "00:00");
        assert!(compute_dead_zones(at(1, 8, 0), 48 * 60, &w).is_empty());
    }

    #[test]
    fn test_zero_horizon() {
        let w = window("08:00", "20:00");
        assert!(compute_dead_zones(at(1, 8, 0), 0, &w).is_empty());
    }
}

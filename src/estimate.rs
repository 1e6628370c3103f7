//! Print-time estimation from model volume.
//!
//! A coarse upstream heuristic: warmup overhead plus a per-material
//! minutes-per-cm³ rate. Feeds `estimated_minutes` on new jobs; the
//! layout engine itself only ever consumes the resulting minutes.

/// Warmup/setup overhead added to every print (minutes).
pub const BASE_MINUTES: f64 = 10.0;

/// Materials with a calibrated rate.
pub const SUPPORTED_MATERIALS: [&str; 4] = ["PLA", "PETG", "ABS", "TPU"];

/// Estimates print time in minutes from part volume.
///
/// Unknown materials fall back to the 1.0 min/cm³ rate. The result is
/// rounded up to whole minutes.
pub fn estimate_print_minutes(volume_cm3: f64, material: &str) -> i64 {
    let rate = match material.to_ascii_uppercase().as_str() {
        "PLA" => 0.8,
        "PETG" | "ABS" => 1.0,
        "TPU" => 1.5,
        _ => 1.0,
    };
    (BASE_MINUTES + volume_cm3.max(0.0) * rate).ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pla_rate() {
        // 10 base + 100 * 0.8 = 90
        assert_eq!(estimate_print_minutes(100.0, "PLA"), 90);
    }

    #[test]
    fn test_tpu_is_slow() {
        assert_eq!(estimate_print_minutes(100.0, "TPU"), 160);
    }

    #[test]
    fn test_unknown_material_default_rate() {
        assert_eq!(estimate_print_minutes(100.0, "NYLON"), 110);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            estimate_print_minutes(50.0, "pla"),
            estimate_print_minutes(50.0, "PLA")
        );
    }

    #[test]
    fn test_rounds_up() {
        // 10 + 1.3 * 0.8 = 11.04 → 12
        assert_eq!(estimate_print_minutes(1.3, "PLA"), 12);
    }

    #[test]
    fn test_zero_and_negative_volume() {
        assert_eq!(estimate_print_minutes(0.0, "PLA"), 10);
        assert_eq!(estimate_print_minutes(-5.0, "PLA"), 10);
    }
}

//! Formatting helpers for human-readable byte sizes.

/// Binary unit prefixes, in ascending order of magnitude.
const UNITS: [&str; 8] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];

/// Formats a byte count as a human-readable binary-unit string
/// (e.g. `1536` → `"1.5KiB"`).
///
/// Falls through to `YiB` for values that never drop below 1024 within
/// the unit table.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.1}{unit}B");
        }
        value /= 1024.0;
    }
    format!("{value:.1}YiB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_units() {
        assert_eq!(human_size(0), "0.0B");
        assert_eq!(human_size(500), "500.0B");
        assert_eq!(human_size(1024), "1.0KiB");
        assert_eq!(human_size(1536), "1.5KiB");
        assert_eq!(human_size(1_048_576), "1.0MiB");
        assert_eq!(human_size(1_073_741_824), "1.0GiB");
    }

    #[test]
    fn human_size_below_unit_boundary() {
        assert_eq!(human_size(1023), "1023.0B");
    }

    #[test]
    fn human_size_large_values() {
        assert_eq!(human_size(1u64 << 60), "1.0EiB");
        // u64::MAX is just under 16 EiB, so the table is never exhausted.
        assert_eq!(human_size(u64::MAX), "16.0EiB");
    }

    #[test]
    fn unit_index_matches_division_count() {
        for (divisions, expected) in [(0, "B"), (1, "KiB"), (2, "MiB"), (3, "GiB"), (4, "TiB")] {
            let bytes = 1024u64.pow(divisions);
            let rendered = human_size(bytes);
            assert!(
                rendered.ends_with(expected),
                "{bytes} rendered as {rendered}, expected suffix {expected}"
            );
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn human_size_never_panics(bytes in 0u64..u64::MAX) {
                let _ = human_size(bytes);
            }

            #[test]
            fn human_size_always_has_byte_suffix(bytes in 0u64..u64::MAX) {
                prop_assert!(human_size(bytes).ends_with('B'));
            }

            #[test]
            fn human_size_mantissa_never_exceeds_1024(bytes in 0u64..u64::MAX) {
                let rendered = human_size(bytes);
                let digits: String = rendered
                    .chars()
                    .take_while(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                let mantissa: f64 = digits.parse().unwrap();
                // Values just under a unit boundary may round up to 1024.0.
                prop_assert!(mantissa <= 1024.0);
            }
        }
    }
}

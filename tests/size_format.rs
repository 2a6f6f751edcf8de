use hostfacts::core::format::SIZE_UNITS;
use hostfacts::{format_size, try_format_size};
use proptest::prelude::*;

fn unit_of(formatted: &str) -> &str {
    formatted.rsplit(' ').next().unwrap_or_default()
}

proptest! {
    #[test]
    fn every_count_ends_in_a_known_unit(n in any::<u64>(), binary in any::<bool>(), strip in any::<bool>()) {
        let formatted = format_size(u128::from(n), binary, strip);
        prop_assert!(SIZE_UNITS.contains(&unit_of(&formatted)), "{}", formatted);
    }

    #[test]
    fn huge_counts_still_format(n in any::<u128>(), binary in any::<bool>()) {
        let formatted = format_size(n, binary, true);
        prop_assert!(SIZE_UNITS.contains(&unit_of(&formatted)), "{}", formatted);
    }

    #[test]
    fn unstripped_values_have_two_decimals(n in 1u64.., binary in any::<bool>()) {
        let formatted = format_size(u128::from(n), binary, false);
        let number = formatted.split(' ').next().unwrap();
        let decimals = number.split('.').nth(1).unwrap();
        prop_assert_eq!(decimals.len(), 2);
    }

    #[test]
    fn stripped_values_have_no_trailing_zero_decimals(n in 1u64.., binary in any::<bool>()) {
        let formatted = format_size(u128::from(n), binary, true);
        let number = formatted.split(' ').next().unwrap();
        if number.contains('.') {
            prop_assert!(!number.ends_with('0'));
        }
        prop_assert!(!number.ends_with('.'));
    }

    #[test]
    fn signed_entry_agrees_for_non_negative(n in 0i64..) {
        let signed = try_format_size(i128::from(n), true, true).unwrap();
        prop_assert_eq!(signed, format_size(n as u128, true, true));
    }

    #[test]
    fn signed_entry_rejects_negative(n in i64::MIN..0) {
        prop_assert!(try_format_size(i128::from(n), false, true).is_err());
    }
}

#[test]
fn documented_examples() {
    assert_eq!(format_size(0, false, true), "0 bytes");
    assert_eq!(format_size(1024, true, true), "1 kB");
    assert_eq!(format_size(1000, false, true), "1 kB");
    assert_eq!(format_size(1536, true, false), "1.50 kB");
    assert_eq!(format_size(1536, true, true), "1.5 kB");
    assert_eq!(format_size(8 * 1024u128.pow(3), true, true), "8 GB");
}

//! Property tests for the byte-to-binary conversion.

use proptest::prelude::*;

use drills::{ByteBits, OutOfRange};

proptest! {
    /// PROPERTY: every value in 0..=255 prints as two nibbles that read back as the value.
    #[test]
    fn property_bits_read_back_as_value(n in 0i32..=255) {
        let text = ByteBits::from_value(n).unwrap().to_string();

        prop_assert_eq!(text.len(), 9);
        prop_assert_eq!(&text[4..5], " ");

        let digits: String = text.chars().filter(|c| *c != ' ').collect();
        let parsed = i32::from_str_radix(&digits, 2).unwrap();
        prop_assert_eq!(parsed, n);
    }

    /// PROPERTY: everything outside 0..=255 is rejected with the value attached.
    #[test]
    fn property_out_of_range_rejected(
        n in prop_oneof![i32::MIN..0i32, 256i32..=i32::MAX]
    ) {
        prop_assert_eq!(ByteBits::from_value(n), Err(OutOfRange(n)));
    }
}

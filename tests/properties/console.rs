//! Property tests for the console reader.

use proptest::prelude::*;

use drills::{ConsoleReader, InputMode, InputSource};

proptest! {
    /// PROPERTY: integers written in decimal are read back unchanged.
    #[test]
    fn property_integers_round_trip(values in proptest::collection::vec(any::<i32>(), 1..8)) {
        let text = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" \n ");
        let mut reader = ConsoleReader::new(text.as_bytes(), InputMode::Strict);
        for v in &values {
            prop_assert_eq!(reader.read_i32().unwrap(), *v);
        }
    }

    /// PROPERTY: finite doubles written with `{}` are read back unchanged.
    #[test]
    fn property_doubles_round_trip(value in -1.0e12f64..1.0e12) {
        let text = format!("{}", value);
        let mut reader = ConsoleReader::new(text.as_bytes(), InputMode::Strict);
        prop_assert_eq!(reader.read_f64().unwrap(), value);
    }

    /// PROPERTY: the reader never panics, in either mode, on arbitrary input.
    #[test]
    fn property_reader_never_panics(input in "(?s).{0,64}", lenient in any::<bool>()) {
        let mode = if lenient { InputMode::Lenient } else { InputMode::Strict };
        let mut reader = ConsoleReader::new(input.as_bytes(), mode);
        let _ = reader.read_f64();
        let _ = reader.read_char();
        let _ = reader.read_i32();
    }
}

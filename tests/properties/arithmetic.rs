//! Property tests for calculator arithmetic.

use proptest::prelude::*;

use drills::{evaluate, CalculationError};

fn operand() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

proptest! {
    /// PROPERTY: +, - and * agree exactly with native arithmetic.
    #[test]
    fn property_matches_native_arithmetic(a in operand(), b in operand()) {
        prop_assert_eq!(evaluate(a, b, '+').unwrap().result, a + b);
        prop_assert_eq!(evaluate(a, b, '-').unwrap().result, a - b);
        prop_assert_eq!(evaluate(a, b, '*').unwrap().result, a * b);
    }

    /// PROPERTY: division succeeds exactly when the divisor is non-zero.
    #[test]
    fn property_division_requires_nonzero(a in operand(), b in operand()) {
        match evaluate(a, b, '/') {
            Ok(calc) => {
                prop_assert!(b != 0.0);
                prop_assert_eq!(calc.result, a / b);
            }
            Err(err) => {
                prop_assert_eq!(b, 0.0);
                prop_assert_eq!(err, CalculationError::DivisionByZero);
            }
        }
    }

    /// PROPERTY: any character other than + - * / is rejected.
    #[test]
    fn property_other_operators_rejected(
        a in operand(),
        b in operand(),
        symbol in any::<char>().prop_filter("not an operator", |c| !"+-*/".contains(*c)),
    ) {
        prop_assert_eq!(
            evaluate(a, b, symbol),
            Err(CalculationError::UnsupportedOperator(symbol))
        );
    }
}

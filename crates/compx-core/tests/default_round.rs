//! Changes the process-wide precision, so everything runs in one test.

use compx_core::{default_round, set_default_round, ComplexNumber, CompxError};

#[test]
fn test_default_round_controls_equality() {
    assert_eq!(default_round(), 13);

    let a = ComplexNumber::new(1.0, 2.0);
    let b = ComplexNumber::new(1.004, 2.009);
    assert!(a != b);

    set_default_round(2).unwrap();
    assert_eq!(default_round(), 2);
    assert_eq!(a, b);
    assert_eq!(ComplexNumber::new(3.001, 0), 3);

    set_default_round(0).unwrap();
    assert_eq!(ComplexNumber::new(3.9, -0.5), ComplexNumber::new(3, -1));

    let err = set_default_round(14).unwrap_err();
    assert_eq!(err, CompxError::ConversionRangeOutsideOfBounds(14));
    assert_eq!(default_round(), 0);

    set_default_round(13).unwrap();
    assert!(a != b);
}

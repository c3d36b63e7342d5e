use rstest::rstest;
use stepwise_forest::{normalize_key, parse_value, Error};

#[rstest]
#[case("cat", "cat")]
#[case("Cat", "cat")]
#[case("ZEBRA", "zebra")]
#[case("a", "a")]
fn test_normalize_key_valid(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_key(input), Ok(expected.to_string()));
}

#[rstest]
#[case("")]
#[case("c4t")]
#[case("two words")]
#[case(" cat")]
#[case("a-b")]
#[case("é")]
fn test_normalize_key_invalid(#[case] input: &str) {
    assert_eq!(normalize_key(input), Err(Error::InvalidKey(input.to_string())));
}

#[rstest]
#[case("42", 42)]
#[case(" 42 ", 42)]
#[case("-7", -7)]
#[case("+3", 3)]
#[case("0", 0)]
fn test_parse_value_valid(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(parse_value(input), Ok(expected));
}

#[rstest]
#[case("")]
#[case("4.2")]
#[case("abc")]
#[case("1 2")]
#[case("99999999999999999999")]
fn test_parse_value_invalid(#[case] input: &str) {
    assert_eq!(parse_value(input), Err(Error::InvalidValue(input.to_string())));
}

#[rstest]
fn test_error_display() {
    assert_eq!(Error::Busy.to_string(), "another operation is still in progress");
}

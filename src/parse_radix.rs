use num_traits::Num;

/// Parse a number that's hex when `0x` prefixed or when it contains hex
/// letters, decimal otherwise.
pub fn parse_guess_radix<T: Num>(input: &str) -> Result<T, <T as Num>::FromStrRadixErr> {
    if let Some(stripped) = input.strip_prefix("0x") {
        T::from_str_radix(stripped, 16)
    } else if input.contains(['a', 'b', 'c', 'd', 'e', 'f']) {
        T::from_str_radix(input, 16)
    } else {
        T::from_str_radix(input, 10)
    }
}

#[test]
fn test_parse_guess_radix() {
    assert_eq!(parse_guess_radix::<u32>("4491"), Ok(4491));
    assert_eq!(parse_guess_radix::<u32>("0x118b"), Ok(0x118b));
    assert_eq!(parse_guess_radix::<u32>("118b"), Ok(0x118b));
    assert!(parse_guess_radix::<u32>("4491 ").is_err());
}

//! Digit alphabet for bases up to 20.
//!
//! Digits run `0-9`, then letters with `I` and `O` skipped so they cannot be
//! mistaken for one and zero: `A B C D E F G H J K` stand for 10 through 19.

/// Largest supported base.
pub const MAX_BASE: u32 = 20;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

const LETTERS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K'];

/// Value of a digit character, case-insensitive.
///
/// Returns `None` for characters outside the alphabet, including `I` and `O`.
pub fn value_of(c: char) -> Option<u32> {
    let c = c.to_ascii_uppercase();
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    LETTERS.iter().position(|&l| l == c).map(|i| i as u32 + 10)
}

/// Character for a digit value, or `None` if `value >= MAX_BASE`.
pub fn char_of(value: u32) -> Option<char> {
    match value {
        0..=9 => char::from_digit(value, 10),
        10..=19 => Some(LETTERS[(value - 10) as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_i_and_o() {
        assert_eq!(value_of('H'), Some(17));
        assert_eq!(value_of('J'), Some(18));
        assert_eq!(value_of('K'), Some(19));
        assert_eq!(value_of('I'), None);
        assert_eq!(value_of('o'), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(value_of('a'), Some(10));
        assert_eq!(value_of('k'), Some(19));
    }

    #[test]
    fn test_roundtrip() {
        for value in 0..MAX_BASE {
            let c = char_of(value).unwrap();
            assert_eq!(value_of(c), Some(value));
        }
        assert_eq!(char_of(20), None);
    }
}

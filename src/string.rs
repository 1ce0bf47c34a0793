//! String exercises: conversions, palindromes, subsequences.

use crate::error::{Error, Result};

/// True if `s` reads the same forwards and backwards, by `char`.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Parse an optionally signed decimal integer.
///
/// Digits accumulate on the negative side so that `i32::MIN` parses without
/// overflow.
pub fn string_to_int(s: &str) -> Result<i32> {
    let invalid = || Error::InvalidNumber(s.to_string());
    let (negative, digits) = match s.as_bytes() {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        rest => (false, rest),
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    let mut value = 0i32;
    for &c in digits {
        if !c.is_ascii_digit() {
            return Err(invalid());
        }
        let d = i32::from(c - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(d))
            .ok_or_else(invalid)?;
    }
    if negative {
        Ok(value)
    } else {
        value.checked_neg().ok_or_else(invalid)
    }
}

/// Decimal representation of `k`.
pub fn int_to_string(k: i32) -> String {
    let mut magnitude = k.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        digits.push(char::from(b'0' + (magnitude % 10) as u8));
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if k < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Reverse the order of space-separated words, keeping runs of spaces.
pub fn reverse_words(s: &mut String) {
    let reversed: Vec<&str> = s.split(' ').rev().collect();
    *s = reversed.join(" ");
}

/// Number of palindromic substrings, counted by start and end position.
///
/// Expands around each of the `2n - 1` centers. $O(n^2)$.
pub fn count_palindromic_substrings(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut count = 0;
    for center in 0..2 * n {
        let mut left = center / 2;
        let mut right = left + center % 2;
        while right < n && chars[left] == chars[right] {
            count += 1;
            if left == 0 {
                break;
            }
            left -= 1;
            right += 1;
        }
    }
    count
}

/// True if `needle` is a (not necessarily contiguous) subsequence of `haystack`.
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

/// Length of the longest uncommon subsequence among `strs`.
///
/// Any uncommon subsequence can be extended to the whole string it came from,
/// so only the inputs themselves need checking. `None` if every string is a
/// subsequence of some other.
pub fn find_lus_length(strs: &[&str]) -> Option<usize> {
    strs.iter()
        .enumerate()
        .filter(|&(i, s)| {
            !strs
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && is_subsequence(s, other))
        })
        .map(|(_, s)| s.chars().count())
        .max()
}

/// The `n`-th term (1-based) of the look-and-say sequence. Empty for `n == 0`.
pub fn look_and_say(n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let mut term = String::from("1");
    for _ in 1..n {
        let bytes = term.as_bytes();
        let mut next = String::with_capacity(bytes.len() * 2);
        let mut i = 0;
        while i < bytes.len() {
            let run = bytes[i..].iter().take_while(|&&b| b == bytes[i]).count();
            next.push_str(&run.to_string());
            next.push(char::from(bytes[i]));
            i += run;
        }
        term = next;
    }
    term
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("racecar"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn test_string_int_conversions() {
        assert_eq!(string_to_int("123"), Ok(123));
        assert_eq!(string_to_int("-45"), Ok(-45));
        assert_eq!(string_to_int("+7"), Ok(7));
        assert_eq!(string_to_int("-2147483648"), Ok(i32::MIN));
        assert!(string_to_int("2147483648").is_err());
        assert!(string_to_int("").is_err());
        assert!(string_to_int("-").is_err());
        assert!(string_to_int("12a").is_err());

        assert_eq!(int_to_string(0), "0");
        assert_eq!(int_to_string(-308), "-308");
        assert_eq!(int_to_string(i32::MIN), "-2147483648");
    }

    #[test]
    fn test_reverse_words() {
        let mut s = String::from("Alice likes Bob");
        reverse_words(&mut s);
        assert_eq!(s, "Bob likes Alice");

        let mut s = String::from("a  b");
        reverse_words(&mut s);
        assert_eq!(s, "b  a");
    }

    #[test]
    fn test_count_palindromic_substrings() {
        let cases = [
            ("", 0),
            ("a", 1),
            ("ab", 2),
            ("aa", 3),
            ("abc", 3),
            ("aac", 4),
            ("aba", 4),
            ("abb", 4),
            ("aaa", 6),
            ("aaaa", 10),
        ];
        for (s, expected) in cases {
            assert_eq!(count_palindromic_substrings(s), expected, "{s:?}");
        }
    }

    #[test]
    fn test_find_lus_length() {
        assert_eq!(find_lus_length(&["aba", "cdc", "eae"]), Some(3));
        assert_eq!(find_lus_length(&["aaa", "aaa", "aa"]), None);
        assert_eq!(find_lus_length(&["abc", "ab"]), Some(3));
    }

    #[test]
    fn test_look_and_say() {
        assert_eq!(look_and_say(1), "1");
        assert_eq!(look_and_say(2), "11");
        assert_eq!(look_and_say(5), "111221");
        assert_eq!(look_and_say(8), "1113213211");
    }
}

//! Number formatting.

use crate::config::Lang;

/// Render a count with the digit grouping of the display language.
///
/// Spanish groups with `.` but leaves four-digit numbers alone (`1000`,
/// `65.534`); English groups every thousand with `,` (`1,000`).
pub fn group_digits(value: u64, lang: Lang) -> String {
    let (separator, min_digits) = match lang {
        Lang::Es => ('.', 5),
        Lang::En => (',', 4),
    };
    let digits = value.to_string();
    if digits.len() < min_digits {
        return digits;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits_es() {
        assert_eq!(group_digits(0, Lang::Es), "0");
        assert_eq!(group_digits(254, Lang::Es), "254");
        assert_eq!(group_digits(1022, Lang::Es), "1022");
        assert_eq!(group_digits(65534, Lang::Es), "65.534");
        assert_eq!(group_digits(16777214, Lang::Es), "16.777.214");
        assert_eq!(group_digits(4294967296, Lang::Es), "4.294.967.296");
    }

    #[test]
    fn test_group_digits_en() {
        assert_eq!(group_digits(254, Lang::En), "254");
        assert_eq!(group_digits(1022, Lang::En), "1,022");
        assert_eq!(group_digits(1048574, Lang::En), "1,048,574");
    }
}

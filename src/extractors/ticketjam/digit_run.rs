use std::sync::LazyLock;

use regex::Regex;

// Listings mix ASCII and full-width digits (`残り３枚`).
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9０-９]+").expect("valid digits pattern"));

/// First run of digits in `text`, rewritten with ASCII digits so it parses.
pub fn first_digit_run(text: &str) -> Option<String> {
    let run = DIGITS.find(text)?;

    Some(run.as_str().chars().map(to_ascii_digit).collect())
}

fn to_ascii_digit(c: char) -> char {
    match c {
        '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_width_digits_become_ascii() {
        assert_eq!(first_digit_run("残り３枚").as_deref(), Some("3"));
        assert_eq!(first_digit_run("１２８００円").as_deref(), Some("12800"));
        assert_eq!(first_digit_run("計2０枚").as_deref(), Some("20"));
    }

    #[test]
    fn text_without_digits_is_none() {
        assert_eq!(first_digit_run("枚数未定"), None);
    }
}

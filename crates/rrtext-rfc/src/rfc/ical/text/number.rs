//! Cardinal number spelling ("ten", "twenty-one", "one hundred five").

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words for successive groups of three digits, lowest group first.
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Spells out a value below one thousand. `n` must be non-zero.
fn push_hundreds(words: &mut Vec<String>, n: u64) {
    let hundreds = n / 100;
    let rest = n % 100;

    if hundreds > 0 {
        words.push(ONES[to_index(hundreds)].to_string());
        words.push("hundred".to_string());
    }

    match rest {
        0 => {}
        1..=19 => words.push(ONES[to_index(rest)].to_string()),
        _ => {
            let tens = TENS[to_index(rest / 10)];
            let ones = rest % 10;
            if ones == 0 {
                words.push(tens.to_string());
            } else {
                words.push(format!("{tens}-{}", ONES[to_index(ones)]));
            }
        }
    }
}

/// Values passed here are always below 1000.
#[expect(
    clippy::cast_possible_truncation,
    reason = "callers only pass remainders below 1000, which fit in usize on every target"
)]
const fn to_index(n: u64) -> usize {
    n as usize
}

/// ## Summary
/// Converts a non-negative integer to its English cardinal spelling, with
/// hyphenated compounds and no surrounding whitespace.
///
/// ```
/// use rrtext_rfc::rfc::ical::text::number_to_words;
///
/// assert_eq!(number_to_words(10), "ten");
/// assert_eq!(number_to_words(21), "twenty-one");
/// ```
#[must_use]
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        groups.push(remaining % 1000);
        remaining /= 1000;
    }

    let mut words = Vec::new();
    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        push_hundreds(&mut words, *group);
        if !SCALES[scale].is_empty() {
            words.push(SCALES[scale].to_string());
        }
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(number_to_words(0), "zero");
        assert_eq!(number_to_words(1), "one");
        assert_eq!(number_to_words(10), "ten");
        assert_eq!(number_to_words(13), "thirteen");
        assert_eq!(number_to_words(19), "nineteen");
    }

    #[test]
    fn tens_are_hyphenated() {
        assert_eq!(number_to_words(20), "twenty");
        assert_eq!(number_to_words(21), "twenty-one");
        assert_eq!(number_to_words(45), "forty-five");
        assert_eq!(number_to_words(99), "ninety-nine");
    }

    #[test]
    fn hundreds_and_scales() {
        assert_eq!(number_to_words(100), "one hundred");
        assert_eq!(number_to_words(105), "one hundred five");
        assert_eq!(number_to_words(342), "three hundred forty-two");
        assert_eq!(number_to_words(1000), "one thousand");
        assert_eq!(number_to_words(1_001), "one thousand one");
        assert_eq!(number_to_words(2_000_030), "two million thirty");
        assert_eq!(
            number_to_words(12_345),
            "twelve thousand three hundred forty-five"
        );
    }

    #[test]
    fn largest_value_has_no_stray_whitespace() {
        let words = number_to_words(u64::MAX);
        assert!(words.starts_with("eighteen quintillion"));
        assert_eq!(words, words.trim());
        assert!(!words.contains("  "));
    }
}

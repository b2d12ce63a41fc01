//! Roman numeral codec.
//!
//! Operands are limited to I..=X, while results may reach 100 (X*X), so the
//! table also carries the subtractive and additive helpers needed to encode
//! every tens group up to C.

pub const MIN_OPERAND: u32 = 1;
pub const MAX_OPERAND: u32 = 10;

/// Canonical uppercase numerals, sorted by value.
pub const ROMAN_TABLE: &[(u32, &str)] = &[
    (1, "I"),
    (2, "II"),
    (3, "III"),
    (4, "IV"),
    (5, "V"),
    (6, "VI"),
    (7, "VII"),
    (8, "VIII"),
    (9, "IX"),
    (10, "X"),
    (40, "XL"),
    (50, "L"),
    (90, "XC"),
    (100, "C"),
];

fn operand_entries() -> impl Iterator<Item = &'static (u32, &'static str)> {
    ROMAN_TABLE
        .iter()
        .filter(|(value, _)| (MIN_OPERAND..=MAX_OPERAND).contains(value))
}

/// Decode an operand from I to X, ignoring case.
pub fn from_roman(numeral: &str) -> Option<u32> {
    operand_entries()
        .find(|(_, roman)| roman.eq_ignore_ascii_case(numeral))
        .map(|(value, _)| *value)
}

pub fn is_roman(numeral: &str) -> bool {
    from_roman(numeral).is_some()
}

/// Encode a positive integer, one decimal digit group at a time.
///
/// Groups are encoded greedily against [`ROMAN_TABLE`]. Hundreds above C
/// have no helper keys and come out as repeated `C` (400 is `CCCC`).
pub fn to_roman(value: u32) -> String {
    let mut groups = Vec::new();
    let mut remaining = u64::from(value);
    let mut divisor = 10u64;

    while remaining > 0 {
        let group = remaining % divisor;
        groups.push(group);
        remaining -= group;
        divisor *= 10;
    }

    groups
        .iter()
        .rev()
        .map(|&group| encode_group(group))
        .collect()
}

fn encode_group(mut group: u64) -> String {
    let mut encoded = String::new();

    while group > 0 {
        let Some(&(key, roman)) = ROMAN_TABLE
            .iter()
            .rev()
            .find(|(key, _)| u64::from(*key) <= group)
        else {
            break;
        };
        encoded.push_str(roman);
        group -= u64::from(key);
    }

    encoded
}

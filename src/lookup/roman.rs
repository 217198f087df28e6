/// Symbols in descending value order, subtractive pairs included.
const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a canonical form
const MAX_ROMAN: u32 = 3999;

/// Canonical upper-case numeral for `value`, `None` outside `1..=3999`.
pub fn to_roman(value: u32) -> Option<String> {
    if value == 0 || value > MAX_ROMAN {
        return None;
    }
    let mut remaining = value;
    let mut numeral = String::new();
    for (amount, symbol) in NUMERALS {
        while remaining >= amount {
            numeral.push_str(symbol);
            remaining -= amount;
        }
    }
    Some(numeral)
}

/// Value of a numeral in canonical form, case-insensitive.
///
/// Non-canonical spellings such as `IIII` or `IXX` are rejected, so every
/// accepted numeral re-encodes to itself.
pub fn from_roman(numeral: &str) -> Option<u32> {
    let upper = numeral.to_ascii_uppercase();
    let mut rest = upper.as_str();
    let mut total = 0;
    for (amount, symbol) in NUMERALS {
        while let Some(tail) = rest.strip_prefix(symbol) {
            total += amount;
            rest = tail;
        }
    }
    if !rest.is_empty() {
        return None;
    }
    to_roman(total).filter(|canonical| *canonical == upper).map(|_| total)
}

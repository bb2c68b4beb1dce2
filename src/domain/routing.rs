//! ABA routing number checksum.
//!
//! A routing number is valid when its nine digits satisfy
//! `(3(d1 + d4 + d7) + 7(d2 + d5 + d8) + (d3 + d6 + d9)) mod 10 = 0`.

const WEIGHTS: [u32; 3] = [3, 7, 1];

/// Extracts the digits of `routing`, ignoring every other character.
///
/// Returns `None` unless exactly nine digits are present.
pub fn digits(routing: &str) -> Option<[u8; 9]> {
    let mut out = [0u8; 9];
    let mut count = 0;
    for d in routing.chars().filter_map(|c| c.to_digit(10)) {
        if count == out.len() {
            return None;
        }
        out[count] = d as u8;
        count += 1;
    }
    (count == out.len()).then_some(out)
}

/// Weighted digit sum modulo 10.
pub fn checksum(digits: &[u8; 9]) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, d)| WEIGHTS[i % 3] * u32::from(*d))
        .sum::<u32>()
        % 10
}

pub fn is_valid(routing: &str) -> bool {
    digits(routing).is_some_and(|d| checksum(&d) == 0)
}

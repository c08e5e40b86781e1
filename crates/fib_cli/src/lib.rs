pub const SERIES_HEADER: &str = "Fibonacci Series:";
pub const SERIES_TERM_COUNT: usize = 10;

/// First `count` Fibonacci numbers, starting from 0.
///
/// Values fit in `u64` for the first 93 terms.
pub fn fibonacci_series(count: usize) -> Vec<u64> {
    let mut series = Vec::with_capacity(count);
    let mut current = 0u64;
    let mut next = 1u64;
    for _ in 0..count {
        series.push(current);
        let sum = current + next;
        current = next;
        next = sum;
    }
    series
}

pub fn format_series(terms: &[u64]) -> String {
    terms
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

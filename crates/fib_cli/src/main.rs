use fib_cli::{fibonacci_series, format_series, SERIES_HEADER, SERIES_TERM_COUNT};

fn main() {
    println!("{SERIES_HEADER}");
    println!("{}", format_series(&fibonacci_series(SERIES_TERM_COUNT)));
}

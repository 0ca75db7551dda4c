//! The two drills the binaries run.

pub mod integer_sum;
pub mod quarter_loop;

pub use integer_sum::{parse_integer, sum_file, sum_lines, write_total, SumReport};
pub use quarter_loop::{format_quotient, run_quarter_loop, LoopOutcome, LoopVariant};

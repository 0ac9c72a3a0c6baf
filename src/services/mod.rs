pub mod result_writer;

pub use result_writer::{print_summary, summary_lines, ResultWriter};

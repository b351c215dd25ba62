mod datetime;
mod filesystem;
mod string;

pub use datetime::get_utc_iso_datetime;
pub use filesystem::{append_error_log, write_error_to_log};
pub use string::{cell_to_string, contains_ignore_case, is_blank_cell, normalize_code};

//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts and estimates for terminal
//! display.

pub mod contact;
pub mod estimate;

pub use contact::{
    format_choice_list, format_contact_line, format_contact_summary, format_contact_table,
    format_search_results,
};
pub use estimate::format_estimate;

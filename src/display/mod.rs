//! Terminal display and formatting utilities.
//!
//! Handles JSON rendering of decoded segments and the one-line reports
//! printed when a search ends.

pub mod json_printer;
pub mod report;

//! Common regex patterns for shipping-label name cleaning.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Address fragments follow the name after the first comma or hyphen
    pub static ref NAME_DELIMITER: Regex = Regex::new(r"[,-]").unwrap();

    // House numbers, pincodes, flat numbers
    pub static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();

    pub static ref ALL_DIGITS: Regex = Regex::new(r"^\d+$").unwrap();
}

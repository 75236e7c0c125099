pub mod date_parser;
pub mod float_rounder;

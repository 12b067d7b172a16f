//! Command handlers

pub mod clear;
pub mod generate;
pub mod inspect;

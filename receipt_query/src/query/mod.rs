//! Question routing.
//!
//! Questions are matched against an ordered table of keyword rules and the
//! first match produces the answer.

pub mod answerer;
pub mod month;
pub mod rules;

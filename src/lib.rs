#![cfg_attr(not(test), no_std)]

pub mod counter;
pub mod dispatch;
pub mod display;
pub mod font;

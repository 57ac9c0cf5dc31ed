//! Board-agnostic core of the joystick marker firmware.
//!
//! - Duty-cycle mapping with a centered dead zone (`duty_cycle`)
//! - Drive/digital pin switching for the indicator LEDs (`drive`)
//! - Bucketed marker rendering on the OLED grid (`marker`)
//! - Debounced mode buttons (`input_monitor`)
//! - One iteration of the foreground loop (`control_loop`)
//!
//! Hardware is reached only through the traits in `peripheral`, so all of
//! this runs under `cargo test` on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod control_loop;
pub mod drive;
pub mod duty_cycle;
pub mod input_monitor;
pub mod marker;
pub mod peripheral;

#[cfg(test)]
mod testing;

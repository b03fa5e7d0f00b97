//! Freestanding VGA text-mode kernel that paints a greeting banner.

#![cfg_attr(not(test), no_std)]

#[macro_use]
pub mod common;
#[macro_use]
pub mod bindriver;
pub mod version;

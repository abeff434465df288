//! Shared, target-independent logic for the Ecosite client: localization
//! and the subscription form.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

pub mod forms;
pub mod i18n;

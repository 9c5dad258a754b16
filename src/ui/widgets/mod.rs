// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets.

pub mod loading_spinner;

pub use loading_spinner::LoadingSpinner;

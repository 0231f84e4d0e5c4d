// SPDX-License-Identifier: MPL-2.0
//! Reusable interaction state management.

pub mod drag;

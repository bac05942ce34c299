// SPDX-License-Identifier: BSD-3-Clause

//! Data model: the project catalogue and per-flow session state.

pub mod gallery;
pub mod project;
pub mod sketch;

// SPDX-License-Identifier: BSD-3-Clause

//! UI components: the root grid and the three modal flow overlays.

pub mod canvas;
pub mod detail;
pub mod gallery;
pub mod grid;

// SPDX-License-Identifier: BSD-3-Clause

//! Shared utility functions.

pub mod geometry;

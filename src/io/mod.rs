// SPDX-License-Identifier: BSD-3-Clause

//! Startup I/O: decoding the bundled thumbnail assets.

pub mod assets;

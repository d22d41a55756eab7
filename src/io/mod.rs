// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: image decoding and printing the selection.

pub mod media;
pub mod output;

// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View helpers for the crop widget.

pub mod crop;

// SPDX-License-Identifier: MIT
//
// gridmark-text — Text metrics engine for gridmark.
//
// The lowest layer of the table kernel: given a string, how many terminal
// columns does it occupy, and how do we pad it to a target width? Every
// question about East Asian Width, ambiguous-width policy, combining-mark
// normalization, and delimiter-cell rendering is answered here, so the
// model and formatter layers above never touch a Unicode table.
//
// Width is computed per Unicode scalar from the EAW classification, with
// explicit per-scalar overrides for fonts that disagree. Nothing in this
// crate knows what a table is.

pub mod alignment;
pub mod width;

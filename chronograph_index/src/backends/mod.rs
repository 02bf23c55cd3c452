// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in hit-test backends.

mod flatvec;

pub use flatvec::FlatVec;

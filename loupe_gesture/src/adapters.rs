// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-family translation of raw input into canonical gestures.

mod mouse;
mod pointer;
mod touch;

pub use mouse::MouseAdapter;
pub use pointer::PointerAdapter;
pub use touch::TouchAdapter;

use crate::{GestureSession, Gestures};

/// Translates one input family into gestures.
///
/// Implementations write into the shared [`GestureSession`], so at most one
/// family should drive pans and pinches at a time.
pub trait InputAdapter {
    /// Raw event type of the family.
    type Input;

    /// Translates `input`, appending gestures to `out`.
    ///
    /// `scale` is the view scale a pinch starting now would begin from.
    fn translate(
        &mut self,
        session: &mut GestureSession,
        input: &Self::Input,
        scale: f64,
        out: &mut Gestures,
    );
}

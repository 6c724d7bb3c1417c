// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the infinity-render crate.

use infinity_geometry::GeometryError;
use infinity_view::ViewLevel;

/// Error type for rendering.
///
/// Nothing is drawn when rendering fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// The segment does not belong to the requested view.
    #[error("cannot draw a {segment} segment on the {view} ring")]
    InvalidState {
        /// The view asked for.
        view: ViewLevel,
        /// The level of the segment supplied.
        segment: ViewLevel,
    },
    /// The surface cannot hold a ring.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

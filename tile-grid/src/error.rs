//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Errors raised while projecting or partitioning
#[derive(Error, PartialEq, Clone, Debug)]
pub enum GridError {
    #[error("Unsupported projection '{0}' (expected LAEA or RD)")]
    UnsupportedProjection(String),
    #[error("Invalid projection parameters: {0}")]
    InvalidProjectionParameters(String),
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),
}

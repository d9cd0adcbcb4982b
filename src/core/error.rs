//=========================================================================
// Event Layer Errors
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::TryReserveError;
use std::fmt;

//=== UnsupportedRecord ===================================================

/// Raw record whose discriminant the decoder does not model.
///
/// Never surfaced by the queue API: collectors and cursors skip such
/// records, blocking waits retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedRecord {
    pub kind: u32,
}

impl fmt::Display for UnsupportedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported event record kind 0x{:04X}", self.kind)
    }
}

impl std::error::Error for UnsupportedRecord {}

//=== CollectError ========================================================

/// Failure while building an [`EventRange`](crate::core::queue::EventRange).
#[derive(Debug)]
pub enum CollectError {
    /// Growing the range failed. Records already dequeued are lost.
    Allocation(TryReserveError),
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(e) => write!(f, "Event range allocation failed: {}", e),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for CollectError {
    fn from(e: TryReserveError) -> Self {
        Self::Allocation(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

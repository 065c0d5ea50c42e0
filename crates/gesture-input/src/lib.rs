//! Pointer capability detection: normalizes the host's input-event vocabulary
//! and tracks the input modality currently in use.

pub mod detector;
pub mod interface;

pub use detector::{ModalityListener, PointerDetector};
pub use interface::{CanonicalNames, EventInterface};

#[cfg(test)]
mod tests;

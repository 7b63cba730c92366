//! Pedigree resolution and layout.
//!
//! DESIGN
//! ======
//! Two stages consumed in sequence. [`resolve`] walks sire/dam links
//! breadth-first from a root horse through a [`HorseSource`], bounded by a
//! generation limit, and returns a flat ancestry map. [`build_graph`] turns
//! that map into positioned diagram nodes and child → parent edges ready for
//! a flow-diagram widget.
//!
//! Both stages are stateless: every call derives a fresh result from its
//! arguments, and nothing here writes back to the store.

pub mod layout;
pub mod resolve;
pub mod types;

pub use layout::{LayoutConfig, build_graph};
pub use resolve::{HorseSource, resolve};
pub use types::{Gender, HorseRecord, PedigreeGraph};

#[cfg(test)]
pub mod test_helpers;

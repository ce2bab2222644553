//! Relative-position queries over ordered slices.
//!
//! Every function here is a pure scan of the slice it is handed. Callers that
//! observe a changing sequence re-invoke them with the new snapshot.

mod identity;
mod lookup;
mod offset;

pub use identity::Identity;
pub use lookup::{
    element_at_offset, has_element_at_offset, has_next_item, index_at_offset, index_of,
    previous_item,
};
pub use offset::Offset;

//! customview_select - exclusive selection for radio groups
//!
//! This crate keeps "at most one checked" over a changing set of items. The
//! [`SelectionCoordinator`] is the state machine; [`RadioGroup`] is a ready
//! container that owns children, finds items through a [`ChildLayout`] and
//! fans notifications out to [`Listeners`].

mod checked_text;
mod coordinator;
mod group;
mod handle;
mod layout;
mod listener;
mod selectable;

#[cfg(test)]
mod tests;

pub use checked_text::{
    Bounds, CheckMark, CheckMarkPosition, CheckedText, Padding, VerticalAlign,
};
pub use coordinator::{SelectionCoordinator, SelectionHost};
pub use group::{CheckedChange, HierarchyEvent, RadioGroup, RelativeRadioGroup, TableRadioGroup};
pub use handle::{Handle, HandleAllocator};
pub use layout::{ChildLayout, Node, Relative, Table, TableChild};
pub use listener::Listeners;
pub use selectable::{RadioButton, Selectable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CheckMarkPosition, CheckedChange, CheckedText, Handle, HierarchyEvent, Node, RadioButton,
        RelativeRadioGroup, Selectable, TableChild, TableRadioGroup,
    };
}

//! How a group finds its items among its children.
//!
//! - [`Relative`]: items are direct children of the group.
//! - [`Table`]: children are rows; items are the cells of those rows. Only
//!   one level of nesting is scanned.

/// A direct child of a group: either a selectable item or some other view
/// (a label, a divider) that the group carries along but never selects.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    Item(T),
    Other(String),
}

impl<T> Node<T> {
    /// The item, if this node is one.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Node::Item(item) => Some(item),
            Node::Other(_) => None,
        }
    }

    fn as_item_mut(&mut self) -> Option<&mut T> {
        match self {
            Node::Item(item) => Some(item),
            Node::Other(_) => None,
        }
    }
}

/// A direct child of a table group.
#[derive(Debug, Clone, PartialEq)]
pub enum TableChild<T> {
    /// A row of cells; item cells take part in selection.
    Row(Vec<Node<T>>),
    /// Anything else placed straight into the table.
    Other(String),
}

impl<T> TableChild<T> {
    /// Convenience constructor for a row made only of items.
    pub fn row_of(items: impl IntoIterator<Item = T>) -> Self {
        TableChild::Row(items.into_iter().map(Node::Item).collect())
    }
}

/// Strategy for enumerating the items held by a child.
pub trait ChildLayout<T> {
    /// The child type a group with this layout accepts.
    type Child;

    /// Name used in log output and change notifications.
    const NAME: &'static str;

    /// Items held by `child`, in order.
    fn items(child: &Self::Child) -> Vec<&T>;

    /// Mutable access to the items held by `child`, in order.
    fn items_mut(child: &mut Self::Child) -> Vec<&mut T>;
}

/// Items are the group's direct children.
#[derive(Debug, Clone, Copy, Default)]
pub struct Relative;

impl<T> ChildLayout<T> for Relative {
    type Child = Node<T>;

    const NAME: &'static str = "RelativeRadioGroup";

    fn items(child: &Node<T>) -> Vec<&T> {
        child.as_item().into_iter().collect()
    }

    fn items_mut(child: &mut Node<T>) -> Vec<&mut T> {
        child.as_item_mut().into_iter().collect()
    }
}

/// Items are the cells of the group's rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Table;

impl<T> ChildLayout<T> for Table {
    type Child = TableChild<T>;

    const NAME: &'static str = "TableRadioGroup";

    fn items(child: &TableChild<T>) -> Vec<&T> {
        match child {
            TableChild::Row(cells) => cells.iter().filter_map(Node::as_item).collect(),
            TableChild::Other(_) => Vec::new(),
        }
    }

    fn items_mut(child: &mut TableChild<T>) -> Vec<&mut T> {
        match child {
            TableChild::Row(cells) => cells.iter_mut().filter_map(Node::as_item_mut).collect(),
            TableChild::Other(_) => Vec::new(),
        }
    }
}

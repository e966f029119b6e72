//! Opaque item identifiers.

use std::fmt;

/// Identifier for a selectable item inside a group.
///
/// Handles are assigned by the host and compared for equality only; the
/// coordinator never looks behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub u32);

impl Handle {
    /// First value handed out by [`HandleAllocator`].
    pub const AUTO_BASE: u32 = 0x1000_0000;

    /// Get the raw id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Handle {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out handles for items that join a group without one.
#[derive(Debug, Clone)]
pub struct HandleAllocator {
    next: u32,
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self {
            next: Handle::AUTO_BASE,
        }
    }
}

impl HandleAllocator {
    /// Create an allocator starting at [`Handle::AUTO_BASE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next handle for which `in_use` returns false.
    pub fn allocate(&mut self, in_use: impl Fn(Handle) -> bool) -> Handle {
        loop {
            let candidate = Handle(self.next);
            self.next = self.next.wrapping_add(1).max(Handle::AUTO_BASE);
            if !in_use(candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_sequential() {
        let mut alloc = HandleAllocator::new();
        let a = alloc.allocate(|_| false);
        let b = alloc.allocate(|_| false);
        assert_eq!(a, Handle(Handle::AUTO_BASE));
        assert_eq!(b, Handle(Handle::AUTO_BASE + 1));
    }

    #[test]
    fn test_allocate_skips_taken() {
        let mut alloc = HandleAllocator::new();
        let taken = Handle(Handle::AUTO_BASE);
        let h = alloc.allocate(|h| h == taken);
        assert_eq!(h, Handle(Handle::AUTO_BASE + 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Handle(42).to_string(), "#42");
    }
}

//! Input and output ordering

use std::fmt;

/// How the caller's lines are sorted.
///
/// The partitioner always works oldest first. Whatever order the caller
/// uses for input is restored on output, so the same option governs both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Oldest line first
    #[default]
    Ascending,
    /// Newest line first
    Descending,
}

impl Order {
    /// Rearrange caller-ordered `items` into oldest-first order.
    pub fn to_oldest_first<T>(self, items: &mut [T]) {
        if self == Order::Descending {
            items.reverse();
        }
    }

    /// Rearrange oldest-first `items` back into the caller's order.
    pub fn restore<T>(self, items: &mut [T]) {
        // Reversal is its own inverse.
        self.to_oldest_first(items);
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Ascending => f.write_str("ascending"),
            Order::Descending => f.write_str("descending"),
        }
    }
}

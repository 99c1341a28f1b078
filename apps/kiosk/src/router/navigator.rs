//! Navigation history (back/forward stack).

use tracing::debug;

/// Visited locations with a cursor.
///
/// ```text
/// push("/menu"), push("/cart"), back()
///
///   ["/", "/menu", "/cart"]
///            ▲
///          index
///
/// push() after back() drops everything ahead of the cursor.
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    entries: Vec<String>,
    index: usize,
}

impl Navigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Navigator {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn push(&mut self, location: impl Into<String>) {
        let location = location.into();
        debug!(location = %location, "navigator push");
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    /// Swaps the current entry without growing the stack.
    pub fn replace(&mut self, location: impl Into<String>) {
        self.entries[self.index] = location.into();
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Number of entries. Never 0: the stack starts with its initial entry
    /// and nothing removes the entry under the cursor.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_forward() {
        let mut nav = Navigator::default();
        nav.push("/menu");
        nav.push("/cart");

        assert_eq!(nav.back(), Some("/menu"));
        assert_eq!(nav.back(), Some("/"));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.forward(), Some("/menu"));
        assert_eq!(nav.current(), "/menu");
    }

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let mut nav = Navigator::default();
        nav.push("/menu");
        nav.push("/cart");
        nav.back();

        nav.push("/order-complete");
        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.forward(), None);
        assert_eq!(nav.back(), Some("/menu"));
    }

    #[test]
    fn test_new_navigator_has_one_entry() {
        let mut nav = Navigator::new("/kiosk/");
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.back(), None);
        assert_eq!(nav.forward(), None);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), "/kiosk/");
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut nav = Navigator::default();
        nav.push("/cart");
        nav.replace("/order-complete");

        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current(), "/order-complete");
        assert_eq!(nav.back(), Some("/"));
    }
}

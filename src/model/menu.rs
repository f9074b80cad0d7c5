//! The post-connect Upload/Download selector.

/// An entry in the [`ActionMenu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Upload,
    Download,
}

impl MenuItem {
    /// All items in display order.
    pub fn all() -> &'static [MenuItem] {
        &[Self::Upload, Self::Download]
    }

    /// Label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Download => "Download",
        }
    }
}

/// Two-item horizontal menu; nothing is highlighted until first moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionMenu {
    highlighted: Option<MenuItem>,
}

impl ActionMenu {
    /// Returns the highlighted item, if any.
    pub fn highlighted(&self) -> Option<MenuItem> {
        self.highlighted
    }

    /// Highlights `item`.
    pub fn highlight(&mut self, item: MenuItem) {
        self.highlighted = Some(item);
    }

    /// Clears the highlight.
    pub fn reset(&mut self) {
        self.highlighted = None;
    }
}

//! Two-state toggles: the mobile nav menu, bibtex blocks and the
//! prospective-students panel.

/// Inline display of an expanded bibtex block.
pub const BLOCK_SHOWN: &str = "block";

/// Inline display of a collapsed bibtex block.
pub const BLOCK_HIDDEN: &str = "none";

/// Next inline display for a bibtex block.
///
/// An unset display counts as collapsed, so the first toggle expands.
#[must_use]
pub fn next_block_display(current: &str) -> &'static str {
    match current {
        "" | BLOCK_HIDDEN => BLOCK_SHOWN,
        _ => BLOCK_HIDDEN,
    }
}

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    /// Hamburger click.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Link click; closes whatever the current state.
    pub const fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }
}

/// Collapsible panel whose content and arrow flip together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_block_display() {
        assert_eq!(next_block_display(""), "block");
        assert_eq!(next_block_display("none"), "block");
        assert_eq!(next_block_display("block"), "none");
        assert_eq!(next_block_display("inline"), "none");
    }

    #[test]
    fn test_nav_menu_toggle_pairs() {
        let mut menu = NavMenu::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert_eq!(menu, NavMenu::default());
    }

    #[test]
    fn test_nav_menu_close_is_unconditional() {
        let mut menu = NavMenu::new(true);
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_disclosure_toggle() {
        let mut panel = Disclosure::default();
        assert!(panel.toggle());
        assert!(panel.is_open());
        assert!(!panel.toggle());
    }
}

//! Show more / show less toggle on the about page

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip visibility and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Button text: offers the opposite of the current state.
    pub fn label(&self, locale: Locale) -> &'static str {
        let table = locale.messages();
        if self.expanded {
            table.show_less
        } else {
            table.show_more
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let mut d = Disclosure::default();
        assert!(!d.is_expanded());
        assert_eq!(d.label(Locale::En), "Show More");

        assert!(d.toggle());
        assert_eq!(d.label(Locale::Tr), "Daha Az Gör");

        assert!(!d.toggle());
        assert_eq!(d.label(Locale::Tr), "Daha Fazla Gör");
    }
}

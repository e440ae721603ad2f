//! Page UI state: the one-shot mount gate and the FAQ accordion.
//!
//! Both live in [`UiState`], which is owned by
//! [`PageShell`](crate::components::PageShell) and never shared outside it.
//! Children only ever see derived read-only values and a toggle callback.
//!
//! ```rust
//! use crown_page::state::UiState;
//!
//! let mut state = UiState::new(3);
//! assert!(!state.mounted.is_mounted());
//! assert_eq!(state.faq.open_index(), Some(0));
//!
//! state.mounted.mount();
//! state.faq.toggle(0).unwrap();
//! assert_eq!(state.faq.open_index(), None);
//! ```

use crate::error::{PageError, Result};

/// Defers rendering until one post-render tick has elapsed.
///
/// Starts closed and opens exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountGate {
    mounted: bool,
}

impl MountGate {
    /// A closed gate.
    pub fn new() -> Self {
        Self { mounted: false }
    }

    /// Opens the gate. Returns `true` only for the call that opened it.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        tracing::debug!("page mounted");
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Accordion over a fixed number of FAQ entries: at most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    /// Accordion over `len` entries with the first one open.
    ///
    /// An empty list has nothing to open, so it starts with `open == None`.
    pub fn new(len: usize) -> Self {
        let open = if len > 0 { Some(0) } else { None };
        Self { len, open }
    }

    /// Opens entry `index`, or closes it if it is the one already open.
    ///
    /// Opening an entry implicitly closes whichever other entry was open.
    /// Indices past the end are rejected and the state is left untouched.
    pub fn toggle(&mut self, index: usize) -> Result<Option<usize>> {
        if index >= self.len {
            tracing::warn!(index, len = self.len, "rejected FAQ toggle");
            return Err(PageError::FaqIndexOutOfRange {
                index,
                len: self.len,
            });
        }

        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        tracing::debug!(index, open = ?self.open, "FAQ toggled");
        Ok(self.open)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// All mutable state of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    /// One-shot render gate
    pub mounted: MountGate,
    /// Which FAQ entry is expanded
    pub faq: FaqAccordion,
}

impl UiState {
    /// Fresh state for a page with `faq_len` FAQ entries: unmounted, first
    /// entry open.
    pub fn new(faq_len: usize) -> Self {
        Self {
            mounted: MountGate::new(),
            faq: FaqAccordion::new(faq_len),
        }
    }

    /// Same as [`UiState::new`] but with the gate already open, as the page
    /// looks after its first tick.
    pub fn mounted(faq_len: usize) -> Self {
        let mut state = Self::new(faq_len);
        state.mounted.mount();
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gate_opens_once() {
        let mut gate = MountGate::new();
        assert!(!gate.is_mounted());

        assert!(gate.mount());
        assert!(gate.is_mounted());

        assert!(!gate.mount());
        assert!(!gate.mount());
        assert!(gate.is_mounted());
    }

    #[test]
    fn first_entry_open_by_default() {
        let faq = FaqAccordion::new(4);
        assert_eq!(faq.open_index(), Some(0));
        assert!(faq.is_open(0));
        assert!((1..4).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn toggling_open_entry_closes_it() {
        let mut faq = FaqAccordion::new(3);
        assert_eq!(faq.toggle(0), Ok(None));
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn toggling_other_entry_moves_focus() {
        let mut faq = FaqAccordion::new(3);
        assert_eq!(faq.toggle(2), Ok(Some(2)));
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
    }

    #[test]
    fn documented_trace() {
        let mut faq = FaqAccordion::new(3);
        let trace: Vec<_> = [0, 2, 2, 1]
            .into_iter()
            .map(|i| faq.toggle(i).unwrap())
            .collect();
        assert_eq!(trace, vec![None, Some(2), None, Some(1)]);
    }

    #[test]
    fn out_of_range_toggle_is_rejected_without_change() {
        let mut faq = FaqAccordion::new(3);
        faq.toggle(1).unwrap();

        let err = faq.toggle(3).unwrap_err();
        assert_eq!(err, PageError::FaqIndexOutOfRange { index: 3, len: 3 });
        assert_eq!(faq.open_index(), Some(1));
    }

    #[test]
    fn empty_accordion_has_nothing_open() {
        let mut faq = FaqAccordion::new(0);
        assert!(faq.is_empty());
        assert_eq!(faq.open_index(), None);
        assert!(faq.toggle(0).is_err());
    }

    #[test]
    fn ui_state_starts_unmounted() {
        let state = UiState::new(4);
        assert!(!state.mounted.is_mounted());
        assert_eq!(state.faq.open_index(), Some(0));

        let state = UiState::mounted(4);
        assert!(state.mounted.is_mounted());
        assert_eq!(state.faq.len(), 4);
    }
}

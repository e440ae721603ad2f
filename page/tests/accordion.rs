//! Accordion invariants over arbitrary click sequences.

use crown_page::PageError;
use crown_page::state::{FaqAccordion, MountGate, UiState};
use proptest::prelude::*;

proptest! {
    #[test]
    fn open_index_always_in_range(
        len in 1usize..12,
        clicks in proptest::collection::vec(0usize..16, 0..64),
    ) {
        let mut faq = FaqAccordion::new(len);
        for index in clicks {
            let before = faq.open_index();
            match faq.toggle(index) {
                Ok(open) => {
                    let expected = if before == Some(index) { None } else { Some(index) };
                    prop_assert_eq!(open, expected);
                }
                Err(PageError::FaqIndexOutOfRange { index: rejected, len: reported }) => {
                    prop_assert_eq!(rejected, index);
                    prop_assert_eq!(reported, len);
                    prop_assert_eq!(faq.open_index(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }

            prop_assert!(faq.open_index().is_none_or(|open| open < len));
            prop_assert!((0..len).filter(|&i| faq.is_open(i)).count() <= 1);
        }
    }

    #[test]
    fn double_toggle_restores_closed_state(len in 1usize..12, pick in 0usize..12) {
        let index = pick % len;
        let mut faq = FaqAccordion::new(len);
        if faq.is_open(index) {
            faq.toggle(index).unwrap();
        }
        prop_assert_eq!(faq.toggle(index).unwrap(), Some(index));
        prop_assert_eq!(faq.toggle(index).unwrap(), None);
    }
}

#[test]
fn sweep_forward_and_back_stays_valid() {
    let len = 4;
    let mut faq = FaqAccordion::new(len);
    let sweep: Vec<usize> = (0..len).chain((0..len).rev()).collect();

    for index in sweep {
        faq.toggle(index).unwrap();
        assert!(faq.open_index().is_none_or(|open| open < len));
    }
    assert_eq!(faq.open_index(), Some(0));
}

#[test]
fn mount_callback_is_one_shot() {
    let mut gate = MountGate::new();
    let fired: Vec<bool> = (0..5).map(|_| gate.mount()).collect();
    assert_eq!(fired, vec![true, false, false, false, false]);
    assert!(gate.is_mounted());
}

#[test]
fn mounting_leaves_faq_untouched() {
    let mut state = UiState::new(3);
    state.faq.toggle(2).unwrap();
    state.mounted.mount();
    assert_eq!(state.faq.open_index(), Some(2));
}

//! # Modal Model
//!
//! A modal is state, not markup: `Closed` or `Open(form)`. The form
//! payload travels with the open state, so closing a modal discards its
//! half-edited form and reopening starts fresh. Discrete events only;
//! no framework wiring.

/// An open-or-closed modal carrying its form payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState<F> {
    #[default]
    Closed,
    Open(F),
}

impl<F> ModalState<F> {
    /// Opens the modal with a fresh form. Reopening replaces any
    /// previous form wholesale.
    pub fn open(&mut self, form: F) {
        *self = ModalState::Open(form);
    }

    /// Closes the modal, discarding the form.
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Takes the form out for submission, leaving the modal closed.
    pub fn take(&mut self) -> Option<F> {
        match std::mem::replace(self, ModalState::Closed) {
            ModalState::Open(form) => Some(form),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// The live form, for field edits while the modal is open.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            ModalState::Open(form) => Some(form),
            ModalState::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            ModalState::Open(form) => Some(form),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct ProductForm {
        name: String,
        price: String,
    }

    #[test]
    fn test_open_edit_take() {
        let mut modal = ModalState::<ProductForm>::default();
        assert!(!modal.is_open());

        modal.open(ProductForm::default());
        modal.form_mut().unwrap().name = "Masala Chai".into();

        let form = modal.take().unwrap();
        assert_eq!(form.name, "Masala Chai");
        assert!(!modal.is_open());
    }

    #[test]
    fn test_close_discards_the_form() {
        let mut modal = ModalState::Open(ProductForm {
            name: "half-typed".into(),
            price: String::new(),
        });
        modal.close();

        // Reopening starts fresh.
        modal.open(ProductForm::default());
        assert_eq!(modal.form().unwrap().name, "");
    }

    #[test]
    fn test_take_on_closed_modal_is_none() {
        let mut modal = ModalState::<ProductForm>::Closed;
        assert_eq!(modal.take(), None);
    }
}

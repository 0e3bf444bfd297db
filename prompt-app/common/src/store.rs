use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use crate::state::RequestState;

/// Somewhere the controller can apply state transitions so the view sees them between await points.
pub trait RequestStore {
	fn update<R>(&mut self, apply: impl FnOnce(&mut RequestState) -> R) -> R;

	fn snapshot(&self) -> RequestState;
}

impl RequestStore for Signal<RequestState> {
	fn update<R>(&mut self, apply: impl FnOnce(&mut RequestState) -> R) -> R {
		apply(&mut *self.write())
	}

	fn snapshot(&self) -> RequestState {
		self.read().clone()
	}
}

impl RequestStore for Rc<RefCell<RequestState>> {
	fn update<R>(&mut self, apply: impl FnOnce(&mut RequestState) -> R) -> R {
		apply(&mut *self.borrow_mut())
	}

	fn snapshot(&self) -> RequestState {
		self.borrow().clone()
	}
}

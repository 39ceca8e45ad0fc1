//! Leptos component driving a [`Typewriter`] with browser timeouts.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;

use super::state::Typewriter;
use crate::components::cancel::CancelFlag;
use crate::components::timer::CallbackSlots;

type TimeoutSlots = Rc<RefCell<CallbackSlots<Closure<dyn FnMut()>>>>;

/// Everything a pending timeout needs to run the next step.
#[derive(Clone)]
struct Driver {
	state: Rc<RefCell<Typewriter>>,
	cancel: CancelFlag,
	slots: TimeoutSlots,
	name: RwSignal<String>,
	title: RwSignal<String>,
}

impl Driver {
	fn schedule(self, delay: Duration) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let slots = self.slots.clone();
		let cb: Closure<dyn FnMut()> = Closure::once(move || self.tick());
		let mut slots = slots.borrow_mut();
		let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
			slots.arm(cb).as_ref().unchecked_ref(),
			delay.as_millis() as i32,
		);
		if let Ok(id) = scheduled {
			slots.set_handle(id);
		}
	}

	fn tick(self) {
		self.slots.borrow_mut().fired();
		if self.cancel.is_cancelled() {
			return;
		}
		let delay = {
			let mut state = self.state.borrow_mut();
			let delay = state.step();
			self.name.set(state.name().to_string());
			self.title.set(state.title().to_string());
			delay
		};
		self.schedule(delay);
	}
}

/// Types `name` then `title` under each other with blinking cursors, forever.
#[component]
pub fn TypewriterHeading(name: &'static str, title: &'static str) -> impl IntoView {
	let driver = Driver {
		state: Rc::new(RefCell::new(Typewriter::new(name, title))),
		cancel: CancelFlag::new(),
		slots: Rc::new(RefCell::new(CallbackSlots::new())),
		name: RwSignal::new(String::new()),
		title: RwSignal::new(String::new()),
	};
	let (shown_name, shown_title) = (driver.name, driver.title);

	let teardown = SendWrapper::new({
		let (cancel, slots) = (driver.cancel.clone(), driver.slots.clone());
		move || {
			cancel.cancel();
			let pending = slots.borrow_mut().clear();
			if let (Some(win), Some(id)) = (web_sys::window(), pending) {
				win.clear_timeout_with_handle(id);
			}
			debug!("portfolio: typewriter torn down");
		}
	});
	on_cleanup(move || (teardown.take())());

	driver.schedule(Duration::ZERO);

	view! {
		<h1 class="typewriter-name">
			{move || shown_name.get()}
			<span class="typewriter-cursor">"|"</span>
		</h1>
		<h2 class="typewriter-title">
			{move || shown_title.get()}
			<span class="typewriter-cursor">"|"</span>
		</h2>
	}
}

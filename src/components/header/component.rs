//! Fixed navigation header with scroll-spy highlighting.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::NAV_ITEMS;
use super::scroll_spy::{MARKER_OFFSET, SectionBounds, active_section, is_scrolled};

/// Reads the current viewport-relative bounds of every navigable section.
fn section_bounds(window: &Window) -> Vec<SectionBounds<'static>> {
	let Some(document) = window.document() else {
		return Vec::new();
	};
	NAV_ITEMS
		.iter()
		.filter_map(|item| {
			let rect = document.get_element_by_id(item.id)?.get_bounding_client_rect();
			Some(SectionBounds {
				id: item.id,
				top: rect.top(),
				bottom: rect.bottom(),
			})
		})
		.collect()
}

/// Page header: turns opaque after scrolling, highlights the section under the
/// header, and collapses into a toggleable menu on small screens.
#[component]
pub fn Header() -> impl IntoView {
	let scrolled = RwSignal::new(false);
	let active = RwSignal::new(NAV_ITEMS[0].id);
	let menu_open = RwSignal::new(false);
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	*scroll_cb.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		scrolled.set(is_scrolled(win.scroll_y().unwrap_or(0.0)));
		if let Some(id) = active_section(section_bounds(&win), MARKER_OFFSET) {
			if active.get_untracked() != id {
				active.set(id);
			}
		}
	}));
	if let (Some(win), Some(cb)) = (web_sys::window(), scroll_cb.borrow().as_ref()) {
		let _ = win.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
	}

	let teardown = SendWrapper::new(move || {
		if let (Some(win), Some(cb)) = (web_sys::window(), scroll_cb.borrow().as_ref()) {
			let _ = win.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		}
		scroll_cb.borrow_mut().take();
	});
	on_cleanup(move || (teardown.take())());

	let nav_links = move |mobile: bool| {
		NAV_ITEMS
			.iter()
			.map(|item| {
				let id = item.id;
				view! {
					<li>
						<a
							href=format!("#{id}")
							class=move || if active.get() == id { "nav-link active" } else { "nav-link" }
							on:click=move |_| {
								if mobile {
									menu_open.set(false);
								}
							}
						>
							{item.label}
						</a>
					</li>
				}
			})
			.collect_view()
	};

	view! {
		<header class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
			<nav class="nav-desktop">
				<ul>{nav_links(false)}</ul>
			</nav>
			<button
				class="nav-toggle"
				aria-label="Toggle menu"
				on:click=move |_| menu_open.update(|open| *open = !*open)
			>
				{move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
			</button>
			<Show when=move || menu_open.get()>
				<nav class="nav-mobile">
					<ul>{nav_links(true)}</ul>
				</nav>
			</Show>
		</header>
	}
}

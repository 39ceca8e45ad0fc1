//! Leptos component wrapping a particle field canvas.
//!
//! The component creates a viewport-sized canvas behind its section, follows
//! window resizes, and drives the field from `requestAnimationFrame`. On
//! unmount it cancels the loop, removes the resize listener and drops the JS
//! closures, so nothing touches the field afterwards.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::animation::FieldAnimation;
use super::params::FieldParams;
use super::particles::ParticleField;
use super::theme::FieldStyle;

type JsCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Inline style of the canvas: fills its positioned parent, below the content.
pub const CANVAS_STYLE: &str =
	"position: absolute; inset: 0; z-index: 0; width: 100%; height: 100%; pointer-events: none;";

/// Current `innerWidth`/`innerHeight`, or zero when unavailable.
fn viewport_size(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Seed for the per-instance RNG, so sections don't share a layout.
fn random_seed() -> u64 {
	(js_sys::Math::random() * (1u64 << 53) as f64) as u64
}

/// Renders an animated particle-link background on a canvas element.
///
/// The canvas bitmap always matches the viewport and is stretched over the
/// nearest positioned ancestor. Each instance owns its own field; several can
/// run on the same page without sharing state. If the 2D context is
/// unavailable, or the field is empty, the canvas stays blank.
#[component]
pub fn ParticleCanvas(
	#[prop(default = FieldParams::section())] params: FieldParams,
	#[prop(default = FieldStyle::section())] style: FieldStyle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animation: Rc<RefCell<Option<FieldAnimation>>> = Rc::new(RefCell::new(None));
	let animate: JsCallback = Rc::new(RefCell::new(None));
	let resize_cb: JsCallback = Rc::new(RefCell::new(None));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (animation_init, animate_init, resize_cb_init, frame_id_init) = (
		animation.clone(),
		animate.clone(),
		resize_cb.clone(),
		frame_id.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animation_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("portfolio: no window, particle background disabled");
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("portfolio: 2d context unavailable, particle background disabled");
			return;
		};

		let mut rng = SmallRng::seed_from_u64(random_seed());
		let field = ParticleField::new(&params, w, h, &mut rng);
		if field.is_empty() {
			info!("portfolio: empty particle field, background not animated");
			return;
		}
		info!(
			"portfolio: particle field mounted ({} particles, {}x{})",
			field.len(),
			w,
			h
		);
		*animation_init.borrow_mut() = Some(FieldAnimation::new(field, style.clone()));

		let (animation_resize, canvas_resize) = (animation_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut a) = *animation_resize.borrow_mut() {
				a.resize(nw, nh);
			}
			debug!("portfolio: particle field resized to {}x{}", nw, nh);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (animation_frame, animate_inner, frame_id_inner) = (
			animation_init.clone(),
			animate_init.clone(),
			frame_id_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			frame_id_inner.set(None);
			let running = match *animation_frame.borrow_mut() {
				Some(ref mut a) => a.frame(&ctx),
				None => false,
			};
			if !running {
				return;
			}
			let Some(win) = web_sys::window() else {
				return;
			};
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frame_id_inner.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_id_init.set(Some(id));
			}
		}
	});

	let teardown = SendWrapper::new(move || {
		if let Some(ref a) = *animation.borrow() {
			a.cancel_flag().cancel();
		}
		if let Some(win) = web_sys::window() {
			if let Some(id) = frame_id.take() {
				let _ = win.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		resize_cb.borrow_mut().take();
		animate.borrow_mut().take();
		debug!("portfolio: particle field torn down");
	});
	on_cleanup(move || (teardown.take())());

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			aria-hidden="true"
			style=CANVAS_STYLE
		/>
	}
}

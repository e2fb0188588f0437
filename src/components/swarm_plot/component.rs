//! Leptos component wrapping the swarm plot canvas.
//!
//! The component creates an HTML canvas element and runs the force
//! simulation in a `requestAnimationFrame` loop, repainting each frame.
//! Encoding switches and selection toggles repaint immediately from the
//! positions of the last completed tick; they never advance or restart the
//! simulation. A data change tears the whole plot context down and rebuilds
//! it, so a superseded simulation can never leak into the new one.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::encoding::Encoding;
use super::render;
use super::selection::SelectionList;
use super::state::SwarmState;
use super::theme::Theme;
use super::types::{Lanes, Record};

/// Default drawing-area width, shared by the canvas and the solver bounds.
pub const DEFAULT_WIDTH: f64 = 800.0;
/// Default drawing-area height, shared by the canvas and the solver bounds.
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Bundles plot state with its drawing context for the animation loop.
struct PlotContext {
	state: SwarmState,
	ctx: CanvasRenderingContext2d,
	theme: Theme,
}

/// Renders an interactive force-directed swarm plot on a canvas element.
///
/// Records arrive via the reactive `data` signal; every change discards the
/// current layout and selection and starts a fresh simulation. The active
/// `encoding` recolors nodes in place. Clicking a node toggles it in
/// `selection`, which the surrounding UI can render as a pinned list.
#[component]
pub fn SwarmPlotCanvas(
	#[prop(into)] data: Signal<Vec<Record>>,
	#[prop(into)] encoding: Signal<Encoding>,
	selection: RwSignal<SelectionList>,
	#[prop(default = Lanes::default())] lanes: Lanes,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<PlotContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	Effect::new(move |_| {
		let records = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let (w, h) = (
			width.unwrap_or(DEFAULT_WIDTH),
			height.unwrap_or(DEFAULT_HEIGHT),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut state = SwarmState::new(records, lanes.clone(), w, h);
		// a load keeps the active encoding but always clears pinned records
		state.set_encoding(encoding.get_untracked());
		selection.set(SelectionList::default());

		let theme = Theme::default();
		render::render(&state, &ctx, &theme);
		*context_init.borrow_mut() = Some(PlotContext { state, ctx, theme });

		// One loop for the lifetime of the component; dataset swaps replace
		// the context above, never the loop.
		if animate_init.borrow().is_none() {
			let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
			*animate_init.borrow_mut() = Some(Closure::new(move || {
				if let Some(ref mut c) = *context_anim.borrow_mut() {
					c.state.tick();
					render::render(&c.state, &c.ctx, &c.theme);
				}
				if let Some(ref cb) = *animate_inner.borrow() {
					let _ = web_sys::window()
						.unwrap()
						.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}));
			if let Some(ref cb) = *animate_init.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}
	});

	// Encoding switches repaint from the last known positions.
	let context_enc = context.clone();
	Effect::new(move |_| {
		let active = encoding.get();
		if let Some(ref mut c) = *context_enc.borrow_mut() {
			c.state.set_encoding(active);
			render::render(&c.state, &c.ctx, &c.theme);
		}
	});

	// External selection changes (including the load-time reset) repaint too.
	let context_sel = context.clone();
	Effect::new(move |_| {
		let pinned = selection.get();
		if let Some(ref mut c) = *context_sel.borrow_mut() {
			if c.state.selection != pinned {
				c.state.selection = pinned;
				render::render(&c.state, &c.ctx, &c.theme);
			}
		}
	});

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		// toggle and repaint synchronously, then publish outside the borrow
		let toggled = {
			let mut guard = context_click.borrow_mut();
			let Some(ref mut c) = *guard else {
				return;
			};
			if c.state.toggle_at(x, y) {
				render::render(&c.state, &c.ctx, &c.theme);
				Some(c.state.selection.clone())
			} else {
				None
			}
		};
		if let Some(pinned) = toggled {
			selection.set(pinned);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="swarm-plot-canvas"
			on:click=on_click
			style="display: block; cursor: pointer;"
		/>
	}
}

//! swarm-plot: interactive force-directed swarm plot for sentiment-scored records.
//!
//! This crate provides a WASM-based visualization component that lays out
//! short text records as a physics-settled beeswarm, grouped into horizontal
//! lanes by time bucket, colored by a selectable attribute, with
//! click-to-pin selection.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::file_loader::RecordLoader;
pub use components::swarm_plot::{
	Encoding, Lanes, Record, SelectionList, SwarmPlotCanvas, SwarmState,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("swarm-plot: logging initialized");
}

/// Load records from a script element with id="record-data".
/// Expected format: JSON array of record objects.
fn load_records() -> Option<Vec<Record>> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("record-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Vec<Record>>(&json_text) {
		Ok(records) => {
			info!("swarm-plot: loaded {} records", records.len());
			Some(records)
		}
		Err(e) => {
			warn!("swarm-plot: failed to parse record data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Seeds the plot from embedded record data if present, then lets the user
/// upload a JSON file, switch the color encoding, and pin records by click.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let (records, set_records) = signal(load_records().unwrap_or_default());
	let (encoding, set_encoding) = signal(Encoding::default());
	let selection = RwSignal::new(SelectionList::default());

	let on_encoding_change = move |ev: web_sys::Event| {
		let value = event_target_value(&ev);
		if let Some(e) = Encoding::from_label(&value) {
			set_encoding.set(e);
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Sentiment Swarm" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="swarm-app">
			<h1>"Sentiment Swarm"</h1>
			<p class="subtitle">
				"Click a point to pin its text. Color by sentiment or subjectivity."
			</p>

			<RecordLoader on_load=move |loaded: Vec<Record>| set_records.set(loaded) />

			<div class="colorby">
				<label>"Color By: "</label>
				<select on:change=on_encoding_change>
					{Encoding::ALL
						.iter()
						.map(|e| view! { <option value=e.label()>{e.label()}</option> })
						.collect_view()}
				</select>
			</div>

			<SwarmPlotCanvas data=records encoding=encoding selection=selection />

			<div class="pinned-records">
				{move || {
					selection
						.get()
						.records()
						.iter()
						.map(|record| view! { <p class="pinned-record">{record.text.clone()}</p> })
						.collect_view()
				}}
			</div>
		</div>
	}
}

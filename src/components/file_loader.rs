//! JSON file-upload widget feeding records into the plot.
//!
//! Reads the chosen file with `FileReader` and hands the parsed records to
//! the caller. A file that fails to parse is logged and ignored; the current
//! data set stays on screen.

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement, ProgressEvent};

use super::swarm_plot::Record;

/// File picker that loads a JSON array of records.
///
/// `on_load` receives the full parsed sequence; capping and lane filtering
/// happen downstream in the plot.
#[component]
pub fn RecordLoader(#[prop(into)] on_load: Callback<Vec<Record>>) -> impl IntoView {
	let on_change = move |ev: Event| {
		let Some(target) = ev.target() else {
			return;
		};
		let input: HtmlInputElement = target.unchecked_into();
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};

		let reader = FileReader::new().unwrap();
		let reader_done = reader.clone();
		let onload = Closure::once_into_js(move |_: ProgressEvent| {
			let Ok(result) = reader_done.result() else {
				warn!("record upload: could not read file contents");
				return;
			};
			let Some(text) = result.as_string() else {
				warn!("record upload: file is not text");
				return;
			};
			match serde_json::from_str::<Vec<Record>>(&text) {
				Ok(records) => {
					info!("record upload: parsed {} records", records.len());
					on_load.run(records);
				}
				Err(e) => warn!("record upload: failed to parse JSON: {e}"),
			}
		});
		reader.set_onload(Some(onload.unchecked_ref()));
		if let Err(e) = reader.read_as_text(&file) {
			warn!("record upload: read failed: {e:?}");
		}
	};

	view! {
		<div class="record-loader">
			<label class="record-loader-label">"Load records (JSON): "</label>
			<input type="file" accept=".json" on:change=on_change />
		</div>
	}
}

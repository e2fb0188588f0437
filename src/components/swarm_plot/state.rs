//! Plot state combining the layout simulation with encoding and selection.
//!
//! State is held in independent slices: node positions belong to the
//! simulation, the active encoding and the pinned selection are plain fields
//! mutated by UI events. Changing the encoding or the selection never touches
//! a position.

use log::{debug, info};

use super::encoding::Encoding;
use super::selection::SelectionList;
use super::simulation::{LayoutParams, Simulation, SwarmNode};
use super::types::{Lanes, MAX_RECORDS, Record};

/// Node draw radius.
pub const NODE_RADIUS: f64 = 8.0;
/// Pointer hit-test radius around a node center.
pub const HIT_RADIUS: f64 = 10.0;

/// Complete state for one loaded data set.
///
/// Created once per load; a new load replaces the whole value, discarding the
/// old simulation rather than diffing into it.
pub struct SwarmState {
	records: Vec<Record>,
	sim: Simulation,
	/// Lane labels, index-aligned with the simulation's band indices.
	pub lanes: Lanes,
	/// Attribute currently driving fill colors.
	pub encoding: Encoding,
	/// Pinned records, newest first.
	pub selection: SelectionList,
	/// Drawing-area width, shared by the canvas and the solver.
	pub width: f64,
	/// Drawing-area height, shared by the canvas and the solver.
	pub height: f64,
}

impl SwarmState {
	/// Build state from a loaded record sequence. Input is truncated to the
	/// first [`MAX_RECORDS`] entries in load order; records whose bucket is
	/// not in the lane list get no node.
	pub fn new(mut records: Vec<Record>, lanes: Lanes, width: f64, height: f64) -> Self {
		if records.len() > MAX_RECORDS {
			info!(
				"swarm: truncating {} records to cap {}",
				records.len(),
				MAX_RECORDS
			);
			records.truncate(MAX_RECORDS);
		}

		let mut kept = Vec::with_capacity(records.len());
		let mut lane_of = Vec::with_capacity(records.len());
		let mut dropped = 0_usize;
		for record in records {
			match lanes.index_of(&record.bucket) {
				Some(lane) => {
					lane_of.push(lane);
					kept.push(record);
				}
				None => dropped += 1,
			}
		}
		if dropped > 0 {
			debug!("swarm: {dropped} records with unknown bucket excluded from layout");
		}

		let sim = Simulation::new(&lane_of, lanes.len(), width, height, LayoutParams::default());

		Self {
			records: kept,
			sim,
			lanes,
			encoding: Encoding::default(),
			selection: SelectionList::default(),
			width,
			height,
		}
	}

	/// Records that received a node, in load order.
	pub fn records(&self) -> &[Record] {
		&self.records
	}

	/// Number of laid-out records.
	pub fn record_count(&self) -> usize {
		self.records.len()
	}

	/// Records paired with their current node states.
	pub fn nodes(&self) -> impl Iterator<Item = (&Record, &SwarmNode)> {
		self.records.iter().zip(self.sim.nodes())
	}

	/// Advance the simulation one step. Settled ticks return `false` and
	/// change nothing, so redrawing after one is always safe.
	pub fn tick(&mut self) -> bool {
		self.sim.tick()
	}

	/// Switch the fill-color attribute. Positions are untouched; the caller
	/// redraws with the positions it already has.
	pub fn set_encoding(&mut self, encoding: Encoding) {
		self.encoding = encoding;
	}

	/// Index of the laid-out record whose node is nearest to the given canvas
	/// position, within [`HIT_RADIUS`].
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let mut best: Option<(usize, f64)> = None;
		for (i, node) in self.sim.nodes().iter().enumerate() {
			let (dx, dy) = (node.x - x, node.y - y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < HIT_RADIUS && best.is_none_or(|(_, d)| dist < d) {
				best = Some((i, dist));
			}
		}
		best.map(|(i, _)| i)
	}

	/// Toggle selection of the node at a canvas position. Returns whether a
	/// node was hit.
	pub fn toggle_at(&mut self, x: f64, y: f64) -> bool {
		match self.node_at_position(x, y) {
			Some(i) => {
				let record = self.records[i].clone();
				self.selection.toggle(&record);
				true
			}
			None => false,
		}
	}

	/// Change the drawing-area bounds and let the solver migrate the swarm.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.sim.resize(width, height);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const WIDTH: f64 = 800.0;
	const HEIGHT: f64 = 600.0;

	fn record(idx: u32, bucket: &str, sentiment: f64, subjectivity: f64) -> Record {
		Record {
			idx,
			text: format!("record {idx}"),
			bucket: bucket.into(),
			sentiment,
			subjectivity,
		}
	}

	fn settle(state: &mut SwarmState) {
		for _ in 0..10_000 {
			if !state.tick() {
				return;
			}
		}
		panic!("simulation did not settle");
	}

	#[test]
	fn load_truncates_to_first_300_in_input_order() {
		let records: Vec<Record> = (0..350).map(|i| record(i, "March", 0.0, 0.5)).collect();
		let state = SwarmState::new(records, Lanes::default(), WIDTH, HEIGHT);

		assert_eq!(state.record_count(), MAX_RECORDS);
		let idxs: Vec<u32> = state.records().iter().map(|r| r.idx).collect();
		assert_eq!(idxs, (0..300).collect::<Vec<u32>>());
	}

	#[test]
	fn unknown_bucket_gets_no_node() {
		let records = vec![
			record(1, "March", 0.1, 0.5),
			record(2, "Octember", 0.2, 0.5),
			record(3, "May", 0.3, 0.5),
		];
		let state = SwarmState::new(records, Lanes::default(), WIDTH, HEIGHT);

		assert_eq!(state.record_count(), 2);
		assert!(state.records().iter().all(|r| r.idx != 2));
		assert_eq!(state.nodes().count(), 2);
	}

	#[test]
	fn encoding_switch_leaves_positions_untouched() {
		let records: Vec<Record> = (0..30).map(|i| record(i, "April", 0.0, 0.5)).collect();
		let mut state = SwarmState::new(records, Lanes::default(), WIDTH, HEIGHT);
		for _ in 0..50 {
			state.tick();
		}

		let before: Vec<(f64, f64)> = state.nodes().map(|(_, n)| (n.x, n.y)).collect();
		state.set_encoding(Encoding::Subjectivity);
		let after: Vec<(f64, f64)> = state.nodes().map(|(_, n)| (n.x, n.y)).collect();

		assert_eq!(state.encoding, Encoding::Subjectivity);
		assert_eq!(before, after);
	}

	#[test]
	fn three_record_scenario_settles_into_bands_with_extreme_colors() {
		let records = vec![
			record(1, "March", 1.0, 0.2),
			record(2, "April", -1.0, 0.8),
			record(3, "March", 0.0, 0.5),
		];
		let mut state = SwarmState::new(records, Lanes::default(), WIDTH, HEIGHT);
		settle(&mut state);

		let band = HEIGHT / 3.0;
		for (record, node) in state.nodes() {
			let expected_lane = match record.bucket.as_str() {
				"March" => 0.0,
				"April" => 1.0,
				other => panic!("unexpected bucket {other}"),
			};
			assert!(
				node.y >= expected_lane * band && node.y <= (expected_lane + 1.0) * band,
				"record {} left its lane band: y={}",
				record.idx,
				node.y
			);
		}

		let fill_of = |idx: u32| {
			let r = state.records().iter().find(|r| r.idx == idx).unwrap();
			state.encoding.fill(r)
		};
		assert_eq!(fill_of(1), Encoding::Sentiment.fill_value(1.0));
		assert_eq!(fill_of(2), Encoding::Sentiment.fill_value(-1.0));
	}

	#[test]
	fn click_toggles_node_under_pointer() {
		let records = vec![record(1, "March", 0.5, 0.5)];
		let mut state = SwarmState::new(records, Lanes::default(), WIDTH, HEIGHT);
		settle(&mut state);

		// single node sits at the lane midpoint, untouched by any force
		let (x, y) = {
			let (_, node) = state.nodes().next().unwrap();
			(node.x, node.y)
		};
		assert!(state.toggle_at(x + 3.0, y - 2.0));
		assert!(state.selection.contains(1));
		assert!(state.toggle_at(x, y));
		assert!(state.selection.is_empty());

		// far away: no hit, selection unchanged
		assert!(!state.toggle_at(x + 200.0, y));
	}

	#[test]
	fn resize_moves_swarm_to_new_bands() {
		let records: Vec<Record> = (0..12).map(|i| record(i, "May", 0.0, 0.5)).collect();
		let mut state = SwarmState::new(records, Lanes::default(), WIDTH, HEIGHT);
		settle(&mut state);

		state.resize(400.0, 300.0);
		settle(&mut state);

		let band = 300.0 / 3.0;
		for (_, node) in state.nodes() {
			assert!(node.y >= 2.0 * band && node.y <= 3.0 * band);
		}
	}
}

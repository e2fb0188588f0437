//! Lane-constrained force simulation for the swarm layout.
//!
//! Assigns every record a stable, non-overlapping position inside its lane
//! band. Each tick combines four forces per node: pairwise repulsion,
//! horizontal centering, vertical lane confinement, and an iterative
//! collision pass that enforces a hard minimum separation. A geometric
//! cooling schedule shrinks the force contributions until the swarm settles;
//! there is no explicit convergence signal beyond [`Simulation::tick`]
//! returning `false` once alpha drops below its floor.

/// Force strengths and cooling schedule for the solver.
#[derive(Clone, Debug)]
pub struct LayoutParams {
	/// Pairwise repulsion magnitude, inverse-distance falloff.
	pub repulsion: f64,
	/// Pull toward the horizontal center of the drawing area.
	pub center_strength: f64,
	/// Pull toward the lane's vertical midpoint. Dominant force.
	pub lane_strength: f64,
	/// Per-node collision radius; centers may not come closer than twice this.
	pub collide_radius: f64,
	/// Positional separation passes per tick.
	pub collide_passes: usize,
	/// Fraction of velocity retained each tick.
	pub damping: f64,
	/// Upper bound on per-tick displacement, keeps the strong lane pull from
	/// diverging while alpha is still high.
	pub max_step: f64,
	/// Geometric cooling rate applied to alpha each tick.
	pub alpha_decay: f64,
	/// Alpha floor below which ticks become no-ops.
	pub alpha_min: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			repulsion: 10.0,
			center_strength: 0.35,
			lane_strength: 10.0,
			collide_radius: 10.0,
			collide_passes: 3,
			damping: 0.6,
			max_step: 15.0,
			// ~300 active ticks from 1.0 down to the floor
			alpha_decay: 1.0 - 0.001_f64.powf(1.0 / 300.0),
			alpha_min: 0.001,
		}
	}
}

/// Simulation state for one record: position plus solver-internal velocity.
#[derive(Clone, Debug)]
pub struct SwarmNode {
	pub x: f64,
	pub y: f64,
	vx: f64,
	vy: f64,
	/// Vertical band index this node is confined to.
	pub lane: usize,
}

/// Iterative force-directed positioner for lane-grouped nodes.
///
/// Nodes are created once per data load and owned exclusively by the
/// simulation; everything else reads positions through [`Simulation::nodes`].
pub struct Simulation {
	nodes: Vec<SwarmNode>,
	params: LayoutParams,
	width: f64,
	height: f64,
	lane_count: usize,
	alpha: f64,
}

impl Simulation {
	/// Build a simulation from per-node lane indices. Every node starts at
	/// the horizontal center and its lane's vertical midpoint, which keeps
	/// settle time short and avoids symmetric-collapse artifacts.
	pub fn new(
		lanes: &[usize],
		lane_count: usize,
		width: f64,
		height: f64,
		params: LayoutParams,
	) -> Self {
		let band = height / lane_count.max(1) as f64;
		let nodes = lanes
			.iter()
			.map(|&lane| SwarmNode {
				x: width / 2.0,
				y: (lane as f64 + 0.5) * band,
				vx: 0.0,
				vy: 0.0,
				lane,
			})
			.collect();

		Self {
			nodes,
			params,
			width,
			height,
			lane_count,
			alpha: 1.0,
		}
	}

	/// Current node states, index-aligned with the input lane list.
	pub fn nodes(&self) -> &[SwarmNode] {
		&self.nodes
	}

	/// Solver parameters in effect.
	pub fn params(&self) -> &LayoutParams {
		&self.params
	}

	/// Whether the cooling schedule has run out. Settled ticks are no-ops.
	pub fn settled(&self) -> bool {
		self.alpha < self.params.alpha_min
	}

	/// Advance the solver one step. Returns `false` without touching any
	/// position once the simulation has settled.
	pub fn tick(&mut self) -> bool {
		if self.settled() {
			return false;
		}
		self.alpha -= self.alpha * self.params.alpha_decay;

		self.apply_repulsion();
		self.apply_centering();
		self.apply_lane_pull();
		self.integrate();
		self.resolve_collisions();
		true
	}

	/// Re-energize the solver after a perturbation such as a bounds change.
	pub fn reheat(&mut self) {
		self.alpha = 1.0;
	}

	/// Change the drawing-area bounds. Lane midpoints follow the new height;
	/// the swarm is re-heated so nodes migrate to the moved targets.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.reheat();
	}

	fn lane_target(&self, lane: usize) -> f64 {
		let band = self.height / self.lane_count.max(1) as f64;
		(lane as f64 + 0.5) * band
	}

	fn apply_repulsion(&mut self) {
		let n = self.nodes.len();
		let mut push = vec![(0.0_f64, 0.0_f64); n];

		for i in 0..n {
			for j in (i + 1)..n {
				let (mut dx, mut dy) = (
					self.nodes[i].x - self.nodes[j].x,
					self.nodes[i].y - self.nodes[j].y,
				);
				let mut d2 = dx * dx + dy * dy;
				if d2 < 1e-12 {
					let (jx, jy) = jiggle(i * n + j);
					dx = jx;
					dy = jy;
					d2 = dx * dx + dy * dy;
					if d2 < 1e-12 {
						continue;
					}
				}
				// inverse-distance falloff with a floor keeping near-coincident
				// pairs finite; the collision pass handles true overlap
				let w = self.params.repulsion * self.alpha / d2.max(1.0);
				push[i].0 += dx * w;
				push[i].1 += dy * w;
				push[j].0 -= dx * w;
				push[j].1 -= dy * w;
			}
		}

		for (node, (px, py)) in self.nodes.iter_mut().zip(push) {
			node.vx += px;
			node.vy += py;
		}
	}

	fn apply_centering(&mut self) {
		let cx = self.width / 2.0;
		for node in &mut self.nodes {
			node.vx += (cx - node.x) * self.params.center_strength * self.alpha;
		}
	}

	fn apply_lane_pull(&mut self) {
		for i in 0..self.nodes.len() {
			let target = self.lane_target(self.nodes[i].lane);
			let node = &mut self.nodes[i];
			node.vy += (target - node.y) * self.params.lane_strength * self.alpha;
		}
	}

	fn integrate(&mut self) {
		for node in &mut self.nodes {
			node.vx *= self.params.damping;
			node.vy *= self.params.damping;

			let speed = (node.vx * node.vx + node.vy * node.vy).sqrt();
			if speed > self.params.max_step {
				let scale = self.params.max_step / speed;
				node.vx *= scale;
				node.vy *= scale;
			}

			node.x += node.vx;
			node.y += node.vy;
		}
	}

	fn resolve_collisions(&mut self) {
		let n = self.nodes.len();
		let min_dist = self.params.collide_radius * 2.0;

		for _ in 0..self.params.collide_passes {
			for i in 0..n {
				for j in (i + 1)..n {
					let (mut dx, mut dy) = (
						self.nodes[i].x - self.nodes[j].x,
						self.nodes[i].y - self.nodes[j].y,
					);
					let mut d2 = dx * dx + dy * dy;
					if d2 >= min_dist * min_dist {
						continue;
					}
					if d2 < 1e-12 {
						let (jx, jy) = jiggle(i * n + j);
						dx = jx;
						dy = jy;
						d2 = dx * dx + dy * dy;
						if d2 < 1e-12 {
							continue;
						}
					}
					let dist = d2.sqrt();
					let shift = (min_dist - dist) / dist * 0.5;
					let (sx, sy) = (dx * shift, dy * shift);
					self.nodes[i].x += sx;
					self.nodes[i].y += sy;
					self.nodes[j].x -= sx;
					self.nodes[j].y -= sy;
				}
			}
		}
	}
}

/// Deterministic sub-pixel offset used to separate coincident nodes without
/// pulling in a random number generator.
fn jiggle(seed: usize) -> (f64, f64) {
	let s = seed as f64;
	(
		(pseudo_random(s * 1.1) - 0.5) * 1e-3,
		(pseudo_random(s * 2.3) - 0.5) * 1e-3,
	)
}

fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

#[cfg(test)]
mod tests {
	use super::*;

	const WIDTH: f64 = 800.0;
	const HEIGHT: f64 = 600.0;
	const LANE_COUNT: usize = 3;

	fn settle(sim: &mut Simulation) {
		for _ in 0..10_000 {
			if !sim.tick() {
				return;
			}
		}
		panic!("simulation did not settle");
	}

	fn new_sim(lanes: &[usize]) -> Simulation {
		Simulation::new(lanes, LANE_COUNT, WIDTH, HEIGHT, LayoutParams::default())
	}

	#[test]
	fn nodes_start_at_lane_midpoints() {
		let sim = new_sim(&[0, 1, 2]);
		let band = HEIGHT / LANE_COUNT as f64;
		for (node, lane) in sim.nodes().iter().zip([0, 1, 2]) {
			assert_eq!(node.x, WIDTH / 2.0);
			assert_eq!(node.y, (lane as f64 + 0.5) * band);
		}
	}

	#[test]
	fn settled_nodes_stay_inside_their_lane_band() {
		let lanes: Vec<usize> = (0..60).map(|i| i % LANE_COUNT).collect();
		let mut sim = new_sim(&lanes);
		settle(&mut sim);

		let band = HEIGHT / LANE_COUNT as f64;
		for node in sim.nodes() {
			let top = node.lane as f64 * band;
			let bottom = top + band;
			assert!(
				node.y >= top && node.y <= bottom,
				"node in lane {} drifted to y={}",
				node.lane,
				node.y
			);
		}
	}

	#[test]
	fn settled_nodes_respect_collision_radius() {
		let lanes: Vec<usize> = (0..60).map(|i| i % LANE_COUNT).collect();
		let mut sim = new_sim(&lanes);
		settle(&mut sim);

		let radius = sim.params().collide_radius;
		let nodes = sim.nodes();
		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				let (dx, dy) = (nodes[i].x - nodes[j].x, nodes[i].y - nodes[j].y);
				let dist = (dx * dx + dy * dy).sqrt();
				assert!(
					dist >= radius,
					"nodes {i} and {j} overlap: distance {dist}"
				);
			}
		}
	}

	#[test]
	fn coincident_start_separates_single_lane() {
		// everything in one lane starts at the exact same point
		let lanes = vec![0_usize; 40];
		let mut sim = new_sim(&lanes);
		settle(&mut sim);

		let radius = sim.params().collide_radius;
		let nodes = sim.nodes();
		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				let (dx, dy) = (nodes[i].x - nodes[j].x, nodes[i].y - nodes[j].y);
				assert!((dx * dx + dy * dy).sqrt() >= radius);
			}
		}
	}

	#[test]
	fn ticks_are_noops_after_settling() {
		let mut sim = new_sim(&[0, 0, 1, 2]);
		settle(&mut sim);

		let before: Vec<(f64, f64)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
		assert!(!sim.tick());
		let after: Vec<(f64, f64)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn resize_reheats_and_retargets_lanes() {
		let mut sim = new_sim(&[0, 1, 2]);
		settle(&mut sim);
		assert!(sim.settled());

		sim.resize(400.0, 300.0);
		assert!(!sim.settled());
		settle(&mut sim);

		let band = 300.0 / LANE_COUNT as f64;
		for node in sim.nodes() {
			let mid = (node.lane as f64 + 0.5) * band;
			assert!(
				(node.y - mid).abs() <= band / 2.0,
				"node missed its new lane band: y={}",
				node.y
			);
		}
	}

	#[test]
	fn empty_input_settles_immediately() {
		let mut sim = new_sim(&[]);
		settle(&mut sim);
		assert!(sim.nodes().is_empty());
	}
}

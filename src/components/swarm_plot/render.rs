//! Canvas rendering for the swarm plot.
//!
//! Handles all drawing operations in z-order passes:
//! 1. Background
//! 2. Lane labels
//! 3. Unpinned nodes, then pinned nodes with their outline on top
//! 4. Legend bar and labels
//!
//! Every pass reads the current simulation positions; nothing here mutates
//! state, so a redraw is safe at any point between ticks.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, SwarmState};
use super::theme::{Color, Theme};

/// Renders the complete plot to the canvas.
pub fn render(state: &SwarmState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	draw_background(state, ctx, theme);
	draw_lane_labels(state, ctx, theme);
	draw_nodes(state, ctx, theme);
	draw_legend(state, ctx, theme);
}

fn draw_background(state: &SwarmState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				(state.width.max(state.height)) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_lane_labels(state: &SwarmState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let lane_count = state.lanes.len().max(1);
	let band = state.height / lane_count as f64;

	ctx.set_fill_style_str(&theme.label.color.to_css());
	ctx.set_font(theme.label.lane_font);
	for (i, label) in state.lanes.labels().iter().enumerate() {
		let y = (i as f64 + 0.5) * band;
		let _ = ctx.fill_text(label, 20.0, y);
	}
}

fn draw_nodes(state: &SwarmState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	// unpinned first so pinned outlines are never occluded
	for pinned_pass in [false, true] {
		for (record, node) in state.nodes() {
			let pinned = state.selection.contains(record.idx);
			if pinned != pinned_pass {
				continue;
			}
			draw_node(ctx, theme, node.x, node.y, state.encoding.fill(record), pinned);
		}
	}
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	x: f64,
	y: f64,
	fill: Color,
	pinned: bool,
) {
	if theme.node.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				x - NODE_RADIUS * 0.3,
				y - NODE_RADIUS * 0.3,
				0.0,
				x,
				y,
				NODE_RADIUS,
			)
			.unwrap();

		let highlight = fill.lighten(0.3);
		let shadow = fill.darken(0.15);

		gradient.add_color_stop(0.0, &highlight.to_css()).unwrap();
		gradient.add_color_stop(0.7, &fill.to_css()).unwrap();
		gradient.add_color_stop(1.0, &shadow.to_css()).unwrap();

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	} else {
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&fill.to_css());
		ctx.fill();
	}

	if pinned {
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&theme.node.selection_color.to_css());
		ctx.set_line_width(theme.node.selection_width);
		ctx.stroke();
	}
}

fn draw_legend(state: &SwarmState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let legend = &theme.legend;
	let x = state.width - legend.width - legend.inset;
	let y = state.height / 2.0 - legend.height / 2.0;
	let steps = legend.steps.max(2);
	let step_height = legend.height / steps as f64;

	for i in 0..steps {
		let t = i as f64 / (steps - 1) as f64;
		ctx.set_fill_style_str(&state.encoding.legend_color(t).to_css());
		ctx.fill_rect(x, y + i as f64 * step_height, legend.width, step_height);
	}

	let (top, bottom) = state.encoding.legend_labels();
	let label_x = x + legend.width + legend.label_gap;
	ctx.set_fill_style_str(&theme.label.color.to_css());
	ctx.set_font(theme.label.legend_font);
	let _ = ctx.fill_text(top, label_x, y + 12.0);
	let _ = ctx.fill_text(bottom, label_x, y + legend.height - 5.0);
}

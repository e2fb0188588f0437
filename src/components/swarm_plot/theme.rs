//! Visual theming for the swarm plot.
//!
//! Colors here cover the chrome around the data: background, labels, and the
//! selection outline. The node fill gradients are part of the encoding
//! contract and live in [`super::encoding`].

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// Linear interpolation between two colors
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
}

/// Text styling for lane labels and legend labels.
#[derive(Clone, Debug)]
pub struct LabelStyle {
	/// Label text color
	pub color: Color,
	/// Lane label font
	pub lane_font: &'static str,
	/// Legend label font
	pub legend_font: &'static str,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
	/// Outline color for pinned nodes
	pub selection_color: Color,
	/// Outline width for pinned nodes
	pub selection_width: f64,
}

/// Legend placement and sampling configuration.
#[derive(Clone, Debug)]
pub struct LegendStyle {
	/// Bar width
	pub width: f64,
	/// Bar height
	pub height: f64,
	/// Gap between the bar and the right canvas edge, label space included
	pub inset: f64,
	/// Gap between the bar and its labels
	pub label_gap: f64,
	/// Number of discrete color steps in the bar
	pub steps: usize,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub label: LabelStyle,
	pub node: NodeStyle,
	pub legend: LegendStyle,
}

impl Theme {
	/// Light theme matching the neutral encoding midpoint (default)
	pub fn paper() -> Self {
		Self {
			name: "paper",
			background: BackgroundStyle {
				color: Color::rgb(244, 244, 242),
				color_secondary: Color::rgb(252, 252, 250),
				use_gradient: true,
			},
			label: LabelStyle {
				color: Color::rgb(26, 26, 26),
				lane_font: "bold 16px sans-serif",
				legend_font: "12px sans-serif",
			},
			node: NodeStyle {
				use_gradient: true,
				selection_color: Color::rgb(0, 0, 0),
				selection_width: 2.0,
			},
			legend: LegendStyle {
				width: 20.0,
				height: 200.0,
				inset: 74.0,
				label_gap: 4.0,
				steps: 20,
			},
		}
	}

	/// Dark variant for embedding on dark pages
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
			},
			label: LabelStyle {
				color: Color::rgb(225, 228, 232),
				lane_font: "bold 16px sans-serif",
				legend_font: "12px sans-serif",
			},
			node: NodeStyle {
				use_gradient: true,
				selection_color: Color::rgb(255, 255, 255),
				selection_width: 2.0,
			},
			legend: LegendStyle {
				width: 20.0,
				height: 200.0,
				inset: 74.0,
				label_gap: 4.0,
				steps: 20,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::paper()
	}
}

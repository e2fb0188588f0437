//! Color encoding for record attributes.
//!
//! Maps the active attribute to a fixed color scale. The node fill gradient
//! and the legend gradient use mirrored endpoints over the same domain: the
//! legend shows the most-positive (or most-subjective) end at the top. That
//! asymmetry is a deliberate display choice and must stay.

use super::theme::Color;
use super::types::Record;

const NEGATIVE: Color = Color::rgb(255, 0, 0);
const NEUTRAL: Color = Color::rgb(236, 236, 236);
const POSITIVE: Color = Color::rgb(0, 128, 0);
const SUBJECTIVE: Color = Color::rgb(68, 103, 196);

/// Attribute currently driving node fill colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
	/// Sentiment score, diverging scale over [-1, 1].
	#[default]
	Sentiment,
	/// Subjectivity score, sequential scale over [0, 1].
	Subjectivity,
}

impl Encoding {
	/// All encodings, in dropdown order.
	pub const ALL: [Encoding; 2] = [Encoding::Sentiment, Encoding::Subjectivity];

	/// Display name, also used as the dropdown option value.
	pub fn label(self) -> &'static str {
		match self {
			Encoding::Sentiment => "Sentiment",
			Encoding::Subjectivity => "Subjectivity",
		}
	}

	/// Parse a dropdown option value back into an encoding.
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|e| e.label() == label)
	}

	/// The record field this encoding reads.
	pub fn value(self, record: &Record) -> f64 {
		match self {
			Encoding::Sentiment => record.sentiment,
			Encoding::Subjectivity => record.subjectivity,
		}
	}

	/// Scale domain as (low, high).
	pub fn domain(self) -> (f64, f64) {
		match self {
			Encoding::Sentiment => (-1.0, 1.0),
			Encoding::Subjectivity => (0.0, 1.0),
		}
	}

	/// Fill color for a record under this encoding.
	pub fn fill(self, record: &Record) -> Color {
		self.fill_value(self.value(record))
	}

	/// Fill color for a raw attribute value. Out-of-domain input clamps.
	pub fn fill_value(self, v: f64) -> Color {
		match self {
			Encoding::Sentiment => {
				let v = v.clamp(-1.0, 1.0);
				if v < 0.0 {
					NEGATIVE.lerp(NEUTRAL, v + 1.0)
				} else {
					NEUTRAL.lerp(POSITIVE, v)
				}
			}
			Encoding::Subjectivity => NEUTRAL.lerp(SUBJECTIVE, v.clamp(0.0, 1.0)),
		}
	}

	/// Legend color at `t` in [0, 1], top to bottom. The legend traverses the
	/// domain high-to-low, mirroring the fill gradient's endpoints.
	pub fn legend_color(self, t: f64) -> Color {
		let (lo, hi) = self.domain();
		self.fill_value(hi - t.clamp(0.0, 1.0) * (hi - lo))
	}

	/// Legend label pair as (top, bottom).
	pub fn legend_labels(self) -> (&'static str, &'static str) {
		match self {
			Encoding::Sentiment => ("Positive", "Negative"),
			Encoding::Subjectivity => ("Subjective", "Objective"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sentiment_extremes_and_midpoint() {
		let e = Encoding::Sentiment;
		assert_eq!(e.fill_value(1.0), POSITIVE);
		assert_eq!(e.fill_value(-1.0), NEGATIVE);
		assert_eq!(e.fill_value(0.0), NEUTRAL);
		// out-of-domain clamps to the extremes
		assert_eq!(e.fill_value(5.0), POSITIVE);
		assert_eq!(e.fill_value(-5.0), NEGATIVE);
	}

	#[test]
	fn subjectivity_extremes() {
		let e = Encoding::Subjectivity;
		assert_eq!(e.fill_value(0.0), NEUTRAL);
		assert_eq!(e.fill_value(1.0), SUBJECTIVE);
	}

	#[test]
	fn legend_mirrors_fill_endpoints() {
		for e in Encoding::ALL {
			let (lo, hi) = e.domain();
			assert_eq!(e.legend_color(0.0), e.fill_value(hi));
			assert_eq!(e.legend_color(1.0), e.fill_value(lo));
		}
	}

	#[test]
	fn label_round_trip() {
		for e in Encoding::ALL {
			assert_eq!(Encoding::from_label(e.label()), Some(e));
		}
		assert_eq!(Encoding::from_label("Polarity"), None);
	}
}

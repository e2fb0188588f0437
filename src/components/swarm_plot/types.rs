//! Record input types for the swarm plot.

use serde::Deserialize;

/// Maximum number of records laid out per load. Extra input is truncated in
/// load order, never sampled.
pub const MAX_RECORDS: usize = 300;

/// One input record: a short text item with a time bucket and two scores.
///
/// Wire field names match the upstream data export; selection membership
/// compares `idx` only, never the text.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Record {
	/// Unique identifier for this record.
	pub idx: u32,
	/// Raw text shown when the record is pinned.
	#[serde(rename = "RawTweet")]
	pub text: String,
	/// Time-bucket label, matched against the configured lane list.
	#[serde(rename = "Month")]
	pub bucket: String,
	/// Sentiment score in [-1, 1].
	#[serde(rename = "Sentiment")]
	pub sentiment: f64,
	/// Subjectivity score in [0, 1].
	#[serde(rename = "Subjectivity")]
	pub subjectivity: f64,
}

/// Ordered list of lane labels. A record's bucket must match one of these
/// labels exactly to receive a lane; the position in the list is the lane's
/// vertical band index, top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct Lanes {
	labels: Vec<String>,
}

impl Lanes {
	/// Build a lane list from ordered labels.
	pub fn new(labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			labels: labels.into_iter().map(Into::into).collect(),
		}
	}

	/// Lane index for a bucket label, or `None` if the label is unknown.
	pub fn index_of(&self, bucket: &str) -> Option<usize> {
		self.labels.iter().position(|l| l == bucket)
	}

	/// Number of lanes.
	pub fn len(&self) -> usize {
		self.labels.len()
	}

	/// Whether the lane list is empty.
	pub fn is_empty(&self) -> bool {
		self.labels.is_empty()
	}

	/// Ordered lane labels.
	pub fn labels(&self) -> &[String] {
		&self.labels
	}
}

impl Default for Lanes {
	fn default() -> Self {
		Self::new(["March", "April", "May"])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_wire_format() {
		let json = r#"[
			{"idx": 1, "RawTweet": "all good", "Month": "March", "Sentiment": 1.0, "Subjectivity": 0.2},
			{"idx": 2, "RawTweet": "not great", "Month": "April", "Sentiment": -1.0, "Subjectivity": 0.8}
		]"#;
		let records: Vec<Record> = serde_json::from_str(json).unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].idx, 1);
		assert_eq!(records[0].text, "all good");
		assert_eq!(records[0].bucket, "March");
		assert_eq!(records[1].sentiment, -1.0);
		assert_eq!(records[1].subjectivity, 0.8);
	}

	#[test]
	fn lane_index_follows_label_order() {
		let lanes = Lanes::default();
		assert_eq!(lanes.len(), 3);
		assert_eq!(lanes.index_of("March"), Some(0));
		assert_eq!(lanes.index_of("May"), Some(2));
		assert_eq!(lanes.index_of("June"), None);
	}
}

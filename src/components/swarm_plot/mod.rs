//! Force-directed swarm plot component.
//!
//! Renders time-bucketed records as a beeswarm on an HTML canvas with:
//! - Physics-based node positioning confined to horizontal lanes
//! - Fill colors driven by a switchable attribute encoding
//! - Click-to-pin selection with an outline on pinned nodes
//! - A legend that tracks the active encoding
//!
//! # Example
//!
//! ```ignore
//! use swarm_plot::{Encoding, Record, SelectionList, SwarmPlotCanvas};
//!
//! let (records, _) = signal(vec![
//!     Record { idx: 1, text: "all good".into(), bucket: "March".into(), sentiment: 0.9, subjectivity: 0.2 },
//! ]);
//! let (encoding, _) = signal(Encoding::Sentiment);
//! let selection = RwSignal::new(SelectionList::default());
//!
//! view! { <SwarmPlotCanvas data=records encoding=encoding selection=selection /> }
//! ```

mod component;
pub mod encoding;
mod render;
mod selection;
pub mod simulation;
mod state;
pub mod theme;
mod types;

pub use component::SwarmPlotCanvas;
pub use encoding::Encoding;
pub use selection::SelectionList;
pub use state::SwarmState;
pub use theme::Theme;
pub use types::{Lanes, Record};

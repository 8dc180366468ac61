//! movie_treemap
//!
//! A small Rust library for fetching movie revenue data, laying it out as a
//! squarified treemap, and rendering it to SVG, an HTML page, or a PNG preview.
//! Pairs with the `treemap` CLI, which can also serve the page over HTTP.
//!
//! ### Features
//! - Fetch the dataset (blocking HTTP with retries) or load it from a file
//! - Deterministic hierarchy sort and squarified layout
//! - SVG tiles with `class`/`data-*` conventions, wrapped labels, legend, tooltips
//! - Per-genre summary statistics, JSON/CSV export
//! - Static file server with request logging and permissive CORS
//!
//! ### Example
//! ```no_run
//! use movie_treemap::{Client, viz};
//!
//! let dataset = Client::default().fetch()?;
//! let rendered = viz::render(&dataset, &viz::RenderConfig::default());
//! viz::save(&rendered, "index.html", &Default::default(), None)?;
//! let stats = movie_treemap::stats::category_summary(&rendered.hierarchy);
//! println!("{:#?}", stats);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod hierarchy;
pub mod layout;
pub mod models;
pub mod page;
pub mod server;
pub mod stats;
pub mod storage;
pub mod viz;

pub use api::{Client, FetchError};
pub use hierarchy::{Hierarchy, NodeId};
pub use layout::{Layout, LeafTile, TileRect};
pub use models::{DatasetError, DatasetNode};

//! Presentation of Vastu evaluations.
//!
//! - [`Report`]: fixed-layout plain-text report (header, dimensions,
//!   Aayadi table, recommendations)
//! - [`CompassSvg`]: the 16-sector compass as an SVG document, with the
//!   entrance sector highlighted

pub mod compass;
pub mod report;

pub use compass::{CompassSvg, DEFAULT_COMPASS_SIZE};
pub use report::{DEFAULT_REPORT_WIDTH, REPORT_TITLE, Report, wrap_words};

//! # CLI Module
//!
//! User facing commands of sporlyze. The CLI layer owns everything the core
//! stays silent about: spinners while the catalog is queried, status lines
//! through the crate's output macros, printing and writing of the rendered
//! reports.
//!
//! ```text
//! CLI Layer (analyse)
//!     ↓
//! Acquisition (spotify::playlist, spotify::features)
//!     ↓
//! Statistics (stats::PlaylistAnalysis)
//!     ↓
//! Report (report::render, report::FileOutput)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! sporlyze analyse 37i9dQZF1DXcBWIGoYBM5M -v           # print summary
//! sporlyze analyse ID1,ID2 -d 2 -o ~/reports           # write full reports
//! ```

mod analyse;

pub use analyse::{OutputOptions, analyse, analyse_playlist};

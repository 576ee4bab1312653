//! # Complexity Core
//!
//! Textbook algorithms that make asymptotic complexity classes observable.
//!
//! Two independent demo units share a base sequence `[0, 1, ..., N-1]`:
//!
//! - **Time**: five operations of increasing running time, each timed
//! - **Space**: five operations of increasing auxiliary memory, each sampled
//!
//! ## Quick Start
//!
//! ```rust
//! use complexity_core::{SpaceComplexityDemo, TimeComplexityDemo};
//!
//! let time = TimeComplexityDemo::new(5);
//! assert_eq!(time.linear_sum(), 10);
//! assert_eq!(time.binary_search(3), Some(3));
//!
//! let space = SpaceComplexityDemo::new(5);
//! assert_eq!(space.quadratic_space_operation(), vec![vec![0; 5]; 5]);
//! ```
//!
//! Nothing runs on load. Drive the demos through [`TimeComplexityDemo::run`]
//! and [`SpaceComplexityDemo::report`], or the `complexity` binary.

pub mod complexity;
pub mod config;
pub mod error;
pub mod sequence;
pub mod space_demo;
pub mod time_demo;
pub mod timing;

// Re-export commonly used types for easy access
pub use complexity::Complexity;
pub use config::DemoConfig;
pub use error::{ComplexityError, ComplexityResult};
pub use sequence::{base_sequence, Element, NOT_FOUND};
pub use space_demo::{
    merge_sort, merge_sort_by, merge_sort_traced, AllocationTrace, SpaceComplexityDemo,
    SpaceReport, DEFAULT_SAMPLE_LEN,
};
pub use time_demo::{Measurement, TimeComplexityDemo, TimeReport};
pub use timing::{
    format_millis, measure, measure_repeated, measure_time, measure_time_with, timing_line, Timed,
    TimingStats,
};

//! Work done by 2D force fields along circular paths.
//!
//! `fieldwork` is the numeric kernel behind line-integral visualizations: a
//! particle held on a circle while a vector field pushes it, and the
//! Riemann-sum pieces of the work integral along that circle. Rendering is
//! left to the caller; everything here is plain values in, plain values out.
//!
//! # Features
//!
//! - **Constrained integration**: semi-implicit Euler with sub-steps, circle
//!   projection, tangential velocity, and per-sub-step drag
//! - **Work partitioning**: right-endpoint work per segment with the matching
//!   `width × height == work` rectangle
//! - **Runs**: circular path sampling and accumulation of work, arc length,
//!   plot points, and rectangles
//! - **Named fields**: `assigned`, `assigned-shift`, `textbook`, or any closure
//! - **Observable**: monitor sub-steps via the `StepObserver` trait, or log
//!   them with `TracingObserver`
//! - **`no_std` compatible**: disable the default `std` feature
//!
//! # Example
//!
//! ```
//! use fieldwork::{ConstrainedIntegrator, FieldKind, IntegratorConfig, NoOpStepObserver, ParticleState, Vec2};
//!
//! let config = IntegratorConfig::<f64>::new().with_radius(2.0).with_sub_steps(10);
//! let integrator = ConstrainedIntegrator::new(config).unwrap();
//! let mut state = ParticleState::new(Vec2::new(2.0, 0.0), Vec2::new(0.0, 10.0));
//!
//! integrator.advance(&mut state, 0.1, &FieldKind::Assigned, &mut NoOpStepObserver).unwrap();
//! assert!((state.position.length() - 2.0).abs() < 1e-9);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod field;
pub mod state;
pub mod config;
pub mod integrator;
pub mod partition;
pub mod path;
pub mod run;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use field::{FieldFn, FieldKind, ForceField, UnknownField, ZeroField};
pub use state::{launch_speed, ParticleState};
pub use config::IntegratorConfig;
pub use integrator::{advance, ConstrainedIntegrator};
pub use partition::{partition, WorkRectangle, WorkSample};
pub use path::{ArcSamples, CirclePath};
pub use run::{integrate_along, RunSummary, WorkAccumulator};
pub use observer::{NoOpStepObserver, StepObserver, TracingObserver};
pub use error::{ErrorKind, FieldError};

//! # hammdist — Hamming Distance as a Scalar Function
//!
//! Computes the Hamming distance (count of differing bits) between two binary
//! strings of arbitrary, possibly unequal length, and packages it as a scalar
//! function a host query engine can register and call.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: [`distance`] is a total function over byte slices — no
//!    state, no I/O, no failure modes
//! 2. **One operation, two branches**: the 8-byte fast path and the general
//!    byte-wise path live in one function so their agreement is structural
//! 3. **Swappable popcount**: hardware intrinsic by default, SWAR bit-trick
//!    behind the `portable-popcount` feature, identical results either way
//! 4. **Null in, null out**: an absent operand yields no result, never an
//!    error — the boundary decision stays out of the core
//!
//! ## Quick Start
//!
//! ```rust
//! use hammdist::{distance, FunctionRegistry, Value};
//!
//! # fn example() -> hammdist::Result<()> {
//! // Call the core directly...
//! assert_eq!(distance(&[0x0F], &[0x00]), 4);
//!
//! // ...or through the registry, the way a host engine would.
//! let registry = FunctionRegistry::default();
//! let result = registry.dispatch(
//!     "hamming_distance",
//!     &[Value::from(&[0u8; 8][..]), Value::from(&[0xFFu8; 8][..])],
//! )?;
//! assert_eq!(result, Value::Int(64));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Popcount Strategies
//!
//! | Strategy | Feature | Description |
//! |----------|---------|-------------|
//! | Hardware | (default) | `count_ones()`, lowers to `popcnt` where available |
//! | Portable | `portable-popcount` | SWAR multiply-fold, no instruction dependence |

// ============================================================================
// Modules
// ============================================================================

pub mod distance;
pub mod function;
pub mod popcount;
pub mod value;

// ============================================================================
// Re-exports: Core
// ============================================================================

pub use distance::distance;
pub use popcount::{popcount8, popcount64};

// ============================================================================
// Re-exports: Boundary
// ============================================================================

pub use function::{FunctionRegistry, HammingDistance, ScalarFunction};
pub use value::Value;

// ============================================================================
// Error Types
// ============================================================================

/// Errors surfaced at the function boundary. The distance core itself never
/// fails; everything here is about how a host handed arguments across.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Arity error: {name} takes {expected} arguments, got {got}")]
    ArityError {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

pub type Result<T> = std::result::Result<T, Error>;

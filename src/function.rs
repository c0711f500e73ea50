//! Scalar-function boundary adapter and registry.
//!
//! The host query engine hands each call's arguments across as [`Value`]s and
//! consumes a [`Value`] result. Policy at this boundary: an absent operand
//! (`Value::Null`) produces `Value::Null` — no result, not an error — so a
//! missing blob never aborts the enclosing query. A present operand of the
//! wrong type is a genuine caller bug and does error.

use hashbrown::HashMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::distance::distance;
use crate::value::Value;
use crate::{Error, Result};

// ============================================================================
// ScalarFunction trait
// ============================================================================

/// A named, fixed-arity function callable from a host query engine.
pub trait ScalarFunction: Send + Sync {
    fn name(&self) -> &'static str;

    fn arity(&self) -> usize;

    /// Identical present inputs always produce identical output. Declared so
    /// the host may cache or fold repeated calls.
    fn deterministic(&self) -> bool {
        true
    }

    /// Evaluate the function. `args.len()` equals `arity()` when called
    /// through [`FunctionRegistry::dispatch`]; direct callers are checked too.
    fn invoke(&self, args: &[Value]) -> Result<Value>;
}

// ============================================================================
// hamming_distance(a, b) → Int
// ============================================================================

/// `hamming_distance(a: Bytes, b: Bytes) -> Int` — count of differing bits,
/// with unequal lengths compared against implicit zero padding.
pub struct HammingDistance;

impl ScalarFunction for HammingDistance {
    fn name(&self) -> &'static str {
        "hamming_distance"
    }

    fn arity(&self) -> usize {
        2
    }

    fn invoke(&self, args: &[Value]) -> Result<Value> {
        if args.len() != self.arity() {
            return Err(Error::ArityError {
                name: self.name().to_string(),
                expected: self.arity(),
                got: args.len(),
            });
        }

        // Absent operand → no result.
        if args.iter().any(Value::is_null) {
            return Ok(Value::Null);
        }

        let a = args[0].as_bytes().ok_or_else(|| Error::TypeError {
            expected: "BYTES".into(),
            got: args[0].type_name().into(),
        })?;
        let b = args[1].as_bytes().ok_or_else(|| Error::TypeError {
            expected: "BYTES".into(),
            got: args[1].type_name().into(),
        })?;

        // A distance needing more than i64 would take an ~10^18-byte blob.
        Ok(Value::Int(distance(a, b) as i64))
    }
}

// ============================================================================
// Function registry
// ============================================================================

/// Name → function map a host engine registers its scalar functions in.
pub struct FunctionRegistry {
    functions: RwLock<HashMap<String, Box<dyn ScalarFunction>>>,
}

impl FunctionRegistry {
    /// Registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            functions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a function under its own name, replacing any previous one.
    pub fn register(&self, function: Box<dyn ScalarFunction>) {
        self.functions
            .write()
            .insert(function.name().to_string(), function);
    }

    /// Whether `name` is registered and declared deterministic.
    pub fn is_deterministic(&self, name: &str) -> Option<bool> {
        self.functions.read().get(name).map(|f| f.deterministic())
    }

    /// Dispatch a call to the named function.
    pub fn dispatch(&self, name: &str, args: &[Value]) -> Result<Value> {
        let functions = self.functions.read();
        let function = functions
            .get(name)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))?;

        if args.len() != function.arity() {
            return Err(Error::ArityError {
                name: name.to_string(),
                expected: function.arity(),
                got: args.len(),
            });
        }

        trace!(function = name, argc = args.len(), "dispatching scalar function");
        function.invoke(args)
    }
}

/// Registry with the shipped functions pre-registered.
impl Default for FunctionRegistry {
    fn default() -> Self {
        let registry = Self::empty();
        registry.register(Box::new(HammingDistance));
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invoke_bytes() {
        let f = HammingDistance;
        let out = f
            .invoke(&[Value::from(&[0x0Fu8][..]), Value::from(&[0x00u8][..])])
            .unwrap();
        assert_eq!(out, Value::Int(4));
    }

    #[test]
    fn test_null_operand_yields_null() {
        let f = HammingDistance;
        assert_eq!(
            f.invoke(&[Value::Null, Value::from(&[0xFFu8][..])]).unwrap(),
            Value::Null
        );
        assert_eq!(f.invoke(&[Value::Null, Value::Null]).unwrap(), Value::Null);
    }

    #[test]
    fn test_wrong_type_errors() {
        let f = HammingDistance;
        let err = f
            .invoke(&[Value::Int(1), Value::from(&[0u8][..])])
            .unwrap_err();
        assert!(matches!(err, Error::TypeError { .. }));
    }

    #[test]
    fn test_wrong_arity_errors() {
        let f = HammingDistance;
        let err = f.invoke(&[Value::from(&[0u8][..])]).unwrap_err();
        assert!(matches!(
            err,
            Error::ArityError { expected: 2, got: 1, .. }
        ));
    }

    #[test]
    fn test_registry_dispatch() {
        let registry = FunctionRegistry::default();
        let out = registry
            .dispatch(
                "hamming_distance",
                &[Value::from(&[0x00u8; 8][..]), Value::from(&[0xFFu8; 8][..])],
            )
            .unwrap();
        assert_eq!(out, Value::Int(64));
    }

    #[test]
    fn test_registry_unknown_function() {
        let registry = FunctionRegistry::default();
        let err = registry.dispatch("levenshtein", &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownFunction(_)));
    }

    #[test]
    fn test_determinism_declared() {
        let registry = FunctionRegistry::default();
        assert_eq!(registry.is_deterministic("hamming_distance"), Some(true));
        assert_eq!(registry.is_deterministic("levenshtein"), None);
    }
}

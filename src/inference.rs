//! Shape inference over a single JSON sample.
//!
//! Walk a parsed `serde_json::Value` once and build an `ir::Ty` that mirrors
//! its structure. Every value has a shape, so inference cannot fail:
//! - `null` and empty arrays degrade to `any` / `any[]`.
//! - Arrays are typed from their **first** element only. Later elements are
//!   never looked at, even when they disagree.
//! - Object fields keep the key order of the source document
//!   (`serde_json` is built with `preserve_order`).
use serde_json::{Map, Value};

use crate::codegen::{self, Indent};
use crate::ir::{Field, Ty};

// ------------------------------ Observe ---------------------------------- //

// grow the stack on demand; depth follows the document
pub(crate) const RED_ZONE: usize = 64 * 1024;
pub(crate) const STACK_CHUNK: usize = 1024 * 1024;

pub fn infer(v: &Value) -> Ty {
    stacker::maybe_grow(RED_ZONE, STACK_CHUNK, || infer_inner(v))
}

fn infer_inner(v: &Value) -> Ty {
    match v {
        Value::Null => Ty::Any,
        Value::Bool(_) => Ty::Boolean,
        Value::Number(_) => Ty::Number,
        Value::String(_) => Ty::String,
        Value::Array(xs) => infer_array(xs),
        Value::Object(m) => infer_object(m),
    }
}

fn infer_array(xs: &[Value]) -> Ty {
    // sample the head; heterogeneous tails are not reconciled
    let item = xs.first().map(infer).unwrap_or(Ty::Any);
    Ty::Array(Box::new(item))
}

fn infer_object(map: &Map<String, Value>) -> Ty {
    let fields = map
        .iter()
        .map(|(k, v)| Field { name: k.clone(), ty: infer(v) })
        .collect();
    Ty::Object { fields }
}

// ------------------------------- Front API -------------------------------- //

/// Infer and render in one step: the type expression of `v` as it would
/// appear `depth` levels deep inside a declaration.
pub fn infer_type_expr(v: &Value, depth: usize, indent: Indent) -> String {
    codegen::render_type(&infer(v), depth, indent)
}

// ------------------------------- Tests ------------------------------------ //

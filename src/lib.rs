//! Infer TypeScript declarations from sample JSON documents.
//!
//! ```
//! use json_tsj::codegen::Style;
//! use serde_json::json;
//!
//! let out = json_tsj::driver::generate("Users", &json!([{"id": 1}]), &Style::default());
//! assert_eq!(out, "interface UsersItem {\n  id: number;\n}\n\ntype Users = UsersItem[];");
//! ```
pub mod cli;
pub mod codegen;
pub mod driver;
pub mod error;
pub mod inference;
pub mod ir;
pub mod naming;
pub mod path_de;

pub use error::{Error, Result};

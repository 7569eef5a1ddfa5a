// Typed shape handed from inference to codegen. No serde_json::Value here.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    Any,                     // null, or nothing to sample from
    String,
    Number,
    Boolean,
    Array(Box<Ty>),          // item type sampled from the first element
    Object {
        fields: Vec<Field>,  // source key order, never sorted
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: Ty,
}

impl Ty {
    pub fn is_object(&self) -> bool {
        matches!(self, Ty::Object { .. })
    }
}

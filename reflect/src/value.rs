//! Tagged argument values for reflective invocation.
//!
//! Every parameter and return type the invoker can handle is identified by
//! an [`ArgKind`] tag and carried as an [`ArgValue`]. Types outside the
//! supported set are tagged [`ArgKind::Opaque`]; no value ever carries that
//! tag, which is what makes exact kind-sequence matching sufficient for
//! method resolution.

use std::fmt;

/// Opaque, nullable handle to an engine object.
///
/// Stands in for the host object model's reference type. The invoker never
/// dereferences it; it only stores and forwards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// The null handle. Default value for handle-typed parameters.
    pub const NULL: ObjectId = ObjectId(u64::MAX);

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "null")
        } else {
            write!(f, "Object({})", self.0)
        }
    }
}

/// Capability tag for a parameter or return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// Owned string.
    Text,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Boolean flag.
    Bool,
    /// Engine object handle.
    Handle,
    /// Any type outside the supported set. Never carried by an [`ArgValue`].
    Opaque,
}

impl ArgKind {
    /// The default value a freshly-seen parameter of this kind starts at.
    ///
    /// `None` for [`ArgKind::Opaque`]: there is no value representation for
    /// unsupported types.
    pub fn default_value(self) -> Option<ArgValue> {
        match self {
            ArgKind::Text => Some(ArgValue::Text(String::new())),
            ArgKind::Int => Some(ArgValue::Int(0)),
            ArgKind::Float => Some(ArgValue::Float(0.0)),
            ArgKind::Bool => Some(ArgValue::Bool(false)),
            ArgKind::Handle => Some(ArgValue::Handle(ObjectId::NULL)),
            ArgKind::Opaque => None,
        }
    }
}

/// A concrete argument or return value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Handle(ObjectId),
}

impl ArgValue {
    /// The kind tag of this value. Never [`ArgKind::Opaque`].
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::Text(_) => ArgKind::Text,
            ArgValue::Int(_) => ArgKind::Int,
            ArgValue::Float(_) => ArgKind::Float,
            ArgValue::Bool(_) => ArgKind::Bool,
            ArgValue::Handle(_) => ArgKind::Handle,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Text(s) => write!(f, "{s:?}"),
            ArgValue::Int(v) => write!(f, "{v}"),
            ArgValue::Float(v) => write!(f, "{v}"),
            ArgValue::Bool(v) => write!(f, "{v}"),
            ArgValue::Handle(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_kinds() {
        assert_eq!(ArgValue::Text("x".into()).kind(), ArgKind::Text);
        assert_eq!(ArgValue::Int(3).kind(), ArgKind::Int);
        assert_eq!(ArgValue::Float(0.5).kind(), ArgKind::Float);
        assert_eq!(ArgValue::Bool(true).kind(), ArgKind::Bool);
        assert_eq!(ArgValue::Handle(ObjectId(7)).kind(), ArgKind::Handle);
    }

    #[test]
    fn kind_defaults() {
        assert_eq!(
            ArgKind::Text.default_value(),
            Some(ArgValue::Text(String::new()))
        );
        assert_eq!(ArgKind::Int.default_value(), Some(ArgValue::Int(0)));
        assert_eq!(ArgKind::Float.default_value(), Some(ArgValue::Float(0.0)));
        assert_eq!(ArgKind::Bool.default_value(), Some(ArgValue::Bool(false)));
        assert_eq!(
            ArgKind::Handle.default_value(),
            Some(ArgValue::Handle(ObjectId::NULL))
        );
        assert_eq!(ArgKind::Opaque.default_value(), None);
    }

    #[test]
    fn null_handle() {
        assert!(ObjectId::NULL.is_null());
        assert!(!ObjectId(0).is_null());
        assert_eq!(ObjectId::default(), ObjectId::NULL);
    }
}

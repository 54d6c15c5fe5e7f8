//! Value types used by rule payloads and form fields

pub mod value;
pub mod value_type;

pub use value::Value;
pub use value_type::ValueType;

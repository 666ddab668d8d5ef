// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The closed set of SDL values, and coercion from host types into it.

pub(crate) mod binary;
pub(crate) mod char;
pub(crate) mod date;
pub(crate) mod datetime;
pub(crate) mod number;
pub(crate) mod string;
pub(crate) mod timespan;

use bigdecimal::BigDecimal;

pub use date::Date;
pub use datetime::DateTime;
pub use timespan::TimeSpan;

use crate::error::CoercionError;

/// One SDL value. Exactly the thirteen variants the grammar defines; there is no escape hatch to
/// store an arbitrary host type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Str(String),
    Char(char),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Decimal(BigDecimal),
    Binary(Vec<u8>),
    Date(Date),
    DateTime(DateTime),
    TimeSpan(TimeSpan),
}

/// Coerces a host value into the closed `Value` set (`coerce_or_fail` in the design).
///
/// This crate implements `IntoValue` only for the host types the specification lists; passing
/// anything else is a compile error, which is the static analogue of the runtime `CoercionError`
/// a dynamically typed host language would raise. The `Result` return type is kept (rather than
/// an infallible conversion) for symmetry with that contract and to leave room for a future
/// fallible host type without a breaking signature change.
pub trait IntoValue {
    fn into_value(self) -> Result<Value, CoercionError>;
}

impl IntoValue for Value {
    fn into_value(self) -> Result<Value, CoercionError> {
        Ok(self)
    }
}

macro_rules! impl_into_value_infallible {
    ($host:ty, $variant:expr) => {
        impl IntoValue for $host {
            fn into_value(self) -> Result<Value, CoercionError> {
                Ok($variant(self))
            }
        }
    };
}

impl_into_value_infallible!(bool, Value::Bool);
impl_into_value_infallible!(char, Value::Char);
impl_into_value_infallible!(i32, Value::Int32);
impl_into_value_infallible!(i64, Value::Int64);
impl_into_value_infallible!(f32, Value::Float32);
impl_into_value_infallible!(f64, Value::Float64);
impl_into_value_infallible!(Vec<u8>, Value::Binary);
impl_into_value_infallible!(Date, Value::Date);
impl_into_value_infallible!(DateTime, Value::DateTime);
impl_into_value_infallible!(TimeSpan, Value::TimeSpan);
impl_into_value_infallible!(BigDecimal, Value::Decimal);

impl IntoValue for String {
    fn into_value(self) -> Result<Value, CoercionError> {
        Ok(Value::Str(self))
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Result<Value, CoercionError> {
        Ok(Value::Str(self.to_string()))
    }
}

// Narrow signed/unsigned integers widen to Int32.
impl IntoValue for i8 {
    fn into_value(self) -> Result<Value, CoercionError> {
        Ok(Value::Int32(self as i32))
    }
}
impl IntoValue for u8 {
    fn into_value(self) -> Result<Value, CoercionError> {
        Ok(Value::Int32(self as i32))
    }
}
impl IntoValue for i16 {
    fn into_value(self) -> Result<Value, CoercionError> {
        Ok(Value::Int32(self as i32))
    }
}
impl IntoValue for u16 {
    fn into_value(self) -> Result<Value, CoercionError> {
        Ok(Value::Int32(self as i32))
    }
}

// Unsigned 32-bit widens to Int64, since it may exceed i32::MAX.
impl IntoValue for u32 {
    fn into_value(self) -> Result<Value, CoercionError> {
        Ok(Value::Int64(self as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_integers_widen_to_int32() {
        assert_eq!((1i8).into_value().unwrap(), Value::Int32(1));
        assert_eq!((2u8).into_value().unwrap(), Value::Int32(2));
        assert_eq!((3i16).into_value().unwrap(), Value::Int32(3));
        assert_eq!((4u16).into_value().unwrap(), Value::Int32(4));
    }

    #[test]
    fn unsigned_32_widens_to_int64() {
        assert_eq!((5u32).into_value().unwrap(), Value::Int64(5));
    }

    #[test]
    fn value_passes_through_unchanged() {
        assert_eq!(Value::Null.into_value().unwrap(), Value::Null);
    }
}

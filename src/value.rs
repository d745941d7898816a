use std::borrow::Cow;

use smol_str::SmolStr;

use crate::{
    dialect::Dialect,
    error::{Error, Result},
};

/// A literal handed to a predicate placeholder or a column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    StaticString(&'static str),
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    #[cfg(feature = "json")]
    Json(serde_json::Value),
}

impl Value {
    pub fn from_static(value: &'static str) -> Self {
        Self::StaticString(value)
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            #[cfg(feature = "json")]
            Self::Json(serde_json::Value::Null) => true,
            _ => false,
        }
    }

    /// Display text of the value, `None` for null.
    pub fn text(&self) -> Result<Option<Cow<'_, str>>> {
        let text = match self {
            Self::Null => return Ok(None),
            Self::String(value) => Cow::Borrowed(value.as_str()),
            Self::StaticString(value) => Cow::Borrowed(*value),
            Self::Bool(value) => Cow::Borrowed(if *value { "true" } else { "false" }),
            Self::I32(value) => Cow::Owned(value.to_string()),
            Self::I64(value) => Cow::Owned(value.to_string()),
            Self::U32(value) => Cow::Owned(value.to_string()),
            Self::U64(value) => Cow::Owned(value.to_string()),
            Self::F32(value) => finite(*value as f64, || value.to_string())?,
            Self::F64(value) => finite(*value, || value.to_string())?,
            #[cfg(feature = "json")]
            Self::Json(value) => return json_text(value),
        };
        Ok(Some(text))
    }

    /// Renders the value as SQL literal text under `dialect`.
    pub fn to_literal(&self, dialect: Dialect) -> Result<String> {
        match self.text()? {
            Some(text) => Ok(dialect.quote_value(&text)),
            None => Ok(String::from("NULL")),
        }
    }
}

fn finite<F>(value: f64, display: F) -> Result<Cow<'static, str>>
where
    F: FnOnce() -> String,
{
    if value.is_finite() {
        Ok(Cow::Owned(display()))
    } else {
        Err(Error::type_mismatch("finite number", display()))
    }
}

#[cfg(feature = "json")]
fn json_text(value: &serde_json::Value) -> Result<Option<Cow<'_, str>>> {
    use serde_json::Value as Json;

    match value {
        Json::Null => Ok(None),
        Json::Bool(value) => Ok(Some(Cow::Borrowed(if *value { "true" } else { "false" }))),
        Json::Number(number) => Ok(Some(Cow::Owned(number.to_string()))),
        Json::String(value) => Ok(Some(Cow::Borrowed(value.as_str()))),
        Json::Array(_) => Err(Error::type_mismatch("scalar json value", "array")),
        Json::Object(_) => Err(Error::type_mismatch("scalar json value", "object")),
    }
}

pub type Values = Array<Value>;

// keeps the common zero/one value cases off the heap
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Array<T> {
    #[default]
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Array<T> {
    pub fn append(&mut self, other: Self) {
        let combined = match (std::mem::take(self), other) {
            (Self::None, items) | (items, Self::None) => items,
            (Self::One(a), Self::One(b)) => Self::Many(vec![a, b]),
            (Self::One(a), Self::Many(mut b)) => {
                b.insert(0, a);
                Self::Many(b)
            }
            (Self::Many(mut a), Self::One(b)) => {
                a.push(b);
                Self::Many(a)
            }
            (Self::Many(mut a), Self::Many(mut b)) => {
                a.append(&mut b);
                Self::Many(a)
            }
        };
        *self = combined;
    }

    pub fn push(&mut self, item: T) {
        self.append(Self::One(item));
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::None => <&[T]>::default().iter(),
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::None => Vec::new(),
            Self::One(one) => vec![one],
            Self::Many(many) => many,
        }
    }
}

pub trait IntoValue {
    fn into_value(self) -> Value;
}

pub trait IntoValues {
    fn into_values(self) -> Values;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl<T> IntoValue for Option<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}

macro_rules! impl_into_value {
    ($($ty:ty => $variant:ident as $target:ty),+ $(,)?) => {
        $(
            impl IntoValue for $ty {
                #[inline]
                fn into_value(self) -> Value {
                    Value::$variant(self as $target)
                }
            }
        )+
    };
}

impl_into_value! {
    i8 => I32 as i32,
    i16 => I32 as i32,
    i32 => I32 as i32,
    i64 => I64 as i64,
    isize => I64 as i64,
    u8 => U32 as u32,
    u16 => U32 as u32,
    u32 => U32 as u32,
    u64 => U64 as u64,
    usize => U64 as u64,
    f32 => F32 as f32,
    f64 => F64 as f64,
}

impl IntoValue for bool {
    #[inline]
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for &str {
    #[inline]
    fn into_value(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl IntoValue for &String {
    #[inline]
    fn into_value(self) -> Value {
        Value::String(self.clone())
    }
}

impl IntoValue for String {
    #[inline(always)]
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for Cow<'_, str> {
    #[inline]
    fn into_value(self) -> Value {
        Value::String(self.into_owned())
    }
}

impl IntoValue for SmolStr {
    #[inline]
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

#[cfg(feature = "chrono")]
impl IntoValue for chrono::NaiveDate {
    fn into_value(self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

#[cfg(feature = "chrono")]
impl IntoValue for chrono::NaiveTime {
    fn into_value(self) -> Value {
        Value::String(self.format("%H:%M:%S%.f").to_string())
    }
}

#[cfg(feature = "chrono")]
impl IntoValue for chrono::NaiveDateTime {
    fn into_value(self) -> Value {
        Value::String(self.format("%Y-%m-%d %H:%M:%S%.f").to_string())
    }
}

#[cfg(feature = "chrono")]
impl IntoValue for chrono::DateTime<chrono::Utc> {
    fn into_value(self) -> Value {
        Value::String(self.format("%Y-%m-%d %H:%M:%S%.f%:z").to_string())
    }
}

#[cfg(feature = "uuid")]
impl IntoValue for uuid::Uuid {
    fn into_value(self) -> Value {
        Value::String(self.hyphenated().to_string())
    }
}

#[cfg(feature = "json")]
impl IntoValue for serde_json::Value {
    fn into_value(self) -> Value {
        Value::Json(self)
    }
}

impl IntoValues for Values {
    fn into_values(self) -> Values {
        self
    }
}

impl IntoValues for () {
    fn into_values(self) -> Values {
        Values::None
    }
}

impl<T> IntoValues for T
where
    T: IntoValue,
{
    fn into_values(self) -> Values {
        Values::One(self.into_value())
    }
}

impl<T> IntoValues for Vec<T>
where
    T: IntoValue,
{
    fn into_values(self) -> Values {
        Values::Many(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T, const N: usize> IntoValues for [T; N]
where
    T: IntoValue,
{
    fn into_values(self) -> Values {
        let mut iter = self.into_iter().map(IntoValue::into_value);
        match N {
            0 => Values::None,
            1 => iter.next().map_or(Values::None, Values::One),
            _ => Values::Many(iter.collect()),
        }
    }
}

macro_rules! impl_into_values_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoValue),+> IntoValues for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_values(self) -> Values {
                let ($($name,)+) = self;
                Values::Many(vec![$($name.into_value()),+])
            }
        }
    };
}

impl_into_values_tuple!(A, B);
impl_into_values_tuple!(A, B, C);
impl_into_values_tuple!(A, B, C, D);
impl_into_values_tuple!(A, B, C, D, E);
impl_into_values_tuple!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_per_type() {
        assert_eq!("'10000'", 10000i32.into_value().to_literal(Dialect::MySql).unwrap());
        assert_eq!("'zwc'", "zwc".into_value().to_literal(Dialect::MySql).unwrap());
        assert_eq!("'true'", true.into_value().to_literal(Dialect::Sqlite).unwrap());
        assert_eq!("'1.5'", 1.5f64.into_value().to_literal(Dialect::Postgres).unwrap());
        assert_eq!("NULL", None::<i32>.into_value().to_literal(Dialect::MySql).unwrap());
    }

    #[test]
    fn test_non_finite_float_is_type_mismatch() {
        let err = f64::NAN.into_value().to_literal(Dialect::MySql).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { expected: "finite number", .. }));
        let err = f32::INFINITY.into_value().to_literal(Dialect::MySql).unwrap_err();
        assert_eq!(Error::type_mismatch("finite number", "inf"), err);
    }

    #[test]
    fn test_into_values_shapes() {
        assert_eq!(0, ().into_values().len());
        assert_eq!(1, 5i32.into_values().len());
        assert_eq!(1, [5i32].into_values().len());
        assert_eq!(3, [1i32, 2, 3].into_values().len());
        assert_eq!(2, vec!["a", "b"].into_values().len());
        let values = (1i32, "two", None::<bool>).into_values();
        assert_eq!(
            vec![Value::I32(1), Value::String("two".into()), Value::Null],
            values.into_vec()
        );
    }

    #[test]
    fn test_array_append() {
        let mut values = Values::None;
        values.push(Value::I32(1));
        assert!(matches!(values, Array::One(_)));
        values.append(Values::Many(vec![Value::I32(2), Value::I32(3)]));
        assert_eq!(3, values.len());
        let collected: Vec<_> = values.iter().cloned().collect();
        assert_eq!(vec![Value::I32(1), Value::I32(2), Value::I32(3)], collected);
        assert!(values.take().len() == 3 && values.is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_values() {
        let value = serde_json::json!("text").into_value();
        assert_eq!("'text'", value.to_literal(Dialect::MySql).unwrap());
        let value = serde_json::json!(null).into_value();
        assert!(value.is_null());
        let err = serde_json::json!([1, 2]).into_value().to_literal(Dialect::MySql).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_uuid_value() {
        let value = uuid::Uuid::nil().into_value();
        assert_eq!(
            "'00000000-0000-0000-0000-000000000000'",
            value.to_literal(Dialect::Sqlite).unwrap()
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_value() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!("'2024-02-29'", date.into_value().to_literal(Dialect::MySql).unwrap());
    }
}

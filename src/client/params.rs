use crate::date_time::{DateTime, UtcDate};
use std::borrow::Cow;

/// Outbound request parameters.
///
/// Names are the exact, case-sensitive Alpaca tokens (`RightAscension`, not `right_ascension`).
/// Entries keep their insertion order and are sent as the query string of a GET or the
/// form-encoded body of a PUT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(Cow<'static, str>, String)>);

impl Params {
    /// Create an empty parameter list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter.
    ///
    /// Sequences add one entry per element under the same name.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl ASCOMParam) {
        value.append_to(name.into(), self);
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl ASCOMParam) -> Self {
        self.insert(name, value);
        self
    }

    /// Append an already-encoded value.
    pub fn push_raw(&mut self, name: Cow<'static, str>, value: String) {
        self.0.push((name, value));
    }

    /// Iterate over `(name, encoded value)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A value that can be sent as an Alpaca request parameter.
///
/// Requests are form-encoded, not JSON, so values are rendered the way Alpaca servers parse them:
/// booleans as `True` / `False`, enums as their integer value.
pub trait ASCOMParam {
    /// Append the encoded value(s) to `params` under `name`.
    fn append_to(self, name: Cow<'static, str>, params: &mut Params);
}

impl ASCOMParam for bool {
    fn append_to(self, name: Cow<'static, str>, params: &mut Params) {
        params.push_raw(name, (if self { "True" } else { "False" }).to_owned());
    }
}

macro_rules! simple_ascom_param {
    ($($ty:ty),*) => {
        $(
            impl ASCOMParam for $ty {
                fn append_to(self, name: Cow<'static, str>, params: &mut Params) {
                    params.push_raw(name, ToString::to_string(&self));
                }
            }
        )*
    };
}

simple_ascom_param!(i32, u32, i64, u64, f64, String, &str, &String, DateTime, UtcDate);

impl<T: ASCOMParam> ASCOMParam for Vec<T> {
    fn append_to(self, name: Cow<'static, str>, params: &mut Params) {
        for item in self {
            item.append_to(name.clone(), params);
        }
    }
}

impl<T: ASCOMParam + Copy> ASCOMParam for &[T] {
    fn append_to(self, name: Cow<'static, str>, params: &mut Params) {
        for &item in self {
            item.append_to(name.clone(), params);
        }
    }
}

/// Implements [`ASCOMParam`] for a `#[repr(i32)]` enum deriving `num_enum::IntoPrimitive`.
///
/// Use via `#[macro_rules_derive(ASCOMEnumParam)]`.
macro_rules! ASCOMEnumParam {
    ($(# $attr:tt)* $pub:vis enum $name:ident $variants:tt) => {
        impl $crate::client::ASCOMParam for $name {
            fn append_to(
                self,
                name: std::borrow::Cow<'static, str>,
                params: &mut $crate::client::Params,
            ) {
                let primitive: <Self as num_enum::TryFromPrimitive>::Primitive = self.into();
                $crate::client::ASCOMParam::append_to(primitive, name, params);
            }
        }
    };
}
pub(crate) use ASCOMEnumParam;

/// Build [`Params`] from `"Name": value` pairs.
macro_rules! params {
    ($($key:literal: $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut params = $crate::client::Params::new();
        $(params.insert($key, $value);)*
        params
    }};
}
pub(crate) use params;

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &Params) -> Vec<(&str, &str)> {
        params.iter().collect()
    }

    #[test]
    fn booleans_use_alpaca_tokens() {
        let params = params! { "Tracking": true, "Raw": false };

        assert_eq!(pairs(&params), [("Tracking", "True"), ("Raw", "False")]);
    }

    #[test]
    fn keeps_insertion_order() {
        let params = Params::new()
            .with("RightAscension", 5.5)
            .with("Declination", -12.25)
            .with("Command", "GR");

        assert_eq!(
            pairs(&params),
            [
                ("RightAscension", "5.5"),
                ("Declination", "-12.25"),
                ("Command", "GR"),
            ]
        );
    }

    #[test]
    fn sequences_repeat_the_name() {
        let params = params! { "Parameters": vec!["a", "b"], "Id": [1, 2].as_slice() };

        assert_eq!(
            pairs(&params),
            [
                ("Parameters", "a"),
                ("Parameters", "b"),
                ("Id", "1"),
                ("Id", "2"),
            ]
        );
    }

    #[test]
    fn timestamps_use_canonical_form() -> eyre::Result<()> {
        let date_time = DateTime::parse("2019-06-12T06:12:52.452")?;
        let params = params! { "UTCDate": date_time };

        assert_eq!(pairs(&params), [("UTCDate", "2019-06-12T06:12:52.452Z")]);

        Ok(())
    }
}

use std::{
    fmt::{
        self,
        Display,
    },
    str::FromStr,
};

use crate::error::LabelError;

// =============================================================================
// LabelValue
// =============================================================================

/// A value read from a metadata record by its column label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
}

// -----------------------------------------------------------------------------
// LabelValue - Standard Traits
// -----------------------------------------------------------------------------

impl Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for LabelValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i16> for LabelValue {
    fn from(value: i16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i32> for LabelValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for LabelValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for LabelValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for LabelValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<V> From<Option<V>> for LabelValue
where
    V: Into<Self>,
{
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// =============================================================================
// Labeled
// =============================================================================

/// Column-label access to the fields of a metadata record.
pub trait Labeled {
    const LABELS: &'static [&'static str];

    /// The value of the field labeled `label`, or `None` when no field
    /// carries that label.
    fn labeled(&self, label: &str) -> Option<LabelValue>;
}

// =============================================================================
// LabeledExt
// =============================================================================

#[allow(clippy::module_name_repetitions)]
pub trait LabeledExt: Labeled {
    fn labeled_value(&self, label: &str) -> Result<LabelValue, LabelError> {
        self.labeled(label).ok_or_else(|| LabelError::Unknown {
            label: label.to_owned(),
        })
    }

    /// Any non-boolean value reads as `true` only when its text is `true`,
    /// ignoring case.
    fn labeled_as_bool(&self, label: &str) -> Result<Option<bool>, LabelError> {
        match self.labeled_value(label)? {
            LabelValue::Null => Ok(None),
            LabelValue::Bool(value) => Ok(Some(value)),
            value => Ok(Some(value.to_string().eq_ignore_ascii_case("true"))),
        }
    }

    fn labeled_as_int(&self, label: &str) -> Result<Option<i32>, LabelError> {
        integer(label, self.labeled_value(label)?, "i32")
    }

    fn labeled_as_long(&self, label: &str) -> Result<Option<i64>, LabelError> {
        integer(label, self.labeled_value(label)?, "i64")
    }
}

// -----------------------------------------------------------------------------
// LabeledExt - Blanket Implementation
// -----------------------------------------------------------------------------

impl<T> LabeledExt for T where T: Labeled + ?Sized {}

fn integer<T>(label: &str, value: LabelValue, target: &'static str) -> Result<Option<T>, LabelError>
where
    T: TryFrom<i64> + FromStr,
{
    let converted = match &value {
        LabelValue::Null => return Ok(None),
        LabelValue::Bool(_) => None,
        LabelValue::Int(int) => T::try_from(*int).ok(),
        LabelValue::Text(text) => text.parse::<T>().ok(),
    };

    converted
        .map(Some)
        .ok_or_else(|| LabelError::NotConvertible {
            label: label.to_owned(),
            value: value.to_string(),
            target,
        })
}

#[cfg(test)]
mod labeled_tests {
    use super::{
        LabelValue,
        Labeled,
        LabeledExt,
    };
    use crate::error::LabelError;

    #[derive(Default)]
    struct Row {
        flag: Option<String>,
        size: Option<i64>,
        text: Option<String>,
        enabled: bool,
    }

    impl Labeled for Row {
        const LABELS: &'static [&'static str] = &["FLAG", "SIZE", "TEXT", "ENABLED"];

        fn labeled(&self, label: &str) -> Option<LabelValue> {
            match label {
                "FLAG" => Some(self.flag.clone().into()),
                "SIZE" => Some(self.size.into()),
                "TEXT" => Some(self.text.clone().into()),
                "ENABLED" => Some(self.enabled.into()),
                _ => None,
            }
        }
    }

    #[test]
    fn unknown_label() {
        let row = Row::default();

        assert_eq!(
            row.labeled_value("MISSING"),
            Err(LabelError::Unknown {
                label: String::from("MISSING")
            })
        );
        assert!(row.labeled_as_int("MISSING").is_err());
    }

    #[test]
    fn null_converts_to_none() {
        let row = Row::default();

        assert_eq!(row.labeled_value("SIZE"), Ok(LabelValue::Null));
        assert_eq!(row.labeled_as_bool("FLAG"), Ok(None));
        assert_eq!(row.labeled_as_int("SIZE"), Ok(None));
        assert_eq!(row.labeled_as_long("TEXT"), Ok(None));
    }

    #[test]
    fn as_bool() {
        let row = Row {
            flag: Some(String::from("TRUE")),
            text: Some(String::from("yes")),
            size: Some(1),
            enabled: true,
        };

        assert_eq!(row.labeled_as_bool("ENABLED"), Ok(Some(true)));
        assert_eq!(row.labeled_as_bool("FLAG"), Ok(Some(true)));
        assert_eq!(row.labeled_as_bool("TEXT"), Ok(Some(false)));
        assert_eq!(row.labeled_as_bool("SIZE"), Ok(Some(false)));
    }

    #[test]
    fn as_int_and_long() {
        let row = Row {
            size: Some(i64::from(i32::MAX) + 1),
            text: Some(String::from("42")),
            ..Row::default()
        };

        assert_eq!(row.labeled_as_int("TEXT"), Ok(Some(42)));
        assert_eq!(row.labeled_as_long("TEXT"), Ok(Some(42)));
        assert_eq!(row.labeled_as_long("SIZE"), Ok(Some(2_147_483_648)));
        assert!(matches!(
            row.labeled_as_int("SIZE"),
            Err(LabelError::NotConvertible { target: "i32", .. })
        ));
        assert!(matches!(
            row.labeled_as_int("ENABLED"),
            Err(LabelError::NotConvertible { .. })
        ));
    }

    #[test]
    fn padded_text_is_rejected() {
        let row = Row {
            text: Some(String::from(" 42 ")),
            ..Row::default()
        };

        assert_eq!(
            row.labeled_as_int("TEXT"),
            Err(LabelError::NotConvertible {
                label: String::from("TEXT"),
                value: String::from(" 42 "),
                target: "i32",
            })
        );
        assert!(row.labeled_as_long("TEXT").is_err());
    }

    #[test]
    fn unparsable_text() {
        let row = Row {
            text: Some(String::from("forty-two")),
            ..Row::default()
        };

        assert_eq!(
            row.labeled_as_long("TEXT"),
            Err(LabelError::NotConvertible {
                label: String::from("TEXT"),
                value: String::from("forty-two"),
                target: "i64",
            })
        );
    }
}

// SPDX-License-Identifier: Apache-2.0

// Hand written YAML (and YAML produced by older installer releases) may
// quote integers and booleans, hence the lenient visitors below.

use std::{marker::PhantomData, net::IpAddr, str::FromStr};

use serde::{
    Deserialize, Deserializer, de,
    de::{
        IntoDeserializer, Visitor,
        value::{StrDeserializer, StringDeserializer},
    },
};

pub(crate) fn u8_or_string<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    option_u64_or_string(deserializer).and_then(|i| match i {
        Some(i) => u8::try_from(i).map_err(de::Error::custom),
        None => Err(de::Error::custom("Required field undefined")),
    })
}

/// IP address string, rejected unless it parses as [IpAddr]. The notation
/// is kept as written.
pub(crate) fn ip_addr_string<'de, D>(
    deserializer: D,
) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    IpAddr::from_str(&value).map_err(|e| {
        de::Error::custom(format!("Invalid IP address {value}: {e}"))
    })?;
    Ok(value)
}

pub(crate) fn option_u16_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    option_u64_or_string(deserializer).and_then(|i| {
        i.map(|i| u16::try_from(i).map_err(de::Error::custom))
            .transpose()
    })
}

pub(crate) fn option_u32_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    option_u64_or_string(deserializer).and_then(|i| {
        i.map(|i| u32::try_from(i).map_err(de::Error::custom))
            .transpose()
    })
}

pub(crate) fn option_bool_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolOrString(PhantomData<fn() -> Option<bool>>);

    const EXPECTING: &str =
        "Need to be boolean: 1|0|true|false|yes|no|on|off|y|n";

    impl Visitor<'_> for BoolOrString {
        type Value = Option<bool>;

        fn expecting(
            &self,
            formatter: &mut std::fmt::Formatter,
        ) -> std::fmt::Result {
            formatter.write_str(EXPECTING)
        }

        fn visit_bool<E>(self, value: bool) -> Result<Option<bool>, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<bool>, E>
        where
            E: de::Error,
        {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" | "y" => Ok(Some(true)),
                "0" | "false" | "no" | "off" | "n" => Ok(Some(false)),
                _ => Err(de::Error::custom(EXPECTING)),
            }
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<bool>, E>
        where
            E: de::Error,
        {
            match value {
                1 => Ok(Some(true)),
                0 => Ok(Some(false)),
                _ => Err(de::Error::custom(EXPECTING)),
            }
        }
    }

    deserializer.deserialize_any(BoolOrString(PhantomData))
}

// This function is inspired by https://serde.rs/string-or-struct.html
pub(crate) fn option_u64_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntegerOrString(PhantomData<fn() -> Option<u64>>);

    impl Visitor<'_> for IntegerOrString {
        type Value = Option<u64>;

        fn expecting(
            &self,
            formatter: &mut std::fmt::Formatter,
        ) -> std::fmt::Result {
            formatter.write_str("unsigned integer or string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            if let Some(hex) = value.strip_prefix("0x") {
                u64::from_str_radix(hex, 16)
                    .map_err(de::Error::custom)
                    .map(Some)
            } else {
                FromStr::from_str(value)
                    .map_err(de::Error::custom)
                    .map(Some)
            }
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }
    }

    deserializer.deserialize_any(IntegerOrString(PhantomData))
}

/// Bond mode may be given as kernel integer (`1`) or name
/// (`active-backup`).
pub(crate) fn option_enum_string_or_integer<'de, D, T>(
    deserializer: D,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    struct IntegerOrString<T>(PhantomData<fn() -> Option<T>>);

    impl<'de, T> Visitor<'de> for IntegerOrString<T>
    where
        T: serde::Deserialize<'de>,
    {
        type Value = Option<T>;

        fn expecting(
            &self,
            formatter: &mut std::fmt::Formatter,
        ) -> std::fmt::Result {
            formatter.write_str("unsigned integer or string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Option<T>, E>
        where
            E: de::Error,
        {
            let de: StrDeserializer<'_, E> = value.into_deserializer();
            T::deserialize(de).map(Some)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<T>, E>
        where
            E: de::Error,
        {
            let de: StringDeserializer<E> =
                format!("{value}").into_deserializer();
            T::deserialize(de).map(Some)
        }
    }

    deserializer.deserialize_any(IntegerOrString(PhantomData))
}

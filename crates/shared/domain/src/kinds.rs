use crate::constants::{CUSTOMER, LEAD};
use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Represents a set of built-in form types.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FormSet: u32 {
        const LEAD = 1 << 0;
        const CUSTOMER = 1 << 1;

        const ALL = Self::LEAD.bits() | Self::CUSTOMER.bits();
    }
}

/// Names accepted when deserializing a [`FormSet`].
const NAMES: &[&str] = &[LEAD, CUSTOMER, "all", "*"];

impl FormSet {
    /// Looks up a single form type name; `"all"` and `"*"` select every built-in type.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            LEAD => Some(Self::LEAD),
            CUSTOMER => Some(Self::CUSTOMER),
            "all" | "*" => Some(Self::ALL),
            _ => None,
        }
    }

    /// Registry keys of the form types in this set, in declaration order.
    pub fn keys(self) -> impl Iterator<Item = &'static str> {
        [(Self::LEAD, LEAD), (Self::CUSTOMER, CUSTOMER)]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, key)| key)
    }
}

impl Default for FormSet {
    fn default() -> Self {
        Self::ALL
    }
}

/// Lenient conversion: unknown names yield an empty set. Deserialization rejects them instead.
impl From<&str> for FormSet {
    fn from(s: &str) -> Self {
        Self::from_name(s).unwrap_or_else(Self::empty)
    }
}

impl From<u32> for FormSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for FormSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let keys: Vec<_> = self.keys().collect();
        let mut seq = serializer.serialize_seq(Some(keys.len()))?;
        for key in keys {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for FormSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FormSetVisitor)
    }
}

/// Accepts `"lead"`, `"*"`, `"lead, customer"`, `["lead", "customer"]` or raw bits.
/// Unknown names are an error so a typo cannot silently disable form types.
struct FormSetVisitor;

impl<'de> Visitor<'de> for FormSetVisitor {
    type Value = FormSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a form type name, a list of form type names, or a bit set")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(FormSet::empty(), |set, name| Ok(set | parse_name(name)?))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        u32::try_from(v).map(FormSet::from).map_err(|_| E::custom("form set bits overflow u32"))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u32::try_from(v).map(FormSet::from).map_err(|_| E::custom("form set bits out of range"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = FormSet::empty();
        while let Some(name) = seq.next_element::<String>()? {
            set |= parse_name(name.trim())?;
        }
        Ok(set)
    }
}

fn parse_name<E: de::Error>(name: &str) -> Result<FormSet, E> {
    FormSet::from_name(name).ok_or_else(|| E::unknown_variant(name, NAMES))
}

//! Named easing curve presets.

use crate::{EasingError, HermiteParams, Result};
use serde::de::{
    self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor,
};
use serde_json::{Map, Value};
use std::{fmt, io::Read};

/// The built-in presets, in legend order.
pub const DEFAULT_PRESETS: [(&str, HermiteParams); 11] = [
    ("smooth", HermiteParams::new(0.0, 0.0, 1.0, 0.0)),
    ("accelerate", HermiteParams::new(0.0, 0.0, 1.0, 1.0)),
    ("decelerate", HermiteParams::new(0.0, 1.0, 1.0, 0.0)),
    ("bump", HermiteParams::new(0.0, 4.0, 0.0, -4.0)),
    ("acceleratebump", HermiteParams::new(0.0, 0.0, 0.0, -6.75)),
    ("deceleratebump", HermiteParams::new(0.0, 6.75, 0.0, 0.0)),
    ("sharp", HermiteParams::new(0.0, 3.0, 1.0, 0.0)),
    ("smooth_overshoot", HermiteParams::new(0.0, 0.0, 1.0, -0.6)),
    ("sharp_overshoot", HermiteParams::new(0.0, 3.0, 1.0, -0.25)),
    ("inout_overshoot", HermiteParams::new(0.0, -0.8, 1.0, -0.8)),
    ("codbump", HermiteParams::new(0.0, 6.0, 1.0, 3.0)),
];

const PARAMETER_NAMES: [&str; 4] = ["p0", "v0", "p1", "v1"];

/// Returns the built-in preset table.
///
/// # Examples
/// ```
/// use hermite_easing::{default_presets, HermiteParams};
///
/// let presets = default_presets();
/// assert_eq!(presets.len(), 11);
/// assert_eq!(presets.get("bump"), Some(&HermiteParams::new(0.0, 4.0, 0.0, -4.0)));
/// ```
pub fn default_presets() -> PresetTable {
    PresetTable {
        entries: DEFAULT_PRESETS
            .iter()
            .map(|(name, params)| (name.to_string(), *params))
            .collect(),
    }
}

/// An ordered mapping from unique preset names to boundary conditions.
///
/// Iteration yields entries in insertion order, which is the order
/// curves appear in a plot legend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresetTable {
    entries: Vec<(String, HermiteParams)>,
}

impl PresetTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, params)` pairs, keeping their order.
    ///
    /// # Errors
    /// [`EasingError::DuplicatePreset`] if a name occurs twice.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, HermiteParams)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, params) in entries {
            table.insert(name, params)?;
        }
        Ok(table)
    }

    /// Appends a preset.
    ///
    /// # Errors
    /// [`EasingError::DuplicatePreset`] if `name` is already in the table.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        params: HermiteParams,
    ) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(EasingError::DuplicatePreset(name));
        }
        self.entries.push((name, params));
        Ok(())
    }

    /// Parses a table from JSON text.
    ///
    /// The expected shape is an object mapping each preset name to an
    /// object with the numeric fields `p0`, `v0`, `p1` and `v1`:
    ///
    /// ```
    /// use hermite_easing::PresetTable;
    ///
    /// let table = PresetTable::from_json_str(
    ///     r#"{ "linear": { "p0": 0, "v0": 1, "p1": 1, "v1": 1 } }"#,
    /// )
    /// .unwrap();
    /// assert_eq!(table.names().collect::<Vec<_>>(), ["linear"]);
    /// ```
    ///
    /// Key order is kept. Extra fields are ignored.
    ///
    /// # Errors
    /// * [`EasingError::Json`] if `json` isn't valid JSON.
    /// * [`EasingError::MalformedTable`] if the document is not an object.
    /// * [`EasingError::MalformedPreset`] if an entry is not an object.
    /// * [`EasingError::DuplicatePreset`] if a name occurs twice.
    /// * [`EasingError::MissingParameter`] if an entry lacks a field.
    /// * [`EasingError::NonNumericParameter`] if a field isn't a number.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    /// Like [`from_json_str()`](Self::from_json_str) but reads the
    /// document from `reader`.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    /// Like [`from_json_str()`](Self::from_json_str) for an already
    /// parsed document.
    ///
    /// A [`Value`] keeps only the last of several equal keys, so
    /// duplicates are only reported when parsing from text.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        Self::from_raw(RawTable::deserialize(value)?)
    }

    fn from_raw(raw: RawTable) -> Result<Self> {
        let RawTable::Entries(entries) = raw else {
            return Err(EasingError::MalformedTable);
        };

        let mut table = Self::new();
        for (name, entry) in entries {
            let params = params_from_json(&name, &entry)?;
            table.insert(name, params)?;
        }
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&HermiteParams> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, params)| params)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over `(name, params)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HermiteParams)> {
        self.entries
            .iter()
            .map(|(name, params)| (name.as_str(), params))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PresetTable {
    type Item = (&'a str, &'a HermiteParams);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// A JSON document's top level, with every key kept in document order.
enum RawTable {
    Entries(Vec<(String, Value)>),
    NotAnObject,
}

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawTableVisitor)
    }
}

struct RawTableVisitor;

impl<'de> Visitor<'de> for RawTableVisitor {
    type Value = RawTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping preset names to parameters")
    }

    fn visit_map<A>(self, mut map: A) -> core::result::Result<RawTable, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some((name, entry)) = map.next_entry::<String, Value>()? {
            entries.push((name, entry));
        }
        Ok(RawTable::Entries(entries))
    }

    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<RawTable, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawTable::NotAnObject)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> core::result::Result<RawTable, E> {
        Ok(RawTable::NotAnObject)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> core::result::Result<RawTable, E> {
        Ok(RawTable::NotAnObject)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> core::result::Result<RawTable, E> {
        Ok(RawTable::NotAnObject)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> core::result::Result<RawTable, E> {
        Ok(RawTable::NotAnObject)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> core::result::Result<RawTable, E> {
        Ok(RawTable::NotAnObject)
    }

    fn visit_unit<E: de::Error>(self) -> core::result::Result<RawTable, E> {
        Ok(RawTable::NotAnObject)
    }
}

fn params_from_json(name: &str, entry: &Value) -> Result<HermiteParams> {
    let fields = entry.as_object().ok_or_else(|| EasingError::MalformedPreset {
        preset: name.to_string(),
    })?;

    let [p0, v0, p1, v1] = PARAMETER_NAMES;
    Ok(HermiteParams {
        p0: field(name, fields, p0)?,
        v0: field(name, fields, v0)?,
        p1: field(name, fields, p1)?,
        v1: field(name, fields, v1)?,
    })
}

fn field(
    preset: &str,
    fields: &Map<String, Value>,
    parameter: &'static str,
) -> Result<f64> {
    fields
        .get(parameter)
        .ok_or_else(|| EasingError::MissingParameter {
            preset: preset.to_string(),
            parameter,
        })?
        .as_f64()
        .ok_or_else(|| EasingError::NonNumericParameter {
            preset: preset.to_string(),
            parameter,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_unique_names() {
        let table = default_presets();
        let mut names: Vec<_> = table.names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_PRESETS.len());
    }

    #[test]
    fn rejects_duplicates() {
        let smooth = HermiteParams::new(0.0, 0.0, 1.0, 0.0);
        let result =
            PresetTable::from_entries([("smooth", smooth), ("smooth", smooth)]);
        assert!(matches!(
            result,
            Err(EasingError::DuplicatePreset(name)) if name == "smooth"
        ));
    }

    #[test]
    fn json_keeps_key_order() {
        let table = PresetTable::from_json_str(
            r#"{
                "zeta": {"p0": 0, "v0": 0, "p1": 1, "v1": 0},
                "alpha": {"p0": 0, "v0": 4, "p1": 0, "v1": -4, "note": "x"}
            }"#,
        )
        .unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), ["zeta", "alpha"]);
        assert_eq!(table.get("alpha").unwrap().v1, -4.0);
    }

    #[test]
    fn json_missing_parameter() {
        let result = PresetTable::from_json_str(
            r#"{"broken": {"p0": 0, "v0": 0, "p1": 1}}"#,
        );
        assert!(matches!(
            result,
            Err(EasingError::MissingParameter { preset, parameter: "v1" })
                if preset == "broken"
        ));
    }

    #[test]
    fn json_non_numeric_parameter() {
        let result = PresetTable::from_json_str(
            r#"{"broken": {"p0": "0", "v0": 0, "p1": 1, "v1": 0}}"#,
        );
        assert!(matches!(
            result,
            Err(EasingError::NonNumericParameter { parameter: "p0", .. })
        ));
    }

    #[test]
    fn json_malformed() {
        assert!(matches!(
            PresetTable::from_json_str("[1, 2]"),
            Err(EasingError::MalformedTable)
        ));
        assert!(matches!(
            PresetTable::from_json_str("null"),
            Err(EasingError::MalformedTable)
        ));
        assert!(matches!(
            PresetTable::from_json_value(&Value::from(3.5)),
            Err(EasingError::MalformedTable)
        ));
        assert!(matches!(
            PresetTable::from_json_str(r#"{"a": 3}"#),
            Err(EasingError::MalformedPreset { preset }) if preset == "a"
        ));
        assert!(matches!(
            PresetTable::from_json_str("{"),
            Err(EasingError::Json(_))
        ));
    }

    #[test]
    fn json_duplicate_names() {
        let result = PresetTable::from_json_str(
            r#"{
                "a": {"p0": 0, "v0": 0, "p1": 1, "v1": 0},
                "b": {"p0": 0, "v0": 0, "p1": 1, "v1": 1},
                "a": {"p0": 0, "v0": 4, "p1": 0, "v1": -4}
            }"#,
        );
        assert!(matches!(
            result,
            Err(EasingError::DuplicatePreset(name)) if name == "a"
        ));
    }

    #[test]
    fn json_malformed_entry_before_duplicate() {
        let result = PresetTable::from_json_str(
            r#"{
                "a": {"p0": 0},
                "a": {"p0": 0, "v0": 4, "p1": 0, "v1": -4}
            }"#,
        );
        assert!(matches!(
            result,
            Err(EasingError::MissingParameter { preset, parameter: "v0" })
                if preset == "a"
        ));
    }

    #[test]
    fn from_value_matches_from_str() {
        let json = r#"{"z": {"p0": 0, "v0": 3, "p1": 1, "v1": -0.25},
                       "y": {"p0": 0, "v0": 6, "p1": 1, "v1": 3}}"#;
        let value: Value = serde_json::from_str(json).unwrap();
        assert_eq!(
            PresetTable::from_json_value(&value).unwrap(),
            PresetTable::from_json_str(json).unwrap()
        );
    }

    #[test]
    fn from_reader() {
        let json = br#"{"smooth": {"p0": 0, "v0": 0, "p1": 1, "v1": 0}}"#;
        let table = PresetTable::from_reader(&json[..]).unwrap();
        assert_eq!(table.get("smooth"), default_presets().get("smooth"));
    }
}

//! Data models for draft prospects.
//!
//! - `Player`: bio record for one prospect
//! - `Measurements`: combine measurements with a fixed display order
//! - `RankRecord`, `RankSchema`: per-source big board ranks
//! - `SeasonRecord`: one season/team/league stat line
//! - `ScoutingReport`, `UserNote`: official reports and session notes

pub mod measurements;
pub mod note;
pub mod player;
pub mod rankings;
pub mod season;

pub use measurements::{MeasurementLine, Measurements};
pub use note::{ScoutingReport, UserNote};
pub use player::Player;
pub use rankings::{RankRecord, RankSchema};
pub use season::{SeasonKey, SeasonRecord};

/// Placeholder rendered wherever a value is missing.
pub const NO_DATA: &str = "--";

/// Deserialize an optional statistic. Only finite JSON numbers count; a
/// string, boolean or nested value in a numeric column becomes `None` so one
/// bad cell shows as a placeholder instead of failing the whole load.
pub(crate) fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct OptionalNumberVisitor;

    impl<'de> de::Visitor<'de> for OptionalNumberVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number or null")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v).filter(|n| n.is_finite()))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_str<E>(self, _v: &str) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_bool<E>(self, _v: bool) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: de::MapAccess<'de>,
        {
            while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    deserializer.deserialize_any(OptionalNumberVisitor)
}

use serde::de::{self, Deserialize, Deserializer, Unexpected};
use serde_json::{Map, Value};

/// Key that identifies the player on a rank record. Never a rank source.
pub const PLAYER_ID_KEY: &str = "playerId";

/// One row of the big board: every source's rank for a single player.
///
/// Sources are kept in the order they appear in the dataset. Only JSON
/// numbers count as ranks; `null`, strings and booleans are stored as
/// `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankRecord {
    pub player_id: i64,
    pub ranks: Vec<(String, Option<f64>)>,
}

impl RankRecord {
    pub fn new(player_id: i64, ranks: Vec<(String, Option<f64>)>) -> Self {
        Self { player_id, ranks }
    }

    /// Rank given by `source`, if that source ranked this player.
    pub fn rank(&self, source: &str) -> Option<f64> {
        self.ranks
            .iter()
            .find(|(name, _)| name == source)
            .and_then(|(_, rank)| *rank)
    }

    /// All ranks that are present, in source order.
    pub fn present_ranks(&self) -> impl Iterator<Item = f64> + '_ {
        self.ranks.iter().filter_map(|(_, rank)| *rank)
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ranks.iter().map(|(name, _)| name.as_str())
    }
}

impl<'de> Deserialize<'de> for RankRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;

        let mut player_id = None;
        let mut ranks = Vec::with_capacity(fields.len());
        for (key, value) in fields {
            if key == PLAYER_ID_KEY {
                player_id = Some(parse_player_id(&value)?);
                continue;
            }
            let rank = match value {
                Value::Number(n) => n.as_f64().filter(|r| r.is_finite()),
                _ => None,
            };
            ranks.push((key, rank));
        }

        let player_id =
            player_id.ok_or_else(|| de::Error::missing_field(PLAYER_ID_KEY))?;

        Ok(Self { player_id, ranks })
    }
}

/// Player ids are integers, but `4.0` is accepted as `4`.
fn parse_player_id<E: de::Error>(value: &Value) -> Result<i64, E> {
    if let Some(id) = value.as_i64() {
        return Ok(id);
    }
    if let Some(n) = value.as_f64() {
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            return Ok(n as i64);
        }
    }
    let unexpected = match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => n
            .as_f64()
            .map(Unexpected::Float)
            .unwrap_or(Unexpected::Other("number")),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    };
    Err(E::invalid_type(unexpected, &"an integer player id"))
}

/// The set of rank sources shown on the board, in column order.
///
/// Derived once from the first rank record when the dataset is loaded and
/// treated as fixed for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankSchema {
    sources: Vec<String>,
}

impl RankSchema {
    pub fn new(sources: Vec<String>) -> Self {
        Self { sources }
    }

    pub fn from_records(records: &[RankRecord]) -> Self {
        records
            .first()
            .map(|r| Self::new(r.source_names().map(str::to_string).collect()))
            .unwrap_or_default()
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn contains(&self, source: &str) -> bool {
        self.sources.iter().any(|s| s == source)
    }

    /// Source name at a 0-based column index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

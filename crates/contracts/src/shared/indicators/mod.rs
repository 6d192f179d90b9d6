use serde::{Deserialize, Serialize};

use super::format::{format_count, format_money};

// ---------------------------------------------------------------------------
// Dashboard stat cards
// ---------------------------------------------------------------------------

/// Colour accent of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatTone {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl StatTone {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            StatTone::Blue => "stat-card--blue",
            StatTone::Green => "stat-card--success",
            StatTone::Yellow => "stat-card--warning",
            StatTone::Orange => "stat-card--orange",
            StatTone::Red => "stat-card--error",
        }
    }
}

/// Value shown on a stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum StatValue {
    Count(usize),
    /// Amount in cents, rendered in BRL.
    Money(i64),
    Text(String),
}

impl StatValue {
    pub fn display(&self) -> String {
        match self {
            StatValue::Count(n) => format_count(*n),
            StatValue::Money(cents) => format_money(*cents),
            StatValue::Text(s) => s.clone(),
        }
    }
}

/// One aggregate shown above a list, computed over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: StatValue,
    pub icon: String,
    pub tone: StatTone,
    #[serde(default)]
    pub subtitle: Option<String>,
}

impl StatItem {
    pub fn new(label: &str, value: StatValue, icon: &str, tone: StatTone) -> Self {
        Self {
            label: label.to_string(),
            value,
            icon: icon.to_string(),
            tone,
            subtitle: None,
        }
    }

    pub fn count(label: &str, n: usize, icon: &str, tone: StatTone) -> Self {
        Self::new(label, StatValue::Count(n), icon, tone)
    }

    pub fn money(label: &str, cents: i64, icon: &str, tone: StatTone) -> Self {
        Self::new(label, StatValue::Money(cents), icon, tone)
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }
}

/// Number of records satisfying `pred`.
pub fn count_where<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| pred(item)).count()
}

/// Number of distinct values produced by `key`.
pub fn count_distinct<'a, T, K>(items: &'a [T], key: impl Fn(&'a T) -> K) -> usize
where
    K: Ord,
{
    items.iter().map(key).collect::<std::collections::BTreeSet<K>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_value_display() {
        assert_eq!(StatValue::Count(1240).display(), "1.240");
        assert_eq!(StatValue::Money(3_500).display(), "R$ 35,00");
        assert_eq!(StatValue::Text("-".into()).display(), "-");
    }

    #[test]
    fn test_aggregate_helpers() {
        let words = ["a", "b", "a", "c", "a"];
        assert_eq!(count_where(&words, |w| *w == "a"), 3);
        assert_eq!(count_distinct(&words, |w| *w), 3);
        let empty: [&str; 0] = [];
        assert_eq!(count_distinct(&empty, |w| *w), 0);
    }
}

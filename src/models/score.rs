//! Scoring result models.
//!
//! A [`ScoreCard`] holds one [`ScoreEntry`] per rule evaluation, in rule
//! order, and is the single source for both the points total and the
//! human-readable breakdown.

/// Identifies which scoring rule produced an entry.
///
/// # Example
///
/// ```
/// use receipt_processor::models::ScoringRule;
///
/// assert_eq!(ScoringRule::RoundTotal.number(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoringRule {
    /// One point per alphanumeric character in the retailer name.
    RetailerName,
    /// 50 points when the total has no cents.
    RoundTotal,
    /// 25 points when the total is a multiple of 0.25.
    QuarterMultiple,
    /// 5 points for every two items.
    ItemPairs,
    /// Price-based points for items whose trimmed description length is a multiple of 3.
    ItemDescription,
    /// 6 points when the purchase day is odd.
    OddPurchaseDay,
    /// 10 points when the purchase time is between 2:00pm and 4:00pm.
    AfternoonPurchase,
}

impl ScoringRule {
    /// All rules in evaluation order.
    pub const ALL: [ScoringRule; 7] = [
        ScoringRule::RetailerName,
        ScoringRule::RoundTotal,
        ScoringRule::QuarterMultiple,
        ScoringRule::ItemPairs,
        ScoringRule::ItemDescription,
        ScoringRule::OddPurchaseDay,
        ScoringRule::AfternoonPurchase,
    ];

    /// Returns the 1-based position of the rule in evaluation order.
    pub fn number(self) -> u8 {
        match self {
            ScoringRule::RetailerName => 1,
            ScoringRule::RoundTotal => 2,
            ScoringRule::QuarterMultiple => 3,
            ScoringRule::ItemPairs => 4,
            ScoringRule::ItemDescription => 5,
            ScoringRule::OddPurchaseDay => 6,
            ScoringRule::AfternoonPurchase => 7,
        }
    }
}

/// The outcome of evaluating one rule (or one item, for the description rule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// The rule that produced this entry.
    pub rule: ScoringRule,
    /// Points awarded.
    pub points: u64,
    /// Explanation text; empty when the entry is left out of the breakdown.
    pub explanation: String,
}

impl ScoreEntry {
    /// Creates an entry that appears in the breakdown.
    pub fn awarded(rule: ScoringRule, points: u64, explanation: impl Into<String>) -> Self {
        Self {
            rule,
            points,
            explanation: explanation.into(),
        }
    }

    /// Creates a zero-point entry that is omitted from the breakdown.
    pub fn none(rule: ScoringRule) -> Self {
        Self {
            rule,
            points: 0,
            explanation: String::new(),
        }
    }

    /// Returns true if this entry contributes a breakdown line.
    pub fn is_reported(&self) -> bool {
        !self.explanation.is_empty()
    }

    /// Formats the entry as a breakdown line, `"<points> points - <explanation>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use receipt_processor::models::{ScoreEntry, ScoringRule};
    ///
    /// let entry = ScoreEntry::awarded(ScoringRule::RoundTotal, 50, "total is a round dollar amount with no cents");
    /// assert_eq!(entry.line(), "50 points - total is a round dollar amount with no cents");
    /// ```
    pub fn line(&self) -> String {
        format!("{} points - {}", self.points, self.explanation)
    }
}

/// Every rule evaluation for one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    entries: Vec<ScoreEntry>,
    total: u64,
}

impl ScoreCard {
    /// Builds a score card, summing entry points.
    ///
    /// The sum saturates instead of overflowing.
    pub fn new(entries: Vec<ScoreEntry>) -> Self {
        let total = entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.points));
        Self { entries, total }
    }

    /// Returns the entries in rule order.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Returns the total points.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the points awarded by a single rule.
    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.entries
            .iter()
            .filter(|entry| entry.rule == rule)
            .map(|entry| entry.points)
            .sum()
    }

    /// Returns the breakdown lines, followed by the total line.
    pub fn breakdown(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.is_reported())
            .map(ScoreEntry::line)
            .collect();
        lines.push(format!("{} points - total points", self.total));
        lines
    }
}

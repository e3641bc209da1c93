use std::fmt;

/// A camera identifier to probe, either a bare numeric id or a composed name.
pub type Candidate = String;

/// How the primary candidate sequence is enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateStrategy {
    /// Every integer in `start..=end` as a plain decimal string.
    NumericRange { start: u64, end: u64 },
    /// `prefix` followed by every integer in `suffix_start..=suffix_end`,
    /// zero-padded to at least two digits.
    PrefixedSuffix {
        prefix: String,
        suffix_start: u64,
        suffix_end: u64,
    },
}

impl CandidateStrategy {
    /// Lazily yields the candidates in ascending order.
    ///
    /// Inverted bounds produce an empty sequence.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        let (start, end) = self.bounds();
        (start..=end).map(move |value| self.format(value))
    }

    /// Number of candidates `candidates()` will yield, saturating at
    /// `u64::MAX` for the full `0..=u64::MAX` range.
    pub fn len(&self) -> u64 {
        let (start, end) = self.bounds();
        if start > end {
            0
        } else {
            (end - start).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bounds(&self) -> (u64, u64) {
        match self {
            CandidateStrategy::NumericRange { start, end } => (*start, *end),
            CandidateStrategy::PrefixedSuffix {
                suffix_start,
                suffix_end,
                ..
            } => (*suffix_start, *suffix_end),
        }
    }

    fn format(&self, value: u64) -> Candidate {
        match self {
            CandidateStrategy::NumericRange { .. } => value.to_string(),
            CandidateStrategy::PrefixedSuffix { prefix, .. } => format!("{prefix}{value:02}"),
        }
    }
}

impl fmt::Display for CandidateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateStrategy::NumericRange { start, end } => {
                write!(f, "numeric range {start} to {end}")
            }
            CandidateStrategy::PrefixedSuffix {
                prefix,
                suffix_start,
                suffix_end,
            } => write!(
                f,
                "prefix '{prefix}' with suffixes {suffix_start} to {suffix_end}"
            ),
        }
    }
}

/// The full, ordered candidate sequence: the primary strategy followed by
/// the extra identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePlan {
    pub strategy: CandidateStrategy,
    pub extras: Vec<Candidate>,
}

impl CandidatePlan {
    pub fn new(strategy: CandidateStrategy, extras: Vec<Candidate>) -> Self {
        Self { strategy, extras }
    }

    /// Restartable iteration over every candidate in test order.
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.strategy
            .candidates()
            .chain(self.extras.iter().cloned())
    }

    pub fn len(&self) -> u64 {
        self.strategy.len().saturating_add(self.extras.len() as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits a comma-separated list of identifiers, trimming each entry and
/// dropping the ones left empty.
pub fn parse_extra_list(raw: &str) -> Vec<Candidate> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

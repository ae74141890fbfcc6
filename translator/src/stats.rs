use std::path::PathBuf;

use itertools::Itertools;

use crate::grammar::Effect;

/// A statistics counter that can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Loc,
    Comments,
    Labels,
    Jumps,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::Loc, Stat::Comments, Stat::Labels, Stat::Jumps];

    /// Name of the command-line flag selecting this counter, without dashes.
    pub fn flag(&self) -> &'static str {
        match self {
            Stat::Loc => "loc",
            Stat::Comments => "comments",
            Stat::Labels => "labels",
            Stat::Jumps => "jumps",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Stat> {
        Stat::ALL.iter().copied().find(|stat| stat.flag() == flag)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatCounters {
    /// Accepted instructions; the header does not count.
    pub loc: usize,
    /// Physical lines holding a comment.
    pub comments: usize,
    pub labels: usize,
    pub jumps: usize,
}

impl StatCounters {
    pub fn get(&self, stat: Stat) -> usize {
        match stat {
            Stat::Loc => self.loc,
            Stat::Comments => self.comments,
            Stat::Labels => self.labels,
            Stat::Jumps => self.jumps,
        }
    }

    pub(crate) fn record_comment(&mut self) {
        self.comments += 1;
    }

    pub(crate) fn record_instruction(&mut self, effect: Effect) {
        self.loc += 1;
        match effect {
            Effect::Label => self.labels += 1,
            Effect::Jump => self.jumps += 1,
            Effect::None => {}
        }
    }

    /// One value per line, in the order asked for. Asking twice reports twice.
    pub fn report(&self, selection: &[Stat]) -> String {
        selection.iter()
            .map(|stat| format!("{}\n", self.get(*stat)))
            .join("")
    }
}

/// Which counters to report, and where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsRequest {
    pub selection: Vec<Stat>,
    pub destination: Option<PathBuf>,
}

impl StatsRequest {
    /// Builds a request from `(position, stat)` pairs, ordering the selection
    /// by position on the command line.
    pub fn from_positions(positions: impl IntoIterator<Item=(usize, Stat)>, destination: Option<PathBuf>) -> Self {
        let selection = positions.into_iter()
            .sorted_by_key(|(position, _)| *position)
            .map(|(_, stat)| stat)
            .collect();
        StatsRequest { selection, destination }
    }

    /// Counters were selected without saying where to write them.
    pub fn is_missing_destination(&self) -> bool {
        !self.selection.is_empty() && self.destination.is_none()
    }
}

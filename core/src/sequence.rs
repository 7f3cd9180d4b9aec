use std::fmt;

/// How overlapping reads on one preview input are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadOrdering {
    /// Every completed read is applied, so the last completion wins.
    #[default]
    LastCompletion,
    /// Only the most recent selection may update the preview.
    LatestSelection,
}

impl ReadOrdering {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadOrdering::LastCompletion => "last-completion",
            ReadOrdering::LatestSelection => "latest-selection",
        }
    }
}

impl fmt::Display for ReadOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReadOrdering {
    type Err = crate::config::ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "last-completion" | "last_completion" => Ok(ReadOrdering::LastCompletion),
            "latest-selection" | "latest_selection" => Ok(ReadOrdering::LatestSelection),
            other => Err(crate::config::ConfigError::UnknownReadOrdering(
                other.to_string(),
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadTicket(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Apply,
    Stale { ticket: ReadTicket, newest: ReadTicket },
}

/// Hands out read tickets for one preview input and decides whether a
/// finished read may still touch the image.
#[derive(Clone, Debug)]
pub struct ReadSequencer {
    ordering: ReadOrdering,
    issued: u64,
    applied: u64,
}

impl ReadSequencer {
    pub fn new(ordering: ReadOrdering) -> Self {
        Self {
            ordering,
            issued: 0,
            applied: 0,
        }
    }

    pub fn begin(&mut self) -> ReadTicket {
        self.issued = self.issued.saturating_add(1);
        ReadTicket(self.issued)
    }

    pub fn latest(&self) -> Option<ReadTicket> {
        (self.issued > 0).then_some(ReadTicket(self.issued))
    }

    pub fn complete(&mut self, ticket: ReadTicket) -> Completion {
        match self.ordering {
            ReadOrdering::LastCompletion => {
                self.applied = self.applied.max(ticket.0);
                Completion::Apply
            }
            ReadOrdering::LatestSelection => {
                let newest = self.issued.max(self.applied);
                if ticket.0 < newest || ticket.0 <= self.applied {
                    return Completion::Stale {
                        ticket,
                        newest: ReadTicket(newest),
                    };
                }
                self.applied = ticket.0;
                Completion::Apply
            }
        }
    }
}

impl Default for ReadSequencer {
    fn default() -> Self {
        Self::new(ReadOrdering::default())
    }
}

use std::collections::VecDeque;

use xiangqi_core::{BoardSnapshot, WireMove};

/// An external source of move suggestions.
///
/// Replies are untrusted: the referee re-validates every one against the
/// position before it is applied. `None` means the oracle has no move.
pub trait MoveOracle {
    fn suggest(&mut self, snapshot: &BoardSnapshot) -> Option<WireMove>;
}

impl<F> MoveOracle for F
where
    F: FnMut(&BoardSnapshot) -> Option<WireMove>,
{
    fn suggest(&mut self, snapshot: &BoardSnapshot) -> Option<WireMove> {
        self(snapshot)
    }
}

/// Replays a fixed list of replies, then answers `None`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    replies: VecDeque<Option<WireMove>>,
    requests: usize,
}

impl ScriptedOracle {
    pub fn new(replies: impl IntoIterator<Item = Option<WireMove>>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            requests: 0,
        }
    }

    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl MoveOracle for ScriptedOracle {
    fn suggest(&mut self, _snapshot: &BoardSnapshot) -> Option<WireMove> {
        self.requests += 1;
        self.replies.pop_front().flatten()
    }
}

/// Successful result of processing one token
///
/// Failures are reported through [`crate::Error`]; together the two cover
/// every way a token can be handled. Side effects that belong to the caller
/// (quitting, printing help or the stack view) are requested through these
/// variants rather than performed by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A literal was pushed
    Pushed(f64),
    /// An operation computed and pushed a value
    PartialResult(f64),
    /// The session should end
    Quit,
    /// The caller should print the help text
    ShowHelp,
    /// The caller should print this view of the stack
    ShowStack(Snapshot),
    /// The stack was emptied
    Cleared,
    /// Current top of the stack
    Top(f64),
}

/// Read-only view of the most recent stack entries
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Shown values, deepest first; slots past the stack depth hold `0.0`
    pub slots: Vec<f64>,
    /// Number of values on the stack when the view was taken
    pub depth: usize,
}

impl Snapshot {
    /// Slots paired with their position counted from the top (1 = top)
    pub fn positions(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let len = self.slots.len();
        self.slots
            .iter()
            .enumerate()
            .map(move |(i, value)| (len - i, *value))
    }
}

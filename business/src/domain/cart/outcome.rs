/// Why a mutation left the cart untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The requested quantity was zero or negative.
    NonPositiveQuantity,
    /// No line item matches the merge key.
    NotInCart,
    /// The resulting quantity or line total would leave the supported range.
    OutOfRange,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::NonPositiveQuantity => write!(f, "non_positive_quantity"),
            IgnoreReason::NotInCart => write!(f, "not_in_cart"),
            IgnoreReason::OutOfRange => write!(f, "out_of_range"),
        }
    }
}

/// Status of a cart mutation.
///
/// Mutations never fail; this value only tells the caller what happened.
/// Dropping it gives the silent no-op behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// A new line was appended.
    Added,
    /// The candidate was merged into an existing line, now at `quantity`.
    Merged { quantity: u32 },
    /// An existing line now holds `quantity`.
    Updated { quantity: u32 },
    Removed,
    /// Every line was dropped; `removed` is how many there were.
    Cleared { removed: usize },
    Ignored(IgnoreReason),
}

impl MutationOutcome {
    /// Whether the cart contents differ from before the mutation.
    pub fn changed(&self) -> bool {
        match self {
            MutationOutcome::Added
            | MutationOutcome::Merged { .. }
            | MutationOutcome::Updated { .. }
            | MutationOutcome::Removed => true,
            MutationOutcome::Cleared { removed } => *removed > 0,
            MutationOutcome::Ignored(_) => false,
        }
    }
}

impl std::fmt::Display for MutationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationOutcome::Added => write!(f, "added"),
            MutationOutcome::Merged { .. } => write!(f, "merged"),
            MutationOutcome::Updated { .. } => write!(f, "updated"),
            MutationOutcome::Removed => write!(f, "removed"),
            MutationOutcome::Cleared { .. } => write!(f, "cleared"),
            MutationOutcome::Ignored(_) => write!(f, "ignored"),
        }
    }
}

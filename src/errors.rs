//! Errors reported by the manifold analyses

/// Failures that abort a whole analysis call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifoldError {
    /// (UnsupportedArity) The faces have a vertex count this analysis cannot handle
    #[error("(UnsupportedArity) manifold check does not support faces with {0} vertices")]
    UnsupportedArity(usize),
}

/// Why a set of edges could not be chained into loops.
///
/// This is a classification outcome for the vertex analysis, not a fault: a vertex whose
/// link fails to chain is simply non-manifold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// (Branching) More than two edge ends meet at one vertex
    #[error("(Branching) vertex {vertex} is touched by {degree} edge ends")]
    Branching { vertex: usize, degree: usize },
}

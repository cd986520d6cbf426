//! Response generation seam.
//!
//! The state machine never talks to a model directly; it asks a
//! [`ResponseGenerator`] for a [`Reflection`] and waits for the result.

use async_trait::async_trait;
use reflect_core::Result;
use reflect_core::persona::Reflection;

/// Produces the persona responses for a dilemma.
///
/// # Contract
///
/// A successful result holds exactly one response per persona, in
/// `PersonaKind::ALL` order, each with non-empty text. Failures are reported
/// as `ReflectError::GenerationFailed`; a generator never partially succeeds.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Generates the reflection for `dilemma`.
    async fn generate(&self, dilemma: &str) -> Result<Reflection>;

    /// Drafts ordered action-plan steps from the persona responses of
    /// `reflection`. A successful draft is never empty.
    async fn draft_plan(&self, reflection: &Reflection) -> Result<Vec<String>>;
}

//! Template-based response generator.
//!
//! Returns the same four canned responses for every dilemma after a fixed
//! simulated latency. Used when no model backend is configured.

use async_trait::async_trait;
use reflect_core::Result;
use reflect_core::persona::{PersonaKind, Reflection};
use std::time::Duration;

use crate::generator::ResponseGenerator;

/// Default simulated latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Generator that ignores the dilemma and returns template responses.
#[derive(Debug, Clone)]
pub struct TemplateGenerator {
    latency: Duration,
}

impl TemplateGenerator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl ResponseGenerator for TemplateGenerator {
    fn name(&self) -> &str {
        "template"
    }

    async fn generate(&self, _dilemma: &str) -> Result<Reflection> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Reflection::from_fn(|kind| template_text(kind).to_string()))
    }

    async fn draft_plan(&self, _reflection: &Reflection) -> Result<Vec<String>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(TEMPLATE_PLAN.iter().map(|step| step.to_string()).collect())
    }
}

const TEMPLATE_PLAN: [&str; 5] = [
    "Write down the thoughts that come up when you face this dilemma, with the evidence for and against each",
    "Name how you feel about the situation without judging yourself",
    "Define the outcome you want in one sentence",
    "Pick one small action you can finish this week and block time for it in your calendar",
    "Review your progress at the same time each week and adjust the next step",
];

fn template_text(kind: PersonaKind) -> &'static str {
    match kind {
        PersonaKind::CognitiveBehavioral => "Looking at your situation through a cognitive-behavioral lens, I notice patterns in your thinking that might be contributing to this challenge. Let's identify the specific thoughts and beliefs that arise when you face this dilemma. Often, our automatic thoughts can create barriers. What would happen if you challenged these thoughts? What evidence do you have for and against them? I'd suggest starting with small, concrete actions that can help you build momentum and prove to yourself that change is possible.",
        PersonaKind::EmpatheticFriend => "Thank you for sharing this with me. I can sense how much this is weighing on you, and I want you to know that your feelings are completely valid. It's not easy to face challenges like this, and the fact that you're reflecting on it shows real strength and self-awareness. Remember that you don't have to have everything figured out right now. Be patient and kind with yourself as you work through this. You're not alone, and it's okay to take things one step at a time.",
        PersonaKind::RationalAnalyst => "Let's break this down into manageable components. What are the key factors contributing to this situation? What resources and constraints are we working with? I'd suggest creating a structured approach: First, clearly define your desired outcome. Second, identify 2-3 specific actions you can take this week. Third, set measurable milestones so you can track progress. What metrics would indicate you're moving in the right direction? Time-box your efforts and reassess weekly to ensure you're staying on track.",
        PersonaKind::MindfulnessMentor => "Take a moment to simply notice what arises as you sit with this dilemma. What sensations do you feel in your body? What emotions are present? There's wisdom in not rushing to solve or fix, but rather in being fully present with what is. Your dilemma is pointing you toward something important - perhaps a value that's being compromised, or a need that's asking to be met. When you move from a place of presence rather than reactivity, the path forward often becomes clearer. What would it be like to approach this situation with curiosity rather than judgment?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_latency_before_responding() {
        let generator = TemplateGenerator::new(Duration::from_secs(2));
        let start = tokio::time::Instant::now();

        let reflection = generator.generate("I keep avoiding my taxes").await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(2));
        assert!(reflection.validate().is_ok());
        assert!(reflection.suggested_actions.is_empty());
    }

    #[tokio::test]
    async fn test_draft_plan_returns_template_steps() {
        let generator = TemplateGenerator::new(Duration::ZERO);
        let reflection = generator.generate("taxes").await.unwrap();
        let steps = generator.draft_plan(&reflection).await.unwrap();
        assert_eq!(steps.len(), TEMPLATE_PLAN.len());
        assert!(steps.iter().all(|step| !step.trim().is_empty()));
    }

    #[tokio::test]
    async fn test_responses_ignore_dilemma_content() {
        let generator = TemplateGenerator::new(Duration::ZERO);
        let a = generator.generate("taxes").await.unwrap();
        let b = generator.generate("a completely different problem").await.unwrap();
        assert_eq!(a, b);
    }
}

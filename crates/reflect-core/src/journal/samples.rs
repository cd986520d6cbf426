//! Sample entries for a freshly started journal.

use super::model::{ActionPlan, JournalEntry};
use crate::persona::{PersonaKind, Reflection};

/// Returns the two sample entries, newest first.
pub fn sample_entries() -> Vec<JournalEntry> {
    vec![procrastination_entry(), boundaries_entry()]
}

fn procrastination_entry() -> JournalEntry {
    let reflection = Reflection::from_fn(|kind| {
        match kind {
            PersonaKind::CognitiveBehavioral => "Your procrastination pattern suggests you might be experiencing performance anxiety. Let's break this down: What specific thoughts come up when you think about starting the presentation? Often, we procrastinate when we set unrealistic standards for ourselves. Try the \"5-minute rule\" - commit to working on just one slide for 5 minutes. Usually, starting is the hardest part, and you'll find momentum once you begin.",
            PersonaKind::EmpatheticFriend => "I hear you, and I want you to know that what you're feeling is completely valid. Procrastination often comes from a place of fear or overwhelm, not laziness. It's okay to feel anxious about important tasks. Remember that you've successfully completed presentations before, and you have the skills to do this. Be gentle with yourself - you're doing your best, and that's enough.",
            PersonaKind::RationalAnalyst => "Let's approach this systematically. You have approximately 7 days until your presentation. Break it into manageable chunks: Day 1-2 for research and outlining, Day 3-4 for creating slides, Day 5 for rehearsal, Days 6-7 as buffer time. Schedule these blocks in your calendar right now. Eliminate distractions by using website blockers during work sessions. What's the first concrete step you can take today?",
            PersonaKind::MindfulnessMentor => "Notice how you're experiencing anxiety about the presentation, but instead of moving through it, you're avoiding it with distractions. This creates more anxiety. Try this: Take three deep breaths. Acknowledge the discomfort without judgment. When you sit down to work, observe the urge to check social media without acting on it. Return your attention gently to the present task. The work will feel less overwhelming when you're fully present with it.",
        }
        .to_string()
    });

    JournalEntry {
        id: "sample-1".to_string(),
        date: "2025-11-07T14:30:00".to_string(),
        dilemma: "I keep procrastinating on my presentation for next week. Every time I sit down to work on it, I find myself scrolling through social media or doing other less important tasks. I feel anxious about it but can't seem to start.".to_string(),
        responses: reflection.responses,
        action_plan: Some(ActionPlan {
            id: "sample-ap-1".to_string(),
            entry_id: "sample-1".to_string(),
            steps: vec![
                "Use the 5-minute rule to start working on one slide today".to_string(),
                "Block out specific times in calendar for presentation work (2 hours each for next 3 days)".to_string(),
                "Install website blocker during work sessions".to_string(),
                "Practice mindful breathing when feeling the urge to procrastinate".to_string(),
                "Be compassionate with myself throughout the process".to_string(),
            ],
            created_at: "2025-11-07T15:00:00".to_string(),
        }),
        suggested_actions: None,
    }
}

fn boundaries_entry() -> JournalEntry {
    let reflection = Reflection::from_fn(|kind| {
        match kind {
            PersonaKind::CognitiveBehavioral => "Setting boundaries doesn't mean you're being difficult - it means you're being sustainable. Reframe your thinking: saying no to after-hours work isn't saying no to your manager, it's saying yes to your wellbeing and long-term productivity. Practice assertive communication: \"I'm committed to delivering quality work during business hours. For urgent matters, let's discuss prioritization so I can manage my workload effectively.\"",
            PersonaKind::EmpatheticFriend => "It takes courage to recognize you need boundaries, and I'm proud of you for acknowledging this. Burnout is real, and your feelings are important. You deserve to have personal time to recharge. Remember, you can be a dedicated professional AND protect your wellbeing - these aren't mutually exclusive. Your manager will respect you more when you respect yourself.",
            PersonaKind::RationalAnalyst => "Document the pattern: track how many after-hours requests you receive weekly and their actual urgency level. Prepare specific data for your conversation. Schedule a formal meeting to discuss workload and boundaries. Propose concrete solutions: setting core collaboration hours, using urgent vs. non-urgent tags, or having a rotating on-call schedule if truly needed. Come with solutions, not just problems.",
            PersonaKind::MindfulnessMentor => "Notice the tension between your need for approval and your need for rest. Both are valid, but one is being honored at the expense of the other. Practice being present with the discomfort of potentially disappointing others. Your worth is not determined by your availability. Create a ritual to transition from work to personal time - perhaps a short meditation or a walk - to honor this boundary internally first.",
        }
        .to_string()
    });

    JournalEntry {
        id: "sample-2".to_string(),
        date: "2025-11-05T09:15:00".to_string(),
        dilemma: "I'm struggling to set boundaries with my manager who keeps assigning me work after hours. I want to maintain a good relationship but I'm burning out.".to_string(),
        responses: reflection.responses,
        action_plan: None,
        suggested_actions: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_newest_first_with_consistent_plans() {
        let samples = sample_entries();
        assert_eq!(samples.len(), 2);
        assert!(samples[0].date > samples[1].date);
        assert_ne!(samples[0].id, samples[1].id);

        let plan = samples[0].action_plan.as_ref().unwrap();
        assert_eq!(plan.entry_id, samples[0].id);
        assert!(samples[1].action_plan.is_none());
    }
}

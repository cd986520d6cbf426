//! Prompt text for the persona coaches.

use reflect_core::persona::{PersonaKind, Reflection, profile};

const RESPONSE_LIMITS: &str = "Do not exceed 200 words in your response. \
Break lines when necessary for readability. \
You may use bullet points, numbered lists or markdown formatting for clarity.";

const CONTEXT_GUIDANCE: &str = "Adapt to context clues: for time-sensitive issues prioritize immediate, \
practical steps; in an emotional crisis lead with validation; for health concerns always recommend \
consulting healthcare professionals. You provide coaching insights, not professional therapy or advice.";

/// System instruction establishing the voice of one persona.
pub fn persona_instruction(kind: PersonaKind) -> String {
    let profile = profile(kind);
    let approach = match kind {
        PersonaKind::CognitiveBehavioral => {
            "Identify the thoughts and cognitive distortions behind the user's dilemma \
             (catastrophizing, all-or-nothing thinking, unrealistic standards). Challenge them \
             with evidence and propose small behavioral experiments such as the 5-minute rule."
        }
        PersonaKind::EmpatheticFriend => {
            "Lead with warmth and validation. Reflect the user's feelings back, normalize \
             them, remind them of their strengths, and encourage one gentle first step."
        }
        PersonaKind::RationalAnalyst => {
            "Analyze the situation systematically. Break the problem into components, estimate \
             time and effort, propose a schedule with measurable milestones, and name the first \
             concrete task."
        }
        PersonaKind::MindfulnessMentor => {
            "Invite present-moment awareness. Ask the user to notice sensations and emotions \
             without judgment, explore the value the dilemma points to, and suggest a short \
             grounding practice."
        }
    };

    format!(
        "You are {name}, a {title}. {description}.\n\n{approach}\n\n{RESPONSE_LIMITS}\n\n{CONTEXT_GUIDANCE}",
        name = profile.name,
        title = profile.title,
        description = profile.description,
    )
}

/// User prompt sent to every persona for a dilemma.
pub fn dilemma_prompt(dilemma: &str) -> String {
    format!(
        "User Dilemma: {dilemma}\n\nPlease provide your unique perspective and guidance for this dilemma."
    )
}

fn format_perspectives(reflection: &Reflection) -> String {
    reflection
        .responses
        .iter()
        .map(|r| format!("{} ({}): {}", r.name, r.persona, r.response))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prompt asking for 3-5 concrete steps distilled from all four responses.
pub fn synthesis_prompt(dilemma: &str, reflection: &Reflection) -> String {
    let perspectives = format_perspectives(reflection);

    format!(
        "Based on the following diverse perspectives on this dilemma:\n\n\
         Dilemma: {dilemma}\n\n\
         Perspectives:\n{perspectives}\n\n\
         Please synthesize these insights into 3-5 concrete, actionable steps. \
         Focus on practical actions the user can take immediately. \
         Return only the action steps as a numbered list."
    )
}

/// Prompt asking for a 5-7 step action plan built on the four responses.
pub fn action_plan_prompt(reflection: &Reflection) -> String {
    format!(
        "Create a detailed action plan based on these coaching perspectives:\n\n\
         {perspectives}\n\n\
         Generate 5-7 specific, measurable action steps that:\n\
         1. Are immediately actionable\n\
         2. Build on each other progressively\n\
         3. Address the core issues identified\n\
         4. Can be tracked and measured\n\n\
         Return only the action steps as a numbered list.",
        perspectives = format_perspectives(reflection)
    )
}

/// Parses a numbered list answer into clean step strings, keeping at most `limit`.
pub fn parse_numbered_list(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ' ')
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_names_the_persona() {
        let instruction = persona_instruction(PersonaKind::MindfulnessMentor);
        assert!(instruction.starts_with("You are Sage, a Mindfulness Mentor."));
        assert!(instruction.contains("200 words"));
    }

    #[test]
    fn test_synthesis_prompt_lists_every_persona() {
        let reflection = Reflection::from_fn(|kind| format!("advice from {kind}"));
        let prompt = synthesis_prompt("taxes", &reflection);
        for kind in PersonaKind::ALL {
            assert!(prompt.contains(&format!("advice from {kind}")));
        }
    }

    #[test]
    fn test_action_plan_prompt_includes_perspectives() {
        let reflection = Reflection::from_fn(|kind| format!("advice from {kind}"));
        let prompt = action_plan_prompt(&reflection);
        assert!(prompt.starts_with("Create a detailed action plan"));
        assert!(prompt.contains("Sage (mindfulness-mentor): advice from mindfulness-mentor"));
        assert!(prompt.contains("5-7 specific, measurable action steps"));
    }

    #[test]
    fn test_parse_numbered_list() {
        let text = "1. Open the tax portal\n\n2.  Gather receipts \n3. Book an hour\n";
        assert_eq!(
            parse_numbered_list(text, 5),
            vec!["Open the tax portal", "Gather receipts", "Book an hour"]
        );
    }

    #[test]
    fn test_parse_numbered_list_caps_length() {
        let text = (1..=8).map(|i| format!("{i}. step {i}")).collect::<Vec<_>>().join("\n");
        let steps = parse_numbered_list(&text, 5);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[4], "step 5");
    }
}

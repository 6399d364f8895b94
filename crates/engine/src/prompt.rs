//! Prompt assembly for a hypothetical downstream generation step.
//!
//! Pure formatting: combines the system prompt, the few-shot examples,
//! the original request, the identified slots, and either the retrieved
//! candidates or the clarifying question into one fixed textual
//! template. No decision logic lives here.

use crate::orchestrator::Outcome;
use slots::SlotSet;

/// The persona the downstream step would adopt.
pub const SYSTEM_PROMPT: &str = "\
You are a friendly and knowledgeable movie expert. You ask smart, concise clarifying questions that help users get a tailored movie suggestion.
Constraints:
- Always ask at least one clarifying question before recommending a final movie title.
- Keep tone warm, brief and professional.
- When possible, prefer single, specific clarifying questions that are easy to answer (yes/no or short phrases).";

/// One worked example of the desired assistant behavior
pub struct FewShotExample {
    pub input: &'static str,
    pub output: &'static str,
}

/// Fixed few-shot examples included in every prompt
pub const FEW_SHOT_EXAMPLES: &[FewShotExample] = &[
    FewShotExample {
        input: "I liked the new Nolan movie.",
        output: "Christopher Nolan's films are fantastic! To help me narrow it down, are you in the mood for a more thoughtful thriller (e.g., Inception) or a darker, gritty superhero drama (e.g., The Dark Knight)?",
    },
    FewShotExample {
        input: "Something romantic but upbeat.",
        output: "Nice - do you prefer musicals (songs integrated in story) or romantic comedies (lighthearted, modern)? A one-word answer like 'musical' or 'rom-com' is perfect.",
    },
];

/// Assemble the full prompt for one request.
///
/// Template (sections joined by blank lines):
/// 1. system prompt
/// 2. few-shot examples
/// 3. user request
/// 4. identified slots ("(none identified)" when empty)
/// 5. retrieved candidates + instruction, or the clarifying question
pub fn build_prompt(input: &str, slots: &SlotSet, outcome: &Outcome) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(SYSTEM_PROMPT.to_string());

    let mut examples = String::from("FEW-SHOT EXAMPLES:");
    for example in FEW_SHOT_EXAMPLES {
        examples.push_str(&format!(
            "\nUser: {}\nAssistant: {}",
            example.input, example.output
        ));
    }
    parts.push(examples);

    parts.push(format!("USER REQUEST:\n{}", input.trim()));

    parts.push(format!("IDENTIFIED SLOTS:\n{}", format_slots(slots)));

    match outcome {
        Outcome::Recommend(results) => {
            let mut candidates = String::from("RETRIEVED CANDIDATES (R):");
            if results.is_empty() {
                candidates.push_str("\nNo strong candidates found in the catalog.");
            } else {
                for entry in results {
                    candidates.push_str(&format!(
                        "\n- {} ({}) - genre: {}, director: {} [score {}]",
                        entry.movie.title,
                        entry.movie.year,
                        entry
                            .movie
                            .genres
                            .iter()
                            .map(|g| g.to_string())
                            .collect::<Vec<_>>()
                            .join("/"),
                        entry.movie.director,
                        entry.score
                    ));
                }
            }
            parts.push(candidates);

            parts.push(
                "INSTRUCTION (A): Based on the information above, ask exactly one concise, specific clarifying question that will most improve the recommendation. Do NOT recommend a movie yet."
                    .to_string(),
            );
        }
        Outcome::Clarify(question) => {
            parts.push(format!(
                "CLARIFYING QUESTION (targeting {}):\n{}",
                question.slot, question.text
            ));
        }
    }

    parts.join("\n\n")
}

fn format_slots(slots: &SlotSet) -> String {
    let filled = slots.filled();
    if filled.is_empty() {
        return "- (none identified)".to_string();
    }
    filled
        .iter()
        .map(|(slot, value)| format!("- {}: {}", slot, value))
        .collect::<Vec<_>>()
        .join("\n")
}

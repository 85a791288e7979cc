/// Canned prompts a shell can offer as one-click shortcuts.
///
/// Selecting one must behave exactly like typing it and submitting.
pub const SAMPLE_PROMPTS: [&str; 10] = [
    "Show me today's specials.",
    "I'm interested in vegan options.",
    "What desserts do you offer?",
    "Can you recommend a wine pairing?",
    "I'd like to make a reservation.",
    "Do you have gluten-free dishes?",
    "What's the ambiance like?",
    "Are there any live music nights?",
    "Can I get nutritional information?",
    "What are your opening hours?",
];

/// Look up a sample prompt by its 1-based position, as shells display them.
pub fn sample_prompt(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|idx| SAMPLE_PROMPTS.get(idx))
        .copied()
}

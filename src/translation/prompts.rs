/*!
 * Prompt construction for translation and word-pair extraction.
 *
 * Prompts state the language pair, embed the source text's writing-style
 * profile as generation constraints, and bind named characters to a
 * grammatical gender so pronoun resolution stays consistent in the target
 * language.
 */

use crate::characters::Gender;
use crate::language_utils::display_language;
use crate::translation::style::WritingStyle;

/// Maximum number of word pairs requested from the model. Enforced by prompt
/// instruction; the parser does not re-validate it.
pub const MAX_WORD_PAIRS: usize = 10;

/// Builder for the main translation prompt
#[derive(Debug, Clone)]
pub struct TranslationPromptBuilder {
    source_language: String,
    target_language: String,
    style: Option<WritingStyle>,
    character_genders: Vec<(String, Gender)>,
}

impl TranslationPromptBuilder {
    /// Create a new prompt builder for a language pair
    pub fn new(source_language: &str, target_language: &str) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            style: None,
            character_genders: Vec::new(),
        }
    }

    /// Constrain the translation to match the given writing style
    pub fn with_style(mut self, style: WritingStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Bind character names to grammatical genders.
    ///
    /// Names are rendered with the caller's casing; ordering in the prompt is
    /// alphabetical for determinism.
    pub fn with_character_genders(mut self, characters: &[(String, Gender)]) -> Self {
        self.character_genders = characters.to_vec();
        self.character_genders
            .sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));
        self
    }

    /// Build the prompt for the given source text
    pub fn build(&self, text: &str) -> String {
        let mut prompt = format!(
            "Translate the following text from {} to {}.",
            display_language(&self.source_language),
            display_language(&self.target_language)
        );

        if let Some(style) = &self.style {
            prompt.push_str("\n\nMatch the writing style of the source text:\n");
            prompt.push_str(&format!("- Formality: {}\n", style.formality.as_str()));
            prompt.push_str(&format!("- Tone: {}\n", style.tone.as_str()));
            prompt.push_str(&format!("- Complexity: {}\n", style.complexity.as_str()));
            prompt.push_str(&format!(
                "- Descriptiveness: {}\n",
                style.descriptiveness.as_str()
            ));
            prompt.push_str(&format!(
                "- Dialogue style: {}\n",
                style.dialogue_style.as_str()
            ));
        }

        if !self.character_genders.is_empty() {
            prompt.push_str(
                "\n\nUse the following gender information for proper pronoun translation:\n",
            );
            for (name, gender) in &self.character_genders {
                prompt.push_str(&format!("- \"{}\" is {}\n", name, gender));
            }
        }

        prompt.push_str(&format!(
            "\nOnly return the translated text without any additional explanation or context:\n\n\"{}\"",
            text
        ));

        prompt
    }
}

/// Build the secondary prompt asking for word-alignment pairs as JSON
pub fn word_pairs_prompt(
    source_text: &str,
    translated_text: &str,
    source_language: &str,
    target_language: &str,
) -> String {
    format!(
        "Given these two texts, provide a JSON array of important word pairs in the format:\n\
         [{{\"source\": \"original word\", \"target\": \"translated word\"}}]\n\n\
         Only include key words and phrases that are important for understanding. \
         Limit to maximum {} pairs.\n\n\
         Text in {}: \"{}\"\n\
         Text in {}: \"{}\"\n\n\
         Response must be valid JSON array only.",
        MAX_WORD_PAIRS,
        display_language(source_language),
        source_text,
        display_language(target_language),
        translated_text
    )
}

use crate::types::{ModelSelection, ModelType};

// Keyword lists mirror the `best_for` vocabulary advertised by the models
// endpoint. Matching is case-insensitive substring presence.
const ANIMATION_KEYWORDS: &[&str] = &[
    "cartoon",
    "anime",
    "animated",
    "animation",
    "character",
    "comic",
    "illustration",
    "manga",
    "pixar",
];

const CREATIVE_KEYWORDS: &[&str] = &[
    "artistic",
    "abstract",
    "fantasy",
    "surreal",
    "dream",
    "magical",
    "psychedelic",
    "stylized",
    "imaginative",
];

const PHOTOREALISTIC_KEYWORDS: &[&str] = &[
    "realistic",
    "photorealistic",
    "photo",
    "nature",
    "landscape",
    "documentary",
    "cinematic",
    "person",
    "people",
    "city",
];

/// Outcome of classifying a prompt, including the keywords that drove the
/// decision (surfaced by the preview endpoint)
#[derive(Clone, Debug)]
pub struct PromptClassification {
    pub model_type: ModelType,
    pub matched_keywords: Vec<&'static str>,
}

/// Classify a free-text prompt into one of the three model categories.
///
/// Highest keyword hit count wins. Ties resolve towards the more specific
/// vocabulary, animation before creative before photorealistic, and a prompt
/// with no hits falls back to photorealistic.
pub fn classify_prompt(prompt: &str) -> PromptClassification {
    let lowered = prompt.to_lowercase();
    let matches = |keywords: &[&'static str]| -> Vec<&'static str> {
        keywords
            .iter()
            .copied()
            .filter(|keyword| lowered.contains(keyword))
            .collect()
    };

    let candidates = [
        (ModelType::Animation, matches(ANIMATION_KEYWORDS)),
        (ModelType::Creative, matches(CREATIVE_KEYWORDS)),
        (ModelType::Photorealistic, matches(PHOTOREALISTIC_KEYWORDS)),
    ];

    let mut best = PromptClassification {
        model_type: ModelType::Photorealistic,
        matched_keywords: Vec::new(),
    };
    for (model_type, matched_keywords) in candidates {
        if matched_keywords.len() > best.matched_keywords.len() {
            best = PromptClassification {
                model_type,
                matched_keywords,
            };
        }
    }
    best
}

/// Resolve the model for a request: an explicit choice is used unchanged,
/// `auto` defers to the keyword classifier
pub fn select_model(prompt: &str, requested: ModelSelection) -> ModelType {
    requested
        .resolved()
        .unwrap_or_else(|| classify_prompt(prompt).model_type)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cartoon_prompts_select_animation() {
        let classification = classify_prompt("A cartoon cat playing piano");
        assert_eq!(classification.model_type, ModelType::Animation);
        assert_eq!(classification.matched_keywords, vec!["cartoon"]);
    }

    #[test]
    fn artistic_prompts_select_creative() {
        let classification = classify_prompt("surreal dream of melting clocks");
        assert_eq!(classification.model_type, ModelType::Creative);
    }

    #[test]
    fn unmatched_prompts_fall_back_to_photorealistic() {
        let classification = classify_prompt("A red ball on a table");
        assert_eq!(classification.model_type, ModelType::Photorealistic);
        assert!(classification.matched_keywords.is_empty());
    }

    #[test]
    fn ties_resolve_in_priority_order() {
        // One animation hit and one creative hit: animation wins.
        let classification = classify_prompt("an anime fantasy battle");
        assert_eq!(classification.model_type, ModelType::Animation);

        // One creative hit and one photorealistic hit: creative wins.
        let classification = classify_prompt("abstract shapes over a city");
        assert_eq!(classification.model_type, ModelType::Creative);
    }

    #[test]
    fn higher_score_beats_priority() {
        let classification = classify_prompt("realistic nature documentary with one cartoon");
        assert_eq!(classification.model_type, ModelType::Photorealistic);
        assert_eq!(classification.matched_keywords.len(), 3);
    }

    #[test]
    fn explicit_choice_overrides_keywords() {
        assert_eq!(
            select_model("a cartoon dog", ModelSelection::Creative),
            ModelType::Creative
        );
        assert_eq!(
            select_model("a cartoon dog", ModelSelection::Auto),
            ModelType::Animation
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify_prompt("A CARTOON ROBOT").model_type,
            ModelType::Animation
        );
    }
}

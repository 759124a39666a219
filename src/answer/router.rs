// Routing decision for a question: canned small-talk reply or the backend

/// Tokens that mark a short message as small talk.
///
/// Matched as substrings of the lower-cased question, so "this" matches "hi"
/// and "yolk" matches "yo". Only questions of at most
/// [`MAX_SMALL_TALK_WORDS`] words are considered.
pub const SMALL_TALK_TOKENS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "howdy",
    "good morning",
    "good afternoon",
    "good evening",
    "greetings",
    "thanks",
    "thank you",
    "yo",
    "sup",
];

pub const MAX_SMALL_TALK_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Greeting,
    Thanks,
    Backend,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Greeting => "greeting",
            Route::Thanks => "thanks",
            Route::Backend => "backend",
        }
    }
}

/// Decide how to answer a question.
///
/// With `small_talk_enabled` off every question goes to the backend.
pub fn route(question: &str, small_talk_enabled: bool) -> Route {
    if !small_talk_enabled {
        return Route::Backend;
    }

    let lowered = question.trim().to_lowercase();
    let is_small_talk = SMALL_TALK_TOKENS.iter().any(|token| lowered.contains(token))
        && lowered.split_whitespace().count() <= MAX_SMALL_TALK_WORDS;

    if !is_small_talk {
        return Route::Backend;
    }

    let decision = if lowered.contains("thank") {
        Route::Thanks
    } else {
        Route::Greeting
    };
    tracing::info!(route = decision.as_str(), "Answering small talk locally");
    decision
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings_take_shortcut() {
        assert_eq!(route("hi", true), Route::Greeting);
        assert_eq!(route("Hello there", true), Route::Greeting);
        assert_eq!(route("  GOOD MORNING  ", true), Route::Greeting);
    }

    #[test]
    fn test_thanks_branch() {
        assert_eq!(route("thanks", true), Route::Thanks);
        assert_eq!(route("Thank you so much", true), Route::Thanks);
    }

    #[test]
    fn test_long_question_goes_to_backend() {
        assert_eq!(
            route("hi, can you list all work items assigned to Sam please", true),
            Route::Backend
        );
    }

    #[test]
    fn test_question_without_token_goes_to_backend() {
        assert_eq!(route("open bugs?", true), Route::Backend);
    }

    #[test]
    fn test_substring_match_is_preserved() {
        // "this" contains "hi"; short enough to count as small talk
        assert_eq!(route("show this", true), Route::Greeting);
    }

    #[test]
    fn test_disabled_shortcut() {
        assert_eq!(route("hi", false), Route::Backend);
        assert_eq!(route("thanks", false), Route::Backend);
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Greeting.as_str(), "greeting");
        assert_eq!(Route::Thanks.as_str(), "thanks");
        assert_eq!(Route::Backend.as_str(), "backend");
    }
}

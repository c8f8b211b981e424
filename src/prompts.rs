//! Prompt construction for the completion provider

/// Builds the article-idea prompt from scraped competitor content
///
/// Asks for three sub-topics the scraped articles left uncovered, each with
/// a short justification, in a fixed `Idea #N` output format the dashboard
/// can display as-is.
pub fn article_ideas_prompt(scraped_text: &str) -> String {
    format!(
        "Based on the following competitor article content, suggest 3 areas \
that were not addressed in these articles and could be written about to \
provide additional value to readers.

For each suggestion, explain in a maximum of three sentences why you think \
it is a good idea, based on whether the existing articles have covered that \
sub-topic or explained it thoroughly.

{}

Please provide article ideas in the following format:
Idea #1 - [Brief description]
Idea #2 - [Brief description]
Idea #3 - [Brief description]
",
        scraped_text
    )
}

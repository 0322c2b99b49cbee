//! Prompt templates for the two generation stages and the token budget of
//! each call.

use crate::{Dataset, StyleProfile};

/// Rows of the dataset embedded in the keyword selection prompt.
pub const DATASET_SAMPLE_ROWS: usize = 50;

pub const KEYWORD_SELECTION_MAX_TOKENS: u32 = 2000;
pub const STYLE_ANALYSIS_MAX_TOKENS: u32 = 1000;
pub const ARTICLE_MAX_TOKENS: u32 = 4000;

/// Stage A: ask the model to pick the best search terms of the report.
pub fn keyword_selection(dataset: &Dataset) -> serde_json::Result<String> {
    let sample = &dataset.rows()[..dataset.len().min(DATASET_SAMPLE_ROWS)];
    let rows = serde_json::to_string_pretty(sample)?;
    let columns = dataset.headers().join(", ");

    Ok(format!(
        r#"Analyze this CSV export of Google Ads search terms and select the 10 to 18 best terms to build a blog article around.

AVAILABLE COLUMNS: {columns}

DATA (first {DATASET_SAMPLE_ROWS} terms):
{rows}

Selection criteria:
- High search volume
- Conversion rate or performance
- Thematic relevance (group terms by theme)
- SEO potential
- Informational search intent (not transactional)

Respond ONLY with a JSON object:
{{
  "selectedTerms": ["term 1", "term 2", ...],
  "reasoning": "short explanation of the selection",
  "suggestedTheme": "main theme identified"
}}

Select between 10 and 18 terms."#
    ))
}

/// First call of Stage B: describe the writing style of the sample articles.
#[must_use]
pub fn style_analysis(samples: &str) -> String {
    format!(
        r#"Analyze the writing style of these articles and describe it concisely (tone, structure, sentence length, vocabulary, format):

{samples}

Respond ONLY with a JSON object:
{{"style": "description of the style", "tone": "tone used", "structure": "typical structure"}}"#
    )
}

/// Second call of Stage B: write the article.
pub fn article(
    keywords: &[String],
    style: &StyleProfile,
    guidelines: &str,
) -> serde_json::Result<String> {
    let keywords = keywords.join("\n");
    let style = serde_json::to_string_pretty(style)?;

    Ok(format!(
        r#"You are an expert web writer. Write an SEO-optimized blog article.

HIGH-PERFORMING GOOGLE ADS SEARCH TERMS:
{keywords}

STYLE TO REPRODUCE:
{style}

GUIDELINES:
{guidelines}

Write a complete article following this JSON format:
{{
  "title": "catchy title with the main keyword",
  "metaDescription": "SEO description of 150-160 characters",
  "introduction": "introduction paragraph",
  "sections": [
    {{
      "heading": "section title",
      "content": "detailed content"
    }}
  ],
  "conclusion": "conclusion paragraph",
  "keywords": ["identified", "keywords"]
}}

Respond ONLY with the JSON, with no text before or after."#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_prompt_embeds_columns_and_first_rows_only() {
        let mut csv = String::from("term,clicks\n");
        for index in 0..60 {
            csv.push_str(&format!("term {index},{index}\n"));
        }
        let dataset = Dataset::parse(&csv).unwrap();

        let prompt = keyword_selection(&dataset).unwrap();

        assert!(prompt.contains("AVAILABLE COLUMNS: term, clicks"));
        assert!(prompt.contains(r#""term": "term 0""#));
        assert!(prompt.contains(r#""term": "term 49""#));
        assert!(!prompt.contains(r#""term": "term 50""#));
        assert!(prompt.contains("\"selectedTerms\""));
    }

    #[test]
    fn keyword_prompt_handles_small_dataset() {
        let dataset = Dataset::parse("term,clicks\nshoes,3").unwrap();
        let prompt = keyword_selection(&dataset).unwrap();
        assert!(prompt.contains(r#""clicks": "3""#));
    }

    #[test]
    fn style_prompt_embeds_samples_verbatim() {
        let samples = "First article.\n\nSecond { article } with braces.";
        assert!(style_analysis(samples).contains(samples));
    }

    #[test]
    fn article_prompt_embeds_keywords_style_and_guidelines() {
        let style = StyleProfile {
            style: "short sentences".into(),
            tone: "friendly".into(),
            structure: "listicle".into(),
        };
        let prompt = article(
            &["trail shoes".to_string(), "running socks".to_string()],
            &style,
            "Mention the spring sale.",
        )
        .unwrap();

        assert!(prompt.contains("trail shoes\nrunning socks"));
        assert!(prompt.contains(r#""tone": "friendly""#));
        assert!(prompt.contains("Mention the spring sale."));
        assert!(prompt.contains("\"metaDescription\""));
    }
}

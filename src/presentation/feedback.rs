//! Suggestion block - warning, suggestions or a congratulation.

use serde::Serialize;

use super::escape::escape_html;
use crate::report::{Score, StrengthReport};

pub const CONGRATULATIONS: &str =
    "Nice — this password looks strong. Consider using a passphrase to improve memorability.";

/// What the suggestion container shows for a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SuggestionBlock {
    Empty,
    Feedback {
        warning: Option<String>,
        suggestions: Vec<String>,
    },
    Congratulations,
}

impl SuggestionBlock {
    pub fn from_report(report: &StrengthReport) -> Self {
        if report.warning.is_some() || !report.suggestions.is_empty() {
            return SuggestionBlock::Feedback {
                warning: report.warning.clone(),
                suggestions: report.suggestions.clone(),
            };
        }
        if report.score >= Score::Good {
            return SuggestionBlock::Congratulations;
        }
        SuggestionBlock::Empty
    }

    /// Renders the block as HTML with all free text escaped.
    pub fn to_html(&self) -> String {
        match self {
            SuggestionBlock::Empty => String::new(),
            SuggestionBlock::Congratulations => {
                format!("<div>{}</div>", escape_html(CONGRATULATIONS))
            }
            SuggestionBlock::Feedback {
                warning,
                suggestions,
            } => {
                let mut html = String::new();
                if let Some(warning) = warning {
                    html.push_str("<div><strong>Warning:</strong> ");
                    html.push_str(&escape_html(warning));
                    html.push_str("</div>");
                }
                if !suggestions.is_empty() {
                    html.push_str("<ul>");
                    for s in suggestions {
                        html.push_str("<li>");
                        html.push_str(&escape_html(s));
                        html.push_str("</li>");
                    }
                    html.push_str("</ul>");
                }
                html
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(score: Score, warning: Option<&str>, suggestions: &[&str]) -> StrengthReport {
        StrengthReport {
            score,
            warning: warning.map(str::to_string),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_warning_rendered_before_suggestions() {
        let block = SuggestionBlock::from_report(&report(
            Score::Weak,
            Some("This is a top-10 common password"),
            &["Add another word or two", "Avoid sequences"],
        ));
        assert_eq!(
            block.to_html(),
            "<div><strong>Warning:</strong> This is a top-10 common password</div>\
             <ul><li>Add another word or two</li><li>Avoid sequences</li></ul>"
        );
    }

    #[test]
    fn test_warning_only() {
        let block = SuggestionBlock::from_report(&report(Score::Strong, Some("Careful"), &[]));
        assert_eq!(block.to_html(), "<div><strong>Warning:</strong> Careful</div>");
    }

    #[test]
    fn test_congratulations_for_good_scores() {
        for score in [Score::Good, Score::Strong] {
            let block = SuggestionBlock::from_report(&report(score, None, &[]));
            assert_eq!(block, SuggestionBlock::Congratulations);
            assert!(block.to_html().contains("looks strong"));
        }
    }

    #[test]
    fn test_empty_for_weak_scores_without_feedback() {
        for score in [Score::VeryWeak, Score::Weak, Score::Fair] {
            let block = SuggestionBlock::from_report(&report(score, None, &[]));
            assert_eq!(block, SuggestionBlock::Empty);
            assert_eq!(block.to_html(), "");
        }
    }

    #[test]
    fn test_free_text_is_escaped() {
        let block = SuggestionBlock::from_report(&report(
            Score::Weak,
            Some("<script>alert('x')</script>"),
            &[r#"<b>"x"</b>"#],
        ));
        let html = block.to_html();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;&quot;x&quot;&lt;/b&gt;"));
        assert!(html.contains("alert(&#39;x&#39;)"));
    }
}

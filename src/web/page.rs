//! HTML rendering for the translation form.

use std::fmt::Write;

use crate::error::ValidationError;
use crate::form::{Outcome, ViewState};

const TITLE: &str = "Agent Translator";

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
textarea { width: 100%; min-height: 10rem; font: inherit; }
select, button { font: inherit; padding: 0.3rem 0.6rem; }
.validation { color: #a15c00; }
.error { background: #fde8e8; border: 1px solid #e02424; padding: 0.75rem; border-radius: 4px; }
.result pre { white-space: pre-wrap; background: #f3f4f6; padding: 0.75rem; border-radius: 4px; }
.spinner { display: none; }
.busy .spinner { display: inline-block; }
";

const SCRIPT: &str = r"
document.getElementById('translate-form').addEventListener('submit', function (event) {
  var text = document.getElementById('text');
  var hint = document.getElementById('client-validation');
  if (text.value.trim() === '') {
    event.preventDefault();
    hint.hidden = false;
    return;
  }
  hint.hidden = true;
  document.getElementById('submit').disabled = true;
  text.readOnly = true;
  this.classList.add('busy');
});
";

/// Everything the page shows for one response.
#[derive(Debug)]
pub struct PageView<'a> {
    pub languages: &'a [&'a str],
    pub selected: &'a str,
    pub text: &'a str,
    pub validation: Option<&'a ValidationError>,
    pub state: &'a ViewState,
}

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render(view: &PageView<'_>) -> String {
    let busy = matches!(view.state, ViewState::Running { .. });
    let mut html = String::with_capacity(4096);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{TITLE}</h1>\n"
    );

    let _ = write!(
        html,
        "<form id=\"translate-form\" method=\"post\" action=\"/translate\"{}>\n\
         <label for=\"language\">Target language</label>\n<select id=\"language\" name=\"language\">\n",
        if busy { " class=\"busy\"" } else { "" }
    );
    for lang in view.languages {
        let lang = escape_html(lang);
        let selected = if lang == escape_html(view.selected) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(html, "<option value=\"{lang}\"{selected}>{lang}</option>");
    }
    let _ = write!(
        html,
        "</select>\n<p><label for=\"text\">Text to translate (English)</label></p>\n\
         <textarea id=\"text\" name=\"text\"{readonly}>{text}</textarea>\n\
         <p id=\"client-validation\" class=\"validation\" hidden>{empty}</p>\n",
        readonly = if busy { " readonly" } else { "" },
        text = escape_html(view.text),
        empty = ValidationError::EmptyInput,
    );
    if let Some(validation) = view.validation {
        let _ = writeln!(
            html,
            "<p class=\"validation\">{}</p>",
            escape_html(&validation.to_string())
        );
    }
    let _ = write!(
        html,
        "<p><button id=\"submit\" type=\"submit\"{disabled}>Translate</button>\n\
         <span class=\"spinner\" role=\"status\">Translating...</span></p>\n</form>\n",
        disabled = if busy { " disabled" } else { "" },
    );

    match view.state {
        ViewState::Result(Outcome::Translated { language, result }) => {
            let _ = write!(
                html,
                "<section class=\"result\">\n<h2>Translation ({})</h2>\n<pre class=\"output\">{}</pre>\n</section>\n",
                escape_html(language),
                escape_html(&result.output)
            );
        }
        ViewState::Result(Outcome::Failed { message, .. }) => {
            let _ = writeln!(
                html,
                "<div class=\"error\" role=\"alert\"><strong>Translation failed.</strong> {}</div>",
                escape_html(message)
            );
        }
        ViewState::Idle | ViewState::Running { .. } => {}
    }

    let _ = write!(html, "<script>{SCRIPT}</script>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES, TranslationResult};

    fn idle_view<'a>(state: &'a ViewState) -> PageView<'a> {
        PageView {
            languages: SUPPORTED_LANGUAGES,
            selected: DEFAULT_LANGUAGE,
            text: "",
            validation: None,
            state,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_idle_page_lists_languages_with_default_selected() {
        let html = render(&idle_view(&ViewState::Idle));

        assert!(html.contains("<title>Agent Translator</title>"));
        assert!(html.contains("<option value=\"Urdu\" selected>Urdu</option>"));
        assert!(html.contains("<option value=\"French\">French</option>"));
        assert_eq!(html.matches("<option ").count(), SUPPORTED_LANGUAGES.len());
        assert!(!html.contains("class=\"result\""));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_running_page_locks_input() {
        let state = ViewState::Running {
            language: "French".to_string(),
        };
        let html = render(&idle_view(&state));

        assert!(html.contains("<button id=\"submit\" type=\"submit\" disabled>"));
        assert!(html.contains("<textarea id=\"text\" name=\"text\" readonly>"));
    }

    #[test]
    fn test_result_page_shows_translation() {
        let state = ViewState::Result(Outcome::Translated {
            language: "French".to_string(),
            result: TranslationResult {
                input: "Hello".to_string(),
                output: "Bonjour".to_string(),
            },
        });
        let html = render(&idle_view(&state));

        assert!(html.contains("<h2>Translation (French)</h2>"));
        assert!(html.contains("<pre class=\"output\">Bonjour</pre>"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let state = ViewState::Result(Outcome::Failed {
            language: "French".to_string(),
            kind: "remote",
            message: "<script>alert(1)</script>".to_string(),
        });
        let html = render(&idle_view(&state));

        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_validation_message_rendered() {
        let state = ViewState::Idle;
        let mut view = idle_view(&state);
        let validation = ValidationError::EmptyInput;
        view.validation = Some(&validation);

        let html = render(&view);
        assert!(html.contains("<p class=\"validation\">Please enter some text to translate.</p>"));
    }
}

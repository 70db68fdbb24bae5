//! Question pages
//!
//! The ask form (blank or redisplayed with errors) and the confirmation page.

use crate::auth::CSRF_FIELD;
use crate::domain::entities::{
    Field, FormErrors, FormVariant, SubmissionInput, CATEGORIES, PRIORITIES,
};

use super::layout::{escape_html, page};

/// Everything the ask form needs to render
pub struct AskFormView<'a> {
    pub input: &'a SubmissionInput,
    pub errors: &'a FormErrors,
    pub variant: FormVariant,
    pub csrf_token: &'a str,
}

/// Render the ask form
pub fn render_ask_form(view: &AskFormView<'_>) -> String {
    let mut buf = String::new();

    buf.push_str("<h1>Ask a Question</h1>\n");

    // Form-level errors (store failures)
    if !view.errors.form().is_empty() {
        buf.push_str("<div class=\"validation-summary\" role=\"alert\">\n<ul>\n");
        for message in view.errors.form() {
            buf.push_str(&format!("<li>{}</li>\n", escape_html(message)));
        }
        buf.push_str("</ul>\n</div>\n");
    }

    buf.push_str("<form method=\"post\" action=\"/Questions/Ask\" novalidate>\n");
    buf.push_str(&format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
        CSRF_FIELD,
        escape_html(view.csrf_token)
    ));

    if view.variant.is_extended() {
        buf.push_str(&render_text_input(
            Field::Name,
            "Your Name",
            "text",
            &view.input.name,
            view.errors,
        ));
    }

    buf.push_str(&render_text_input(
        Field::Email,
        "Email Address",
        "email",
        &view.input.email,
        view.errors,
    ));

    if view.variant.is_extended() {
        buf.push_str(&render_category(&view.input.category, view.errors));
        buf.push_str(&render_priority(&view.input.priority));
    }

    buf.push_str(&render_question_text(&view.input.question_text, view.errors));

    buf.push_str("<button type=\"submit\">Submit Question</button>\n");
    buf.push_str("</form>\n");

    page("Ask a Question", &buf)
}

/// Render the confirmation page, with the one-time notice when present
pub fn render_success(notice: Option<&str>) -> String {
    let mut buf = String::new();

    buf.push_str("<h1>Question Submitted Successfully!</h1>\n");
    if let Some(notice) = notice {
        buf.push_str(&format!(
            "<div class=\"notice\" role=\"status\">{}</div>\n",
            escape_html(notice)
        ));
    }
    buf.push_str("<p>We'll get back to you at the address you provided.</p>\n");
    buf.push_str("<p><a href=\"/Questions/Ask\">Ask another question</a></p>\n");

    page("Question Submitted", &buf)
}

fn render_text_input(
    field: Field,
    label: &str,
    input_type: &str,
    value: &str,
    errors: &FormErrors,
) -> String {
    let name = field.form_name();
    let mut buf = String::from("<div class=\"field\">\n");
    buf.push_str(&format!("<label for=\"{name}\">{label}</label>\n"));
    buf.push_str(&format!(
        "<input type=\"{input_type}\" id=\"{name}\" name=\"{name}\" value=\"{}\"{}>\n",
        escape_html(value),
        invalid_attr(field, errors)
    ));
    buf.push_str(&render_field_errors(field, errors));
    buf.push_str("</div>\n");
    buf
}

fn render_category(selected: &str, errors: &FormErrors) -> String {
    let field = Field::Category;
    let name = field.form_name();
    let mut buf = String::from("<div class=\"field\">\n");
    buf.push_str(&format!("<label for=\"{name}\">Question Category</label>\n"));
    buf.push_str(&format!(
        "<select id=\"{name}\" name=\"{name}\"{}>\n",
        invalid_attr(field, errors)
    ));
    buf.push_str("<option value=\"\">-- Select a category --</option>\n");
    for category in CATEGORIES {
        let selected_attr = if *category == selected { " selected" } else { "" };
        buf.push_str(&format!(
            "<option value=\"{category}\"{selected_attr}>{category}</option>\n"
        ));
    }
    buf.push_str("</select>\n");
    buf.push_str(&render_field_errors(field, errors));
    buf.push_str("</div>\n");
    buf
}

fn render_priority(selected: &str) -> String {
    let name = Field::Priority.form_name();
    let mut buf = String::from("<fieldset class=\"field\">\n<legend>Priority</legend>\n");
    for priority in PRIORITIES {
        let id = format!("{}-{}", name, priority.to_lowercase());
        let checked = if *priority == selected { " checked" } else { "" };
        buf.push_str(&format!(
            "<input type=\"radio\" id=\"{id}\" name=\"{name}\" value=\"{priority}\"{checked}>\n\
             <label for=\"{id}\">{priority}</label>\n"
        ));
    }
    buf.push_str("</fieldset>\n");
    buf
}

fn render_question_text(value: &str, errors: &FormErrors) -> String {
    let field = Field::QuestionText;
    let name = field.form_name();
    let mut buf = String::from("<div class=\"field\">\n");
    buf.push_str(&format!("<label for=\"{name}\">Your Question</label>\n"));
    buf.push_str(&format!(
        "<textarea id=\"{name}\" name=\"{name}\" rows=\"6\" maxlength=\"1000\"{}>\n{}</textarea>\n",
        invalid_attr(field, errors),
        escape_html(value)
    ));
    buf.push_str(&render_field_errors(field, errors));
    buf.push_str("</div>\n");
    buf
}

fn invalid_attr(field: Field, errors: &FormErrors) -> &'static str {
    if errors.has_field(field) {
        " aria-invalid=\"true\""
    } else {
        ""
    }
}

fn render_field_errors(field: Field, errors: &FormErrors) -> String {
    errors
        .field(field)
        .iter()
        .map(|message| {
            format!(
                "<span class=\"field-error\" data-field=\"{}\">{}</span>\n",
                field.form_name(),
                escape_html(message)
            )
        })
        .collect()
}

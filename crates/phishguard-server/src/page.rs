//! HTML page for the analysis form

use phishguard_core::RiskBucket;

/// Verdict shown under the form after a submission
pub struct Verdict<'a> {
    pub risk: RiskBucket,
    pub score: u32,
    pub reasons: &'a [String],
}

/// Render the form page, with the verdict when there is one
pub fn render(verdict: Option<&Verdict<'_>>) -> String {
    let result = verdict.map(render_verdict).unwrap_or_default();
    PAGE_TEMPLATE.replace("{{result}}", &result)
}

/// Render the page for a rejected submission
pub fn render_error(message: &str) -> String {
    let block = format!(r#"<div class="result error"><h2>{}</h2></div>"#, escape(message));
    PAGE_TEMPLATE.replace("{{result}}", &block)
}

fn render_verdict(verdict: &Verdict<'_>) -> String {
    let mut html = format!(
        "<div class=\"result {}\">\n<h2>{}</h2>\n<p>Score: {}</p>\n",
        verdict.risk.as_str(),
        escape(verdict.risk.label()),
        verdict.score
    );

    if !verdict.reasons.is_empty() {
        html.push_str("<ul>\n");
        for reason in verdict.reasons {
            html.push_str("<li>");
            html.push_str(&escape(reason));
            html.push_str("</li>\n");
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</div>");
    html
}

/// Escape text for use inside HTML element content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>PhishGuard</title>
    <style>
        body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
        textarea { width: 100%; min-height: 8rem; }
        .result { margin-top: 1.5rem; padding: 1rem; border-radius: 6px; }
        .high, .error { background: #fde2e1; }
        .medium { background: #fff3cd; }
        .safe { background: #e3f7e6; }
    </style>
</head>
<body>
    <h1>PhishGuard</h1>
    <p>Paste a message to check it for phishing risk.</p>
    <form method="post" action="/">
        <textarea name="message" required></textarea>
        <button type="submit">Analyze</button>
    </form>
{{result}}
</body>
</html>
"#;

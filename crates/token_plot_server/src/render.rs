//! HTML presentation for the two pages and their error variants.
//!
//! Everything here is string assembly. User text goes through
//! [`escape_html`] and plot data through [`script_json`].

use axum::http::StatusCode;
use serde_json::json;
use token_plot_core::{Analysis, Summary, SummaryError};

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/css/bootstrap.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const PLOT_TITLE: &str = "3D Token Plot with Labels";
pub const AXIS_TITLES: [&str; 3] = ["Token Index", "Token Length", "Random Z"];

const STYLE: &str = r#"
        body {
            background-color: #f0f2f5;
            font-family: Arial, sans-serif;
        }
        .container {
            margin-top: 50px;
        }
        h1 {
            text-align: center;
            margin-bottom: 20px;
        }
        .form-group {
            margin-bottom: 20px;
        }
        #plot {
            margin-top: 30px;
            height: 600px;
        }
        .prediction {
            font-weight: bold;
            color: #28a745;
        }
        .no-prediction {
            font-weight: bold;
            color: #dc3545;
        }
        .card {
            margin-top: 30px;
        }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
    <style>{STYLE}</style>
    <script src="{PLOTLY_JS}" charset="utf-8"></script>
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

fn back_link() -> &'static str {
    r#"        <a href="/" class="btn btn-primary mt-3">Go Back</a>"#
}

pub fn index_page() -> String {
    let body = r#"        <h1>3D Token Plot &amp; Prediction</h1>
        <div class="card p-4 shadow-sm">
            <form action="/tokenize" method="post" class="form-inline">
                <div class="form-group">
                    <label for="sentence" class="form-label">Enter a sentence:</label>
                    <input type="text" name="sentence" id="sentence" class="form-control form-control-lg w-100" placeholder="Type a sentence..." required/>
                </div>
                <button type="submit" class="btn btn-primary btn-lg w-100 mt-3">Tokenize, Plot and Predict</button>
            </form>
        </div>
        <div id="plot"></div>"#;
    page("Tokenize and Plot", body)
}

pub fn result_page(analysis: &Analysis, summary: &Summary) -> Result<String, serde_json::Error> {
    let script = plot_script(summary)?;
    let body = format!(
        r#"        <h1>3D Token Plot Result</h1>
        <div class="card p-4 shadow-sm">
            <p>Tokens: <strong>{tokens}</strong></p>
            <p class="prediction">Prediction: The predicted next token length is: {prediction} characters</p>
            <div id="plot"></div>
        </div>
{back}
    <script>
{script}
    </script>"#,
        tokens = escape_html(&analysis.joined_tokens()),
        prediction = summary.prediction,
        back = back_link(),
    );
    Ok(page("Tokenize and Plot Result", &body))
}

/// Result page for a sentence with no tokens: the message stands in for the
/// prediction and no plot is drawn.
pub fn empty_result_page(err: &SummaryError) -> String {
    let body = format!(
        r#"        <h1>3D Token Plot Result</h1>
        <div class="card p-4 shadow-sm">
            <p>Tokens: <strong>(none)</strong></p>
            <p class="no-prediction">Prediction: {message}</p>
        </div>
{back}"#,
        message = escape_html(&err.to_string()),
        back = back_link(),
    );
    page("Tokenize and Plot Result", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        r#"        <h1>{heading}</h1>
        <div class="card p-4 shadow-sm">
            <p class="no-prediction">{message}</p>
        </div>
{back}"#,
        heading = escape_html(&heading),
        message = escape_html(message),
        back = back_link(),
    );
    page(&heading, &body)
}

fn plot_script(summary: &Summary) -> Result<String, serde_json::Error> {
    let spec = summary.plot_spec();
    let trace = json!({
        "x": spec.x,
        "y": spec.y,
        "z": spec.z,
        "text": spec.text,
        "mode": "markers+text",
        "marker": {
            "size": 12,
            "line": { "color": "rgba(217, 217, 217, 0.14)", "width": 0.5 },
            "opacity": 0.8
        },
        "textposition": "top center",
        "type": "scatter3d"
    });
    let layout = json!({
        "title": PLOT_TITLE,
        "autosize": true,
        "scene": {
            "xaxis": { "title": AXIS_TITLES[0] },
            "yaxis": { "title": AXIS_TITLES[1] },
            "zaxis": { "title": AXIS_TITLES[2] }
        }
    });
    Ok(format!(
        "        const trace = {trace};\n        const layout = {layout};\n        Plotly.newPlot('plot', [trace], layout);",
        trace = script_json(&trace)?,
        layout = script_json(&layout)?,
    ))
}

/// JSON that is safe to inline in a `<script>` element.
pub fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

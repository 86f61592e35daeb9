//! HTML rendering for the viewer page.
//!
//! Every response is one full render pass: the page shell (form, loading
//! indicator, result container) with the result area's contents swapped in.
//! Markup is minimal structural HTML with Bootstrap class names.

use chrono::{DateTime, Utc};

use crate::models::CommitRecord;

/// The full page with `result_area` placed inside the result container.
pub fn page(result_area: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>GitHub Commit Viewer</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
<div class="container py-4">
    <h1 class="mb-4">GitHub Commit Viewer</h1>
    <form id="gitHubForm" class="mb-4" action="/commits" method="get">
        <div class="mb-3">
            <label for="usernameInput" class="form-label">Username</label>
            <input type="text" class="form-control" id="usernameInput" name="account">
        </div>
        <div class="mb-3">
            <label for="repoInput" class="form-label">Repository</label>
            <input type="text" class="form-control" id="repoInput" name="repository">
        </div>
        <button type="submit" class="btn btn-primary">Fetch Commits</button>
    </form>
    <div id="loadingIndicator" class="spinner-border d-none" role="status">
        <span class="visually-hidden">Loading...</span>
    </div>
    <div id="commitsList">{result_area}</div>
</div>
<script>
    // Presentational only: show the spinner while the submitted page loads.
    // Blank fields get a validation alert with no fetch, so no spinner.
    document.getElementById('gitHubForm').addEventListener('submit', () => {{
        const account = document.getElementById('usernameInput').value.trim();
        const repository = document.getElementById('repoInput').value.trim();
        if (account && repository) {{
            document.getElementById('commitsList').innerHTML = '';
            document.getElementById('loadingIndicator').classList.remove('d-none');
        }}
    }});
</script>
</body>
</html>
"#
    )
}

/// A single alert block, used for every failure kind and the empty result.
pub fn alert(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger" role="alert">{}</div>"#,
        escape(message)
    )
}

/// The result area for a successful fetch: one card per record in received
/// order, or the empty-result alert.
pub fn commit_list(commits: &[CommitRecord]) -> String {
    if commits.is_empty() {
        return alert("No commits found in this repository.");
    }

    let mut html = String::from(r#"<h3 class="mb-3">Recent Commits</h3>"#);
    for commit in commits {
        html.push_str(&commit_card(commit));
    }
    html
}

fn commit_card(record: &CommitRecord) -> String {
    format!(
        r#"
<div class="card mb-3">
    <div class="card-body">
        <div class="d-flex align-items-center mb-2">
            <img src="{avatar}" alt="Author avatar" class="rounded-circle me-2" width="40" height="40">
            <div>
                <strong>{name}</strong>
                <div class="commit-date">{date}</div>
            </div>
        </div>
        <h5 class="card-title">{message}</h5>
        <a href="{url}" class="btn btn-sm btn-outline-secondary" target="_blank" rel="noopener">View on GitHub</a>
    </div>
</div>"#,
        avatar = escape(record.avatar_url()),
        name = escape(record.display_name()),
        date = format_date(record.commit.author.date),
        message = escape(&record.commit.message),
        url = escape(&record.html_url),
    )
}

/// Short month, numeric day and year, two-digit hour and minute.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %H:%M").to_string()
}

fn escape(text: &str) -> String {
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

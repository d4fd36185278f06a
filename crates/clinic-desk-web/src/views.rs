//! Server-rendered HTML pages.
//!
//! Every piece of user-supplied text goes through [`escape`].

use std::fmt::Write;

use axum::http::StatusCode;
use clinic_desk_core::{NewVisit, PatientKey, Registration, VisitPage};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<nav><a href="/dashboard">Dashboard</a> | <a href="/emr/new">New EMR</a> | <a href="/registration">Registration</a></nav>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

fn error_banner(error: Option<&str>) -> String {
    error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default()
}

pub fn login(error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Sign in</h1>
{banner}
<form method="post" action="/login">
<label>Username <input name="username" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Sign in</button>
</form>"#,
        banner = error_banner(error),
    );
    layout("Sign in", &body)
}

/// Hidden-field form that opens one visit of a patient.
fn patient_link(name: &str, birth_date: &str, index: usize, label: &str) -> String {
    format!(
        r#"<form method="get" action="/patient" class="inline">
<input type="hidden" name="name" value="{name}">
<input type="hidden" name="birth_date" value="{birth_date}">
<input type="hidden" name="index" value="{index}">
<button type="submit">{label}</button>
</form>"#,
        name = escape(name),
        birth_date = escape(birth_date),
        label = escape(label),
    )
}

pub fn dashboard(category: &str, query: &str, patients: &[PatientKey]) -> String {
    let mut rows = String::new();
    for patient in patients {
        let birth = patient.birth_date.to_string();
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&patient.name),
            birth,
            patient_link(&patient.name, &birth, 0, "Open"),
        );
    }

    let results = if query.is_empty() {
        String::new()
    } else if patients.is_empty() {
        format!("<p>No patients match \"{}\".</p>", escape(query))
    } else {
        format!(
            "<table>\n<tr><th>Name</th><th>Date of birth</th><th></th></tr>\n{rows}</table>"
        )
    };

    let body = format!(
        r#"<h1>{category}</h1>
<form method="get" action="/dashboard">
<input type="hidden" name="category" value="{category}">
<input name="query" value="{query}" placeholder="Patient name">
<button type="submit">Search</button>
</form>
{results}"#,
        category = escape(category),
        query = escape(query),
    );
    layout("Dashboard", &body)
}

pub fn new_emr(form: &NewVisit, error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>New EMR</h1>
{banner}
<form method="post" action="/emr/new">
<label>Name <input name="name" value="{name}" maxlength="100" required></label>
<label>Date of birth <input name="birth_date" value="{birth_date}" placeholder="YYYY-MM-DD" required></label>
<label>Visit date <input name="visit_date" value="{visit_date}" placeholder="YYYY-MM-DD" required></label>
<label>Symptoms <textarea name="symptoms" required>{symptoms}</textarea></label>
<label>Treatment <textarea name="treatment" required>{treatment}</textarea></label>
<button type="submit">Save</button>
</form>"#,
        banner = error_banner(error),
        name = escape(&form.name),
        birth_date = escape(&form.birth_date),
        visit_date = escape(&form.visit_date),
        symptoms = escape(&form.symptoms),
        treatment = escape(&form.treatment),
    );
    layout("New EMR", &body)
}

pub fn view_emr(page: &VisitPage) -> String {
    let record = &page.record;
    let birth = record.birth_date.to_string();

    let mut nav = String::new();
    if let Some(newer) = page.newer_index() {
        nav.push_str(&patient_link(&record.name, &birth, newer, "Newer visit"));
    }
    if let Some(older) = page.older_index() {
        nav.push_str(&patient_link(&record.name, &birth, older, "Older visit"));
    }

    let body = format!(
        r#"<h1>{name} ({birth})</h1>
<p>Visit {position} of {total}</p>
<dl>
<dt>Visit date</dt><dd>{visit_date}</dd>
<dt>Symptoms</dt><dd>{symptoms}</dd>
<dt>Treatment</dt><dd>{treatment}</dd>
</dl>
{nav}"#,
        name = escape(&record.name),
        position = page.index + 1,
        total = page.total,
        visit_date = record.visit_date,
        symptoms = escape(&record.symptoms),
        treatment = escape(&record.treatment),
    );
    layout(&record.name, &body)
}

pub fn registration(registrations: &[Registration]) -> String {
    let mut rows = String::new();
    for reg in registrations {
        let class = if reg.is_waiting() { "waiting" } else { "seen" };
        let _ = write!(
            rows,
            r#"<tr class="{class}"><td>{id}</td>
<td><form method="post" action="/registration/update">
<input type="hidden" name="id" value="{id}">
<input name="patient_name" value="{name}" maxlength="100" required>
<input name="status" value="{status}" maxlength="100" required>
<button type="submit">Save</button>
</form></td>
<td><form method="post" action="/registration/delete">
<input type="hidden" name="id" value="{id}">
<button type="submit">Delete</button>
</form></td></tr>
"#,
            id = reg.id,
            name = escape(&reg.patient_name),
            status = escape(&reg.status),
        );
    }

    let body = format!(
        r#"<h1>Registration</h1>
<form method="post" action="/registration/add">
<input name="patient_name" placeholder="Patient name" maxlength="100" required>
<button type="submit">Add</button>
</form>
<table>
<tr><th>No.</th><th>Patient / status</th><th></th></tr>
{rows}</table>
<form method="post" action="/registration/reset" onsubmit="return confirm('Clear the whole queue?');">
<button type="submit">Reset queue</button>
</form>"#
    );
    layout("Registration", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{code}</h1>\n<p>{message}</p>",
        code = status.as_u16(),
        message = escape(message),
    );
    layout(status.canonical_reason().unwrap_or("Error"), &body)
}

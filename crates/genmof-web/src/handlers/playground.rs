//! Playground page — design brief form, session articles and candidate cards.

use axum::{extract::State, response::Html, Form};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::str::FromStr;
use tracing::error;

use genmof_common::error::{GenmofError, Result};
use genmof_core::request::{
    CANDIDATE_COUNT_MAX, CANDIDATE_COUNT_MIN, DEFAULT_CANDIDATE_COUNT, DEFAULT_PORE_SIZE,
    PORE_SIZE_MAX, PORE_SIZE_MIN, PORE_SIZE_STEP,
};
use genmof_core::{ArticleInfo, Candidate, DesignRequest, Metal, Topology};

use crate::html::escape_html;
use crate::session::session_id;
use crate::state::SharedState;

/// Sidebar with the article uploader, shared by every page render
pub const SIDEBAR_HTML: &str = include_str!("../../templates/sidebar.html");

// ── Form input ────────────────────────────────────────────────────────────────

/// Raw playground form. Fields stay strings so that bad input renders a
/// warning instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct DesignForm {
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub metal: String,
    #[serde(default)]
    pub topology: String,
    #[serde(default)]
    pub pore_size: String,
    #[serde(default)]
    pub candidate_count: String,
}

impl DesignForm {
    /// Parse into a request. Empty numeric fields take their defaults.
    pub fn to_request(&self) -> Result<DesignRequest> {
        Ok(DesignRequest {
            brief: self.brief.clone(),
            metal: Metal::from_str(&self.metal)?,
            topology: Topology::from_str(&self.topology)?,
            pore_size: parse_or(&self.pore_size, DEFAULT_PORE_SIZE, "pore size")?,
            candidate_count: parse_or(&self.candidate_count, DEFAULT_CANDIDATE_COUNT, "candidate count")?,
        })
    }
}

fn parse_or<T: FromStr>(raw: &str, default: T, field: &str) -> Result<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse()
        .map_err(|_| GenmofError::InvalidRequest(format!("{field} '{raw}' is not a number")))
}

/// What the results section shows.
#[derive(Debug)]
pub enum Outcome {
    Idle,
    Warning(String),
    Candidates(Vec<Candidate>),
}

// ── Handlers ──────────────────────────────────────────────────────────────────

pub async fn playground_page(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let (jar, session) = session_id(jar);
    let articles = state.articles(session).await;
    let html = render_page(&DesignRequest::default(), &articles, &Outcome::Idle);
    (jar, Html(html))
}

pub async fn generate_submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<DesignForm>,
) -> (CookieJar, Html<String>) {
    let (jar, session) = session_id(jar);
    let articles = state.articles(session).await;

    let (shown, outcome) = match form.to_request() {
        Ok(request) => {
            let outcome = match state.generate(&request) {
                Ok(candidates) => Outcome::Candidates(candidates),
                Err(e) if e.is_user_facing() => Outcome::Warning(e.to_string()),
                Err(e) => {
                    error!("Candidate generation failed: {}", e);
                    Outcome::Warning("Candidate generation failed; please try again.".to_string())
                }
            };
            (request, outcome)
        }
        Err(e) => {
            let shown = DesignRequest { brief: form.brief.clone(), ..Default::default() };
            (shown, Outcome::Warning(e.to_string()))
        }
    };

    (jar, Html(render_page(&shown, &articles, &outcome)))
}

// ── Rendering ─────────────────────────────────────────────────────────────────

pub fn render_page(form: &DesignRequest, articles: &[ArticleInfo], outcome: &Outcome) -> String {
    let warning_html = match outcome {
        Outcome::Warning(msg) => format!(
            r#"<div class="gen-warning" role="alert">⚠️ {}</div>"#,
            escape_html(msg)
        ),
        _ => String::new(),
    };

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>GenMOF – AI-Driven MOF Design</title>
    <link rel="stylesheet" href="/static/css/genmof.css?v=0.1.0">
</head>
<body>
<div class="gen-app">
{}
<main class="gen-main">
    <div class="gen-columns">
        <section class="gen-left">
{}
            <h4>📚 Uploaded articles (session)</h4>
{}
        </section>
        <section class="gen-right">
            <h4>🧪 GenMOF Playground</h4>
{}
{}
        </section>
    </div>

    <h3>Candidate MOFs</h3>
{}
    <hr>
    <p class="gen-caption">GenMOF front-end · upload articles, design MOFs, and later connect your real model.</p>
</main>
</div>
</body>
</html>"#,
        SIDEBAR_HTML,
        render_hero(),
        render_articles(articles),
        render_form(form),
        warning_html,
        render_results(form, outcome),
    )
}

fn render_hero() -> &'static str {
    r#"            <div class="gen-card">
                <span class="gen-eyebrow">GenMOF · AI-assisted MOF design</span>
                <h1>Turn <span class="gen-gradient-text">chemical intuition</span><br/>into candidate MOFs in seconds.</h1>
                <p class="gen-subtle gen-lede">
                    Describe your target application (CO₂ capture, H₂ storage, drug delivery),
                    choose an optional metal center and topology hint, and let
                    <b>GenMOF</b> suggest chemically plausible frameworks and descriptors
                    that you can export back to your notebook.
                </p>
                <div class="gen-row">
                    <span class="gen-metric-pill"><strong>10,000+</strong> training MOFs</span>
                    <span class="gen-metric-pill"><strong>Topology-aware</strong> prompting</span>
                    <span class="gen-metric-pill"><strong>LLM-guided</strong> naming</span>
                </div>
                <div class="gen-row">
                    <span class="gen-chip">Metal centers: <b>Zn, Cu, Zr, Co, Ni</b></span>
                    <span class="gen-chip">Topologies: <b>pcu, fcu, sql, dia...</b></span>
                    <span class="gen-chip">Export: <b>.json</b></span>
                </div>
            </div>"#
}

fn render_articles(articles: &[ArticleInfo]) -> String {
    if articles.is_empty() {
        return r#"            <p class="gen-caption">No articles uploaded yet. Use the sidebar to add PDFs or text files.</p>"#.to_string();
    }
    articles.iter().map(|art| {
        format!(r#"            <div class="gen-article-card">
                <b>{}</b><br/>
                <span class="gen-subtle">Type: {} · Size: {:.1} kB</span>
            </div>
"#, escape_html(&art.name), escape_html(&art.mime_type), art.size_kb())
    }).collect()
}

fn render_options<T: PartialEq + Copy>(all: &[T], selected: T, label: impl Fn(T) -> &'static str) -> String {
    all.iter().map(|&item| {
        let sel = if item == selected { " selected" } else { "" };
        format!(r#"<option value="{0}"{1}>{0}</option>"#, escape_html(label(item)), sel)
    }).collect()
}

fn render_form(form: &DesignRequest) -> String {
    format!(r#"            <form class="gen-form" method="post" action="/generate">
                <label for="brief">Design brief</label>
                <textarea id="brief" name="brief" rows="5">{}</textarea>
                <div class="gen-form-row">
                    <div>
                        <label for="metal">Preferred metal center (optional)</label>
                        <select id="metal" name="metal">{}</select>
                    </div>
                    <div>
                        <label for="topology">Topology hint (optional)</label>
                        <select id="topology" name="topology">{}</select>
                    </div>
                </div>
                <label for="pore_size">Target pore size window (Å): <output id="pore_size_out">{:.1}</output></label>
                <input id="pore_size" type="range" name="pore_size" min="{:.1}" max="{:.1}" step="{}" value="{:.1}"
                       oninput="document.getElementById('pore_size_out').value = Number(this.value).toFixed(1)">
                <label for="candidate_count">Number of candidate MOFs: <output id="candidate_count_out">{}</output></label>
                <input id="candidate_count" type="range" name="candidate_count" min="{}" max="{}" step="1" value="{}"
                       oninput="document.getElementById('candidate_count_out').value = this.value">
                <button type="submit" class="gen-button">Generate candidates ⚗️</button>
            </form>"#,
        escape_html(&form.brief),
        render_options(&Metal::ALL, form.metal, |m| m.as_str()),
        render_options(&Topology::ALL, form.topology, |t| t.as_str()),
        form.pore_size,
        PORE_SIZE_MIN, PORE_SIZE_MAX, PORE_SIZE_STEP, form.pore_size,
        form.candidate_count,
        CANDIDATE_COUNT_MIN, CANDIDATE_COUNT_MAX, form.candidate_count,
    )
}

fn render_results(form: &DesignRequest, outcome: &Outcome) -> String {
    let candidates = match outcome {
        Outcome::Candidates(c) if !c.is_empty() => c,
        _ => {
            return r#"    <p class="gen-caption">Submit a design brief to see demo candidates. Later you can plug in your real GenMOF model instead of the demo generator.</p>"#.to_string();
        }
    };

    let cards: String = candidates.iter().map(|c| {
        format!(r#"    <div class="gen-mof-card">
        <div class="gen-mof-inner">
            <div class="gen-mof-title">
                <span>{}</span>
                <span class="gen-chip">Node: <b>{}</b></span>
            </div>
            <div class="gen-subtle gen-tagline">{}</div>
            <div class="gen-mof-meta">
                <span>Topology: <b>{}</b></span>
                <span>Pore window: <b>{:.1}</b> Å</span>
                <span>Linker: <b>{}</b></span>
            </div>
        </div>
    </div>
"#,
            escape_html(&c.name), escape_html(&c.metal), escape_html(&c.tagline),
            escape_html(&c.topology), c.pore_size, escape_html(&c.linker))
    }).collect();

    format!(r#"{}    <form method="get" action="/export/candidates.json" class="gen-export">
        <input type="hidden" name="brief" value="{}">
        <input type="hidden" name="metal" value="{}">
        <input type="hidden" name="topology" value="{}">
        <input type="hidden" name="pore_size" value="{}">
        <input type="hidden" name="candidate_count" value="{}">
        <button type="submit" class="gen-button gen-button-outline">Export .json</button>
    </form>
"#,
        cards,
        escape_html(&form.brief),
        escape_html(form.metal.as_str()),
        escape_html(form.topology.as_str()),
        form.pore_size,
        form.candidate_count,
    )
}

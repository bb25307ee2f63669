//! Defensive decoding of AI replies.
//!
//! Replies are read as loose JSON and mapped field by field: a missing or
//! mistyped field becomes 0, an empty string or an empty list. Only a reply
//! that is not a JSON object at all is rejected.

use serde_json::{Map, Value};

use crate::gateway::fallback::RADAR_AXIS_DEFAULTS;
use crate::gateway::GatewayError;
use crate::models::{
    AnalysisResult, CandidateAssessment, EmploymentType, PostingDraft, Project, RadarScores,
    SubScore,
};

pub fn analysis_from_reply(reply: &Value) -> Result<AnalysisResult, GatewayError> {
    let obj = as_object(reply)?;
    Ok(AnalysisResult {
        category: text(obj, "category"),
        inferred_tech_stack: text_list(obj, "inferred_tech_stack"),
        suggested_partners: text_list(obj, "suggested_partners"),
        summary: text(obj, "summary"),
    })
}

pub fn draft_from_reply(reply: &Value) -> Result<PostingDraft, GatewayError> {
    let obj = as_object(reply)?;
    Ok(PostingDraft {
        title: text(obj, "title"),
        description: text(obj, "description"),
        company_description: text(obj, "company_description"),
        requirements: text_list(obj, "requirements"),
        skills: text_list(obj, "skills"),
        employment_type: EmploymentType::from_label(&text(obj, "type")),
    })
}

pub fn assessment_from_reply(reply: &Value) -> Result<CandidateAssessment, GatewayError> {
    let obj = as_object(reply)?;
    let name = text(obj, "real_name");

    Ok(CandidateAssessment {
        name: (!name.is_empty()).then_some(name),
        summary: text(obj, "summary"),
        match_score: bounded(obj, "match_score", 100),
        domain_expertise: sub_score(obj, "domain_expertise"),
        technical_expertise: sub_score(obj, "technical_expertise"),
        behavioral_patterns: sub_score(obj, "behavioral_patterns"),
        projects: projects(obj),
        radar: radar(obj.get("radar_scores")),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Field helpers
// ────────────────────────────────────────────────────────────────────────────

fn as_object(reply: &Value) -> Result<&Map<String, Value>, GatewayError> {
    reply
        .as_object()
        .ok_or_else(|| GatewayError::Parse(format!("expected a JSON object, got {reply}")))
}

fn text(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn text_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Integer field clamped to `0..=max`. Accepts floats by rounding.
fn bounded(obj: &Map<String, Value>, key: &str, max: u8) -> u8 {
    let raw = obj.get(key).and_then(|v| {
        v.as_i64()
            .or_else(|| v.as_f64().map(|f| f.round() as i64))
    });
    raw.map(|n| n.clamp(0, i64::from(max)) as u8).unwrap_or(0)
}

fn sub_score(obj: &Map<String, Value>, prefix: &str) -> SubScore {
    SubScore {
        score: bounded(obj, &format!("{prefix}_score"), 5),
        description: text(obj, &format!("{prefix}_text")),
    }
}

fn projects(obj: &Map<String, Value>) -> Vec<Project> {
    obj.get("projects")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|p| Project {
                    name: text(p, "name"),
                    description: text(p, "description"),
                    tech_stack: text_list(p, "tech_stack"),
                })
                .filter(|p| !p.name.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Missing or zero axes take the per-axis default.
fn radar(value: Option<&Value>) -> RadarScores {
    let empty = Map::new();
    let obj = value.and_then(Value::as_object).unwrap_or(&empty);
    let axis = |key: &str, default: u8| match bounded(obj, key, RadarScores::FULL_MARK) {
        0 => default,
        score => score,
    };

    let d = RADAR_AXIS_DEFAULTS;
    RadarScores {
        clarity: axis("clarity", d.clarity),
        builder: axis("builder", d.builder),
        fast_follower: axis("fast_follower", d.fast_follower),
        early_adopter: axis("early_adopter", d.early_adopter),
        peer_recognition: axis("peer_recognition", d.peer_recognition),
    }
}

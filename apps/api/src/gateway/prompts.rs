// All LLM prompt templates for the AI gateway.
// Placeholders are `{name}` and are filled with `llm_client::prompts::fill`.

/// Persona for context analysis (step 1 of posting creation).
pub const CONTEXT_ANALYSIS_PERSONA: &str = "You are a product research analyst. \
    You read descriptions, links and notes about a product demo video and infer what is being built.";

/// Replace `{input}` before sending.
pub const CONTEXT_ANALYSIS_PROMPT: &str = r#"Analyze this video description / link / notes:
"{input}"

Determine:
1. The industry category (e.g. Fintech, EdTech, Gaming, DeFi, Enterprise SaaS). If crypto is mentioned, prefer DeFi.
2. The likely tech stack (e.g. 3D work suggests WebGL or Unity).
3. Technology partners from this list, only when relevant: Circle, Autodesk, Stripe, Solana, Unity.

Return a JSON object with this EXACT schema:
{
  "category": "DeFi",
  "inferred_tech_stack": ["Rust", "Solana"],
  "suggested_partners": ["Solana"],
  "summary": "One sentence describing what is being built in the video."
}

"category", "inferred_tech_stack" and "summary" are required. "suggested_partners" may be an empty array."#;

/// Persona for drafting the posting (step 3 of posting creation).
pub const POSTING_DRAFT_PERSONA: &str =
    "You are an expert technical hiring manager at a top-tier tech company.";

/// Replace `{category}`, `{tech_stack}`, `{summary}` and `{notes}` before sending.
pub const POSTING_DRAFT_PROMPT: &str = r#"Context from the video analysis:
Category: {category}
Tech stack: {tech_stack}
Summary: {summary}

Additional notes from the recruiter: "{notes}"

Task: write a job posting to hire the engineer who could BUILD this product.

Directives:
1. About the company: from the product's vibe, write a short, exciting "About Us".
2. Role description: friendly, exciting, non-corporate. Use comparisons (e.g. "think building the backend of Uber, but for drones").
3. Skills: be specific, based on the tech stack identified.

Return a JSON object with this EXACT schema:
{
  "title": "Senior Protocol Engineer",
  "description": "Role description.",
  "company_description": "About the company.",
  "requirements": ["5+ years building payment systems"],
  "skills": ["Rust", "Solana"],
  "type": "Full-time"
}

"type" MUST be one of: "Full-time", "Contract", "Remote"."#;

/// Persona for candidate assessment (intake).
pub const CANDIDATE_PERSONA: &str = "You are an elite technical auditor. \
    You assess developers from their public footprint and resume text.";

/// Replace `{handle}` and `{raw_data}` before sending.
pub const CANDIDATE_PROMPT: &str = r#"Target: GitHub user {handle}.
Context data: "{raw_data}"

Tasks:
1. Name extraction: extract the user's real full name from the context. Only fall back to the handle if no real name is present.
2. Multidimensional skill analysis:
   - Architectural patterns: clean code, MVC, microservices.
   - Code quality: inferred from testing, types, documentation.
   - Innovation: use of bleeding-edge libraries (LangChain, Solana, etc).

Return a JSON object with this EXACT schema:
{
  "real_name": "Jane Doe",
  "summary": "A professional summary of the developer.",
  "match_score": 0,
  "domain_expertise_score": 1,
  "domain_expertise_text": "Short description of domain expertise.",
  "technical_expertise_score": 1,
  "technical_expertise_text": "Short description of technical expertise.",
  "behavioral_patterns_score": 1,
  "behavioral_patterns_text": "Short description of behavioral patterns.",
  "projects": [
    {"name": "project", "description": "what it does", "tech_stack": ["Rust"]}
  ],
  "radar_scores": {
    "clarity": 1,
    "builder": 1,
    "fast_follower": 1,
    "early_adopter": 1,
    "peer_recognition": 1
  }
}

RANGES:
- match_score: integer 0-100 (overall match percentage)
- *_score sub-scores: integer 1-5
- radar_scores values: integer 1-100

"real_name", "summary", "match_score", "domain_expertise_score", "projects" and "radar_scores" are required."#;

/// System prompt for the tutor. Answers are free text, not JSON.
pub const TUTOR_SYSTEM: &str = "You are an expert technical tutor called \"ChatPye Bot\". \
    Answer concisely and helpfully. Explain concepts if needed.";

/// Replace `{context}` and `{question}` before sending.
pub const TUTOR_PROMPT: &str = r#"The user is watching a technical video about: "{context}".

User question: "{question}""#;

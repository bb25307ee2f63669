//! Demo data the board starts with.

use crate::models::{
    CandidateProfile, CandidateStatus, EmploymentType, JobPosting, LearningModule, Project,
    RadarScores, SubScore,
};

/// Id of the seeded candidate that demo (non-intake) candidate identities apply as.
pub const DEMO_CANDIDATE_ID: &str = "1";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: "j1".to_string(),
            title: "Senior Distributed Systems Engineer".to_string(),
            company: "Nexus Financial".to_string(),
            company_description: None,
            location: "Zurich, CH (Remote)".to_string(),
            description: "Building the next generation of high-frequency trading infrastructure \
                using Rust and Kafka. We need someone who understands low-latency constraints."
                .to_string(),
            requirements: strings(&["Rust", "Kafka", "System Design", "Kubernetes"]),
            skills: strings(&["Rust", "Distributed Systems", "C++"]),
            employment_type: EmploymentType::FullTime,
            salary_range: Some("$140k - $180k".to_string()),
            video_url: None,
            logo_url: Some(
                "https://images.unsplash.com/photo-1560179707-f14e90ef3dab?w=100&h=100&fit=crop"
                    .to_string(),
            ),
            match_rating: Some(4.9),
            tech_partner: None,
            sponsored_learning: None,
            learning_tracks: Vec::new(),
        },
        JobPosting {
            id: "j2".to_string(),
            title: "AI Product Engineer".to_string(),
            company: "Generative Dynamics".to_string(),
            company_description: None,
            location: "Berlin, DE".to_string(),
            description: "Integrate LLMs into our core creative suite. You will work closely \
                with research scientists to productize foundation models."
                .to_string(),
            requirements: strings(&["Python", "React", "LangChain", "UX Intuition"]),
            skills: strings(&["Python", "TypeScript", "GenAI"]),
            employment_type: EmploymentType::FullTime,
            salary_range: Some("€100k - €130k".to_string()),
            video_url: None,
            logo_url: Some(
                "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=100&h=100&fit=crop"
                    .to_string(),
            ),
            match_rating: Some(5.0),
            tech_partner: None,
            sponsored_learning: None,
            learning_tracks: Vec::new(),
        },
        JobPosting {
            id: "j3".to_string(),
            title: "Blockchain Protocol Developer".to_string(),
            company: "EtherLink".to_string(),
            company_description: None,
            location: "Zug, CH".to_string(),
            description: "Core protocol development for a Layer 2 scaling solution. Deep \
                understanding of EVM and ZK-rollups required."
                .to_string(),
            requirements: strings(&["Solidity", "Go", "Cryptography"]),
            skills: strings(&["Solidity", "Go", "Cryptography"]),
            employment_type: EmploymentType::Contract,
            salary_range: Some("$120/hr".to_string()),
            video_url: None,
            logo_url: Some(
                "https://images.unsplash.com/photo-1622630994105-2026606f3024?w=100&h=100&fit=crop"
                    .to_string(),
            ),
            match_rating: Some(4.7),
            tech_partner: None,
            sponsored_learning: None,
            learning_tracks: Vec::new(),
        },
    ]
}

fn project(name: &str, description: &str, tech_stack: &[&str]) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        tech_stack: strings(tech_stack),
    }
}

pub fn candidates() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            id: DEMO_CANDIDATE_ID.to_string(),
            name: "Matteo Saponati".to_string(),
            handle: "matteosaponati".to_string(),
            avatar_url: "https://picsum.photos/200".to_string(),
            summary: "Research Scientist in ML and exotic computing at ETH Zürich. Specialist \
                in fine-tuning foundation models for specialized domains."
                .to_string(),
            match_score: 95,
            domain_expertise: SubScore::new(5, "LLM Foundation Models"),
            technical_expertise: SubScore::new(5, "Python, PyTorch, CUDA"),
            behavioral_patterns: SubScore::new(4, "Fast Follower, Research-oriented"),
            projects: vec![
                project(
                    "LSD finetuning post",
                    "Finetuned LLMs for psychedelic research papers analysis.",
                    &["Python", "LLMs"],
                ),
                project(
                    "Attention Structures",
                    "Deep analysis of transformer attention heads visualization.",
                    &["PyTorch", "D3.js"],
                ),
            ],
            recent_activity: "pushed to transformers".to_string(),
            radar: RadarScores::new(90, 95, 99, 90, 85),
            status: CandidateStatus::Pretraining,
            is_upskilling: None,
            learning_progress: None,
        },
        CandidateProfile {
            id: "2".to_string(),
            name: "Sarah Chen".to_string(),
            handle: "schen_dev".to_string(),
            avatar_url: "https://picsum.photos/201".to_string(),
            summary: "Systems Architect focused on scalable distributed infrastructure. \
                Contributor to Kubernetes core."
                .to_string(),
            match_score: 92,
            domain_expertise: SubScore::new(5, "Cloud Infrastructure"),
            technical_expertise: SubScore::new(5, "Go, Rust, Kubernetes"),
            behavioral_patterns: SubScore::new(3, "Builder, Reliability-focused"),
            projects: vec![
                project(
                    "K8s-Autoscaler",
                    "Custom autoscaler for high-load clusters.",
                    &["Go", "Kubernetes"],
                ),
                project(
                    "Distributed Cache",
                    "Raft-based consensus caching system.",
                    &["Rust"],
                ),
            ],
            recent_activity: "merged PR in kubernetes".to_string(),
            radar: RadarScores::new(85, 98, 70, 75, 95),
            status: CandidateStatus::Interview,
            is_upskilling: None,
            learning_progress: None,
        },
    ]
}

pub fn learning_modules() -> Vec<LearningModule> {
    vec![
        LearningModule {
            id: "1".to_string(),
            title: "Distributed Systems & Rust".to_string(),
            description: "Deep dive into memory safety and concurrency patterns required for \
                high-frequency trading platforms."
                .to_string(),
            thumbnail: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=500&q=80"
                .to_string(),
            video_url: "https://www.youtube.com/embed/zOwk_Y2v0b4".to_string(),
            duration: "45 min".to_string(),
            skills: strings(&["Rust", "Concurrency"]),
            completed: true,
            partner: "None".to_string(),
        },
        LearningModule {
            id: "2".to_string(),
            title: "Building on Circle".to_string(),
            description: "Learn how to integrate USDC and programmable wallets into your \
                fintech application."
                .to_string(),
            thumbnail: "https://images.unsplash.com/photo-1622630994105-2026606f3024?w=500&q=80"
                .to_string(),
            video_url: "https://www.youtube.com/embed/aircAruvnKk".to_string(),
            duration: "60 min".to_string(),
            skills: strings(&["Blockchain", "USDC"]),
            completed: false,
            partner: "Circle".to_string(),
        },
        LearningModule {
            id: "3".to_string(),
            title: "Autodesk Platform Services".to_string(),
            description: "Cloud APIs for design and make data. Automate workflows for CAD."
                .to_string(),
            thumbnail: "https://images.unsplash.com/photo-1581094794329-cd1096a78432?w=500&q=80"
                .to_string(),
            video_url: "https://www.youtube.com/embed/xpDnVSmNFX0".to_string(),
            duration: "90 min".to_string(),
            skills: strings(&["CAD", "API"]),
            completed: false,
            partner: "Autodesk".to_string(),
        },
    ]
}

//! Loading and validating candidate profile lists.
//!
//! Malformed input is rejected here, before a deck is built: the swipe
//! engine itself assumes a well-formed (possibly empty) candidate list.

use crate::error::{ProfileError, Result};
use crate::types::{DeveloperProfile, Viewer};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Load a candidate list from a JSON file.
///
/// The file holds a JSON array of profile objects. The list is validated
/// before being returned; an empty array is valid and yields an
/// immediately-exhausted deck downstream.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<Vec<DeveloperProfile>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let profiles: Vec<DeveloperProfile> =
        serde_json::from_str(&contents).map_err(|source| ProfileError::Json {
            path: path.display().to_string(),
            source,
        })?;

    validate_profiles(&profiles)?;
    info!("Loaded {} profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

/// Check structural invariants: non-empty ids, no duplicate ids.
pub fn validate_profiles(profiles: &[DeveloperProfile]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (index, profile) in profiles.iter().enumerate() {
        if profile.id.is_empty() {
            return Err(ProfileError::EmptyId { index });
        }
        if !seen.insert(&profile.id) {
            return Err(ProfileError::DuplicateId {
                id: profile.id.clone(),
            });
        }
    }
    Ok(())
}

/// Built-in demo deck: four developer profiles.
pub fn sample_profiles() -> Vec<DeveloperProfile> {
    vec![
        DeveloperProfile {
            id: "1".to_string(),
            name: "Sarah Chen".to_string(),
            username: "sarahc".to_string(),
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah".to_string(),
            bio: "Full-stack developer passionate about building scalable applications. \
                  Love React and Node.js."
                .to_string(),
            location: "San Francisco, CA".to_string(),
            top_languages: vec![
                "TypeScript".to_string(),
                "Python".to_string(),
                "Go".to_string(),
            ],
            repo_count: 67,
            stars: 234,
            interests: vec![
                "Open Source".to_string(),
                "Web3".to_string(),
                "AI/ML".to_string(),
            ],
        },
        DeveloperProfile {
            id: "2".to_string(),
            name: "Alex Kim".to_string(),
            username: "alexk".to_string(),
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=alex".to_string(),
            bio: "Backend engineer focused on distributed systems and cloud infrastructure."
                .to_string(),
            location: "Seattle, WA".to_string(),
            top_languages: vec!["Go".to_string(), "Rust".to_string(), "Python".to_string()],
            repo_count: 45,
            stars: 178,
            interests: vec![
                "Distributed Systems".to_string(),
                "DevOps".to_string(),
                "Kubernetes".to_string(),
            ],
        },
        DeveloperProfile {
            id: "3".to_string(),
            name: "Jordan Lee".to_string(),
            username: "jordanl".to_string(),
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=jordan".to_string(),
            bio: "ML Engineer building intelligent systems. PhD in Computer Science.".to_string(),
            location: "Boston, MA".to_string(),
            top_languages: vec![
                "Python".to_string(),
                "C++".to_string(),
                "Julia".to_string(),
            ],
            repo_count: 32,
            stars: 512,
            interests: vec![
                "Machine Learning".to_string(),
                "NLP".to_string(),
                "Computer Vision".to_string(),
            ],
        },
        DeveloperProfile {
            id: "4".to_string(),
            name: "Taylor Morgan".to_string(),
            username: "taylorm".to_string(),
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=taylor".to_string(),
            bio: "Frontend developer and design enthusiast. Creating beautiful user experiences."
                .to_string(),
            location: "Austin, TX".to_string(),
            top_languages: vec![
                "TypeScript".to_string(),
                "JavaScript".to_string(),
                "CSS".to_string(),
            ],
            repo_count: 89,
            stars: 156,
            interests: vec![
                "UI/UX".to_string(),
                "Design Systems".to_string(),
                "Accessibility".to_string(),
            ],
        },
    ]
}

/// Built-in demo viewer identity.
pub fn sample_viewer() -> Viewer {
    Viewer {
        name: "Developer".to_string(),
        username: "developer".to_string(),
        avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=developer".to_string(),
    }
}

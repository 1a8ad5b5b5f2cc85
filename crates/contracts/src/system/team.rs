use serde::{Deserialize, Serialize};

/// Staff member listed on the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub title: String,
}

pub(crate) fn team_members() -> Vec<TeamMember> {
    [
        ("Jean Dupont", "Owner"),
        ("Marie Laurent", "Receptionist"),
        ("Pierre Duval", "Restaurant Manager"),
    ]
    .into_iter()
    .map(|(name, title)| TeamMember {
        name: name.to_string(),
        title: title.to_string(),
    })
    .collect()
}

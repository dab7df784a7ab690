use urlencoding::encode;

/// Detail page of a team, addressed by its roster name
pub fn team_path(team: &str) -> String {
    format!("/team/{}", encode(team))
}

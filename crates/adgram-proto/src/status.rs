//! Canonical status tables mirroring the marketplace state machine.
//!
//! The server is authoritative: every deal arrives with its own `step`,
//! `label`, and `is_terminal` already computed. These tables exist for
//! offline display (one-shot CLI snapshots) and as defaults when a
//! collaborator omits a field.

/// Timeline position for a known status. Terminal failure states map to the
/// `0` sentinel ("no ordinal position, show terminal marker"); unknown
/// statuses default to `1`, matching the marketplace backend.
pub fn status_step(status: &str) -> u8 {
    match status {
        "pending" => 1,
        "accepted" => 2,
        "funded" => 3,
        "posted" => 4,
        "verified" => 5,
        "completed" => 6,
        "refunded" | "cancelled" => 0,
        _ => 1,
    }
}

/// Human-readable label for a known status, falling back to the capitalized
/// status name.
pub fn status_label(status: &str) -> String {
    match status {
        "pending" => "Pending Approval".to_string(),
        "accepted" => "Accepted".to_string(),
        "funded" => "Escrow Funded".to_string(),
        "scheduled" => "Post Scheduled".to_string(),
        "posted" => "Ad Posted".to_string(),
        "verified" => "Verified".to_string(),
        "completed" => "Completed".to_string(),
        "refunded" => "Refunded".to_string(),
        "cancelled" => "Cancelled".to_string(),
        other => capitalize_first(other),
    }
}

/// Upper-case the first character of a state name, leaving the rest as-is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

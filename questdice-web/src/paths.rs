//! Static asset URLs that respect the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/quest-dice` on a project
//! page). Without it, paths are root-anchored.

/// Dice artwork shown behind each breakpoint marker.
pub const DICE_IMAGE: &str = "static/assets/img/dice.svg";

#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(public_base(), relative)
}

/// Router basename, or `None` when the app is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = public_base().trim_end_matches('/').trim();
    (!base.is_empty()).then(|| base.to_string())
}

fn public_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn join_base(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    format!("{base}/{rel}")
}

//! Route template joining and placeholder matching.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// `{name}`, `{name:int}`, `{name?}`, `{*name}`, `{**name}`, `{name=default}`.
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\*{0,2}([A-Za-z_][A-Za-z0-9_]*)[^}]*\}")
        .expect("placeholder regex should be valid")
});

static CONTROLLER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[controller\]").expect("controller token regex should be valid"));

static ACTION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[action\]").expect("action token regex should be valid"));

/// Controller name as it appears in routes: the type name without `suffix`,
/// compared case-insensitively. A name that is nothing but the suffix is kept.
pub fn controller_route_name<'a>(type_name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() || type_name.len() <= suffix.len() {
        return type_name;
    }
    let split = type_name.len() - suffix.len();
    match (type_name.get(..split), type_name.get(split..)) {
        (Some(stem), Some(tail)) if tail.eq_ignore_ascii_case(suffix) => stem,
        _ => type_name,
    }
}

/// Replace `[controller]` and `[action]` tokens, in any letter case.
pub fn substitute_tokens(template: &str, controller: &str, action: &str) -> String {
    let replaced = CONTROLLER_TOKEN.replace_all(template, NoExpand(controller));
    ACTION_TOKEN.replace_all(&replaced, NoExpand(action)).into_owned()
}

/// Join a controller-level and a member-level template into one route.
///
/// A member template starting with `/` or `~/` is absolute and ignores the
/// controller template. The result has no leading or trailing slash and no
/// empty segments.
///
/// # Arguments
///
/// * `controller_template` - Controller route, e.g. `api/[controller]`
/// * `member_template` - Member route, e.g. `{id}` or `/health`
/// * `controller` - Controller name with its suffix already removed
/// * `action` - Member name, substituted for `[action]`
pub fn join_route(
    controller_template: &str,
    member_template: &str,
    controller: &str,
    action: &str,
) -> String {
    let absolute = member_template.starts_with('/') || member_template.starts_with("~/");
    let member = substitute_tokens(member_template.trim_start_matches('~'), controller, action);
    let prefix = if absolute {
        String::new()
    } else {
        substitute_tokens(controller_template, controller, action)
    };

    prefix
        .split('/')
        .chain(member.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Placeholder names in `route`, in order of appearance.
pub fn route_placeholders(route: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(route)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Whether `route` has a placeholder for `name`, compared case-insensitively.
pub fn has_placeholder(route: &str, name: &str) -> bool {
    route_placeholders(route)
        .into_iter()
        .any(|placeholder| placeholder.eq_ignore_ascii_case(name))
}

//! Builds concrete upstream requests from route descriptors.
//!
//! [`build`] is the only entry point: given a [`RouteSpec`] and the caller's
//! argument bag it substitutes path placeholders, copies allow-listed query
//! parameters, and attaches the JSON body when the route accepts one. It
//! performs no I/O and touches no shared state, so the same descriptor and
//! arguments always produce the same [`BuiltRequest`].

use serde_json::{Map, Value};

use crate::endpoints::{Method, RouteSpec};

/// A fully resolved upstream request, ready for the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRequest {
    pub method: Method,
    /// Path relative to the API base URL, placeholders substituted.
    pub path: String,
    /// Query pairs in descriptor order. Only allow-listed names appear.
    pub query: Vec<(String, String)>,
    /// JSON body, present only when the route accepts one.
    pub body: Option<Value>,
}

/// Caller-input failure detected before any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A required path parameter was absent or null.
    MissingParameter(String),
    /// The requested operation name matches no route.
    UnknownOperation(String),
    /// The argument bag itself was malformed (e.g. not a JSON object).
    InvalidArguments(String),
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructuralError::MissingParameter(name) => {
                write!(f, "Missing required parameter: {}", name)
            }
            StructuralError::UnknownOperation(name) => write!(f, "Unknown tool: {}", name),
            StructuralError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

/// Resolves `route` against `args` into a concrete request.
///
/// Path parameters are required (null counts as absent). Query parameters
/// are optional and filtered through the descriptor's allow-list; anything
/// else in `args` is ignored. When `route.has_body` is set the `body`
/// argument is forwarded verbatim, defaulting to `{}`.
pub fn build(route: &RouteSpec, args: &Map<String, Value>) -> Result<BuiltRequest, StructuralError> {
    let path = expand_path(route, args)?;

    let mut query = Vec::new();
    for param in route.query_params {
        match args.get(param.name) {
            None | Some(Value::Null) => {}
            Some(value) => query.push((param.name.to_string(), stringify(value))),
        }
    }

    let body = if route.has_body {
        Some(
            args.get("body")
                .filter(|v| !v.is_null())
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
        )
    } else {
        None
    };

    Ok(BuiltRequest {
        method: route.method,
        path,
        query,
        body,
    })
}

/// Substitutes every `{name}` segment of the route's path template.
///
/// Scans left to right so a substituted value can never be re-interpreted
/// as a placeholder for a later parameter.
fn expand_path(route: &RouteSpec, args: &Map<String, Value>) -> Result<String, StructuralError> {
    let mut out = String::with_capacity(route.path.len() + 16);
    let mut rest = route.path;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            // Unbalanced template; table sanity tests keep this unreachable.
            out.push('{');
            rest = tail;
            continue;
        };
        let name = &tail[..close];
        let value = args
            .get(name)
            .filter(|v| !v.is_null())
            .ok_or_else(|| StructuralError::MissingParameter(name.to_string()))?;
        out.push_str(&stringify(value));
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Renders a JSON value the way it should appear in a URL segment or query
/// value: strings bare, numbers and booleans canonically, compound values
/// as compact JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::find_route;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn substitutes_every_path_placeholder() {
        let route = find_route("list_eyes_s_n_m_p_trigger").unwrap();
        let req = build(
            route,
            &args(json!({"agent_id": 5, "device_id": 50, "sensor_id": 3})),
        )
        .unwrap();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/agent/5/device/50/eye/snmp/3/trigger");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_is_deterministic() {
        let route = find_route("list_device_variables").unwrap();
        let bag = args(json!({"agent_id": 12, "device_id": 7, "page_size": 25, "path": "cpu/load"}));
        assert_eq!(build(route, &bag).unwrap(), build(route, &bag).unwrap());
    }

    #[test]
    fn missing_path_parameter_is_rejected() {
        let route = find_route("list_eyes_s_n_m_p_trigger").unwrap();
        let err = build(route, &args(json!({"agent_id": 5, "sensor_id": 3}))).unwrap_err();
        assert_eq!(err, StructuralError::MissingParameter("device_id".into()));
    }

    #[test]
    fn null_path_parameter_counts_as_absent() {
        let route = find_route("get_agent").unwrap();
        let err = build(route, &args(json!({"agent_id": null}))).unwrap_err();
        assert_eq!(err, StructuralError::MissingParameter("agent_id".into()));
    }

    #[test]
    fn string_path_parameter_renders_bare() {
        let route = find_route("create_eye_s_n_m_p_trigger_alert").unwrap();
        let req = build(
            route,
            &args(json!({
                "agent_id": 1, "device_id": 2, "sensor_id": 3,
                "trigger_id": 4, "medium_name": "email"
            })),
        )
        .unwrap();
        assert!(req.path.ends_with("/trigger/4/alert/email"));
    }

    #[test]
    fn absent_query_parameters_are_omitted() {
        let route = find_route("list_agents").unwrap();
        let req = build(route, &args(json!({"page_size": 10}))).unwrap();
        assert_eq!(req.query, vec![("page_size".to_string(), "10".to_string())]);
    }

    #[test]
    fn unlisted_arguments_never_reach_the_query() {
        let route = find_route("list_agents").unwrap();
        let req = build(
            route,
            &args(json!({"team_name": "noc", "verbose": true, "limit": 5})),
        )
        .unwrap();
        assert_eq!(req.query, vec![("team_name".to_string(), "noc".to_string())]);
    }

    #[test]
    fn null_query_parameter_is_skipped() {
        let route = find_route("list_agents").unwrap();
        let req = build(route, &args(json!({"display_name": null}))).unwrap();
        assert!(req.query.is_empty());
    }

    #[test]
    fn boolean_and_number_query_values_render_canonically() {
        let route = find_route("list_device_variables").unwrap();
        let req = build(
            route,
            &args(json!({"agent_id": 1, "device_id": 2, "page_size": 100, "has_history": true})),
        )
        .unwrap();
        assert!(req
            .query
            .contains(&("page_size".to_string(), "100".to_string())));
        assert!(req
            .query
            .contains(&("has_history".to_string(), "true".to_string())));
    }

    #[test]
    fn body_is_attached_verbatim() {
        let route = find_route("create_eye_s_n_m_p_trigger").unwrap();
        let body = json!({"function_id": 2, "value": "90"});
        let req = build(
            route,
            &args(json!({
                "agent_id": 1, "device_id": 2, "sensor_id": 3,
                "body": body.clone()
            })),
        )
        .unwrap();
        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn body_defaults_to_empty_object() {
        let route = find_route("create_eye_s_n_m_p_trigger").unwrap();
        let req = build(
            route,
            &args(json!({"agent_id": 1, "device_id": 2, "sensor_id": 3})),
        )
        .unwrap();
        assert_eq!(req.body, Some(json!({})));
    }

    #[test]
    fn body_is_dropped_when_route_takes_none() {
        let route = find_route("get_agent").unwrap();
        let req = build(
            route,
            &args(json!({"agent_id": 9, "body": {"ignored": true}})),
        )
        .unwrap();
        assert!(req.body.is_none());
    }
}

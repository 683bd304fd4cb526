//! Static descriptor table for the Domotz public API surface.
//!
//! Every tool the server exposes is one [`RouteSpec`] entry: the upstream
//! HTTP method, the URL template with `{placeholder}` segments, the closed
//! set of query parameters the operation accepts, and whether a JSON body
//! is attached. The request builder and the tool schemas are both derived
//! from this table, so adding an operation means adding one entry here.

/// Upstream HTTP method of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

/// JSON type of a tool parameter, as advertised in the input schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Num,
    Str,
    Bool,
}

impl ParamKind {
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::Int => "integer",
            ParamKind::Num => "number",
            ParamKind::Str => "string",
            ParamKind::Bool => "boolean",
        }
    }
}

/// One named parameter of a route, either a path segment or a query field.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
}

/// One operation of the upstream API.
///
/// `path` is a template whose `{name}` segments correspond one to one with
/// `path_params`; path parameters are required, query parameters are an
/// optional allow-list. When `has_body` is set the tool accepts a `body`
/// argument forwarded verbatim as the JSON request body.
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub path_params: &'static [ParamSpec],
    pub query_params: &'static [ParamSpec],
    pub has_body: bool,
}

/// Shared schema description for the `body` argument of write operations.
pub const BODY_DESCRIPTION: &str = "Request body (JSON object)";

const fn p(name: &'static str, kind: ParamKind, description: &'static str) -> ParamSpec {
    ParamSpec { name, kind, description }
}

use ParamKind::{Bool, Int, Num, Str};

pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        name: "list_agents",
        description: "Returns the collectors list.",
        method: Method::Get,
        path: "/agent",
        path_params: &[],
        query_params: &[
            p("page_size", Num, "The maximum number of items to return. Min value is 1. Max value is 100. Default value is 10"),
            p("page_number", Num, "The requested page number, 0-indexed. Default value is 0"),
            p("display_name", Str, "Consider only collectors with `display_name` containing the string (case insensitive)"),
            p("team_name", Str, "Filters by team name (companies only)"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "count_agents",
        description: "Counts the collectors.",
        method: Method::Head,
        path: "/agent",
        path_params: &[],
        query_params: &[
            p("display_name", Str, "Consider only collectors with `display_name` containing the string (case insensitive)"),
            p("team_name", Str, "Filters by team name (companies only)"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent",
        description: "Returns the details of a collector.",
        method: Method::Get,
        path: "/agent/{agent_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "delete_agent",
        description: "Deletes a collector.",
        method: Method::Delete,
        path: "/agent/{agent_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_activity_log",
        description: "Returns the activity log of a collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/activity-log",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
            p("type", Str, "If present, only the specified type(s) will be fetched."),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_connection_consumption",
        description: "Returns the remote connection consumption on the given collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/connection/consumption",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_v_p_n_active_connections",
        description: "Returns the active VPN connections for the collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/connection/vpn-session",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_agent_v_p_n_connection",
        description: "Creates a temporary VPN server on the collector and returns the vpn configuration file content. Current consumption and consumption limits can be retrieved with a call to <a href='#getconnectionconsumption'> getConnectionConsumption</a> endpoint.",
        method: Method::Post,
        path: "/agent/{agent_id}/connection/vpn-session",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_agent_v_p_n_connection",
        description: "Closes an active VPN connection session for the collector.",
        method: Method::Delete,
        path: "/agent/{agent_id}/connection/vpn-session/{vpn_session_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("vpn_session_id", Int, "Vpn Session Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_devices",
        description: "Returns all the devices of a collector. On per-device licensing collectors, only the managed devices are included.",
        method: Method::Get,
        path: "/agent/{agent_id}/device",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("show_hidden", Bool, "Whether to include hidden devices in the returned list"),
            p("show_excluded", Bool, "Whether to include excluded devices in the returned list. Default is True"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "delete_down_devices",
        description: "Deletes all the DOWN devices of *IP* protocol.",
        method: Method::Delete,
        path: "/agent/{agent_id}/device",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_device",
        description: "Returns the details of a device.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "delete_device",
        description: "Deletes a device, whether ONLINE, OFFLINE or DOWN. If a device is deleted while online, it may reappear when rediscovered automatically.",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "edit_device",
        description: "Changes a proprety of the device.",
        method: Method::Put,
        path: "/agent/{agent_id}/device/{device_id}/{field}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("field", Str, "Field"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "get_device_power_actions",
        description: "Returns the power management actions available on the device at the current moment. See <a href='#schemadevicepoweraction'> DevicePowerAction </a> schema for further details.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/action/power",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "power_action_on_device",
        description: "Performs the action on the device, according to the specified {<b> field </b>} value. The availability of such operations can be determined with a call to <a href='#getdevicepoweractions'> getDevicePowerActions </a>  operation.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/action/power/{field}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("field", Str, "Field"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_device_applications",
        description: "Returns the list of applications of the device. The feature is only available on collectors under the Enterprise Plan.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/application",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[
            p("page_size", Num, "The maximum number of items to return. Min value is 1. Max value is 1000. Default value is 100"),
            p("page_number", Num, "The requested page number, 0-indexed. Default value is 0"),
            p("name", Str, "Allows filtering by `name`"),
            p("device_ids", Str, "Allows filtering by `device_ids`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "count_device_applications",
        description: "Counts the applications. The feature is only available on collectors under the Enterprise Plan.",
        method: Method::Head,
        path: "/agent/{agent_id}/device/{device_id}/application",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[
            p("name", Str, "Allows filtering by `name`"),
            p("device_ids", Str, "Allows filtering by `device_ids`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "backup_device_configuration",
        description: "Sends a command to backup a device configuration.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/configuration-management/backup",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "device_configuration_history_list",
        description: "Returns the list of available device configurations.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/configuration-management/history",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_device_configuration",
        description: "Creates a device configuration backup in the configuration history.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/configuration-management/history",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "get_device_configuration",
        description: "Returns the details of a device configuration entry.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/configuration-management/history/{configuration_timestamp}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("configuration_timestamp", Str, "Configuration Timestamp"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "connect_to_device",
        description: "Establishes a direct secure connection to the `device`. Current consumption and consumption limits can be retrieved with a call to <a href='#getconnectionconsumption'> getConnectionConsumption</a> endpoint.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/connection",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "set_credentials",
        description: "Sets the device credentials to perform extended discovery. This operation will affect the <b> authentication_status </b> of the device.",
        method: Method::Put,
        path: "/agent/{agent_id}/device/{device_id}/credentials",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "create_device_custom_tag_binding",
        description: "Associates a custom tag to a device",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/custom-tag/{custom_tag_id}/binding",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("custom_tag_id", Int, "Custom Tag Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "delete_device_custom_tag_binding",
        description: "Disassociates a custom tag to a device",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}/custom-tag/{custom_tag_id}/binding",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("custom_tag_id", Int, "Custom Tag Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_device_custom_tag_bindings",
        description: "Retrieves all the user's custom tags associated to a device",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/custom-tag/binding",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_eyes_s_n_m_p",
        description: "Returns the list of configured SNMP sensors.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_eye_s_n_m_p",
        description: "Creates a new SNMP sensors.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_eye_s_n_m_p",
        description: "Deletes the SNMP sensor.",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp/{sensor_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("sensor_id", Int, "Sensor Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_eyes_s_n_m_p_trigger_function",
        description: "Returns the list of functions for the SNMP sensor trigger.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp/{sensor_id}/function",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("sensor_id", Int, "Sensor Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_eyes_s_n_m_p_history",
        description: "Returns the time series of the SNMP sensor collected samples.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp/{sensor_id}/history",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("sensor_id", Int, "Sensor Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "list_eyes_s_n_m_p_trigger",
        description: "Returns the list of triggers for the SNMP Sensor.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp/{sensor_id}/trigger",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("sensor_id", Int, "Sensor Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_eye_s_n_m_p_trigger",
        description: "Creates a new SNMP Trigger for the sensor. \n\nFor instance, to receive a notification when the value of the sensor is above a threshold x, it is required to add a trigger specifying the function_id = 2 (is greater than) and the operand value equals to [x]. \nThe function_id value can be retrieved with the listEyesSNMPTriggerFunction call. \nTo activate the alert, it is required to call createEyeSNMPTriggerAlert after the trigger creation.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp/{sensor_id}/trigger",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("sensor_id", Int, "Sensor Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_eye_s_n_m_p_trigger",
        description: "Deletes the SNMP Trigger for the sensor.",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp/{sensor_id}/trigger/{trigger_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("sensor_id", Int, "Sensor Id"),
            p("trigger_id", Int, "Trigger Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_eye_s_n_m_p_trigger_alert",
        description: "Add an alert to a SNMP Trigger.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp/{sensor_id}/trigger/{trigger_id}/alert/{medium_name}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("sensor_id", Int, "Sensor Id"),
            p("trigger_id", Int, "Trigger Id"),
            p("medium_name", Str, "Medium Name"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_eye_s_n_m_p_trigger_alert",
        description: "Deletes the alert for thee SNMP Trigger.",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}/eye/snmp/{sensor_id}/trigger/{trigger_id}/alert/{medium_name}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("sensor_id", Int, "Sensor Id"),
            p("trigger_id", Int, "Trigger Id"),
            p("medium_name", Str, "Medium Name"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_eyes_t_c_p",
        description: "Returns the list of configured TCP sensors.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/eye/tcp",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_eye_t_c_p",
        description: "Creates a new TCP sensors.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/eye/tcp",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_eye_t_c_p",
        description: "Deletes the TCP sensor.",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}/eye/tcp/{service_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("service_id", Int, "Service Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_device_status_history",
        description: "Returns the time series of the state changes of the device.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/history/network/event",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_device_r_t_d_history",
        description: "Returns the Round Trip Delay history for the device. Each item represents the statistical aggregate of a set of Round Trip Delay measurements.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/history/rtd",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_device_inventory",
        description: "Returns the device's inventory data.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/inventory",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "set_device_inventory_field_value",
        description: "Sets the value of an Inventory field for the device, a value can't be set to `null`.",
        method: Method::Put,
        path: "/agent/{agent_id}/device/{device_id}/inventory/{inventory_field}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("inventory_field", Str, "Inventory Field"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_device_inventory_field",
        description: "Deletes the Inventory field for the device.",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}/inventory/{inventory_field}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("inventory_field", Str, "Inventory Field"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "update_device_monitoring_state",
        description: "Sets the monitoring state of a device to either managed or unmanaged. This endpoint is available only for agents using per-device licensing.",
        method: Method::Put,
        path: "/agent/{agent_id}/device/{device_id}/monitoring-state",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "onvif_snapshot",
        description: "Take a snapshot of the camera. Internally, a device connection is established. Current consumption and consumption limits can be retrieved with a call to <a href='#getconnectionconsumption'> getConnectionConsumption</a> endpoint.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/multimedia/camera/snapshot",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_device_outlets",
        description: "Returns a list of the power outlets discovered on the device.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/power-outlet",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "update_device_outlet",
        description: "Update the power outlet with the specified custom name.",
        method: Method::Put,
        path: "/agent/{agent_id}/device/{device_id}/power-outlet/{power_outlet_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("power_outlet_id", Int, "Power Outlet Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "trigger_outlet_action",
        description: "Trigger an action on a power outlet.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/power-outlet/{power_outlet_id}/action/{action}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("power_outlet_id", Int, "Power Outlet Id"),
            p("action", Str, "Action"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "attach_device_to_outlet",
        description: "Attach a device to a power outlet.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/{device_id}/power-outlet/{power_outlet_id}/attach/{attached_device_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("power_outlet_id", Int, "Power Outlet Id"),
            p("attached_device_id", Int, "Attached Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "detach_device_from_outlet",
        description: "Detach a device from a power outlet.",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}/power-outlet/{power_outlet_id}/attach/{attached_device_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("power_outlet_id", Int, "Power Outlet Id"),
            p("attached_device_id", Int, "Attached Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_s_n_m_p_authentication",
        description: "Returns the SNMP authentication info.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/snmp-authentication",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "set_s_n_m_p_authentication",
        description: "Sets the SNMP authentication info. <ul><li>_snmp_read_community_ and _snmp_write_community_ are  relevant only for _V1_ and _V2_. </li><li>_V3_NO_AUTH_ requires a valid _username_. </li><li>_V3_AUTH_NO_PRIV_ requires _username_, _authentication_protocol_ and _authentication_key_. </li><li>_V3_AUTH_PRIV_ requires _username_, _authentication_protocol_, _authentication_key_, _encryption_protocol_ and _encryption_key_.</li></ul>",
        method: Method::Put,
        path: "/agent/{agent_id}/device/{device_id}/snmp-authentication",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "set_snmp_community",
        description: "Saves a snmp community (read, optionally write) on device. _Deprecated_, please use <a href='#setsnmpauthentication'> setSNMPAuthentication </a>.",
        method: Method::Put,
        path: "/agent/{agent_id}/device/{device_id}/snmp-community",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "get_device_uptime",
        description: "Returns the uptime of the device.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/uptime",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "list_device_variables",
        description: "Returns the list of device variables.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/variable",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[
            p("page_size", Num, "The maximum number of items to return. Min value is 1. Max value is 1000. Default value is 100"),
            p("page_number", Num, "The requested page number, 0-indexed. Default value is 0"),
            p("value", Str, "Allows filtering by `value`"),
            p("path", Str, "Allows filtering by `path`"),
            p("sort_by", Str, "Allows ordering by `path`, `id`, `value`, `label`, `value_update_time`, `creation_time`"),
            p("sorting_direction", Str, "The default is `asc`"),
            p("has_history", Bool, "Allows filtering by `has_history` field"),
            p("metric", Str, "Allows filtering by `metric`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "count_device_variables",
        description: "Returns device variables count.",
        method: Method::Head,
        path: "/agent/{agent_id}/device/{device_id}/variable",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[
            p("value", Str, "Allows filtering by `value`"),
            p("path", Str, "Allows filtering by `path`"),
            p("has_history", Bool, "Allows filtering by `has_history` field"),
            p("metric", Str, "Allows filtering by `metric`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_variable_history",
        description: "Returns the device variable history.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/{device_id}/variable/{variable_id}/history",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("variable_id", Int, "Variable Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "hide_device",
        description: "Hides a device (available only on DOWN devices).",
        method: Method::Delete,
        path: "/agent/{agent_id}/device/{device_id}/visibility",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_agent_device_applications",
        description: "Returns the list of applications of all the devices belonging to the collector. The feature is only available on collectors under the Enterprise Plan.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/application",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("page_size", Num, "The maximum number of items to return. Min value is 1. Max value is 1000. Default value is 100"),
            p("page_number", Num, "The requested page number, 0-indexed. Default value is 0"),
            p("name", Str, "Allows filtering by `name`"),
            p("device_ids", Str, "Allows filtering by `device_ids`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "count_agent_device_applications",
        description: "Counts the applications of all devices belonging to the collector. The feature is only available on collectors under the Enterprise Plan.",
        method: Method::Head,
        path: "/agent/{agent_id}/device/application",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("name", Str, "Allows filtering by `name`"),
            p("device_ids", Str, "Allows filtering by `device_ids`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "create_external_host",
        description: "Creates an external host.",
        method: Method::Post,
        path: "/agent/{agent_id}/device/external-host",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "list_agent_eyes_s_n_m_p",
        description: "Returns the list of configured SNMP sensors on the collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/eye/snmp",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_agent_eyes_t_c_p",
        description: "Returns the list of configured TCP sensors on the collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/eye/tcp",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_unmanaged_devices",
        description: "Returns the list of unmanaged devices for a specific collector. This endpoint returns a limited set of data to support per-device licensing flows. The list of managed devices can be retrieved using the listDevices API.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/monitoring-state/unmanaged",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_r_t_d_stats",
        description: "Returns the Round Trip Delay statistics for all devices monitored by the collector. The aggregate values of _avg_min_, _avg_max_, _avg_median_ help to understand the baseline response time of a device in a weekly time frame, while _latest_median_ helps detecting a possible deviation from the baseline.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/rtd",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_agent_device_variables",
        description: "Returns the list of all device variables of the collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/device/variable",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("page_size", Num, "The maximum number of items to return. Min value is 1. Max value is 1000. Default value is 100"),
            p("page_number", Num, "The requested page number, 0-indexed. Default value is 0"),
            p("value", Str, "Allows filtering by `value`"),
            p("path", Str, "Allows filtering by `path`"),
            p("sort_by", Str, "Allows ordering by `path`, `id`, `value`, `label`, `value_update_time`, `creation_time`, `device_id`"),
            p("sorting_direction", Str, "The default is `asc`"),
            p("has_history", Bool, "Allows filtering by `has_history` field"),
            p("metric", Str, "Allows filtering by `metric`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "count_agent_device_variables",
        description: "Returns the device variables count of the collector.",
        method: Method::Head,
        path: "/agent/{agent_id}/device/variable",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("value", Str, "Allows filtering by `value`"),
            p("path", Str, "Allows filtering by `path`"),
            p("has_history", Bool, "Allows filtering by `has_history` field"),
            p("metric", Str, "Allows filtering by `metric`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "eyes_usage_info",
        description: "Returns information about Domotz Sensors usage and limits.",
        method: Method::Get,
        path: "/agent/{agent_id}/eye-statistics",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_status_history",
        description: "Returns the time series of the state changes of the collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/history/network/event",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_speed_test_history",
        description: "Returns the time series of the Internet Speed measurements taken from the collector, both in\ndownload and in upload.",
        method: Method::Get,
        path: "/agent/{agent_id}/history/network/speed",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_i_p_conflicts",
        description: "Returns the list of active IP conflicts on a collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/ip-conflict",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "metric_usage_info",
        description: "Returns Domotz Sensors usage and limits.",
        method: Method::Get,
        path: "/agent/{agent_id}/metric-statistics",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_network_topology",
        description: "Returns the collector's network topology.",
        method: Method::Get,
        path: "/agent/{agent_id}/network-topology",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "set_d_h_c_p_device_discovery",
        description: "Enable/disable the collector DHCP Device Discovery.",
        method: Method::Put,
        path: "/agent/{agent_id}/network/dhcp-device-discovery",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "list_excluded_devices",
        description: "Returns all the excluded devices of a collector, i.e., devices present in Device Blacklist section.",
        method: Method::Get,
        path: "/agent/{agent_id}/network/excluded-device",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "add_excluded_device",
        description: "Excludes a device from collector monitoring.",
        method: Method::Post,
        path: "/agent/{agent_id}/network/excluded-device/{device_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "delete_excluded_device",
        description: "Removes a device from the excluded devices list.",
        method: Method::Delete,
        path: "/agent/{agent_id}/network/excluded-device/{device_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "set_agent_external_host_scan_policy",
        description: "Updates the current external host scan policy. It is possible to enable/disable each one of the three available methods (ICMP, TCP-SYN, TCP-ACK). For TCP-SYN and TCP-ACK is mandatory to specify a set of TCP ports. If a method is not specified in the payload of the request, it will be configured as disabled.",
        method: Method::Put,
        path: "/agent/{agent_id}/network/external-host-scan-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "get_agent_external_host_scan_policy",
        description: "Returns the current external host scan policy.",
        method: Method::Get,
        path: "/agent/{agent_id}/network/external-host-scan-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "delete_agent_external_host_scan_policy",
        description: "Restore the external host scan policy to default.",
        method: Method::Delete,
        path: "/agent/{agent_id}/network/external-host-scan-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_interfaces",
        description: "Returns the networks monitored by the collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/network/interfaces",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "set_agent_interfaces_policy",
        description: "Updates the current network interface filtering policy.",
        method: Method::Put,
        path: "/agent/{agent_id}/network/interfaces-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "get_agent_interfaces_policy",
        description: "Returns the current network interface filtering policy. The interfaces policy defines the set of interfaces which will be ignored (`deny`) or scanned (`allow`) by the collector. The default behavior is to scan all available interfaces.",
        method: Method::Get,
        path: "/agent/{agent_id}/network/interfaces-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "delete_agent_interfaces_policy",
        description: "Resets the network interface filtering policy to the default value.",
        method: Method::Delete,
        path: "/agent/{agent_id}/network/interfaces-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "set_agent_i_p_scan_policy",
        description: "Updates the current IP address scan policy. The list of IP addresses provided in `forced_ip_addresses` and the list of IP address ranges provided in `forced_ip_ranges` will be scanned regardless of the automatic discovery settings of the collector.",
        method: Method::Put,
        path: "/agent/{agent_id}/network/ip-scan-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "get_agent_i_p_scan_policy",
        description: "Returns the current IP addresses management policy. It is possible to specify a set of IP addresses in the `forced_ip_addresses` field array or a set of IP address ranges in the `forced_ip_ranges` field array to be always scanned.",
        method: Method::Get,
        path: "/agent/{agent_id}/network/ip-scan-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "delete_agent_i_p_scan_policy",
        description: "Resets the IP scan policy to the default value.",
        method: Method::Delete,
        path: "/agent/{agent_id}/network/ip-scan-policy",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_routed_network",
        description: "Creates a routed network.",
        method: Method::Post,
        path: "/agent/{agent_id}/network/routed",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "move_agent",
        description: "Moves a collector under the control of a different team. Note: This API is restricted to users on the Enterprise Plan. Please contact <a href=\"mailto:sales@domotz.com\">sales@domotz.com</a> to learn more.",
        method: Method::Put,
        path: "/agent/{agent_id}/ownership/team/{team_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("team_id", Int, "Team Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_uptime",
        description: "Returns the uptime of the collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/uptime",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "list_agent_variables",
        description: "Returns the list of all collector variables of the collector.",
        method: Method::Get,
        path: "/agent/{agent_id}/variable",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("page_size", Num, "The maximum number of items to return. Min value is 1. Max value is 1000. Default value is 100"),
            p("page_number", Num, "The requested page number, 0-indexed. Default value is 0"),
            p("value", Str, "Allows filtering by `value`"),
            p("path", Str, "Allows filtering by `path`"),
            p("sort_by", Str, "Allows ordering by `path`, `id`, `value`, `label`, `value_update_time`, `creation_time`"),
            p("sorting_direction", Str, "The default is `asc`"),
            p("has_history", Bool, "Allows filtering by `has_history` field"),
            p("metric", Str, "Allows filtering by `metric`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "count_agent_variables",
        description: "Returns the collector variables count of the collector.",
        method: Method::Head,
        path: "/agent/{agent_id}/variable",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[
            p("value", Str, "Allows filtering by `value`"),
            p("path", Str, "Allows filtering by `path`"),
            p("has_history", Bool, "Allows filtering by `has_history` field"),
            p("metric", Str, "Allows filtering by `metric`"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_variable_history",
        description: "Returns the collector variable history.",
        method: Method::Get,
        path: "/agent/{agent_id}/variable/{variable_id}/history",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
            p("variable_id", Int, "Variable Id"),
        ],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_list_uptime",
        description: "Returns the uptime of all collectors.",
        method: Method::Get,
        path: "/agent/uptime",
        path_params: &[],
        query_params: &[
            p("from", Str, "The start time of the time series. Default value is one week"),
            p("to", Str, "The end time of the time series. Default value is now"),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_alert_profiles2",
        description: "Returns the list of configured alert profiles. You can configure alert profiles on the Domotz Portal. Alert profiles define the association between a list of events and a notification channel (email, webhook or slack).",
        method: Method::Get,
        path: "/alert-profile",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "bind_alert_profile_to_agent",
        description: "Bind an alert profile to a collector. After binding, a webhook will be sent to the configured service when one of the events associated to the profile occurs. You can configure the profile and the webhook endpoint on the Domotz Portal",
        method: Method::Post,
        path: "/alert-profile/{alert_profile_id}/binding/agent/{agent_id}",
        path_params: &[
            p("alert_profile_id", Int, "Alert Profile Id"),
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "unbind_alert_profile_from_agent",
        description: "Unbind an alert profile from a collector.",
        method: Method::Delete,
        path: "/alert-profile/{alert_profile_id}/binding/agent/{agent_id}",
        path_params: &[
            p("alert_profile_id", Int, "Alert Profile Id"),
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "bind_alert_profile_to_device",
        description: "Bind an alert profile to a device. After binding, a webhook will be sent to the configured service when one of the events associated to the profile occurs. You can configure the profile and the webhook endpoint on the Domotz Portal",
        method: Method::Post,
        path: "/alert-profile/{alert_profile_id}/binding/agent/{agent_id}/device/{device_id}",
        path_params: &[
            p("alert_profile_id", Int, "Alert Profile Id"),
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "unbind_alert_profile_from_device",
        description: "Unbind an alert profile from a device.",
        method: Method::Delete,
        path: "/alert-profile/{alert_profile_id}/binding/agent/{agent_id}/device/{device_id}",
        path_params: &[
            p("alert_profile_id", Int, "Alert Profile Id"),
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_agent_alert_profile",
        description: "Returns the alert profile bindings of a collector.",
        method: Method::Get,
        path: "/alert-profile/binding/agent/{agent_id}",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_devices_alert_profile",
        description: "Returns the alert profile bindings of the devices of a collector.",
        method: Method::Get,
        path: "/alert-profile/binding/agent/{agent_id}/device",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_areas",
        description: "Returns all the areas of a Company. Note: This API is restricted to users on the Enterprise Plan. Please contact <a href=\"mailto:sales@domotz.com\">sales@domotz.com</a> to learn more.",
        method: Method::Get,
        path: "/area",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_teams",
        description: "Returns all the teams of an Area. Note: This API is restricted to users on the Enterprise Plan. Please contact <a href=\"mailto:sales@domotz.com\">sales@domotz.com</a> to learn more.",
        method: Method::Get,
        path: "/area/{area_id}/team",
        path_params: &[
            p("area_id", Int, "Area Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_team",
        description: "Creates a new Team. Note: This API is restricted to users on the Enterprise Plan. Please contact <a href=\"mailto:sales@domotz.com\">sales@domotz.com</a> to learn more.",
        method: Method::Post,
        path: "/area/{area_id}/team",
        path_params: &[
            p("area_id", Int, "Area Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "list_custom_drivers",
        description: "Retrieves the list of available Custom Drivers.",
        method: Method::Get,
        path: "/custom-driver",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_custom_driver",
        description: "Returns details of a Custom Driver.",
        method: Method::Get,
        path: "/custom-driver/{custom_driver_id}",
        path_params: &[
            p("custom_driver_id", Int, "Custom Driver Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_custom_driver_association",
        description: "Apply a Custom Driver to a device.",
        method: Method::Post,
        path: "/custom-driver/{custom_driver_id}/agent/{agent_id}/device/{device_id}/association",
        path_params: &[
            p("custom_driver_id", Int, "Custom Driver Id"),
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "execute_custom_driver_action",
        description: "Execute a Custom Driver action on an associated device. The collector variables limit for Custom Drivers must not be exceeded.",
        method: Method::Post,
        path: "/custom-driver/{custom_driver_id}/agent/{agent_id}/device/{device_id}/execute/{action_id}",
        path_params: &[
            p("custom_driver_id", Int, "Custom Driver Id"),
            p("agent_id", Int, "Agent Id"),
            p("device_id", Int, "Device Id"),
            p("action_id", Int, "Action Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_custom_driver_association",
        description: "Remove a Custom Driver from a device. This irreversibly deletes all variables created by the driver for that device.",
        method: Method::Delete,
        path: "/custom-driver/{custom_driver_id}/association/{association_id}",
        path_params: &[
            p("custom_driver_id", Int, "Custom Driver Id"),
            p("association_id", Int, "Association Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "update_custom_driver_association_parameters",
        description: "Update the parameters for a Custom Driver association.",
        method: Method::Put,
        path: "/custom-driver/{custom_driver_id}/association/{association_id}",
        path_params: &[
            p("custom_driver_id", Int, "Custom Driver Id"),
            p("association_id", Int, "Association Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "list_custom_driver_associations",
        description: "Retrieves a list of all Custom Driver associations for a collector.",
        method: Method::Get,
        path: "/custom-driver/agent/{agent_id}/association",
        path_params: &[
            p("agent_id", Int, "Agent Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "re_enable_custom_driver_associations",
        description: "Re-enable all disabled Custom Drivers for the current user.",
        method: Method::Post,
        path: "/custom-driver/association/re-enable",
        path_params: &[],
        query_params: &[
            p("include_unrecoverable", Bool, "If true, will also re-enable associations that the system has determined unable to recover (e.g. due to missing credentials). Defaults to false."),
        ],
        has_body: false,
    },
    RouteSpec {
        name: "get_custom_tags",
        description: "Retrieves all the custom tags defined by the user",
        method: Method::Get,
        path: "/custom-tag",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_custom_tag",
        description: "Creates a custom tag defined by the user",
        method: Method::Post,
        path: "/custom-tag",
        path_params: &[],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "edit_custom_tag",
        description: "Edits a custom tag defined by the user",
        method: Method::Put,
        path: "/custom-tag/{custom_tag_id}",
        path_params: &[
            p("custom_tag_id", Int, "Custom Tag Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_custom_tag",
        description: "Deletes a custom tag defined by the user",
        method: Method::Delete,
        path: "/custom-tag/{custom_tag_id}",
        path_params: &[
            p("custom_tag_id", Int, "Custom Tag Id"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_device_profiles",
        description: "Returns the list of the available device profiles.",
        method: Method::Get,
        path: "/device-profile",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "apply_device_profile",
        description: "Applies a device profile to a set of devices.",
        method: Method::Post,
        path: "/device-profile/{device_profile_id}/apply",
        path_params: &[
            p("device_profile_id", Int, "Device Profile Id"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "get_inventory",
        description: "Enumerates all the Inventory fields.",
        method: Method::Get,
        path: "/inventory",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "delete_inventory",
        description: "Clears the inventory.",
        method: Method::Delete,
        path: "/inventory",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "create_inventory_field",
        description: "Creates a new Inventory Field - the user will be able to set key-values pairs on every device.",
        method: Method::Post,
        path: "/inventory/{inventory_field}",
        path_params: &[
            p("inventory_field", Str, "Inventory Field"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "delete_inventory_field",
        description: "Deletes the Inventory Field.",
        method: Method::Delete,
        path: "/inventory/{inventory_field}",
        path_params: &[
            p("inventory_field", Str, "Inventory Field"),
        ],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "update_inventory_field",
        description: "Updates the Inventory Field.",
        method: Method::Put,
        path: "/inventory/{inventory_field}",
        path_params: &[
            p("inventory_field", Str, "Inventory Field"),
        ],
        query_params: &[],
        has_body: true,
    },
    RouteSpec {
        name: "api_usage_info",
        description: "Returns information about API usage and limits.",
        method: Method::Get,
        path: "/meta/usage",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_device_base_types",
        description: "Returns the device types list.",
        method: Method::Get,
        path: "/type/device/base",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "list_device_detected_types",
        description: "Returns the detected device types list.",
        method: Method::Get,
        path: "/type/device/detected",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_user",
        description: "Returns the account information.",
        method: Method::Get,
        path: "/user",
        path_params: &[],
        query_params: &[],
        has_body: false,
    },
    RouteSpec {
        name: "get_alert_profiles_deprecated",
        description: "Returns the list of configured alert profiles. You can configure alert profiles on the Domotz Portal. Alert profiles define the association between a list of events and a notification channel (email, webhook or slack).",
        method: Method::Get,
        path: "/user/{user_id}/alert-profile",
        path_params: &[
            p("user_id", Int, "User Id"),
        ],
        query_params: &[],
        has_body: false,
    },
];

/// Looks up a route by tool name.
pub fn find_route(name: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn placeholders(path: &str) -> Vec<&str> {
        path.split('/')
            .filter(|seg| seg.starts_with('{') && seg.ends_with('}'))
            .map(|seg| &seg[1..seg.len() - 1])
            .collect()
    }

    #[test]
    fn covers_the_full_api_surface() {
        assert_eq!(ROUTES.len(), 130);
    }

    #[test]
    fn route_names_are_unique() {
        let mut seen = HashSet::new();
        for route in ROUTES {
            assert!(seen.insert(route.name), "duplicate route name: {}", route.name);
        }
    }

    #[test]
    fn path_placeholders_line_up_with_path_params() {
        for route in ROUTES {
            let found = placeholders(route.path);
            let declared: Vec<&str> = route.path_params.iter().map(|p| p.name).collect();
            assert_eq!(found, declared, "route {}", route.name);
            // every brace belongs to a whole-segment placeholder
            assert_eq!(route.path.matches('{').count(), found.len(), "route {}", route.name);
            assert_eq!(route.path.matches('}').count(), found.len(), "route {}", route.name);
        }
    }

    #[test]
    fn bodies_only_on_write_methods() {
        for route in ROUTES {
            if route.has_body {
                assert!(
                    matches!(route.method, Method::Post | Method::Put),
                    "route {} carries a body on {}",
                    route.name,
                    route.method.as_str()
                );
            }
        }
    }

    #[test]
    fn query_params_never_shadow_path_params() {
        for route in ROUTES {
            let path_names: HashSet<&str> = route.path_params.iter().map(|p| p.name).collect();
            for q in route.query_params {
                assert!(
                    !path_names.contains(q.name),
                    "route {} declares {} as both path and query param",
                    route.name,
                    q.name
                );
            }
        }
    }

    #[test]
    fn find_route_matches_exact_names() {
        let agents = find_route("list_agents").unwrap();
        assert_eq!(agents.method, Method::Get);
        assert_eq!(agents.path, "/agent");
        assert!(agents.path_params.is_empty());

        assert!(find_route("list_agent").is_none());
        assert!(find_route("").is_none());
    }
}

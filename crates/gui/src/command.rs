//! JSON command protocol for driving a fit session headlessly.
//!
//! `apply_dimensions` takes the raw field text, exactly like the dimension
//! panel. A rejected edit is still a successful command: it reports
//! `applied: false` and nothing else.

use serde::{Deserialize, Serialize};
use shared::BoxRole;

use crate::session::{EditOutcome, FitSession};
use crate::state::scene::node_display_name;

/// A command the session can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum FitCommand {
    /// Replace the inner cuboid's dimensions
    ApplyDimensions {
        width: String,
        height: String,
        depth: String,
    },
    /// Re-evaluate the fit without changing anything
    CheckFit,
    /// Inspect the session: dimensions and scene nodes
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }
}

/// Execute a single command on the session.
pub fn execute_command(session: &mut FitSession, cmd: FitCommand) -> CommandResponse {
    match cmd {
        FitCommand::ApplyDimensions {
            width,
            height,
            depth,
        } => match session.apply_dimensions(&width, &height, &depth) {
            EditOutcome::Applied(report) => CommandResponse::ok_with_data(serde_json::json!({
                "applied": true,
                "report": report,
            })),
            EditOutcome::Rejected(_) => {
                CommandResponse::ok_with_data(serde_json::json!({ "applied": false }))
            }
        },

        FitCommand::CheckFit => {
            CommandResponse::ok_with_data(serde_json::json!({ "report": session.check_fit() }))
        }

        FitCommand::Inspect => {
            let dims = session.dimensions();
            let nodes: Vec<serde_json::Value> = session
                .scene()
                .nodes()
                .iter()
                .map(|node| {
                    serde_json::json!({
                        "id": node.id,
                        "name": node_display_name(node),
                        "role": node.role,
                        "dimensions": node.dimensions,
                        "position": node.position,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "outer": dims.get(BoxRole::Outer),
                "inner": dims.get(BoxRole::Inner),
                "secondary": dims.get(BoxRole::Secondary),
                "node_count": nodes.len(),
                "nodes": nodes,
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(session: &mut FitSession, json: &str) -> Result<CommandResponse, String> {
    let cmd: FitCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    session: &mut FitSession,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<FitCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}

use ts_rs::TS;

/// Every type the frontend consumes, in output order
pub const API_TYPE_NAMES: &[&str] = &[
    "ChatMessage",
    "ChatRequest",
    "ChatResponse",
    "TaskPriority",
    "TaskStatus",
    "Task",
    "ProjectPlan",
    "UpdateTaskResponse",
    "ServiceEndpoints",
    "ServiceInfo",
    "HealthResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "ChatMessage" => ChatMessage::export_to_string()?,
        "ChatRequest" => ChatRequest::export_to_string()?,
        "ChatResponse" => ChatResponse::export_to_string()?,

        "TaskPriority" => TaskPriority::export_to_string()?,
        "TaskStatus" => TaskStatus::export_to_string()?,
        "Task" => Task::export_to_string()?,
        "ProjectPlan" => ProjectPlan::export_to_string()?,
        "UpdateTaskResponse" => UpdateTaskResponse::export_to_string()?,

        "ServiceEndpoints" => ServiceEndpoints::export_to_string()?,
        "ServiceInfo" => ServiceInfo::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}

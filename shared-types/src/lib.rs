//! Wire types shared between the planner API and its frontend.

pub mod chat;
pub mod plan;
pub mod service;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use chat::{ChatMessage, ChatRequest, ChatResponse};
pub use plan::{ProjectPlan, Task, TaskPriority, TaskStatus, UpdateTaskResponse};
pub use service::{HealthResponse, ServiceEndpoints, ServiceInfo};

//! Informational JSON payloads served at /, /api and /api/docs

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::Json;

/// GET /
pub async fn api_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "OpsHub API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": "/api/auth",
            "agents": "/api/agents",
            "projects": "/api/projects",
            "workflows": "/api/workflows",
            "admin": "/api/admin"
        },
        "documentation": "/api/docs"
    }))
}

/// GET /api
pub async fn api_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "OpsHub API - agent tasks, projects and workflows",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": {
                "register": "POST /api/auth/register",
                "login": "POST /api/auth/login",
                "me": "GET /api/auth/me"
            },
            "agents": {
                "list": "GET /api/agents",
                "get": "GET /api/agents/{id}",
                "create": "POST /api/agents",
                "update": "PUT /api/agents/{id}",
                "delete": "DELETE /api/agents/{id}"
            },
            "projects": {
                "list": "GET /api/projects",
                "get": "GET /api/projects/{id}",
                "create": "POST /api/projects",
                "update": "PUT /api/projects/{id}",
                "delete": "DELETE /api/projects/{id}"
            },
            "workflows": {
                "list": "GET /api/workflows",
                "get": "GET /api/workflows/{id}",
                "create": "POST /api/workflows",
                "update": "PUT /api/workflows/{id}",
                "delete": "DELETE /api/workflows/{id}"
            },
            "admin": {
                "stats": "GET /api/admin/stats",
                "users": "GET /api/admin/users",
                "getUser": "GET /api/admin/users/{id}",
                "updateUser": "PUT /api/admin/users/{id}",
                "deleteUser": "DELETE /api/admin/users/{id}"
            }
        },
        "database": "PostgreSQL",
        "authentication": "JWT"
    }))
}

/// GET /api/docs
pub async fn api_docs(State(_state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "title": "OpsHub API Documentation",
        "description": "REST gateway for agent tasks, projects and workflows",
        "version": env!("CARGO_PKG_VERSION"),
        "authentication": {
            "type": "Bearer Token (JWT)",
            "header": "Authorization: Bearer <token>",
            "howToGetToken": "POST /api/auth/login or /api/auth/register"
        },
        "endpoints": {
            "authentication": [
                {
                    "method": "POST",
                    "path": "/api/auth/register",
                    "description": "Register a new user",
                    "body": {
                        "username": "string (required)",
                        "email": "string (required)",
                        "password": "string (required)"
                    }
                },
                {
                    "method": "POST",
                    "path": "/api/auth/login",
                    "description": "Login with email and password",
                    "body": {
                        "email": "string (required)",
                        "password": "string (required)"
                    }
                },
                {
                    "method": "GET",
                    "path": "/api/auth/me",
                    "description": "Get the current user (requires auth)"
                }
            ],
            "agents": [
                {
                    "method": "GET",
                    "path": "/api/agents",
                    "description": "List all agent tasks"
                },
                {
                    "method": "GET",
                    "path": "/api/agents/{id}",
                    "description": "Get an agent task by id"
                },
                {
                    "method": "POST",
                    "path": "/api/agents",
                    "description": "Create an agent task (requires auth)",
                    "body": {
                        "title": "string (required)",
                        "description": "string",
                        "agent_type": "string (required)",
                        "priority": "low | medium | high"
                    }
                },
                {
                    "method": "PUT",
                    "path": "/api/agents/{id}",
                    "description": "Update an agent task (requires auth)"
                },
                {
                    "method": "DELETE",
                    "path": "/api/agents/{id}",
                    "description": "Delete an agent task (requires auth)"
                }
            ],
            "projects": [
                {
                    "method": "GET",
                    "path": "/api/projects",
                    "description": "List all projects"
                },
                {
                    "method": "POST",
                    "path": "/api/projects",
                    "description": "Create a project (requires auth)",
                    "body": {
                        "name": "string (required)",
                        "description": "string",
                        "status": "planning | active | completed | cancelled",
                        "requirements": "string"
                    }
                }
            ],
            "workflows": [
                {
                    "method": "GET",
                    "path": "/api/workflows",
                    "description": "List all workflows"
                },
                {
                    "method": "POST",
                    "path": "/api/workflows",
                    "description": "Create a workflow (requires auth)",
                    "body": {
                        "name": "string (required)",
                        "description": "string",
                        "definition": "object"
                    }
                }
            ],
            "admin": [
                {
                    "method": "GET",
                    "path": "/api/admin/stats",
                    "description": "Row counts across tables (requires admin)"
                },
                {
                    "method": "GET",
                    "path": "/api/admin/users",
                    "description": "List all users (requires admin)"
                },
                {
                    "method": "PUT",
                    "path": "/api/admin/users/{id}",
                    "description": "Update user flags (requires admin)",
                    "body": {
                        "is_staff": "bool",
                        "is_superuser": "bool",
                        "is_active": "bool"
                    }
                }
            ]
        }
    }))
}

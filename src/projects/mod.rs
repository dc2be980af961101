//! Projects and their approval workflow

mod page;

pub use page::*;

use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fetch::{Backend, Upload};
use crate::models::ApprovalStatus;
use crate::view::Reviewable;

/// Anything embedded by name only: manager, worker, country, province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(alias = "countryName", alias = "fullName")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub approved: ApprovalStatus,
    /// Operational state, free text
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub manager: Option<NamedRef>,
    #[serde(default)]
    pub workers: Vec<NamedRef>,
    #[serde(default)]
    pub country: Option<NamedRef>,
    #[serde(default)]
    pub province: Option<NamedRef>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub documents: Vec<ProjectDocument>,
}

impl Reviewable for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn approval(&self) -> ApprovalStatus {
        self.approved
    }

    fn set_approval(&mut self, status: ApprovalStatus) {
        self.approved = status;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Multipart body of `POST /project`
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub country_id: String,
    pub manager_id: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: Option<f64>,
    pub documents: Vec<Upload>,
}

impl NewProject {
    fn into_form(self) -> Result<Form> {
        let mut form = Form::new()
            .text("title", self.title)
            .text("description", self.description)
            .text("priority", self.priority.as_str())
            .text("countryId", self.country_id)
            .text("managerId", self.manager_id)
            .text("startDate", self.start_date)
            .text("endDate", self.end_date);
        if let Some(budget) = self.budget {
            form = form.text("budget", budget.to_string());
        }
        for document in self.documents {
            form = form.part("documents", document.into_part()?);
        }
        Ok(form)
    }
}

/// Body of the project card's edit dialog, prefilled from the project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEdit {
    pub title: String,
    pub status: String,
    pub budget: f64,
    pub progress: f64,
    /// Worker name typed into "Add Worker"; blank adds nobody
    pub new_worker: String,
}

impl From<&Project> for ProjectEdit {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            status: project.status.clone(),
            budget: project.budget.unwrap_or(0.0),
            progress: project.progress.unwrap_or(0.0),
            new_worker: String::new(),
        }
    }
}

#[derive(Serialize)]
struct ApprovalChange {
    approved: ApprovalStatus,
}

/// Client for `/projects` (and the singular `/project` create route)
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    backend: Backend,
}

impl ProjectsClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn list(&self) -> Result<Vec<Project>> {
        self.backend.get("/projects").execute().await
    }

    pub async fn update_approval(&self, id: &str, approved: ApprovalStatus) -> Result<()> {
        self.backend
            .put(&format!("/projects/{}", id))
            .json(&ApprovalChange { approved })?
            .execute_unit()
            .await
    }

    pub async fn update(&self, id: &str, edit: &ProjectEdit) -> Result<()> {
        self.backend
            .put(&format!("/projects/{}", id))
            .json(edit)?
            .execute_unit()
            .await
    }

    pub async fn create(&self, project: NewProject) -> Result<()> {
        self.backend
            .post("/project")
            .multipart(project.into_form()?)
            .execute_unit()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_accepts_both_name_shapes() {
        let json = r#"{
            "id": "p1",
            "title": "Clean Water",
            "approved": "pending",
            "status": "active",
            "country": {"countryName": "Nepal"},
            "manager": {"name": "Sita"},
            "workers": [{"fullName": "Ram"}]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.country.unwrap().name, "Nepal");
        assert_eq!(project.manager.unwrap().name, "Sita");
        assert_eq!(project.workers[0].name, "Ram");
        assert!(project.documents.is_empty());
    }

    #[test]
    fn test_edit_prefills_missing_numbers_with_zero() {
        let project: Project = serde_json::from_str(
            r#"{"id": "p2", "title": "Library", "approved": "approved", "status": "active", "progress": 40}"#,
        )
        .unwrap();
        let edit = ProjectEdit::from(&project);
        assert_eq!(edit.budget, 0.0);
        assert_eq!(edit.progress, 40.0);

        let body = serde_json::to_value(&edit).unwrap();
        assert_eq!(body["newWorker"], "");
        assert_eq!(body["status"], "active");
    }
}

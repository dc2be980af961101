use super::{NewProject, Priority, Project, ProjectEdit, ProjectsClient};
use crate::error::{Error, Result};
use crate::fetch::Upload;
use crate::models::ApprovalStatus;
use crate::toast::Toasts;
use crate::view::StatusBoard;

/// Fields of the "Create New Project" dialog
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub country_id: String,
    pub manager_id: String,
    pub start_date: String,
    pub end_date: String,
    /// Typed amount; blank sends no budget
    pub budget: String,
    pub documents: Vec<Upload>,
}

impl ProjectForm {
    fn validate(self) -> Result<NewProject> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("Project name is required"));
        }
        let budget = match self.budget.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .map_err(|_| Error::validation("Budget must be a number"))?,
            ),
        };
        Ok(NewProject {
            title: self.title.trim().to_string(),
            description: self.description,
            priority: self.priority,
            country_id: self.country_id,
            manager_id: self.manager_id,
            start_date: self.start_date,
            end_date: self.end_date,
            budget,
            documents: self.documents,
        })
    }
}

pub struct ProjectApprovalPage {
    client: ProjectsClient,
    toasts: Toasts,
    pub board: StatusBoard<Project>,
    error: Option<String>,
}

impl ProjectApprovalPage {
    pub fn new(client: ProjectsClient, toasts: Toasts) -> Self {
        Self {
            client,
            toasts,
            board: StatusBoard::new(),
            error: None,
        }
    }

    pub async fn load(&mut self) {
        match self.client.list().await {
            Ok(projects) => {
                self.board.replace(projects);
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message("Failed to load projects")),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn tab(&self, status: ApprovalStatus) -> Vec<&Project> {
        self.board.bucket(status)
    }

    /// Move a project to another approval state; unchanged is a no-op
    pub async fn review(&mut self, id: &str, approved: ApprovalStatus) -> Result<bool> {
        let project = self
            .board
            .get(id)
            .ok_or_else(|| Error::general(format!("no project with id {}", id)))?;
        if project.approved == approved {
            return Ok(false);
        }

        if let Err(err) = self.client.update_approval(id, approved).await {
            self.toasts
                .failure(&err, "Error updating project approval status");
            return Err(err);
        }

        self.board.patch(id, approved);
        self.toasts
            .success("Project approval status updated successfully!");
        Ok(true)
    }

    /// Save the card's edit dialog and patch the row in place
    pub async fn edit(&mut self, id: &str, edit: ProjectEdit) -> Result<()> {
        if self.board.get(id).is_none() {
            return Err(Error::general(format!("no project with id {}", id)));
        }

        if let Err(err) = self.client.update(id, &edit).await {
            self.toasts.error("Error updating project");
            return Err(err);
        }

        if let Some(project) = self.board.get_mut(id) {
            project.title = edit.title;
            project.status = edit.status;
            project.budget = Some(edit.budget);
            project.progress = Some(edit.progress);
        }
        self.toasts.success("Project updated successfully!");
        Ok(())
    }

    pub async fn create(&mut self, form: ProjectForm) -> Result<()> {
        let project = match form.validate() {
            Ok(project) => project,
            Err(err) => {
                self.toasts.failure(&err, "Failed to create project");
                return Err(err);
            }
        };
        if let Err(err) = self.client.create(project).await {
            self.toasts.failure(&err, "Failed to create project");
            return Err(err);
        }
        self.toasts.success("Project created successfully");
        self.load().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_requires_title() {
        let err = ProjectForm::default().validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_form_parses_budget() {
        let form = ProjectForm {
            title: " School Roof ".to_string(),
            budget: "2500.50".to_string(),
            ..Default::default()
        };
        let project = form.validate().unwrap();
        assert_eq!(project.title, "School Roof");
        assert_eq!(project.budget, Some(2500.5));
        assert_eq!(project.priority, Priority::Medium);
    }

    #[test]
    fn test_form_rejects_bad_budget() {
        let form = ProjectForm {
            title: "Roof".to_string(),
            budget: "lots".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
    }
}

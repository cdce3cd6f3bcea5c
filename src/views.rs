//! Read-only tabular projections of the registry for listing commands.

use crate::registry::{timestamp, Project, Registry};
use serde::Serialize;

/// How many project columns to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Owner, name, language
    Minimal,
    /// Adds folder, creation time, size and version-control flag
    Extended,
}

/// Header plus rows of display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub title: String,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// One project as shown by `list`; extended fields are omitted in minimal mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    pub created_by: String,
    pub name: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<bool>,
}

impl ProjectRow {
    pub fn from_project(project: &Project, verbosity: Verbosity) -> Self {
        let extended = verbosity == Verbosity::Extended;
        Self {
            created_by: project.created_by.clone(),
            name: project.name.clone(),
            language: project.language.clone(),
            folder_name: extended.then(|| project.folder_name.clone()),
            created_at: extended.then(|| timestamp::format(&project.created_at)),
            size_bytes: extended.then_some(project.size_bytes),
            git: extended.then_some(project.uses_version_control),
        }
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.created_by.clone(), self.name.clone()];
        if let Some(folder) = &self.folder_name {
            cells.push(folder.clone());
        }
        cells.push(self.language.clone());
        if let Some(created_at) = &self.created_at {
            cells.push(created_at.clone());
        }
        if let Some(size) = self.size_bytes {
            cells.push(size.to_string());
        }
        if let Some(git) = self.git {
            cells.push(if git { "Yes" } else { "No" }.to_string());
        }
        cells
    }
}

pub fn project_rows(registry: &Registry, verbosity: Verbosity) -> Vec<ProjectRow> {
    registry
        .projects()
        .iter()
        .map(|p| ProjectRow::from_project(p, verbosity))
        .collect()
}

pub fn projects_table(registry: &Registry, verbosity: Verbosity) -> TableView {
    let header = match verbosity {
        Verbosity::Minimal => vec!["Created By", "Name", "Language"],
        Verbosity::Extended => vec![
            "Created By",
            "Name",
            "Folder",
            "Language",
            "Created At",
            "Size",
            "Git",
        ],
    };
    TableView {
        title: "Projects".to_string(),
        header,
        rows: project_rows(registry, verbosity)
            .iter()
            .map(ProjectRow::cells)
            .collect(),
    }
}

pub fn languages_table(registry: &Registry) -> TableView {
    TableView {
        title: "Languages".to_string(),
        header: vec!["Languages"],
        rows: registry
            .languages()
            .iter()
            .map(|l| vec![l.clone()])
            .collect(),
    }
}

pub fn users_table(registry: &Registry) -> TableView {
    TableView {
        title: "Users".to_string(),
        header: vec!["Users"],
        rows: registry.users().iter().map(|u| vec![u.clone()]).collect(),
    }
}

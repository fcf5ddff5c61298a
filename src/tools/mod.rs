//! The fixed tool set exposed to the model.
//!
//! A closed enum, not a registry — no runtime tool registration occurs.
//! Each tool interprets its raw input text as JSON and contains its own
//! parse failures as strings, mirroring the file store's error containment.

use serde::Deserialize;

use crate::workspace::Workspace;

/// The five file operations the model may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTool {
    Create,
    Read,
    Update,
    Delete,
    List,
}

/// Input for tools that write: `{"filename": ..., "content": ...}`.
#[derive(Debug, Deserialize)]
struct WriteArgs {
    filename: String,
    content: String,
}

/// Input for tools that only name a file: `{"filename": ...}`.
#[derive(Debug, Deserialize)]
struct NameArgs {
    filename: String,
}

impl FileTool {
    /// Every tool, in the order they are described to the model.
    pub const ALL: [FileTool; 5] = [
        FileTool::Create,
        FileTool::Read,
        FileTool::Update,
        FileTool::Delete,
        FileTool::List,
    ];

    /// Tool name as the model must spell it in a `TOOL_CALL:` line.
    pub fn name(self) -> &'static str {
        match self {
            FileTool::Create => "create_file",
            FileTool::Read => "read_file",
            FileTool::Update => "update_file",
            FileTool::Delete => "delete_file",
            FileTool::List => "list_files",
        }
    }

    /// Human-readable description, included in the command prompt.
    pub fn description(self) -> &'static str {
        match self {
            FileTool::Create => {
                "Create a new file with the specified content. \
                 Input should be JSON with filename and content properties."
            }
            FileTool::Read => {
                "Read the content of an existing file. \
                 Input should be JSON with filename property."
            }
            FileTool::Update => {
                "Update an existing file with new content. \
                 Input should be JSON with filename and content properties."
            }
            FileTool::Delete => {
                "Delete an existing file. Input should be JSON with filename property."
            }
            FileTool::List => "List all files in the workspace. No input required.",
        }
    }

    /// Exact-match lookup by name. `None` means no dispatch occurs.
    pub fn by_name(name: &str) -> Option<FileTool> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Execute the tool against the workspace. Never fails — malformed
    /// input comes back as an error string for the model to read.
    pub async fn invoke(self, workspace: &Workspace, input: &str) -> String {
        match self {
            FileTool::Create => match serde_json::from_str::<WriteArgs>(input) {
                Ok(args) => workspace.create(&args.filename, &args.content).await,
                Err(e) => format!("Error parsing input: {e}"),
            },
            FileTool::Read => match serde_json::from_str::<NameArgs>(input) {
                Ok(args) => workspace.read(&args.filename).await,
                Err(e) => format!("Error parsing input: {e}"),
            },
            FileTool::Update => match serde_json::from_str::<WriteArgs>(input) {
                Ok(args) => workspace.update(&args.filename, &args.content).await,
                Err(e) => format!("Error parsing input: {e}"),
            },
            FileTool::Delete => match serde_json::from_str::<NameArgs>(input) {
                Ok(args) => workspace.delete(&args.filename).await,
                Err(e) => format!("Error parsing input: {e}"),
            },
            FileTool::List => workspace.list().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_workspace() -> (tempfile::TempDir, Workspace) {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::open(dir.path()).await.unwrap();
        (dir, ws)
    }

    #[test]
    fn names_are_stable() {
        let names: Vec<&str> = FileTool::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "create_file",
                "read_file",
                "update_file",
                "delete_file",
                "list_files"
            ]
        );
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(FileTool::by_name("list_files"), Some(FileTool::List));
        assert_eq!(FileTool::by_name("create_file"), Some(FileTool::Create));
        assert_eq!(FileTool::by_name("List_Files"), None);
        assert_eq!(FileTool::by_name("list_files "), None);
        assert_eq!(FileTool::by_name(""), None);
        assert_eq!(FileTool::by_name("rm -rf"), None);
    }

    #[test]
    fn descriptions_are_not_empty() {
        for tool in FileTool::ALL {
            assert!(!tool.description().is_empty());
        }
    }

    #[tokio::test]
    async fn create_tool_writes_file() {
        let (_dir, ws) = temp_workspace().await;
        let result = FileTool::Create
            .invoke(&ws, r#"{"filename": "test.txt", "content": "Hello World"}"#)
            .await;
        assert_eq!(result, "File 'test.txt' created successfully.");
        assert_eq!(
            std::fs::read_to_string(ws.root().join("test.txt")).unwrap(),
            "Hello World"
        );
    }

    #[tokio::test]
    async fn read_tool_returns_content() {
        let (_dir, ws) = temp_workspace().await;
        ws.create("a.txt", "abc").await;
        let result = FileTool::Read.invoke(&ws, r#"{"filename": "a.txt"}"#).await;
        assert_eq!(result, "Content of 'a.txt':\nabc");
    }

    #[tokio::test]
    async fn malformed_json_is_contained() {
        let (_dir, ws) = temp_workspace().await;
        let result = FileTool::Create.invoke(&ws, "not json at all").await;
        assert!(result.starts_with("Error parsing input:"));
        assert_eq!(ws.list().await, "No files found in the workspace.");
    }

    #[tokio::test]
    async fn missing_content_field_is_a_parse_error() {
        let (_dir, ws) = temp_workspace().await;
        let result = FileTool::Update
            .invoke(&ws, r#"{"filename": "a.txt"}"#)
            .await;
        assert!(result.starts_with("Error parsing input:"));
    }

    #[tokio::test]
    async fn list_tool_ignores_input() {
        let (_dir, ws) = temp_workspace().await;
        ws.create("x.txt", "1").await;
        let result = FileTool::List.invoke(&ws, "garbage input").await;
        assert!(result.contains("- x.txt"));
    }

    #[tokio::test]
    async fn delete_tool_removes_file() {
        let (_dir, ws) = temp_workspace().await;
        ws.create("gone.txt", "x").await;
        let result = FileTool::Delete
            .invoke(&ws, r#"{"filename": "gone.txt"}"#)
            .await;
        assert_eq!(result, "File 'gone.txt' deleted successfully.");
    }
}

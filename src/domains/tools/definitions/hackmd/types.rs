//! HackMD data types.
//!
//! Field names follow the HackMD v1 API (camelCase on the wire). The record
//! structs document the shapes HackMD declares and back the tools' output
//! schemas. Responses themselves are forwarded untouched, so a record that
//! strays from these shapes still reaches the caller.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Access level for reading or writing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotePermissionRole {
    Owner,
    SignedIn,
    Guest,
}

/// How a note is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotePublishType {
    Edit,
    View,
    Slide,
    Book,
}

/// Who may comment on a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommentPermissionType {
    Disabled,
    Forbidden,
    Owners,
    SignedInUsers,
    Everyone,
}

/// Who may suggest edits to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SuggestEditPermissionType {
    Disabled,
    Forbidden,
    Owners,
    SignedInUsers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TeamVisibility {
    Public,
    Private,
}

/// A team the user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// The unique identifier of the team.
    pub id: String,
    /// The unique identifier of the team owner.
    pub owner_id: String,
    /// The name of the team.
    pub name: String,
    /// The URL of the team logo.
    pub logo: String,
    /// The team path.
    pub path: String,
    /// The description of the team.
    pub description: String,
    /// The visibility of the team.
    pub visibility: TeamVisibility,
    /// Indicates if the team has an upgraded account.
    pub upgraded: bool,
    /// The creation timestamp of the team.
    pub created_at: i64,
}

/// The authenticated HackMD user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The unique identifier of the user.
    pub id: String,
    /// The name of the user.
    pub name: String,
    /// The email of the user.
    pub email: String,
    /// The user path or username.
    pub user_path: String,
    /// The URL of the user's photo.
    pub photo: String,
    /// Teams the user belongs to.
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Indicates if the user has an upgraded account.
    pub upgraded: bool,
}

/// The user who last changed a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LastChangeUser {
    /// The name of the user who last changed the note.
    pub name: String,
    /// The user path of the user who last changed the note.
    pub user_path: String,
    /// The photo URL of the user who last changed the note.
    pub photo: String,
    /// The biography of the user, or null if not available.
    pub biography: Option<String>,
}

/// A folder a note is filed under. `parent_id == None` marks a root folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FolderPath {
    /// The unique identifier of the folder.
    pub id: String,
    /// The name of the folder.
    pub name: String,
    /// The icon associated with the folder.
    pub icon: String,
    /// The unique identifier of the parent folder, or null for a root folder.
    pub parent_id: Option<String>,
    /// The color associated with the folder.
    pub color: String,
    /// The client identifier associated with the folder.
    pub client_id: String,
}

/// Every note field except its folder placement.
///
/// This is also the declared output of note creation, since a new note has
/// no folders yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteCore {
    /// The unique identifier of the note.
    pub id: String,
    /// The title of the note.
    pub title: String,
    /// Tags associated with the note.
    #[serde(default)]
    pub tags: Vec<String>,
    /// The creation timestamp of the note.
    pub created_at: i64,
    /// The timestamp when the title was last updated.
    pub title_updated_at: Option<i64>,
    /// The timestamp when the tags were last updated, or null if never updated.
    pub tags_updated_at: Option<i64>,
    /// The publish type of the note.
    pub publish_type: NotePublishType,
    /// The timestamp when the note was published, or null if not published.
    pub published_at: Option<i64>,
    /// The permalink of the note, or null if not available.
    pub permalink: Option<String>,
    /// The publish link of the note.
    pub publish_link: String,
    /// The short identifier of the note.
    pub short_id: String,
    /// The Markdown content of the note. The note list omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// The timestamp when the note was last changed.
    pub last_changed_at: i64,
    /// Information about the user who last changed the note.
    pub last_change_user: LastChangeUser,
    /// The user path of the note owner.
    pub user_path: String,
    /// The team path if the note belongs to a team, or null if it does not.
    pub team_path: Option<String>,
    /// The read permission level of the note.
    pub read_permission: NotePermissionRole,
    /// The write permission level of the note.
    pub write_permission: NotePermissionRole,
}

/// A HackMD note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(flatten)]
    pub core: NoteCore,

    /// An array of folders the note belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_paths: Option<Vec<FolderPath>>,
}

/// Output of the note listing: the notes wrapped in a single field.
///
/// The listing tool fills it with the raw upstream records; the default
/// parameter gives the declared schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NoteList<N = Note> {
    /// An array of note objects.
    pub notes: Vec<N>,
}

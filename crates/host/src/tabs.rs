//! Tab/window messaging protocol.
//!
//! Privileged browser actions (tab creation, activation, search) run in a
//! different process; the core fires serialized requests at it and never
//! waits for completion. Requests and responses are correlated by message
//! type; there is no delivery retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host-assigned tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub u32);

/// Where a new tab lands relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPosition {
	Before,
	After,
}

/// Which window a new tab opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabWindow {
	#[default]
	Current,
	New,
	Private,
}

/// A tab record as reported by the tab-management collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
	pub id: TabId,
	pub title: String,
	pub url: String,
	pub active: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub container: Option<String>,
}

/// A contextual-identity container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
	pub cookie_store_id: String,
	pub name: String,
	pub color_code: String,
	pub icon_url: String,
	pub open_tabs: u32,
}

/// Requests the core fires at the tab-management collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TabRequest {
	GetActiveTab,
	GetAllTabs {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		container: Option<String>,
	},
	GetAllContainers,
	GoToPrevTab,
	GoToNextTab,
	OpenNewTab {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		url: Option<String>,
		background: bool,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		position: Option<TabPosition>,
		#[serde(default)]
		window: TabWindow,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		container: Option<String>,
	},
	ActivateTab {
		id: TabId,
	},
	DuplicateTab {
		id: TabId,
	},
	CloseTab {
		id: TabId,
	},
	MoveTabNextToCurrent {
		id: TabId,
	},
	MoveTabToNewWindow {
		id: TabId,
	},
	ReopenTabInPrivateWindow {
		id: TabId,
	},
	Search {
		text: String,
	},
}

/// Delivery failure for a tab request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
	/// The messaging channel is gone.
	#[error("tab messaging channel disconnected")]
	Disconnected,
	/// The collaborator refused the request.
	#[error("tab request rejected: {0}")]
	Rejected(String),
}

/// Fire-and-forget channel to the tab-management collaborator.
///
/// Callers log and swallow errors: delivery failure is the collaborator's
/// concern and never blocks the core's own state reset.
pub trait TabMessenger {
	fn send(&self, request: TabRequest) -> Result<(), SendError>;
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Icons**: Built-in glyphs per severity and for groups
//! - **Storage**: Location of the configuration file

// ==========================================================================
// Icon Defaults
// ==========================================================================

/// Icon key used for the `group` pseudo-severity.
pub const GROUP_ICON_KEY: &str = "group";

/// Default glyph for informational notifications.
pub const DEFAULT_INFO_ICON: &str = "\u{1F6A7}";

/// Default glyph for warnings.
pub const DEFAULT_WARNING_ICON: &str = "\u{26A0}";

/// Default glyph for errors.
pub const DEFAULT_ERROR_ICON: &str = "\u{1F6AB}";

/// Default glyph for successful operations.
pub const DEFAULT_SUCCESS_ICON: &str = "\u{2705}";

/// Default glyph shown next to a notification group.
pub const DEFAULT_GROUP_ICON: &str = "\u{1F4CC}";

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Directory name created under the platform config directory.
pub const APP_NAME: &str = "EditorNotifications";

/// File name of the persisted configuration.
pub const CONFIG_FILE: &str = "notifications.toml";

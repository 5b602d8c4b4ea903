//! Graph View Style System
//!
//! Maps entity categories and statuses to the fixed dashboard palette used
//! by node cards, edge markers and the overview minimap.

use specmap_core::{NodeCategory, NodeStatus};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// CSS hex form, e.g. "#8b5cf6". Alpha is dropped; the rendering surface
    /// applies opacity separately.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn darken(&self, factor: f32) -> Self {
        Self {
            r: ((self.r as f32) * (1.0 - factor)) as u8,
            g: ((self.g as f32) * (1.0 - factor)) as u8,
            b: ((self.b as f32) * (1.0 - factor)) as u8,
            a: self.a,
        }
    }

    pub fn lighten(&self, factor: f32) -> Self {
        Self {
            r: ((self.r as f32) + (255.0 - self.r as f32) * factor) as u8,
            g: ((self.g as f32) + (255.0 - self.g as f32) * factor) as u8,
            b: ((self.b as f32) + (255.0 - self.b as f32) * factor) as u8,
            a: self.a,
        }
    }
}

/// Node color triplet for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeColors {
    pub fill: Color,
    pub border: Color,
    pub text: Color,
}

// ============================================================================
// Color Constants
// ============================================================================

// Specifications (purple tones)
pub const COLOR_SPECIFICATION_FILL: Color = Color::rgb(139, 92, 246);
pub const COLOR_SPECIFICATION_BORDER: Color = Color::rgb(109, 40, 217);

// Modules (green tones)
pub const COLOR_MODULE_FILL: Color = Color::rgb(34, 197, 94);
pub const COLOR_MODULE_BORDER: Color = Color::rgb(21, 128, 61);

// Controllers (blue tones)
pub const COLOR_CONTROLLER_FILL: Color = Color::rgb(59, 130, 246);
pub const COLOR_CONTROLLER_BORDER: Color = Color::rgb(29, 78, 216);

// Models (teal tones)
pub const COLOR_MODEL_FILL: Color = Color::rgb(20, 184, 166);
pub const COLOR_MODEL_BORDER: Color = Color::rgb(15, 118, 110);

// Routes (orange tones)
pub const COLOR_ROUTE_FILL: Color = Color::rgb(249, 115, 22);
pub const COLOR_ROUTE_BORDER: Color = Color::rgb(194, 65, 12);

// Tasks (amber tones)
pub const COLOR_TASK_FILL: Color = Color::rgb(245, 158, 11);
pub const COLOR_TASK_BORDER: Color = Color::rgb(180, 83, 9);

// Tests (lime tones)
pub const COLOR_TEST_FILL: Color = Color::rgb(132, 204, 22);
pub const COLOR_TEST_BORDER: Color = Color::rgb(77, 124, 15);

// Agents (pink tones)
pub const COLOR_AGENT_FILL: Color = Color::rgb(236, 72, 153);
pub const COLOR_AGENT_BORDER: Color = Color::rgb(190, 24, 93);

// Goals (gold tones)
pub const COLOR_GOAL_FILL: Color = Color::rgb(234, 179, 8);
pub const COLOR_GOAL_BORDER: Color = Color::rgb(161, 98, 7);

// Constraints (red tones)
pub const COLOR_CONSTRAINT_FILL: Color = Color::rgb(239, 68, 68);
pub const COLOR_CONSTRAINT_BORDER: Color = Color::rgb(185, 28, 28);

// Documentation (slate tones)
pub const COLOR_DOCUMENTATION_FILL: Color = Color::rgb(100, 116, 139);
pub const COLOR_DOCUMENTATION_BORDER: Color = Color::rgb(51, 65, 85);

// Unknown/Default
pub const COLOR_UNKNOWN_FILL: Color = Color::rgb(107, 114, 128);
pub const COLOR_UNKNOWN_BORDER: Color = Color::rgb(55, 65, 81);

pub const COLOR_TEXT_LIGHT: Color = Color::rgb(255, 255, 255);
pub const COLOR_TEXT_DARK: Color = Color::rgb(30, 30, 30);

// Status accent dots
pub const COLOR_STATUS_ACTIVE: Color = Color::rgb(34, 197, 94);
pub const COLOR_STATUS_DRAFT: Color = Color::rgb(245, 158, 11);
pub const COLOR_STATUS_DEPRECATED: Color = Color::rgb(239, 68, 68);
pub const COLOR_STATUS_PENDING: Color = Color::rgb(59, 130, 246);
pub const COLOR_STATUS_UNSPECIFIED: Color = Color::rgb(156, 163, 175);

// Minimap (coarse overview palette)
pub const COLOR_MINIMAP_SPECIFICATION: Color = Color::rgb(139, 92, 246);
pub const COLOR_MINIMAP_MODULE: Color = Color::rgb(34, 197, 94);
pub const COLOR_MINIMAP_AGENT: Color = Color::rgb(236, 72, 153);
pub const COLOR_MINIMAP_DEFAULT: Color = Color::rgb(156, 163, 175);

/// Neutral arrow-head color used when an edge carries no style override.
pub const DEFAULT_MARKER_COLOR: &str = "#9ca3af";

// ============================================================================
// Style Functions
// ============================================================================

/// Get the base colors for a node category.
///
/// Unknown categories resolve to the default entry; the match is exhaustive
/// so a newly added category is a compile error here, not a silent fallthrough.
pub fn node_colors(category: NodeCategory) -> NodeColors {
    match category {
        NodeCategory::SPECIFICATION => NodeColors {
            fill: COLOR_SPECIFICATION_FILL,
            border: COLOR_SPECIFICATION_BORDER,
            text: COLOR_TEXT_LIGHT,
        },
        NodeCategory::MODULE => NodeColors {
            fill: COLOR_MODULE_FILL,
            border: COLOR_MODULE_BORDER,
            text: COLOR_TEXT_DARK,
        },
        NodeCategory::CONTROLLER => NodeColors {
            fill: COLOR_CONTROLLER_FILL,
            border: COLOR_CONTROLLER_BORDER,
            text: COLOR_TEXT_LIGHT,
        },
        NodeCategory::MODEL => NodeColors {
            fill: COLOR_MODEL_FILL,
            border: COLOR_MODEL_BORDER,
            text: COLOR_TEXT_LIGHT,
        },
        NodeCategory::ROUTE => NodeColors {
            fill: COLOR_ROUTE_FILL,
            border: COLOR_ROUTE_BORDER,
            text: COLOR_TEXT_LIGHT,
        },
        NodeCategory::TASK => NodeColors {
            fill: COLOR_TASK_FILL,
            border: COLOR_TASK_BORDER,
            text: COLOR_TEXT_DARK,
        },
        NodeCategory::TEST => NodeColors {
            fill: COLOR_TEST_FILL,
            border: COLOR_TEST_BORDER,
            text: COLOR_TEXT_DARK,
        },
        NodeCategory::AGENT => NodeColors {
            fill: COLOR_AGENT_FILL,
            border: COLOR_AGENT_BORDER,
            text: COLOR_TEXT_LIGHT,
        },
        NodeCategory::GOAL => NodeColors {
            fill: COLOR_GOAL_FILL,
            border: COLOR_GOAL_BORDER,
            text: COLOR_TEXT_DARK,
        },
        NodeCategory::CONSTRAINT => NodeColors {
            fill: COLOR_CONSTRAINT_FILL,
            border: COLOR_CONSTRAINT_BORDER,
            text: COLOR_TEXT_LIGHT,
        },
        NodeCategory::DOCUMENTATION => NodeColors {
            fill: COLOR_DOCUMENTATION_FILL,
            border: COLOR_DOCUMENTATION_BORDER,
            text: COLOR_TEXT_LIGHT,
        },
        NodeCategory::UNKNOWN => NodeColors {
            fill: COLOR_UNKNOWN_FILL,
            border: COLOR_UNKNOWN_BORDER,
            text: COLOR_TEXT_LIGHT,
        },
    }
}

/// Accent color for the status dot on a node card.
pub fn status_color(status: NodeStatus) -> Color {
    match status {
        NodeStatus::ACTIVE => COLOR_STATUS_ACTIVE,
        NodeStatus::DRAFT => COLOR_STATUS_DRAFT,
        NodeStatus::DEPRECATED => COLOR_STATUS_DEPRECATED,
        NodeStatus::PENDING => COLOR_STATUS_PENDING,
        NodeStatus::UNSPECIFIED => COLOR_STATUS_UNSPECIFIED,
    }
}

/// Reduced palette for the overview minimap: specifications, modules and
/// agents keep their hue, everything else collapses to the default gray.
pub fn minimap_color(category: NodeCategory) -> Color {
    match category {
        NodeCategory::SPECIFICATION => COLOR_MINIMAP_SPECIFICATION,
        NodeCategory::MODULE => COLOR_MINIMAP_MODULE,
        NodeCategory::AGENT => COLOR_MINIMAP_AGENT,
        _ => COLOR_MINIMAP_DEFAULT,
    }
}

/// Get the human-readable label for a node category
pub fn category_label(category: NodeCategory) -> &'static str {
    match category {
        NodeCategory::SPECIFICATION => "specification",
        NodeCategory::MODULE => "module",
        NodeCategory::CONTROLLER => "controller",
        NodeCategory::MODEL => "model",
        NodeCategory::ROUTE => "route",
        NodeCategory::TASK => "task",
        NodeCategory::TEST => "test",
        NodeCategory::AGENT => "agent",
        NodeCategory::GOAL => "goal",
        NodeCategory::CONSTRAINT => "constraint",
        NodeCategory::DOCUMENTATION => "documentation",
        NodeCategory::UNKNOWN => "entity",
    }
}

/// Get the human-readable label for a node status
pub fn status_label(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::ACTIVE => "active",
        NodeStatus::DRAFT => "draft",
        NodeStatus::DEPRECATED => "deprecated",
        NodeStatus::PENDING => "pending",
        NodeStatus::UNSPECIFIED => "unspecified",
    }
}

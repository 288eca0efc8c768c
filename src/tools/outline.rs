//! Outline toggle, hover, and display handlers.

use crate::outline::{Flag, save};
use crate::state::{NavState, OutlineController};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleSectionRequest {
    /// 1-based outline node index
    pub index: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct HoverSectionRequest {
    /// 1-based outline node index
    pub index: usize,
    /// true when the pointer enters the node, false when it leaves
    pub entered: bool,
}

/// Flip one section and show the resulting outline.
pub async fn handle_toggle_section(
    state: &NavState,
    request: ToggleSectionRequest,
) -> Result<String, String> {
    let mut outline = state.outline().lock().await;
    let flag = outline.toggle(request.index).map_err(|e| e.to_string())?;

    let mut result = format!("Section {} is now {}.\n\n", request.index, flag);
    result.push_str(&format_outline(&outline));
    Ok(result)
}

/// Update a section's indicator for pointer enter/leave.
pub async fn handle_hover_section(
    state: &NavState,
    request: HoverSectionRequest,
) -> Result<String, String> {
    let mut outline = state.outline().lock().await;
    let hovered = if request.entered {
        outline.hover_enter(request.index)
    } else {
        outline.hover_leave(request.index)
    };
    let icon = hovered.map_err(|e| e.to_string())?;

    Ok(format!("Section {} indicator: {}", request.index, icon))
}

/// Show every section with its state and indicator.
pub async fn handle_outline(state: &NavState) -> Result<String, String> {
    let outline = state.outline().lock().await;
    Ok(format_outline(&outline))
}

/// One line per section, followed by the persisted blob.
pub(crate) fn format_outline(outline: &OutlineController) -> String {
    if outline.state().section_count() == 0 {
        return "Outline has no sections.\n".to_string();
    }

    let mut output = String::new();
    for (index, flag) in outline.state().iter() {
        let marker = match flag {
            Flag::Expanded => '-',
            Flag::Collapsed => '+',
        };
        // Views are only synced once the first interaction has happened
        let icon = if outline.images_initialized() {
            outline.registry().get(index).map(|view| view.icon)
        } else {
            None
        };

        match icon {
            Some(icon) => {
                let _ = writeln!(output, "[{}] {:>3}. {} ({})", marker, index, flag, icon);
            }
            None => {
                let _ = writeln!(output, "[{}] {:>3}. {}", marker, index, flag);
            }
        }
    }
    let _ = write!(output, "\nPersisted: {}\n", save(outline.state()));
    output
}

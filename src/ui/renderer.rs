//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the page layout, then draw any
//!    open dialog on top

use crate::app::{AppState, Page};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; every
/// component pads its rows to the full width instead.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.page, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, page: Page, theme: &Theme, rows: usize, cols: usize) {
    match page {
        Page::Public => components::render_public_page(vm, theme, cols, rows),
        Page::Admin => components::render_admin_page(vm, theme, cols, rows),
    }

    if let Some(dialog) = &vm.dialog {
        components::render_dialog(dialog, theme, rows, cols);
    }
}

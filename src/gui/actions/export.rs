// src/gui/actions/export.rs
use tracing::{debug, error, info};

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.state.gui.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        info!(path = %app.state.options.export.out_path().display(), "Export: Out path set");
        app.state.gui.out_path_dirty = false;
    }

    let status_msg = match &app.data {
        None => {
            debug!("Export: Clicked, but nothing is loaded");
            s!("Nothing to export")
        }
        Some(data) => {
            let export = &app.state.options.export;
            info!(
                rows = data.len(),
                format = ?export.format,
                export_type = ?export.export_type,
                "Export: Begin"
            );
            match file::export_dataset(export, data) {
                Ok(written) => match written.last() {
                    Some(last) => {
                        info!(count = written.len(), last = %last.display(), "Export: OK");
                        format!("Exported {} file(s). Last: {}", written.len(), last.display())
                    }
                    None => s!("Nothing to export"),
                },
                Err(e) => {
                    error!(error = %e, "Export: Error");
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the dataset borrows are gone
    app.status(status_msg);
}

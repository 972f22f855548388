//! Running the argument dialog as a standalone GTK application

use anyhow::{Context, Result};
use argdialog_types::{from_command, organize, to_command_line, ArgumentSet, ValueMap};
use gtk4::prelude::*;
use gtk4::Application;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{AppContext, SettingsStore};
use crate::ui::ArgDialog;

/// Show a dialog for `arguments` and block until it is closed.
///
/// Returns the collected values when the user pressed OK and `None` when the
/// dialog was cancelled. With `ctx.persist_values` set, the last accepted
/// values are restored into the dialog and new ones are saved on OK.
pub fn run_dialog(ctx: &AppContext, arguments: &ArgumentSet) -> Result<Option<ValueMap>> {
    let sections = organize(arguments, &ctx.orphan);
    let orphan_name = ctx.orphan.display_name.clone();
    let title = ctx.title.clone();

    let store = if ctx.persist_values {
        match SettingsStore::for_context(ctx) {
            Ok(store) => Some(store),
            Err(e) => {
                log::warn!("Values will not be saved: {}", e);
                None
            }
        }
    } else {
        None
    };

    let saved = match store.as_ref().map(SettingsStore::load).transpose() {
        Ok(saved) => saved,
        Err(e) => {
            log::warn!("Ignoring unreadable saved values: {}", e);
            None
        }
    };

    let outcome: Rc<RefCell<Option<ValueMap>>> = Rc::new(RefCell::new(None));

    let app = Application::builder()
        .application_id(ctx.application_id())
        .build();

    let outcome_for_activate = outcome.clone();
    app.connect_activate(move |app| {
        let dialog = ArgDialog::new(None, &title, &sections, &orphan_name);
        dialog.window().set_application(Some(app));

        if let Some(saved) = &saved {
            dialog.set_values(saved);
        }

        let outcome = outcome_for_activate.clone();
        let store = store.clone();
        dialog.connect_response(move |values| {
            if let (Some(values), Some(store)) = (&values, &store) {
                if let Err(e) = store.save(values) {
                    log::error!("Failed to save dialog values: {}", e);
                }
            }
            *outcome.borrow_mut() = values;
        });

        dialog.present();
    });

    // Arguments were already handled by the caller
    let exit_code = app.run_with_args(&[ctx.app_name.as_str()]);
    if exit_code != gtk4::glib::ExitCode::SUCCESS {
        anyhow::bail!("GTK application exited with an error");
    }

    let values = outcome.borrow_mut().take();
    Ok(values)
}

/// Fill in a clap command's arguments through the dialog and parse the result.
///
/// Returns `None` when the dialog was cancelled.
pub fn run_for_command(
    ctx: &AppContext,
    command: &clap::Command,
) -> Result<Option<clap::ArgMatches>> {
    let arguments = from_command(command);
    let Some(values) = run_dialog(ctx, &arguments)? else {
        return Ok(None);
    };

    let sections = organize(&arguments, &ctx.orphan);
    let args = to_command_line(&sections, &values, &ctx.orphan.display_name);
    log::debug!("Parsing dialog values as {:?}", args);

    let matches = command
        .clone()
        .try_get_matches_from(std::iter::once(command.get_name().to_string()).chain(args))
        .context("Dialog values were rejected by the command")?;
    Ok(Some(matches))
}
